use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Uuid,
    pub subject: String,
    pub teacher: String,
    pub room: String,
    pub time: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub lesson_type: LessonType,
}

/// Вид занятия
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonType {
    #[default]
    #[serde(rename = "лекция", alias = "lecture")]
    Lecture,
    #[serde(rename = "практика", alias = "practice")]
    Practice,
    #[serde(rename = "лабораторная", alias = "lab")]
    Lab,
}

impl LessonType {
    pub fn label(self) -> &'static str {
        match self {
            LessonType::Lecture => "лекция",
            LessonType::Practice => "практика",
            LessonType::Lab => "лабораторная",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "лекция" | "lecture" => Some(LessonType::Lecture),
            "практика" | "practice" => Some(LessonType::Practice),
            "лабораторная" | "lab" => Some(LessonType::Lab),
            _ => None,
        }
    }

    pub fn color(self) -> TypeColor {
        type_color(self)
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Badge style token for a lesson type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeColor {
    Blue,
    Green,
    Purple,
    Gray,
}

impl TypeColor {
    pub fn badge_classes(self) -> &'static str {
        match self {
            TypeColor::Blue => "bg-blue-100 text-blue-800",
            TypeColor::Green => "bg-green-100 text-green-800",
            TypeColor::Purple => "bg-purple-100 text-purple-800",
            TypeColor::Gray => "bg-gray-100 text-gray-800",
        }
    }
}

pub fn type_color(lesson_type: LessonType) -> TypeColor {
    match lesson_type {
        LessonType::Lecture => TypeColor::Blue,
        LessonType::Practice => TypeColor::Green,
        LessonType::Lab => TypeColor::Purple,
    }
}

/// Same mapping for raw labels coming from outside the closed set.
pub fn type_color_for_label(label: &str) -> TypeColor {
    LessonType::from_label(label)
        .map(type_color)
        .unwrap_or(TypeColor::Gray)
}

/// Form state of the add-lesson dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLessonDraft {
    pub subject: String,
    pub teacher: String,
    pub room: String,
    pub time: String,
    pub date: String,
    #[serde(rename = "type", default)]
    pub lesson_type: LessonType,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftPatch {
    pub subject: Option<String>,
    pub teacher: Option<String>,
    pub room: Option<String>,
    pub time: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub lesson_type: Option<LessonType>,
}

impl NewLessonDraft {
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(subject) = patch.subject {
            self.subject = subject;
        }
        if let Some(teacher) = patch.teacher {
            self.teacher = teacher;
        }
        if let Some(room) = patch.room {
            self.room = room;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(lesson_type) = patch.lesson_type {
            self.lesson_type = lesson_type;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks every required field and builds the lesson it describes.
    pub fn validate(&self) -> Result<Lesson, ValidationError> {
        let mut missing = Vec::new();
        let required = [
            (DraftField::Subject, &self.subject),
            (DraftField::Teacher, &self.teacher),
            (DraftField::Room, &self.room),
            (DraftField::Time, &self.time),
            (DraftField::Date, &self.date),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }

        let date = if self.date.trim().is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    missing.push(DraftField::Date);
                    None
                }
            }
        };

        match date {
            Some(date) if missing.is_empty() => Ok(Lesson {
                id: Uuid::new_v4(),
                subject: self.subject.trim().to_string(),
                teacher: self.teacher.trim().to_string(),
                room: self.room.trim().to_string(),
                time: self.time.trim().to_string(),
                date,
                lesson_type: self.lesson_type,
            }),
            _ => Err(ValidationError { fields: missing }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Subject,
    Teacher,
    Room,
    Time,
    Date,
}

impl DraftField {
    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::Subject => "subject",
            DraftField::Teacher => "teacher",
            DraftField::Room => "room",
            DraftField::Time => "time",
            DraftField::Date => "date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: Vec<DraftField>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(|field| field.as_str()).collect();
        write!(f, "missing or invalid fields: {}", names.join(", "))
    }
}

impl std::error::Error for ValidationError {}
