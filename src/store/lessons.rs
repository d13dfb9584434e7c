use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::models::Lesson;

/// Lesson collection of the page, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct LessonBook {
    lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LessonCounts {
    pub total: usize,
    pub today: usize,
    pub upcoming: usize,
}

impl LessonBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, lesson: Lesson) {
        debug!("appending lesson {} ({})", lesson.id, lesson.subject);
        self.lessons.push(lesson);
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.lessons.len();
        self.lessons.clear();
        removed
    }

    pub fn all(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn on(&self, date: NaiveDate) -> Vec<Lesson> {
        filter_today(&self.lessons, date)
    }

    pub fn counts(&self, today: NaiveDate) -> LessonCounts {
        LessonCounts {
            total: self.lessons.len(),
            today: self.lessons.iter().filter(|l| l.date == today).count(),
            upcoming: self.lessons.iter().filter(|l| l.date >= today).count(),
        }
    }
}

/// Lessons dated exactly `today`, in their original order.
pub fn filter_today(lessons: &[Lesson], today: NaiveDate) -> Vec<Lesson> {
    lessons
        .iter()
        .filter(|lesson| lesson.date == today)
        .cloned()
        .collect()
}
