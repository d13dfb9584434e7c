pub mod intake;
pub mod lessons;
pub mod navigation;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::export::{self, ExportArtifact};
use crate::models::{
    ACCEPTED_EXTENSIONS, Dialog, DialogFlags, DragEvent, DraftPatch, EmailSettingsForm,
    EmailSettingsPatch, Lesson, LessonType, NewLessonDraft, Tab, TypeColor, ValidationError,
};

pub use intake::FileIntake;
pub use lessons::{LessonBook, LessonCounts, filter_today};
pub use navigation::ViewState;

/// Page-level store. Every mutation of the page goes through one of its methods.
#[derive(Debug, Clone)]
pub struct PageStore {
    group: String,
    students: u32,
    lessons: LessonBook,
    intake: FileIntake,
    view: ViewState,
    draft: NewLessonDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageStats {
    pub total: usize,
    pub today: usize,
    pub upcoming: usize,
    pub uploaded_files: usize,
    pub students: u32,
}

/// Everything the client needs to render the page.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub group: String,
    pub active_tab: Tab,
    pub dialogs: DialogFlags,
    pub drag_active: bool,
    pub draft: NewLessonDraft,
    pub lessons: Vec<Lesson>,
    pub today: NaiveDate,
    pub today_lessons: Vec<Lesson>,
    pub uploaded_files: Vec<String>,
    pub accept: &'static str,
    pub badges: Vec<TypeBadge>,
    pub stats: PageStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeBadge {
    #[serde(rename = "type")]
    pub lesson_type: LessonType,
    pub color: TypeColor,
    pub classes: &'static str,
}

impl From<LessonType> for TypeBadge {
    fn from(lesson_type: LessonType) -> Self {
        let color = lesson_type.color();
        Self {
            lesson_type,
            color,
            classes: color.badge_classes(),
        }
    }
}

impl PageStore {
    pub fn new(group: impl Into<String>, students: u32) -> Self {
        Self {
            group: group.into(),
            students,
            lessons: LessonBook::new(),
            intake: FileIntake::default(),
            view: ViewState::default(),
            draft: NewLessonDraft::default(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    // --- lessons ---

    /// Commits the current draft as a new lesson.
    ///
    /// On a validation failure nothing changes: the draft keeps what the user
    /// typed and the add-lesson dialog stays open.
    pub fn add_lesson(&mut self) -> Result<Lesson, ValidationError> {
        let lesson = self.draft.validate()?;
        info!(
            "lesson added: {} {} {} ({})",
            lesson.date, lesson.time, lesson.subject, lesson.lesson_type
        );
        self.lessons.push(lesson.clone());
        self.draft.reset();
        self.view.close(Dialog::AddLesson);
        Ok(lesson)
    }

    pub fn clear_all(&mut self) -> usize {
        let removed = self.lessons.clear();
        info!("schedule cleared, {} lesson(s) removed", removed);
        removed
    }

    pub fn export_schedule(&self) -> Result<ExportArtifact, serde_json::Error> {
        let artifact = export::export_schedule(&self.group, self.lessons.all())?;
        debug!(
            "export prepared: {} ({} bytes)",
            artifact.file_name,
            artifact.body.len()
        );
        Ok(artifact)
    }

    pub fn lessons(&self) -> &[Lesson] {
        self.lessons.all()
    }

    pub fn lessons_on(&self, date: NaiveDate) -> Vec<Lesson> {
        self.lessons.on(date)
    }

    pub fn stats(&self, today: NaiveDate) -> PageStats {
        let counts: LessonCounts = self.lessons.counts(today);
        PageStats {
            total: counts.total,
            today: counts.today,
            upcoming: counts.upcoming,
            uploaded_files: self.intake.files().len(),
            students: self.students,
        }
    }

    /// Fills the schedule with the sample day shown by the first page revision.
    pub fn seed_demo(&mut self, date: NaiveDate) {
        let sample = [
            ("8:30-10:00", "Математика", "Аудитория 205", "Иванов И.И.", LessonType::Lecture),
            ("10:15-11:45", "Физика", "Аудитория 301", "Петров П.П.", LessonType::Practice),
            ("12:00-13:30", "Программирование", "Компьютерный класс 15", "Сидоров С.С.", LessonType::Lab),
            ("14:00-15:30", "Английский язык", "Аудитория 102", "Johnson M.", LessonType::Practice),
        ];
        for (time, subject, room, teacher, lesson_type) in sample {
            self.lessons.push(Lesson {
                id: uuid::Uuid::new_v4(),
                subject: subject.to_string(),
                teacher: teacher.to_string(),
                room: room.to_string(),
                time: time.to_string(),
                date,
                lesson_type,
            });
        }
        info!("seeded {} demo lessons for {}", sample.len(), date);
    }

    // --- draft ---

    pub fn draft(&self) -> &NewLessonDraft {
        &self.draft
    }

    pub fn update_draft(&mut self, patch: DraftPatch) {
        self.draft.apply(patch);
    }

    pub fn cancel_draft(&mut self) {
        self.draft.reset();
        self.view.close(Dialog::AddLesson);
    }

    // --- file intake ---

    pub fn handle_drag(&mut self, event: DragEvent) {
        self.intake.handle_drag(event);
    }

    pub fn drop_files(&mut self, names: Vec<String>) -> usize {
        self.intake.drop_files(names)
    }

    pub fn pick_files(&mut self, names: Vec<String>) -> usize {
        self.intake.pick_files(names)
    }

    pub fn uploaded_files(&self) -> Vec<String> {
        self.intake.names()
    }

    pub fn drag_active(&self) -> bool {
        self.intake.drag_active()
    }

    // --- navigation ---

    pub fn active_tab(&self) -> Tab {
        self.view.active_tab()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        debug!("tab selected: {:?}", tab);
        self.view.select_tab(tab);
    }

    pub fn dialogs(&self) -> DialogFlags {
        self.view.dialogs()
    }

    pub fn is_dialog_open(&self, dialog: Dialog) -> bool {
        self.view.is_open(dialog)
    }

    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.view.open(dialog);
    }

    pub fn close_dialog(&mut self, dialog: Dialog) {
        self.view.close(dialog);
    }

    pub fn email_form(&self) -> &EmailSettingsForm {
        self.view.email_form()
    }

    pub fn update_email_form(&mut self, patch: EmailSettingsPatch) {
        self.view.update_email_form(patch);
    }

    /// The email dialog has nowhere to store its settings; saving only closes it.
    pub fn save_email_settings(&mut self) {
        info!("email settings dialog saved (not persisted)");
        self.view.close(Dialog::Email);
    }

    pub fn snapshot(&self, today: NaiveDate) -> PageSnapshot {
        PageSnapshot {
            group: self.group.clone(),
            active_tab: self.active_tab(),
            dialogs: self.dialogs(),
            drag_active: self.drag_active(),
            draft: self.draft.clone(),
            lessons: self.lessons.all().to_vec(),
            today,
            today_lessons: self.lessons_on(today),
            uploaded_files: self.uploaded_files(),
            accept: ACCEPTED_EXTENSIONS,
            badges: [LessonType::Lecture, LessonType::Practice, LessonType::Lab]
                .into_iter()
                .map(TypeBadge::from)
                .collect(),
            stats: self.stats(today),
        }
    }
}
