use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    Schedule,
    Upload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialog {
    AddLesson,
    Calendar,
    Notifications,
    Email,
}

/// Open flags, one per dialog. They are not mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DialogFlags {
    pub add_lesson: bool,
    pub calendar: bool,
    pub notifications: bool,
    pub email: bool,
}

impl DialogFlags {
    pub fn is_open(&self, dialog: Dialog) -> bool {
        match dialog {
            Dialog::AddLesson => self.add_lesson,
            Dialog::Calendar => self.calendar,
            Dialog::Notifications => self.notifications,
            Dialog::Email => self.email,
        }
    }

    pub fn set(&mut self, dialog: Dialog, open: bool) {
        let flag = match dialog {
            Dialog::AddLesson => &mut self.add_lesson,
            Dialog::Calendar => &mut self.calendar,
            Dialog::Notifications => &mut self.notifications,
            Dialog::Email => &mut self.email,
        };
        *flag = open;
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectTabRequest {
    pub tab: Tab,
}

/// Fixed text of the notification settings dialog.
pub const NOTIFICATION_SETTINGS: [&str; 3] = [
    "Напоминание за 15 минут до начала занятия",
    "Уведомление об изменениях в расписании",
    "Ежедневная сводка занятий в 7:00",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSettingsForm {
    pub address: String,
    pub notify_schedule_changes: bool,
    pub weekly_digest: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailSettingsPatch {
    pub address: Option<String>,
    pub notify_schedule_changes: Option<bool>,
    pub weekly_digest: Option<bool>,
}

impl EmailSettingsForm {
    pub fn apply(&mut self, patch: EmailSettingsPatch) {
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(flag) = patch.notify_schedule_changes {
            self.notify_schedule_changes = flag;
        }
        if let Some(flag) = patch.weekly_digest {
            self.weekly_digest = flag;
        }
    }
}
