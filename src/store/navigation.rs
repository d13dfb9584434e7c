use crate::models::{Dialog, DialogFlags, EmailSettingsForm, EmailSettingsPatch, Tab};

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    active_tab: Tab,
    dialogs: DialogFlags,
    email_form: EmailSettingsForm,
}

impl ViewState {
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn dialogs(&self) -> DialogFlags {
        self.dialogs
    }

    pub fn is_open(&self, dialog: Dialog) -> bool {
        self.dialogs.is_open(dialog)
    }

    pub fn open(&mut self, dialog: Dialog) {
        self.dialogs.set(dialog, true);
    }

    pub fn close(&mut self, dialog: Dialog) {
        self.dialogs.set(dialog, false);
    }

    pub fn email_form(&self) -> &EmailSettingsForm {
        &self.email_form
    }

    pub fn update_email_form(&mut self, patch: EmailSettingsPatch) {
        self.email_form.apply(patch);
    }
}
