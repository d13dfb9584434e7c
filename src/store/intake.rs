use tracing::debug;

use crate::models::{DragEvent, UploadedFile};

/// Collects names of files dropped on or picked for the upload area.
/// File contents are never read.
#[derive(Debug, Clone, Default)]
pub struct FileIntake {
    files: Vec<UploadedFile>,
    drag_active: bool,
}

impl FileIntake {
    pub fn handle_drag(&mut self, event: DragEvent) {
        self.drag_active = matches!(event, DragEvent::Enter | DragEvent::Over);
    }

    pub fn drop_files<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drag_active = false;
        self.append(names)
    }

    pub fn pick_files<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.append(names)
    }

    fn append<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.files.len();
        self.files
            .extend(names.into_iter().map(|name| UploadedFile(name.into())));
        let added = self.files.len() - before;
        debug!("intake: {} file name(s) added, {} total", added, self.files.len());
        added
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(|f| f.name().to_string()).collect()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }
}
