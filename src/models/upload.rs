use serde::{Deserialize, Serialize};

/// Advisory hint for the file picker. Nothing enforces it.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.xlsx,.xls,.doc,.docx";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadedFile(pub String);

impl UploadedFile {
    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileListRequest {
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DragRequest {
    pub event: DragEvent,
}
