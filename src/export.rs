use serde::{Deserialize, Serialize};

use crate::models::Lesson;

pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Contents of a downloaded schedule file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleExport {
    pub group: String,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub body: Vec<u8>,
}

impl ExportArtifact {
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    /// `Content-Disposition` value with an ASCII fallback name and the UTF-8 name.
    pub fn content_disposition(&self) -> String {
        let fallback: String = self
            .file_name
            .chars()
            .map(|c| if c.is_ascii_graphic() && c != '"' && c != '\\' { c } else { '_' })
            .collect();
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            fallback,
            urlencoding::encode(&self.file_name)
        )
    }
}

pub fn file_name_for(group: &str) -> String {
    format!("schedule-{}.json", group.trim())
}

pub fn export_schedule(group: &str, lessons: &[Lesson]) -> Result<ExportArtifact, serde_json::Error> {
    let export = ScheduleExport {
        group: group.to_string(),
        lessons: lessons.to_vec(),
    };
    let body = serde_json::to_vec_pretty(&export)?;
    Ok(ExportArtifact {
        file_name: file_name_for(group),
        body,
    })
}

pub fn parse_export(bytes: &[u8]) -> Result<ScheduleExport, serde_json::Error> {
    serde_json::from_slice(bytes)
}
