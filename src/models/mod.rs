pub mod lesson;
pub mod upload;
pub mod view;

pub use lesson::{
    DraftField, DraftPatch, Lesson, LessonType, NewLessonDraft, TypeColor, ValidationError,
    type_color, type_color_for_label,
};
pub use upload::{ACCEPTED_EXTENSIONS, DragEvent, DragRequest, FileListRequest, UploadedFile};
pub use view::{
    Dialog, DialogFlags, EmailSettingsForm, EmailSettingsPatch, NOTIFICATION_SETTINGS,
    SelectTabRequest, Tab,
};
