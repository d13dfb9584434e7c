use group_schedule::models::DragEvent;
use group_schedule::store::FileIntake;

#[test]
fn test_drop_two_files_scenario() {
    let mut intake = FileIntake::default();
    intake.handle_drag(DragEvent::Enter);
    assert!(intake.drag_active());

    intake.drop_files(["a.pdf", "b.docx"]);

    assert_eq!(intake.names(), vec!["a.pdf", "b.docx"]);
    assert!(!intake.drag_active());
}

#[test]
fn test_drag_events_toggle_flag() {
    let mut intake = FileIntake::default();
    intake.handle_drag(DragEvent::Over);
    assert!(intake.drag_active());
    intake.handle_drag(DragEvent::Leave);
    assert!(!intake.drag_active());
    intake.handle_drag(DragEvent::Enter);
    assert!(intake.drag_active());
}

#[test]
fn test_pick_accepts_any_name_and_keeps_duplicates() {
    let mut intake = FileIntake::default();
    intake.handle_drag(DragEvent::Over);

    let added = intake.pick_files(["schedule.xlsx", "photo.png", "schedule.xlsx"]);

    assert_eq!(added, 3);
    assert_eq!(intake.names(), vec!["schedule.xlsx", "photo.png", "schedule.xlsx"]);
    // picking does not touch the drag flag
    assert!(intake.drag_active());
}

#[test]
fn test_empty_file_list_is_noop() {
    let mut intake = FileIntake::default();
    intake.pick_files(["a.pdf"]);
    assert_eq!(intake.pick_files(Vec::<String>::new()), 0);
    assert_eq!(intake.files().len(), 1);
}
