use chrono::NaiveDate;
use group_schedule::models::{
    Dialog, DraftField, DraftPatch, Lesson, LessonType, TypeColor, type_color,
    type_color_for_label,
};
use group_schedule::store::{PageStore, filter_today};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn full_patch(subject: &str, date: &str, lesson_type: LessonType) -> DraftPatch {
    DraftPatch {
        subject: Some(subject.to_string()),
        teacher: Some("Иванов И.И.".to_string()),
        room: Some("Аудитория 205".to_string()),
        time: Some("8:30-10:00".to_string()),
        date: Some(date.to_string()),
        lesson_type: Some(lesson_type),
    }
}

fn add(store: &mut PageStore, subject: &str, on: &str) -> Lesson {
    store.update_draft(full_patch(subject, on, LessonType::Practice));
    store.add_lesson().expect("draft should be valid")
}

#[test]
fn test_add_lesson_scenario() {
    let mut store = PageStore::new("7Т1", 25);
    store.open_dialog(Dialog::AddLesson);
    store.update_draft(full_patch("Математика", "2024-09-02", LessonType::Lecture));

    let lesson = store.add_lesson().expect("valid draft");

    assert_eq!(store.lessons().len(), 1);
    assert_eq!(lesson.subject, "Математика");
    assert_eq!(lesson.teacher, "Иванов И.И.");
    assert_eq!(lesson.room, "Аудитория 205");
    assert_eq!(lesson.time, "8:30-10:00");
    assert_eq!(lesson.date, date("2024-09-02"));
    assert_eq!(lesson.lesson_type, LessonType::Lecture);
    assert_eq!(store.draft(), &Default::default());
    assert!(!store.dialogs().add_lesson);
}

#[test]
fn test_add_lesson_with_any_empty_field_is_rejected() {
    let fields = [
        DraftField::Subject,
        DraftField::Teacher,
        DraftField::Room,
        DraftField::Time,
        DraftField::Date,
    ];

    for field in fields {
        let mut store = PageStore::new("7Т1", 25);
        store.open_dialog(Dialog::AddLesson);
        let mut patch = full_patch("Физика", "2024-09-02", LessonType::Practice);
        match field {
            DraftField::Subject => patch.subject = Some(String::new()),
            DraftField::Teacher => patch.teacher = Some("   ".to_string()),
            DraftField::Room => patch.room = Some(String::new()),
            DraftField::Time => patch.time = Some(String::new()),
            DraftField::Date => patch.date = Some(String::new()),
        }
        store.update_draft(patch);
        let before = store.draft().clone();

        let err = store.add_lesson().expect_err("draft must be rejected");

        assert_eq!(err.fields, vec![field]);
        assert!(store.lessons().is_empty());
        assert_eq!(store.draft(), &before);
        assert!(store.dialogs().add_lesson, "dialog stays open for correction");
    }
}

#[test]
fn test_add_lesson_rejects_unparseable_date() {
    let mut store = PageStore::new("7Т1", 25);
    store.update_draft(full_patch("Физика", "2 сентября", LessonType::Practice));

    let err = store.add_lesson().expect_err("date is not a calendar date");

    assert_eq!(err.fields, vec![DraftField::Date]);
    assert!(store.lessons().is_empty());
}

#[test]
fn test_added_lessons_get_distinct_ids() {
    let mut store = PageStore::new("7Т1", 25);
    let a = add(&mut store, "Физика", "2024-09-02");
    let b = add(&mut store, "Физика", "2024-09-02");
    assert_ne!(a.id, b.id);
    assert_eq!(store.lessons().len(), 2);
}

#[test]
fn test_cancel_draft_resets_and_closes() {
    let mut store = PageStore::new("7Т1", 25);
    store.open_dialog(Dialog::AddLesson);
    store.update_draft(DraftPatch {
        subject: Some("Химия".to_string()),
        lesson_type: Some(LessonType::Lab),
        ..Default::default()
    });

    store.cancel_draft();

    assert_eq!(store.draft().subject, "");
    assert_eq!(store.draft().lesson_type, LessonType::Lecture);
    assert!(!store.dialogs().add_lesson);
}

#[test]
fn test_clear_all_empties_collection() {
    let mut store = PageStore::new("7Т1", 25);
    assert_eq!(store.clear_all(), 0);

    add(&mut store, "Физика", "2024-09-02");
    add(&mut store, "Химия", "2024-09-03");
    add(&mut store, "История", "2024-09-04");

    assert_eq!(store.clear_all(), 3);
    assert!(store.lessons().is_empty());
}

#[test]
fn test_filter_today_exact_match_in_order() {
    let mut store = PageStore::new("7Т1", 25);
    add(&mut store, "Физика", "2024-09-02");
    add(&mut store, "Химия", "2024-09-03");
    add(&mut store, "История", "2024-09-02");

    let today = date("2024-09-02");
    let first = filter_today(store.lessons(), today);
    let subjects: Vec<&str> = first.iter().map(|l| l.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Физика", "История"]);

    let second = filter_today(&first, today);
    assert_eq!(first, second);

    assert!(filter_today(store.lessons(), date("2024-09-10")).is_empty());
}

#[test]
fn test_stats_counts_today_and_upcoming() {
    let mut store = PageStore::new("7Т1", 25);
    add(&mut store, "Физика", "2024-09-01");
    add(&mut store, "Химия", "2024-09-02");
    add(&mut store, "История", "2024-09-05");
    store.pick_files(vec!["a.pdf".to_string()]);

    let stats = store.stats(date("2024-09-02"));

    assert_eq!(stats.total, 3);
    assert_eq!(stats.today, 1);
    assert_eq!(stats.upcoming, 2);
    assert_eq!(stats.uploaded_files, 1);
    assert_eq!(stats.students, 25);
}

#[test]
fn test_seed_demo_fills_sample_day() {
    let mut store = PageStore::new("7Т1", 25);
    let today = date("2024-09-02");
    store.seed_demo(today);

    assert_eq!(store.lessons_on(today).len(), 4);
    assert_eq!(store.lessons()[2].lesson_type, LessonType::Lab);
}

#[test]
fn test_type_color_mapping() {
    assert_eq!(type_color(LessonType::Lecture), TypeColor::Blue);
    assert_eq!(type_color(LessonType::Practice), TypeColor::Green);
    assert_eq!(type_color(LessonType::Lab), TypeColor::Purple);
    assert_eq!(LessonType::Lab.color(), type_color(LessonType::Lab));

    assert_eq!(type_color_for_label("лекция"), TypeColor::Blue);
    assert_eq!(type_color_for_label("practice"), TypeColor::Green);
    assert_eq!(type_color_for_label("семинар"), TypeColor::Gray);
    assert_eq!(type_color_for_label(""), TypeColor::Gray);
    assert_eq!(TypeColor::Gray.badge_classes(), "bg-gray-100 text-gray-800");
}

#[test]
fn test_dialogs_are_independent() {
    let mut store = PageStore::new("7Т1", 25);
    store.open_dialog(Dialog::Calendar);
    store.open_dialog(Dialog::Email);

    let flags = store.dialogs();
    assert!(flags.calendar && flags.email);
    assert!(!flags.add_lesson && !flags.notifications);

    store.close_dialog(Dialog::Calendar);
    assert!(!store.is_dialog_open(Dialog::Calendar));
    assert!(store.is_dialog_open(Dialog::Email));
}
