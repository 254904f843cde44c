use ascent_core::{
    Attempts, EntryBuilder, FieldUpdate, InMemoryGradeCatalog, TickType, DEFAULT_GRADING_SYSTEM,
};
use serde_json::json;

fn catalog() -> InMemoryGradeCatalog {
    InMemoryGradeCatalog::new().with_system(DEFAULT_GRADING_SYSTEM, ["5.8", "5.9", "5.10a"])
}

fn fill(builder: &mut EntryBuilder, name: &str, grade: &str) {
    builder.set_field(FieldUpdate::Name(name.to_string()));
    assert!(builder.select_grade(grade), "grade {} should be offered", grade);
}

#[test]
fn minimal_submission_inherits_session_location() {
    let mut builder = EntryBuilder::open(&catalog(), DEFAULT_GRADING_SYSTEM, Some("Gym X"));
    fill(&mut builder, "Crimpy", "5.10a");

    let record = builder.submit().expect("record should be produced");
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "name": "Crimpy",
            "grade": "5.10a",
            "tickType": "send",
            "effort": 7,
            "location": "Gym X"
        })
    );
}

#[test]
fn switching_away_from_attempt_drops_attempts() {
    let mut builder = EntryBuilder::open(&catalog(), DEFAULT_GRADING_SYSTEM, None);
    builder.set_field(FieldUpdate::TickType(TickType::Attempt));
    builder.set_field(FieldUpdate::Attempts(Attempts::new(3).unwrap()));
    builder.set_field(FieldUpdate::TickType(TickType::Flash));
    assert_eq!(builder.draft().attempts().get(), 1);

    fill(&mut builder, "X", "5.9");
    let record = builder.submit().expect("record should be produced");
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["tickType"], json!("flash"));
    assert!(value.get("attempts").is_none());
}

#[test]
fn missing_name_blocks_submit_without_reset() {
    let mut builder = EntryBuilder::open(&catalog(), DEFAULT_GRADING_SYSTEM, None);
    builder.select_grade("5.9");
    builder.set_field(FieldUpdate::Height(Some(25.0)));
    let before = builder.draft().clone();

    assert!(!builder.can_submit());
    assert!(builder.submit().is_none());
    assert_eq!(builder.draft(), &before);
}

#[test]
fn successful_submit_starts_fresh_draft() {
    let mut builder = EntryBuilder::open(&catalog(), DEFAULT_GRADING_SYSTEM, Some("Gym X"));
    fill(&mut builder, "Crimpy", "5.10a");
    builder.set_field(FieldUpdate::TickType(TickType::Onsight));
    builder.set_field(FieldUpdate::Location("Elsewhere".to_string()));
    builder.submit().expect("record should be produced");

    let draft = builder.draft();
    assert_eq!(draft.name(), "");
    assert_eq!(draft.grade(), "");
    assert_eq!(draft.tick_type(), TickType::Send);
    assert_eq!(draft.effort().get(), 7);
    assert_eq!(draft.location(), "Gym X");
}

#[test]
fn attempt_records_carry_attempt_count() {
    let mut builder = EntryBuilder::open(&catalog(), DEFAULT_GRADING_SYSTEM, None);
    fill(&mut builder, "Project", "5.10a");
    builder.set_field(FieldUpdate::parse_pair("tickType=attempt").unwrap());
    builder.set_field(FieldUpdate::parse_pair("attempts=4").unwrap());

    let value = serde_json::to_value(builder.submit().unwrap()).unwrap();
    assert_eq!(value["attempts"], json!(4));
}
