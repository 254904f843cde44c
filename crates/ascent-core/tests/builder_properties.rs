use ascent_core::{Attempts, Draft, Effort, FieldUpdate, SkillKind, TickType};
use proptest::prelude::*;

fn tick_type() -> impl Strategy<Value = TickType> {
    prop::sample::select(TickType::ALL.to_vec())
}

fn update() -> impl Strategy<Value = FieldUpdate> {
    prop_oneof![
        "[ a-zA-Z]{0,8}".prop_map(FieldUpdate::Name),
        prop::sample::select(vec!["", "5.9", "V3"]).prop_map(|g| FieldUpdate::Grade(g.to_string())),
        tick_type().prop_map(FieldUpdate::TickType),
        (1u8..=5).prop_map(|n| FieldUpdate::Attempts(Attempts::new(n).unwrap())),
        "[ a-z]{0,6}".prop_map(FieldUpdate::Location),
        prop::option::of(0.0f64..500.0).prop_map(FieldUpdate::Height),
        prop::option::of(0.0f64..120.0).prop_map(FieldUpdate::TimeOnWall),
        (1u8..=10).prop_map(|n| FieldUpdate::Effort(Effort::new(n).unwrap())),
        "[ a-z]{0,6}".prop_map(FieldUpdate::Notes),
        prop::collection::btree_set("[a-z]{1,5}", 0..3)
            .prop_map(|tags| FieldUpdate::Skills(SkillKind::Physical, tags)),
    ]
}

proptest! {
    #[test]
    fn can_submit_depends_only_on_name_and_grade(
        updates in prop::collection::vec(update(), 0..20)
    ) {
        let mut draft = Draft::default();
        for u in updates {
            draft.apply(u);
        }
        let expected = !draft.name().trim().is_empty() && !draft.grade().is_empty();
        prop_assert_eq!(draft.can_submit(), expected);
        prop_assert_eq!(draft.to_record().is_some(), expected);
    }

    #[test]
    fn leaving_attempt_always_resets(attempts in 1u8..=5, next in tick_type()) {
        prop_assume!(next != TickType::Attempt);
        let mut draft = Draft::default();
        draft.apply(FieldUpdate::TickType(TickType::Attempt));
        draft.apply(FieldUpdate::Attempts(Attempts::new(attempts).unwrap()));
        draft.apply(FieldUpdate::TickType(next));
        prop_assert_eq!(draft.attempts(), Attempts::default());
    }

    #[test]
    fn attempts_key_tracks_tick_type(updates in prop::collection::vec(update(), 0..20)) {
        let mut draft = Draft::default();
        draft.apply(FieldUpdate::Name("route".to_string()));
        draft.apply(FieldUpdate::Grade("5.9".to_string()));
        for u in updates {
            if matches!(u, FieldUpdate::Name(_) | FieldUpdate::Grade(_)) {
                continue;
            }
            draft.apply(u);
        }
        let record = draft.to_record().unwrap();
        let value = serde_json::to_value(&record).unwrap();
        let is_attempt = record.tick_type == TickType::Attempt;
        prop_assert_eq!(value.get("attempts").is_some(), is_attempt);
        if let Some(n) = value.get("attempts").and_then(|v| v.as_u64()) {
            prop_assert!((1..=5).contains(&n));
        }
        for key in ["location", "notes", "physicalSkills", "technicalSkills"] {
            if let Some(v) = value.get(key) {
                prop_assert!(v != &serde_json::json!("") && v != &serde_json::json!([]));
            }
        }
    }
}
