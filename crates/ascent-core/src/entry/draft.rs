//! The in-progress entry state.

use std::collections::BTreeSet;

use super::field::{Field, FieldUpdate};
use super::record::EntryRecord;
use super::types::{Attempts, Effort, SkillKind, TickType};

/// An entry that has not been submitted yet.
///
/// Fields are only mutated through [`Draft::apply`] so the tick type rule
/// cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    name: String,
    grade: String,
    tick_type: TickType,
    attempts: Attempts,
    location: String,
    height: Option<f64>,
    time_on_wall: Option<f64>,
    effort: Effort,
    notes: String,
    physical_skills: BTreeSet<String>,
    technical_skills: BTreeSet<String>,
}

impl Draft {
    /// A draft at defaults, with `location` seeded from the session.
    pub fn new(session_location: Option<&str>) -> Self {
        Self {
            location: session_location.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn tick_type(&self) -> TickType {
        self.tick_type
    }

    pub fn attempts(&self) -> Attempts {
        self.attempts
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn time_on_wall(&self) -> Option<f64> {
        self.time_on_wall
    }

    pub fn effort(&self) -> Effort {
        self.effort
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn skills(&self, kind: SkillKind) -> &BTreeSet<String> {
        match kind {
            SkillKind::Physical => &self.physical_skills,
            SkillKind::Technical => &self.technical_skills,
        }
    }

    /// Attempts are shown, kept, and emitted only for `attempt` ticks.
    pub fn is_attempts_relevant(&self) -> bool {
        self.tick_type == TickType::Attempt
    }

    /// Apply one field mutation.
    ///
    /// Moving the tick type off `attempt` resets attempts to the default,
    /// and an attempt count is dropped unless the tick type is `attempt`.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(value) => self.name = value,
            FieldUpdate::Grade(value) => self.grade = value,
            FieldUpdate::TickType(value) => {
                self.tick_type = value;
                if !self.is_attempts_relevant() && self.attempts != Attempts::default() {
                    tracing::debug!(
                        tick_type = %value,
                        previous = self.attempts.get(),
                        "resetting attempts"
                    );
                    self.attempts = Attempts::default();
                }
            }
            FieldUpdate::Attempts(value) => {
                if !self.is_attempts_relevant() {
                    tracing::debug!(
                        tick_type = %self.tick_type,
                        attempts = value.get(),
                        "ignoring attempts outside an attempt tick"
                    );
                    return;
                }
                self.attempts = value;
            }
            FieldUpdate::Location(value) => self.location = value,
            FieldUpdate::Height(value) => self.height = value,
            FieldUpdate::TimeOnWall(value) => self.time_on_wall = value,
            FieldUpdate::Effort(value) => self.effort = value,
            FieldUpdate::Notes(value) => self.notes = value,
            FieldUpdate::Skills(SkillKind::Physical, tags) => self.physical_skills = tags,
            FieldUpdate::Skills(SkillKind::Technical, tags) => self.technical_skills = tags,
        }
    }

    /// Required fields that are still empty.
    pub fn missing_required(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(Field::Name);
        }
        if self.grade.is_empty() {
            missing.push(Field::Grade);
        }
        missing
    }

    /// Only name and grade block submission.
    pub fn can_submit(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Build the normalized record, or `None` while required fields are empty.
    pub fn to_record(&self) -> Option<EntryRecord> {
        if !self.can_submit() {
            return None;
        }

        Some(EntryRecord {
            name: self.name.trim().to_string(),
            grade: self.grade.clone(),
            tick_type: self.tick_type,
            attempts: self.is_attempts_relevant().then_some(self.attempts),
            height: self.height,
            time_on_wall: self.time_on_wall,
            effort: self.effort,
            notes: non_empty(&self.notes),
            physical_skills: self.physical_skills.iter().cloned().collect(),
            technical_skills: self.technical_skills.iter().cloned().collect(),
            location: non_empty(&self.location),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, grade: &str) -> Draft {
        let mut draft = Draft::default();
        draft.apply(FieldUpdate::Name(name.to_string()));
        draft.apply(FieldUpdate::Grade(grade.to_string()));
        draft
    }

    #[test]
    fn test_new_seeds_location() {
        assert_eq!(Draft::new(Some("Gym X")).location(), "Gym X");
        assert_eq!(Draft::new(None).location(), "");
    }

    #[test]
    fn test_defaults() {
        let draft = Draft::default();
        assert_eq!(draft.tick_type(), TickType::Send);
        assert_eq!(draft.attempts().get(), 1);
        assert_eq!(draft.effort().get(), 7);
        assert!(draft.height().is_none());
        assert!(draft.skills(SkillKind::Physical).is_empty());
    }

    #[test]
    fn test_can_submit_requires_trimmed_name_and_grade() {
        assert!(named("Crimpy", "5.10a").can_submit());
        assert!(!named("   ", "5.10a").can_submit());
        assert!(!named("Crimpy", "").can_submit());
        assert_eq!(named("", "").missing_required(), vec![Field::Name, Field::Grade]);
    }

    #[test]
    fn test_leaving_attempt_resets_attempts() {
        let mut draft = Draft::default();
        draft.apply(FieldUpdate::TickType(TickType::Attempt));
        draft.apply(FieldUpdate::Attempts(Attempts::new(4).unwrap()));
        assert_eq!(draft.attempts().get(), 4);

        draft.apply(FieldUpdate::TickType(TickType::Onsight));
        assert_eq!(draft.attempts(), Attempts::default());
    }

    #[test]
    fn test_attempts_ignored_outside_attempt_tick() {
        let mut draft = Draft::default();
        draft.apply(FieldUpdate::Attempts(Attempts::new(4).unwrap()));
        assert_eq!(draft.attempts(), Attempts::default());

        draft.apply(FieldUpdate::TickType(TickType::Attempt));
        assert_eq!(draft.attempts(), Attempts::default());
    }

    #[test]
    fn test_reselecting_attempt_keeps_count() {
        let mut draft = Draft::default();
        draft.apply(FieldUpdate::TickType(TickType::Attempt));
        draft.apply(FieldUpdate::Attempts(Attempts::new(2).unwrap()));
        draft.apply(FieldUpdate::TickType(TickType::Attempt));
        assert_eq!(draft.attempts().get(), 2);
    }

    #[test]
    fn test_to_record_none_when_incomplete() {
        assert!(named("", "5.9").to_record().is_none());
    }

    #[test]
    fn test_to_record_trims_name_and_passes_grade() {
        let record = named("  Crimpy ", "5.10a").to_record().unwrap();
        assert_eq!(record.name, "Crimpy");
        assert_eq!(record.grade, "5.10a");
        assert!(record.attempts.is_none());
    }

    #[test]
    fn test_to_record_omits_empty_optionals() {
        let mut draft = named("X", "5.9");
        draft.apply(FieldUpdate::Location(String::new()));
        draft.apply(FieldUpdate::Notes(String::new()));
        let record = draft.to_record().unwrap();
        assert!(record.location.is_none());
        assert!(record.notes.is_none());
        assert!(record.physical_skills.is_empty());
    }

    #[test]
    fn test_to_record_keeps_whitespace_optionals_verbatim() {
        let mut draft = named("X", "5.9");
        draft.apply(FieldUpdate::Location("  ".to_string()));
        draft.apply(FieldUpdate::Notes(" ".to_string()));
        let record = draft.to_record().unwrap();
        assert_eq!(record.location.as_deref(), Some("  "));
        assert_eq!(record.notes.as_deref(), Some(" "));
    }

    #[test]
    fn test_to_record_includes_set_optionals_verbatim() {
        let mut draft = named("X", "5.9");
        draft.apply(FieldUpdate::Height(Some(30.0)));
        draft.apply(FieldUpdate::TimeOnWall(Some(4.5)));
        draft.apply(FieldUpdate::Notes("felt strong ".to_string()));
        draft.apply(FieldUpdate::Skills(
            SkillKind::Technical,
            ["drop knee".to_string()].into_iter().collect(),
        ));
        let record = draft.to_record().unwrap();
        assert_eq!(record.height, Some(30.0));
        assert_eq!(record.time_on_wall, Some(4.5));
        assert_eq!(record.notes.as_deref(), Some("felt strong "));
        assert_eq!(record.technical_skills, vec!["drop knee".to_string()]);
    }

    #[test]
    fn test_to_record_includes_attempts_for_attempt_tick() {
        let mut draft = named("X", "5.9");
        draft.apply(FieldUpdate::TickType(TickType::Attempt));
        let record = draft.to_record().unwrap();
        assert_eq!(record.attempts, Some(Attempts::default()));
    }
}
