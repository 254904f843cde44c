//! The entry builder state machine.
//!
//! A builder is opened against a grading system and an optional session
//! location. It owns one draft at a time: field updates mutate it, a
//! successful submit emits a record and starts a fresh draft, and cancel
//! discards it.

use super::draft::Draft;
use super::field::{Field, FieldUpdate};
use super::record::EntryRecord;
use super::traits::{EntryHandler, SkillPicker};
use super::types::SkillKind;
use crate::catalog::GradeCatalog;

/// Owns the draft for one open logging session.
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    session_location: Option<String>,
    grading_system: String,
    grade_choices: Vec<String>,
    draft: Draft,
    show_optional: bool,
}

impl EntryBuilder {
    /// Open a builder with a fresh draft.
    ///
    /// Grade choices are resolved from `catalog` once, at open time.
    pub fn open<C>(
        catalog: &C,
        grading_system: impl Into<String>,
        session_location: Option<&str>,
    ) -> Self
    where
        C: GradeCatalog + ?Sized,
    {
        let grading_system = grading_system.into();
        let grade_choices = catalog.list(&grading_system);
        let session_location = session_location
            .filter(|location| !location.is_empty())
            .map(str::to_string);

        tracing::debug!(
            grading_system = %grading_system,
            grades = grade_choices.len(),
            session_location = session_location.as_deref().unwrap_or(""),
            "opened entry builder"
        );

        Self {
            draft: Draft::new(session_location.as_deref()),
            session_location,
            grading_system,
            grade_choices,
            show_optional: false,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn grading_system(&self) -> &str {
        &self.grading_system
    }

    pub fn session_location(&self) -> Option<&str> {
        self.session_location.as_deref()
    }

    /// Grades the user may choose from, in catalog order.
    pub fn grade_choices(&self) -> &[String] {
        &self.grade_choices
    }

    /// Apply one field mutation and its side effects.
    pub fn set_field(&mut self, update: FieldUpdate) -> &Draft {
        tracing::trace!(field = %update.field(), "set field");
        self.draft.apply(update);
        &self.draft
    }

    /// Set the grade, accepting only labels offered by the catalog.
    ///
    /// Returns false and leaves the draft untouched for any other label.
    pub fn select_grade(&mut self, label: &str) -> bool {
        if !self.grade_choices.iter().any(|grade| grade == label) {
            return false;
        }
        self.draft.apply(FieldUpdate::Grade(label.to_string()));
        true
    }

    /// Replace the skill set for `kind` with the picker's selection.
    pub fn pick_skills<P>(&mut self, picker: &mut P, kind: SkillKind) -> Result<&Draft, P::Error>
    where
        P: SkillPicker + ?Sized,
    {
        let tags = picker.pick(kind, self.draft.skills(kind))?;
        self.draft.apply(FieldUpdate::Skills(kind, tags));
        Ok(&self.draft)
    }

    pub fn show_optional(&self) -> bool {
        self.show_optional
    }

    /// Presentation only; field values are never touched.
    pub fn set_show_optional(&mut self, show: bool) {
        self.show_optional = show;
    }

    pub fn toggle_optional(&mut self) -> bool {
        self.show_optional = !self.show_optional;
        self.show_optional
    }

    /// Fields presentation should render right now.
    pub fn visible_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| match field {
                Field::Attempts => self.draft.is_attempts_relevant(),
                field if field.is_optional_section() => self.show_optional,
                _ => true,
            })
            .collect()
    }

    /// Required fields: always name and grade, plus attempts while relevant.
    ///
    /// Attempts is never blocking because it always holds a valid value.
    pub fn required_fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Name, Field::Grade, Field::TickType];
        if self.draft.is_attempts_relevant() {
            fields.push(Field::Attempts);
        }
        fields
    }

    pub fn can_submit(&self) -> bool {
        self.draft.can_submit()
    }

    pub fn missing_required(&self) -> Vec<Field> {
        self.draft.missing_required()
    }

    pub fn to_record(&self) -> Option<EntryRecord> {
        self.draft.to_record()
    }

    /// Emit the record and start a new draft.
    ///
    /// A rejected submit returns `None` and leaves the draft as it was.
    pub fn submit(&mut self) -> Option<EntryRecord> {
        let Some(record) = self.draft.to_record() else {
            tracing::debug!(
                missing = ?self.missing_required(),
                "submit rejected"
            );
            return None;
        };

        tracing::debug!(
            name = %record.name,
            grade = %record.grade,
            tick_type = %record.tick_type,
            "submit accepted"
        );
        self.reset();
        Some(record)
    }

    /// Submit and deliver the record to `handler`. Returns whether a record
    /// was produced.
    pub fn submit_to<H>(&mut self, handler: &mut H) -> bool
    where
        H: EntryHandler + ?Sized,
    {
        match self.submit() {
            Some(record) => {
                handler.on_submit(record);
                true
            }
            None => false,
        }
    }

    /// Discard the draft. The builder is left holding a fresh one.
    pub fn cancel(&mut self) {
        tracing::debug!("draft cancelled");
        self.reset();
    }

    /// Discard the draft and notify `handler`.
    pub fn cancel_to<H>(&mut self, handler: &mut H)
    where
        H: EntryHandler + ?Sized,
    {
        self.cancel();
        handler.on_cancel();
    }

    fn reset(&mut self) {
        self.draft = Draft::new(self.session_location.as_deref());
    }
}
