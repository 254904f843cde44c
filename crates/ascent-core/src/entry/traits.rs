//! Collaborator seams for the entry builder.

use std::collections::BTreeSet;

use super::record::EntryRecord;
use super::types::SkillKind;

/// Receives the outcome of a builder session.
///
/// The persistence layer implements this; the builder never stores
/// anything itself.
pub trait EntryHandler {
    /// Called with each record produced by a successful submit.
    fn on_submit(&mut self, record: EntryRecord);

    /// Called when the user cancels the draft.
    fn on_cancel(&mut self) {}
}

impl EntryHandler for Vec<EntryRecord> {
    fn on_submit(&mut self, record: EntryRecord) {
        self.push(record);
    }
}

/// Lets the user choose skill tags for one skill kind.
///
/// Implementations receive the current selection and return the full
/// replacement set.
pub trait SkillPicker {
    type Error;

    fn pick(
        &mut self,
        kind: SkillKind,
        current: &BTreeSet<String>,
    ) -> Result<BTreeSet<String>, Self::Error>;
}
