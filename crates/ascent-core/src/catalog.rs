//! Grade catalog lookup.
//!
//! The catalog maps a grading-system identifier to its ordered list of
//! grade labels. Ascent does not define any grades itself; callers supply
//! them, typically from configuration.

use std::collections::BTreeMap;

/// Grading system used when the caller does not name one.
pub const DEFAULT_GRADING_SYSTEM: &str = "yds";

/// Source of valid grade labels for a grading system.
pub trait GradeCatalog {
    /// Ordered grade labels for `grading_system`; empty when unknown.
    fn list(&self, grading_system: &str) -> Vec<String>;
}

/// A grade catalog held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryGradeCatalog {
    systems: BTreeMap<String, Vec<String>>,
}

impl InMemoryGradeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a grading system.
    pub fn with_system<I, S>(mut self, grading_system: impl Into<String>, grades: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(grading_system, grades);
        self
    }

    pub fn insert<I, S>(&mut self, grading_system: impl Into<String>, grades: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.systems.insert(
            grading_system.into(),
            grades.into_iter().map(Into::into).collect(),
        );
    }

    /// Known grading-system identifiers, sorted.
    pub fn systems(&self) -> impl Iterator<Item = &str> {
        self.systems.keys().map(String::as_str)
    }

    pub fn contains_system(&self, grading_system: &str) -> bool {
        self.systems.contains_key(grading_system)
    }
}

impl GradeCatalog for InMemoryGradeCatalog {
    fn list(&self, grading_system: &str) -> Vec<String> {
        self.systems
            .get(grading_system)
            .cloned()
            .unwrap_or_default()
    }
}

impl From<BTreeMap<String, Vec<String>>> for InMemoryGradeCatalog {
    fn from(systems: BTreeMap<String, Vec<String>>) -> Self {
        Self { systems }
    }
}
