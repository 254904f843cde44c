//! # Ascent Core
//!
//! Core library for Ascent - a CLI-first climbing logbook.
//!
//! This crate holds the entry-construction state machine and the data
//! contract it emits, independent of any interface or storage.
//!
//! ## Architecture
//!
//! - **entry**: Draft state, field coercion, visibility rules, and the
//!   `EntryBuilder` that turns a draft into a normalized `EntryRecord`
//! - **catalog**: Grade catalog lookup keyed by grading system
//! - **error**: Errors raised while coercing raw input

pub mod catalog;
pub mod entry;
pub mod error;

pub use catalog::{GradeCatalog, InMemoryGradeCatalog, DEFAULT_GRADING_SYSTEM};
pub use entry::{
    Attempts, Draft, Effort, EntryBuilder, EntryHandler, EntryRecord, Field, FieldUpdate,
    SkillKind, SkillPicker, TickType,
};
pub use error::{AscentError, Result};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
