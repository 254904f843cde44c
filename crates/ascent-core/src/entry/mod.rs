//! Climb log entry construction.
//!
//! - `types`: tick type and bounded numeric values
//! - `field`: field names and raw-input coercion
//! - `draft`: the in-progress entry and its transition rules
//! - `record`: the normalized output contract
//! - `builder`: the open/submit/cancel lifecycle
//! - `traits`: handler and skill picker seams

pub mod builder;
pub mod draft;
pub mod field;
pub mod record;
pub mod traits;
pub mod types;

pub use builder::EntryBuilder;
pub use draft::Draft;
pub use field::{normalize_tags, Field, FieldUpdate};
pub use record::EntryRecord;
pub use traits::{EntryHandler, SkillPicker};
pub use types::{Attempts, Effort, SkillKind, TickType};
