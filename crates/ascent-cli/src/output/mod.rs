//! Output formatting for emitted records.
//!
//! Records go to stdout as JSON (json/plain modes) or as a receipt
//! (pretty mode) for whatever persists them downstream.

mod json;
mod text;

// Re-export public API
pub use text::{print_record, print_session_hint};
