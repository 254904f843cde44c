//! Error types for Ascent core operations.
//!
//! The entry builder itself never fails: an incomplete draft is reported by
//! `can_submit` returning false. These errors cover coercing raw user input
//! into typed field updates.

use thiserror::Error;

/// Result type alias for Ascent operations.
pub type Result<T> = std::result::Result<T, AscentError>;

/// Core error type for Ascent operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AscentError {
    /// Field name did not match any draft field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Value outside the domain a field accepts
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
