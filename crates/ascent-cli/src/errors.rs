//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; anything else exits with 1.

use std::fmt;

use ascent_core::AscentError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Grading system or other lookup not found
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// The user cancelled before anything was logged
    Cancelled,

    /// Required fields were still empty when input ran out
    NotSubmitted { missing: Vec<String> },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput { message, hint } => match hint {
                Some(h) => write!(f, "{}\n{}", message, h),
                None => write!(f, "{}", message),
            },
            CliError::Cancelled => write!(f, "Entry cancelled"),
            CliError::NotSubmitted { missing } => write!(
                f,
                "Entry not logged: missing {}\n{}",
                missing.join(", "),
                "Hint: Pass --name and --grade, or run without --no-input."
            ),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::Cancelled => exit_codes::CANCELLED,
            CliError::NotSubmitted { .. } => exit_codes::NOT_SUBMITTED,
        }
    }
}

/// Exit code for any error surfaced from a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if err.downcast_ref::<AscentError>().is_some() {
        return exit_codes::INVALID_INPUT;
    }
    1
}
