//! Input helper functions for the CLI.
//!
//! - Flag parsing into builder updates (`parsing`)
//! - Interactive dialoguer prompts (`prompt`)

mod parsing;
mod prompt;

// Re-export public API
pub use parsing::{parse_log_args, CliValues};
pub use prompt::run_wizard;
