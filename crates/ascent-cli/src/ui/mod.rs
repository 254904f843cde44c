//! UI primitives for the Ascent CLI.
//!
//! - **Context**: Terminal detection and per-command color/unicode/mode
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and colors
//! - **Render**: Headers, receipts, tables, hints
//! - **Format**: String utilities

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::{DisplayFlags, Terminal, UiContext};
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, blank_line, header, hint, print, print_error, receipt, table,
};

pub use format::{format_datetime, format_measure, truncate};
