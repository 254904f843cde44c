//! Per-command UI context.
//!
//! `Terminal` captures what the process can see of stdout and the
//! environment; `UiContext::resolve` turns that plus the command's flags
//! into the settings every renderer reads.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal facts gathered once per invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub dumb: bool,
    pub no_color_env: bool,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Output settings for one command.
///
/// Table width is left to comfy-table, which sizes itself to the terminal.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub mode: OutputMode,
}

/// Global display flags from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayFlags<'a> {
    pub json: bool,
    pub format: Option<&'a str>,
    pub no_color: bool,
    pub ascii: bool,
}

impl UiContext {
    pub fn resolve(terminal: Terminal, flags: DisplayFlags<'_>) -> Self {
        let mode =
            OutputMode::resolve(flags.json, flags.format, terminal.stdout_tty, terminal.dumb);
        // Colour only ever decorates pretty output.
        let color = mode.is_pretty() && !flags.no_color && !terminal.no_color_env;

        Self {
            color,
            unicode: !flags.ascii && !terminal.dumb,
            mode,
        }
    }
}
