//! Application context for the Ascent CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::ui::{DisplayFlags, Terminal, UiContext};

use super::resolver::{load_config, LoadedConfig};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<LoadedConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&LoadedConfig> {
        self.config.get_or_try_init(|| load_config(self.cli))
    }

    /// Build a UI context honoring the global color and symbol flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        let flags = DisplayFlags {
            json,
            format,
            no_color: self.cli.no_color,
            ascii: self.cli.ascii,
        };
        UiContext::resolve(Terminal::detect(), flags)
    }
}
