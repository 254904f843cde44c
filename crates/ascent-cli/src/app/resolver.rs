use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, AscentConfig};

/// Config together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AscentConfig,
    pub path: PathBuf,
    /// False when no file existed and starter values are in use
    pub from_file: bool,
}

pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.config.as_ref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_config_path()
}

/// Load the config file, falling back to starter values when it is absent.
pub fn load_config(cli: &Cli) -> anyhow::Result<LoadedConfig> {
    let path = resolve_config_path(cli)?;
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using starter config");
        return Ok(LoadedConfig {
            config: AscentConfig::default(),
            path,
            from_file: false,
        });
    }

    let config = read_config(&path)?;
    tracing::debug!(
        path = %path.display(),
        systems = config.grades.len(),
        "loaded config"
    );
    Ok(LoadedConfig {
        config,
        path,
        from_file: true,
    })
}

pub fn missing_config_hint(path: &std::path::Path) -> String {
    format!(
        "No config found at {}; using starter grades.\nHint: Run `ascent init` to create one.",
        path.display()
    )
}
