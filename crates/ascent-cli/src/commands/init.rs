//! `init` command handler: writes a starter config file.

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, AscentConfig};
use crate::errors::CliError;
use crate::ui::{hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let path = resolve_config_path(ctx.cli())?;
    if path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", path.display()),
            "Hint: Pass --force to overwrite it.",
        )
        .into());
    }

    let location = args
        .location
        .as_ref()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());
    let config = AscentConfig::starter(location, args.system.clone());
    if !config.grades.contains_key(&config.session.grading_system) {
        tracing::warn!(
            system = %config.session.grading_system,
            "default grading system has no grades; add them under [grades]"
        );
    }
    write_config(&path, &config)?;
    tracing::info!(path = %path.display(), "wrote config");

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        let items = [
            ("Path", path.display().to_string()),
            ("Grading system", config.session.grading_system.clone()),
            (
                "Location",
                config.session.location.clone().unwrap_or_else(|| "-".to_string()),
            ),
        ];
        print(&ui, &receipt(&ui, "Config written", &items));
        if ui.mode.is_pretty() {
            print(&ui, &hint(&ui, "ascent log  \u{00B7}  ascent grades"));
        }
    }
    Ok(())
}
