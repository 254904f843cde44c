//! Ascent CLI - a CLI-first climbing logbook
//!
//! Drives the core entry builder from flags or interactive prompts and
//! writes each logged climb to stdout for downstream storage.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ascent_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{grades, init, log, misc};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let error_msg = format!("{}", e);
        let (message, hint) = split_hint(&error_msg);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Logs go to stderr so stdout only carries records.
fn init_tracing(cli: &Cli) {
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,ascent_core=debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_env("ASCENT_LOG").unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Split a trailing "Hint: ..." line off an error message.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => (&error[..idx], Some(error[idx + 1..].trim_start_matches("Hint:").trim())),
        None => (error, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Log(args)) => {
            log::handle_log(ctx, args)?;
        }
        Some(Commands::Grades(args)) => {
            grades::handle_grades(ctx, args)?;
        }
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Ascent v{}", VERSION);
            println!("\nQuickstart:");
            println!("  ascent init --location \"My Gym\"");
            println!("  ascent log");
            println!("  ascent log --no-input --name \"Crimpy\" --grade 5.10a");
            println!("  ascent grades yds");
            println!("\nRun `ascent --help` for full usage.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hint() {
        let (msg, hint) = split_hint("Grading system 'x' not found\nHint: Run `ascent grades`.");
        assert_eq!(msg, "Grading system 'x' not found");
        assert_eq!(hint, Some("Run `ascent grades`."));
        assert_eq!(split_hint("plain"), ("plain", None));
    }

    #[test]
    fn test_cli_parses_log_flags() {
        let cli = Cli::try_parse_from([
            "ascent", "log", "--name", "Crimpy", "-g", "5.10a", "--tick", "attempt",
            "--attempts", "2", "--physical", "crimp", "--physical", "pinch", "-f", "notes=hi",
            "--no-input",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Log(args)) => {
                assert_eq!(args.name.as_deref(), Some("Crimpy"));
                assert_eq!(args.physical.len(), 2);
                assert_eq!(args.fields, vec!["notes=hi".to_string()]);
                assert!(args.no_input);
            }
            _ => panic!("expected log command"),
        }
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
