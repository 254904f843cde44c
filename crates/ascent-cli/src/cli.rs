use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use ascent_core::VERSION;

/// Ascent - a CLI-first climbing logbook
#[derive(Parser)]
#[command(name = "ascent")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "ASCENT_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `log` command
#[derive(Args, Default)]
pub struct LogArgs {
    /// Route name
    #[arg(long)]
    pub name: Option<String>,

    /// Grade (must be one of the grading system's grades)
    #[arg(short, long)]
    pub grade: Option<String>,

    /// Grading system identifier (overrides config)
    #[arg(short, long, value_name = "SYSTEM")]
    pub system: Option<String>,

    /// Tick type: send, attempt, flash, onsight
    #[arg(short, long, value_name = "TYPE")]
    pub tick: Option<String>,

    /// Number of attempts (1-5, only kept for attempt ticks)
    #[arg(long)]
    pub attempts: Option<String>,

    /// Location (defaults to the session location)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Route height in feet
    #[arg(long)]
    pub height: Option<String>,

    /// Minutes spent on the wall
    #[arg(long, value_name = "MINUTES")]
    pub time_on_wall: Option<String>,

    /// Effort (1-10)
    #[arg(short, long)]
    pub effort: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Physical skill tag (repeatable)
    #[arg(long, value_name = "TAG")]
    pub physical: Vec<String>,

    /// Technical skill tag (repeatable)
    #[arg(long, value_name = "TAG")]
    pub technical: Vec<String>,

    /// Set any field as key=value (repeatable)
    #[arg(short, long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,

    /// Keep logging entries until cancelled
    #[arg(long)]
    pub repeat: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (pretty, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `grades` command
#[derive(Args)]
pub struct GradesArgs {
    /// Grading system to list (omit to list systems)
    #[arg(value_name = "SYSTEM")]
    pub system: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Session location to store in the config
    #[arg(long)]
    pub location: Option<String>,

    /// Default grading system
    #[arg(long, value_name = "SYSTEM")]
    pub system: Option<String>,

    /// Overwrite an existing config
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a climb
    Log(LogArgs),

    /// List grading systems and their grades
    Grades(GradesArgs),

    /// Write a starter config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
