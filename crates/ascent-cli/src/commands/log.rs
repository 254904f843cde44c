//! `log` command handler: drives an entry builder from flags and prompts.

use std::io::IsTerminal;

use chrono::Utc;
use dialoguer::Confirm;

use ascent_core::{EntryBuilder, EntryHandler, EntryRecord};

use crate::app::{missing_config_hint, AppContext};
use crate::cli::LogArgs;
use crate::config::AscentConfig;
use crate::errors::CliError;
use crate::helpers::{parse_log_args, run_wizard, CliValues};
use crate::output::{print_record, print_session_hint};
use crate::ui::{badge, blank_line, header, print, Badge, UiContext};

/// Prints each submitted record as it arrives.
struct RecordPrinter<'a> {
    ui: &'a UiContext,
    grading_system: String,
    submitted: usize,
    cancelled: bool,
    error: Option<anyhow::Error>,
}

impl<'a> RecordPrinter<'a> {
    fn new(ui: &'a UiContext, grading_system: &str) -> Self {
        Self {
            ui,
            grading_system: grading_system.to_string(),
            submitted: 0,
            cancelled: false,
            error: None,
        }
    }

    fn finish(self) -> anyhow::Result<usize> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.submitted),
        }
    }
}

impl EntryHandler for RecordPrinter<'_> {
    fn on_submit(&mut self, record: EntryRecord) {
        self.submitted += 1;
        tracing::info!(name = %record.name, grade = %record.grade, "entry logged");
        if self.error.is_none() {
            if let Err(err) = print_record(self.ui, &record, &self.grading_system, Utc::now()) {
                self.error = Some(err);
            }
        }
    }

    fn on_cancel(&mut self) {
        tracing::info!("entry cancelled");
        self.cancelled = true;
    }
}

pub fn handle_log(ctx: &AppContext, args: &LogArgs) -> anyhow::Result<()> {
    let loaded = ctx.config()?;
    let config = &loaded.config;
    let ui = ctx.ui_context(args.json, args.format.as_deref());
    let interactive = std::io::stdin().is_terminal() && !args.no_input;

    if !loaded.from_file && interactive && !ctx.quiet() {
        print(&ui, &badge(&ui, Badge::Info, &missing_config_hint(&loaded.path)));
    }

    let grading_system = args
        .system
        .clone()
        .unwrap_or_else(|| config.session.grading_system.clone());
    let catalog = config.grade_catalog();
    if !catalog.contains_system(&grading_system) {
        return Err(CliError::not_found(
            format!("Grading system '{}' not found", grading_system),
            "Hint: Run `ascent grades` to list configured systems.",
        )
        .into());
    }

    let session_location = args
        .location
        .as_deref()
        .or(config.session.location.as_deref());
    let values = parse_log_args(args)?;

    let mut builder = EntryBuilder::open(&catalog, grading_system.as_str(), session_location);
    let mut printer = RecordPrinter::new(&ui, &grading_system);

    if interactive && ui.mode.is_pretty() {
        print(&ui, &header(&ui, "log", Some(&grading_system)));
        blank_line(&ui);
    }

    values.apply(&mut builder)?;

    if !interactive {
        return log_once(&mut builder, &mut printer);
    }

    log_interactive(&mut builder, config, &ui, &values, args.repeat, &mut printer)?;
    if printer.cancelled && printer.submitted == 0 {
        return Err(CliError::Cancelled.into());
    }
    let submitted = printer.finish()?;
    if submitted > 1 && !ctx.quiet() {
        print(&ui, &badge(&ui, Badge::Ok, &format!("{} climbs logged", submitted)));
    }
    if !ctx.quiet() {
        print_session_hint(&ui);
    }
    Ok(())
}

/// Submit whatever the flags produced, without prompting.
fn log_once(builder: &mut EntryBuilder, printer: &mut RecordPrinter<'_>) -> anyhow::Result<()> {
    let missing: Vec<String> = builder
        .missing_required()
        .iter()
        .map(|f| f.as_str().to_string())
        .collect();
    if !builder.submit_to(printer) {
        tracing::warn!(?missing, "entry incomplete");
        return Err(CliError::NotSubmitted { missing }.into());
    }
    if let Some(err) = printer.error.take() {
        return Err(err);
    }
    Ok(())
}

fn log_interactive(
    builder: &mut EntryBuilder,
    config: &AscentConfig,
    ui: &UiContext,
    values: &CliValues,
    repeat: bool,
    printer: &mut RecordPrinter<'_>,
) -> anyhow::Result<()> {
    loop {
        // Fully specified by flags: submit without prompting.
        let submitted = if !values.is_empty() && builder.can_submit() && printer.submitted == 0 {
            builder.submit_to(printer)
        } else {
            run_wizard(builder, config, ui, printer)?
        };

        if !submitted || !repeat {
            return Ok(());
        }

        blank_line(ui);
        let again = Confirm::new()
            .with_prompt("Log another climb?")
            .default(true)
            .interact()?;
        if !again {
            return Ok(());
        }
    }
}
