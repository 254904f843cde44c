//! Turning `log` flags into builder input.

use ascent_core::{EntryBuilder, Field, FieldUpdate, TickType};

use crate::cli::LogArgs;
use crate::errors::CliError;

/// Field values supplied on the command line.
#[derive(Debug, Default)]
pub struct CliValues {
    /// Requested grade, checked against the catalog when applied
    pub grade: Option<String>,
    pub updates: Vec<FieldUpdate>,
}

impl CliValues {
    pub fn is_empty(&self) -> bool {
        self.grade.is_none() && self.updates.is_empty()
    }

    /// Apply values to the builder's draft.
    ///
    /// The grade must be one the builder offers.
    pub fn apply(&self, builder: &mut EntryBuilder) -> anyhow::Result<()> {
        for update in &self.updates {
            builder.set_field(update.clone());
        }
        if let Some(grade) = &self.grade {
            if !builder.select_grade(grade) {
                return Err(CliError::invalid_input_with_hint(
                    format!(
                        "Grade '{}' is not in the '{}' grading system",
                        grade,
                        builder.grading_system()
                    ),
                    format!(
                        "Hint: Run `ascent grades {}` to see valid grades.",
                        builder.grading_system()
                    ),
                )
                .into());
            }
        }
        Ok(())
    }
}

/// Parse `log` flags into field updates.
///
/// The tick type is applied before the attempt count so `--attempts`
/// survives `--tick attempt`. Generic `--field` pairs are applied last.
pub fn parse_log_args(args: &LogArgs) -> anyhow::Result<CliValues> {
    let mut values = CliValues::default();

    let named: [(Field, Option<&String>); 8] = [
        (Field::TickType, args.tick.as_ref()),
        (Field::Attempts, args.attempts.as_ref()),
        (Field::Name, args.name.as_ref()),
        (Field::Height, args.height.as_ref()),
        (Field::TimeOnWall, args.time_on_wall.as_ref()),
        (Field::Effort, args.effort.as_ref()),
        (Field::Notes, args.notes.as_ref()),
        (Field::Grade, args.grade.as_ref()),
    ];
    for (field, raw) in named {
        if let Some(raw) = raw {
            push(&mut values, FieldUpdate::parse(field, raw)?);
        }
    }

    if !args.physical.is_empty() {
        push(
            &mut values,
            FieldUpdate::parse(Field::PhysicalSkills, &args.physical.join(","))?,
        );
    }
    if !args.technical.is_empty() {
        push(
            &mut values,
            FieldUpdate::parse(Field::TechnicalSkills, &args.technical.join(","))?,
        );
    }

    for pair in &args.fields {
        push(&mut values, FieldUpdate::parse_pair(pair)?);
    }

    if drops_attempts(&values.updates) {
        tracing::warn!("attempt count ignored; it only applies with --tick attempt");
    }

    Ok(values)
}

/// Whether an attempt count arrives while the tick type is not `attempt`.
fn drops_attempts(updates: &[FieldUpdate]) -> bool {
    let mut tick = TickType::default();
    updates.iter().any(|update| match update {
        FieldUpdate::TickType(next) => {
            tick = *next;
            false
        }
        FieldUpdate::Attempts(_) => tick != TickType::Attempt,
        _ => false,
    })
}

fn push(values: &mut CliValues, update: FieldUpdate) {
    match update {
        FieldUpdate::Grade(grade) => values.grade = Some(grade),
        other => values.updates.push(other),
    }
}
