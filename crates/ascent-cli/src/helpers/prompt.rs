//! Interactive entry prompting.
//!
//! Walks the builder's visible fields with dialoguer prompts, then offers
//! submit / edit / cancel. Only catalog grades and in-range attempt and
//! effort values are ever offered.

use std::collections::BTreeSet;

use dialoguer::{Confirm, Input, MultiSelect, Select};

use ascent_core::entry::normalize_tags;
use ascent_core::{
    Attempts, Effort, EntryBuilder, EntryHandler, Field, FieldUpdate, SkillKind, SkillPicker,
    TickType,
};

use crate::config::AscentConfig;
use crate::ui::{badge, format_measure, print, Badge, UiContext};

/// Skill picker backed by a dialoguer multi-select over the configured
/// vocabulary, plus free-form extra tags.
pub struct DialoguerSkillPicker<'a> {
    config: &'a AscentConfig,
}

impl<'a> DialoguerSkillPicker<'a> {
    pub fn new(config: &'a AscentConfig) -> Self {
        Self { config }
    }
}

impl SkillPicker for DialoguerSkillPicker<'_> {
    type Error = anyhow::Error;

    fn pick(
        &mut self,
        kind: SkillKind,
        current: &BTreeSet<String>,
    ) -> anyhow::Result<BTreeSet<String>> {
        let mut options: Vec<String> = self.config.skill_options(kind).to_vec();
        for tag in current {
            if !options.contains(tag) {
                options.push(tag.clone());
            }
        }

        let mut selected = BTreeSet::new();
        if !options.is_empty() {
            let defaults: Vec<bool> = options.iter().map(|o| current.contains(o)).collect();
            let picks = MultiSelect::new()
                .with_prompt(format!("{} skills (space to toggle)", capitalize(kind.as_str())))
                .items(&options)
                .defaults(&defaults)
                .interact()?;
            selected.extend(picks.into_iter().map(|i| options[i].clone()));
        }

        let extra = Input::<String>::new()
            .with_prompt(format!("Other {} skills (comma-separated)", kind.as_str()))
            .allow_empty(true)
            .interact_text()?;
        selected.extend(normalize_tags(extra.split(',')));

        Ok(selected)
    }
}

/// Run the prompt loop until the draft is submitted or cancelled.
///
/// Returns true when a record was delivered to `handler`.
pub fn run_wizard<H>(
    builder: &mut EntryBuilder,
    config: &AscentConfig,
    ui: &UiContext,
    handler: &mut H,
) -> anyhow::Result<bool>
where
    H: EntryHandler + ?Sized,
{
    if builder.grade_choices().is_empty() {
        print(
            ui,
            &badge(
                ui,
                Badge::Warn,
                &format!(
                    "No grades configured for '{}'; this entry cannot be submitted",
                    builder.grading_system()
                ),
            ),
        );
    }

    loop {
        prompt_fields(builder, config)?;

        loop {
            let actions = ["Submit", "Edit fields", "Cancel"];
            let action = Select::new()
                .with_prompt("Log this climb?")
                .items(&actions)
                .default(0)
                .interact()?;

            match action {
                0 => {
                    if builder.submit_to(handler) {
                        return Ok(true);
                    }
                    let missing: Vec<&str> =
                        builder.missing_required().iter().map(|f| f.label()).collect();
                    print(
                        ui,
                        &badge(
                            ui,
                            Badge::Warn,
                            &format!("Still required: {}", missing.join(", ")),
                        ),
                    );
                }
                1 => break,
                _ => {
                    builder.cancel_to(handler);
                    return Ok(false);
                }
            }
        }
    }
}

/// Prompt for each visible field, re-checking visibility as values change.
fn prompt_fields(builder: &mut EntryBuilder, config: &AscentConfig) -> anyhow::Result<()> {
    let mut asked_optional = false;

    for field in Field::ALL {
        if field.is_optional_section() && !asked_optional {
            asked_optional = true;
            let show = Confirm::new()
                .with_prompt("Add optional details?")
                .default(builder.show_optional())
                .interact()?;
            builder.set_show_optional(show);
        }

        if builder.visible_fields().contains(&field) {
            prompt_field(builder, field, config)?;
        }
    }
    Ok(())
}

fn prompt_field(
    builder: &mut EntryBuilder,
    field: Field,
    config: &AscentConfig,
) -> anyhow::Result<()> {
    match field {
        Field::Name => {
            let value = prompt_text(field, builder.draft().name())?;
            builder.set_field(FieldUpdate::Name(value));
        }
        Field::Grade => {
            let choices = builder.grade_choices().to_vec();
            if choices.is_empty() {
                return Ok(());
            }
            let current = builder.draft().grade().to_string();
            let default_idx = choices.iter().position(|g| *g == current).unwrap_or(0);
            let idx = Select::new()
                .with_prompt(field.label())
                .items(&choices)
                .default(default_idx)
                .max_length(12)
                .interact()?;
            builder.select_grade(&choices[idx]);
        }
        Field::TickType => {
            let labels: Vec<&str> = TickType::ALL.iter().map(|t| t.label()).collect();
            let current = builder.draft().tick_type();
            let default_idx = TickType::ALL.iter().position(|t| *t == current).unwrap_or(0);
            let idx = Select::new()
                .with_prompt(field.label())
                .items(&labels)
                .default(default_idx)
                .interact()?;
            builder.set_field(FieldUpdate::TickType(TickType::ALL[idx]));
        }
        Field::Attempts => {
            let choices: Vec<Attempts> = Attempts::choices().collect();
            let current = builder.draft().attempts();
            let default_idx = choices.iter().position(|a| *a == current).unwrap_or(0);
            let idx = Select::new()
                .with_prompt(field.label())
                .items(&choices)
                .default(default_idx)
                .interact()?;
            builder.set_field(FieldUpdate::Attempts(choices[idx]));
        }
        Field::Effort => {
            let choices: Vec<Effort> = Effort::choices().collect();
            let current = builder.draft().effort();
            let default_idx = choices.iter().position(|e| *e == current).unwrap_or(0);
            let idx = Select::new()
                .with_prompt(field.label())
                .items(&choices)
                .default(default_idx)
                .interact()?;
            builder.set_field(FieldUpdate::Effort(choices[idx]));
        }
        Field::Location | Field::Notes => {
            let current = match field {
                Field::Location => builder.draft().location(),
                _ => builder.draft().notes(),
            }
            .to_string();
            let value = prompt_text(field, &current)?;
            builder.set_field(FieldUpdate::parse(field, &value)?);
        }
        Field::Height | Field::TimeOnWall => {
            let current = match field {
                Field::Height => builder.draft().height(),
                _ => builder.draft().time_on_wall(),
            }
            .map(format_measure)
            .unwrap_or_default();
            let value = Input::<String>::new()
                .with_prompt(field.label())
                .with_initial_text(current)
                .allow_empty(true)
                .validate_with(move |input: &String| -> Result<(), String> {
                    FieldUpdate::parse(field, input)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()?;
            builder.set_field(FieldUpdate::parse(field, &value)?);
        }
        Field::PhysicalSkills => {
            builder.pick_skills(&mut DialoguerSkillPicker::new(config), SkillKind::Physical)?;
        }
        Field::TechnicalSkills => {
            builder.pick_skills(&mut DialoguerSkillPicker::new(config), SkillKind::Technical)?;
        }
    }
    Ok(())
}

fn prompt_text(field: Field, current: &str) -> anyhow::Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(field.label())
        .allow_empty(true);
    if !current.is_empty() {
        input = input.with_initial_text(current);
    }
    Ok(input.interact_text()?)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
