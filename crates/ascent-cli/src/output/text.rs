//! Receipt output for records.

use chrono::{DateTime, Utc};

use ascent_core::EntryRecord;

use super::json::record_json;
use crate::ui::{format_datetime, format_measure, hint, print, receipt, truncate, UiContext};

/// Key/value pairs describing a record, in display order.
pub fn record_receipt_items(record: &EntryRecord) -> Vec<(&'static str, String)> {
    let mut items = vec![
        ("Name", record.name.clone()),
        ("Grade", record.grade.clone()),
        ("Tick", record.tick_type.label().to_string()),
    ];
    if let Some(attempts) = record.attempts {
        items.push(("Attempts", attempts.to_string()));
    }
    if let Some(location) = &record.location {
        items.push(("Location", location.clone()));
    }
    if let Some(height) = record.height {
        items.push(("Height", format!("{} ft", format_measure(height))));
    }
    if let Some(minutes) = record.time_on_wall {
        items.push(("Time on wall", format!("{} min", format_measure(minutes))));
    }
    items.push(("Effort", format!("{}/10", record.effort)));
    if !record.physical_skills.is_empty() {
        items.push(("Physical", record.physical_skills.join(", ")));
    }
    if !record.technical_skills.is_empty() {
        items.push(("Technical", record.technical_skills.join(", ")));
    }
    if let Some(notes) = &record.notes {
        items.push(("Notes", truncate(notes, 60)));
    }
    items
}

/// Print a submitted record in the context's output mode.
pub fn print_record(
    ctx: &UiContext,
    record: &EntryRecord,
    grading_system: &str,
    logged_at: DateTime<Utc>,
) -> anyhow::Result<()> {
    if !ctx.mode.is_pretty() {
        println!("{}", record_json(record, grading_system, logged_at)?);
        return Ok(());
    }

    let title = format!(
        "Logged {} ({}) \u{00B7} {}",
        record.name,
        record.grade,
        format_datetime(&logged_at, true)
    );
    print(ctx, &receipt(ctx, &title, &record_receipt_items(record)));
    Ok(())
}

/// Print the next-step hint after a session.
pub fn print_session_hint(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        print(ctx, &hint(ctx, "ascent log --repeat  \u{00B7}  ascent grades"));
    }
}
