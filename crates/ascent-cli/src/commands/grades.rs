//! `grades` command handler.

use ascent_core::GradeCatalog;

use crate::app::AppContext;
use crate::cli::GradesArgs;
use crate::errors::CliError;
use crate::ui::{header, hint, print, table};

pub fn handle_grades(ctx: &AppContext, args: &GradesArgs) -> anyhow::Result<()> {
    let config = &ctx.config()?.config;
    let ui = ctx.ui_context(args.json, args.format.as_deref());
    let catalog = config.grade_catalog();

    let Some(system) = args.system.as_deref() else {
        let default_system = config.session.grading_system.as_str();
        if ui.mode.is_json() {
            let systems: Vec<serde_json::Value> = catalog
                .systems()
                .map(|id| {
                    serde_json::json!({
                        "id": id,
                        "grades": catalog.list(id).len(),
                        "default": id == default_system,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&systems)?);
            return Ok(());
        }

        let rows: Vec<Vec<String>> = catalog
            .systems()
            .map(|id| {
                let marker = if id == default_system { "*" } else { "" };
                vec![
                    format!("{}{}", id, marker),
                    catalog.list(id).len().to_string(),
                ]
            })
            .collect();
        if ui.mode.is_pretty() {
            print(&ui, &header(&ui, "grades", None));
        }
        print(&ui, &table(&ui, &["System", "Grades"], &rows));
        if ui.mode.is_pretty() {
            print(&ui, &hint(&ui, "ascent grades <SYSTEM>  \u{00B7}  * marks the default"));
        }
        return Ok(());
    };

    if !catalog.contains_system(system) {
        return Err(CliError::not_found(
            format!("Grading system '{}' not found", system),
            "Hint: Run `ascent grades` to list configured systems.",
        )
        .into());
    }

    let grades = catalog.list(system);
    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "id": system, "grades": grades }))?
        );
        return Ok(());
    }

    if ui.mode.is_pretty() {
        print(&ui, &header(&ui, "grades", Some(system)));
    }
    let rows: Vec<Vec<String>> = grades
        .iter()
        .enumerate()
        .map(|(i, grade)| vec![(i + 1).to_string(), grade.clone()])
        .collect();
    print(&ui, &table(&ui, &["#", "Grade"], &rows));
    Ok(())
}
