//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Ascent · command (context)"
/// Plain mode: "ascent command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Ascent", styles::bold(), ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("ascent {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, String)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Render a table using comfy-table for pretty mode.
///
/// Plain mode: space-separated values, no header
pub fn table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.to_vec());
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(mode: OutputMode) -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            mode,
        }
    }

    #[test]
    fn test_header_modes() {
        assert!(header(&ctx(OutputMode::Pretty), "log", Some("yds")).contains("Ascent"));
        assert_eq!(header(&ctx(OutputMode::Plain), "log", None), "ascent log");
        assert_eq!(header(&ctx(OutputMode::Json), "log", None), "");
    }

    #[test]
    fn test_kv_plain_normalizes_key() {
        assert_eq!(kv(&ctx(OutputMode::Plain), "Tick Type", "send"), "tick_type=send");
        assert_eq!(kv(&ctx(OutputMode::Pretty), "Grade", "5.9"), "Grade: 5.9");
    }

    #[test]
    fn test_receipt_plain() {
        let out = receipt(
            &ctx(OutputMode::Plain),
            "Logged",
            &[("name", "Crimpy".to_string()), ("grade", "5.9".to_string())],
        );
        assert_eq!(out, "status=ok\nname=Crimpy\ngrade=5.9");
    }

    #[test]
    fn test_table_plain_rows() {
        let rows = vec![
            vec!["yds".to_string(), "21".to_string()],
            vec!["v".to_string(), "14".to_string()],
        ];
        assert_eq!(table(&ctx(OutputMode::Plain), &["System", "Grades"], &rows), "yds 21\nv 14");
    }

    #[test]
    fn test_table_pretty_has_headers() {
        let rows = vec![vec!["yds".to_string()]];
        let out = table(&ctx(OutputMode::Pretty), &["System"], &rows);
        assert!(out.contains("System"));
        assert!(out.contains("yds"));
    }

    #[test]
    fn test_error_message_plain() {
        let out = error_message(&ctx(OutputMode::Plain), "boom", Some("try again"));
        assert_eq!(out, "error=boom\nhint=try again");
    }
}
