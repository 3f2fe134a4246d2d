//! Terminal output formatting.
//!
//! Human-readable text by default; one JSON object per line when `--json`
//! is set.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

use crate::application::Reply;
use crate::domain::{Field, Notice, Span};

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    if read_config().json {
        emit_json_line("field", json!({ "label": label, "value": value }));
        return;
    }
    println!("  {:<16} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    if read_config().json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    if read_config().json {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }
    println!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line.
pub fn error(message: &str) {
    if read_config().json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }
    eprintln!("  {} {}", "×".red(), message);
}

/// Print a section header.
pub fn section(title: &str) {
    if read_config().json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    println!();
    println!("{}", title.bold());
}

/// Print a command reply.
pub fn reply(reply: &Reply) {
    match reply {
        Reply::Notice(notice) => print_notice(notice),
        Reply::Warning(message) => warning(message),
    }
}

fn print_notice(notice: &Notice) {
    if read_config().json {
        let fields: Vec<_> = notice
            .fields
            .iter()
            .map(|f| json!({ "name": f.name, "value": terminal_value(f) }))
            .collect();
        emit_json_line("notice", json!({ "title": notice.title, "fields": fields }));
        return;
    }

    section(&notice.title);
    for f in &notice.fields {
        field(&f.name, terminal_value(f));
    }
}

/// Field value with links shown as bare URLs on a single line.
#[must_use]
pub fn terminal_value(field: &Field) -> String {
    field
        .value
        .iter()
        .map(|span| match span {
            Span::Text(text) => text.as_str(),
            Span::Link { url, .. } => url.as_str(),
            Span::LineBreak => "  ",
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_value_flattens_links() {
        let field = Field::new("abcdef0123...")
            .push_text("1.00000000 LTC")
            .push_line_break()
            .push_link("View", "https://live.blockcypher.com/ltc/tx/abcdef");

        assert_eq!(
            terminal_value(&field),
            "1.00000000 LTC  https://live.blockcypher.com/ltc/tx/abcdef"
        );
    }

    #[test]
    fn terminal_value_plain_text() {
        assert_eq!(terminal_value(&Field::text("USD", "$200.00")), "$200.00");
    }
}
