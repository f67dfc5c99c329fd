//! CLI output formatting.
//!
//! Display is information-centric: every field is shown by its wire key and
//! current value, with teaching notes (CSS property, help text, choices) as
//! indented context lines underneath. Fields group under their tier, so a
//! learner sees at a glance what the session tier unlocks and what is still
//! locked.
//!
//! Each concern has a `format_*` function returning lines for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::config::SiteConfig;
use crate::field::Field;
use crate::tier::{self, Tier};
use std::path::Path;

/// Indentation: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Tier-grouped listing of every field with its value and teaching notes.
pub fn format_fields(config: &SiteConfig, current: Tier) -> Vec<String> {
    let mut lines = Vec::new();

    for group in Tier::ALL {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        let marker = if tier::is_visible(group, current) {
            ""
        } else {
            " [locked]"
        };
        lines.push(format!("{group}{marker}"));

        for field in Field::ALL.into_iter().filter(|f| f.required_tier() == group) {
            lines.push(format!(
                "{}{} = \"{}\"",
                indent(1),
                field.key(),
                config.get(field)
            ));
            if let Some(property) = field.css_property() {
                let note = match field.help() {
                    Some(help) => format!("{property}: {help}"),
                    None => property.to_string(),
                };
                lines.push(format!("{}{note}", indent(2)));
            }
            if let Some(options) = field.options() {
                let choices: Vec<String> = options
                    .iter()
                    .map(|(value, label)| {
                        if value == label {
                            (*value).to_string()
                        } else {
                            format!("{value} ({label})")
                        }
                    })
                    .collect();
                lines.push(format!("{}Choices: {}", indent(2), choices.join(", ")));
            }
        }
    }

    lines
}

/// Confirmation for a stored edit, with a note when the field is still
/// locked at the session tier.
pub fn format_set(field: Field, value: &str, current: Tier) -> Vec<String> {
    let mut lines = vec![format!("{} = \"{value}\"", field.key())];
    let required = field.required_tier();
    if !tier::is_visible(required, current) {
        lines.push(format!(
            "{}Stored, but locked at {current} tier; the preview shows it from {required}.",
            indent(1)
        ));
    }
    lines
}

/// Summary line for a rendered document written to a file.
pub fn format_written(label: &str, path: &Path, bytes: usize) -> Vec<String> {
    vec![format!("{label} written to {} ({bytes} bytes)", path.display())]
}

/// Warning shown when `reset` runs without `--yes`.
pub fn format_reset_warning() -> Vec<String> {
    vec![
        "Reset restores every field to its default value.".to_string(),
        "This deletes all your changes. Re-run with --yes to confirm.".to_string(),
    ]
}

pub fn print_fields(config: &SiteConfig, current: Tier) {
    for line in format_fields(config, current) {
        println!("{line}");
    }
}

pub fn print_set(field: Field, value: &str, current: Tier) {
    for line in format_set(field, value, current) {
        println!("{line}");
    }
}

pub fn print_written(label: &str, path: &Path, bytes: usize) {
    for line in format_written(label, path, bytes) {
        println!("{line}");
    }
}

pub fn print_reset_warning() {
    for line in format_reset_warning() {
        println!("{line}");
    }
}
