//! Shared CLI output helpers for consistent operator-facing text.
//!
//! Supports a JSON mode for scripting: command results are printed as one
//! JSON document on stdout and status lines become `{"type", "payload"}`
//! objects. Colors are only emitted when the stream supports them, unless
//! overridden with `--color`.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use serde_json::json;

use super::command::ColorChoice;
use crate::error::Result;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
}

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
pub fn configure(config: OutputConfig, color: &ColorChoice) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
    match color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Print a command result as pretty JSON.
///
/// # Errors
/// Returns an error if `value` cannot be serialized.
pub fn json_document<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a section header.
pub fn section(title: &str) {
    if is_json() {
        emit_json_line("section", json!({ "title": title }));
        return;
    }

    println!();
    println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    if is_json() {
        emit_json_line("field", json!({ "label": label, "value": value }));
        return;
    }

    println!(
        "  {:<18} {}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed()),
        value
    );
}

/// Print a success line.
pub fn success(message: &str) {
    if is_json() {
        emit_json_line("success", json!({ "message": message }));
        return;
    }

    println!(
        "  {} {}",
        "✓".if_supports_color(Stream::Stdout, |t| t.green()),
        message
    );
}

/// Print an informational note.
pub fn note(message: &str) {
    if is_json() {
        emit_json_line("note", json!({ "message": message }));
        return;
    }

    println!("  {message}");
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!(
        "  {} {}",
        "×".if_supports_color(Stream::Stderr, |t| t.red()),
        message
    );
}

/// Print pre-rendered lines indented under the current section.
pub fn block(text: &str) {
    for line in text.lines() {
        println!("  {line}");
    }
}
