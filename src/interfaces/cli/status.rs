// Status line texts shown after each user action

use std::fmt::Display;
use std::path::Path;

use crate::domain::theme::hex_to_rgb;

pub fn loaded(rows: usize) -> String {
    format!("All data loaded: {} rows", rows)
}

pub fn load_failed(err: &impl Display) -> String {
    format!("Failed to load: {}", err)
}

/// Shows only the last path component, as the destination label does.
pub fn destination_selected(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("Selected target path: {}", name)
}

pub fn cleared() -> &'static str {
    "All content cleared"
}

pub fn created(count: usize) -> String {
    format!("Successfully created {} folder(s)", count)
}

pub fn failed(err: &impl Display) -> String {
    format!("Error: {}", err)
}

/// Wraps `text` in a 24-bit ANSI foreground color. An unparseable color
/// leaves the text plain.
pub fn paint(text: &str, color: &str) -> String {
    match hex_to_rgb(color) {
        Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text),
        None => text.to_string(),
    }
}
