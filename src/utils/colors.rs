/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Returns GREY when the field is empty (None or "" or "-"),
/// and RESET otherwise. Used for the optional Gender / Birth Year
/// cells of the raw-data table.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() && v.as_ref() != "-" => RESET,
        _ => GREY,
    }
}

/// Ritorna formattazione colorata di un valore opzionale.
///
/// Esempio:
/// `colorize_optional("-")` → "<grey>-<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
