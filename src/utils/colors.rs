//! ANSI color helper utilities for terminal output.

use crate::models::DayCategory;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_category(cat: DayCategory) -> &'static str {
    match cat {
        DayCategory::Office => BLUE,
        DayCategory::HomeOffice => CYAN,
        DayCategory::NoWork => GREY,
        DayCategory::Uncategorized => MAGENTA,
    }
}

/// Green when two counts agree, red otherwise.
pub fn color_for_match(matches: bool) -> &'static str {
    if matches { GREEN } else { RED }
}

/// Greys out empty values and the `--:--` time placeholder.
///
/// Example:
/// `colorize_optional("--:--")` → "<grey>--:--<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
