//! Time utilities: tolerant parsing of booking time cells.

use chrono::NaiveTime;

/// Characters that exports use as "no time" placeholders around a cell value.
pub const TIME_PLACEHOLDERS: [char; 3] = [' ', '-', '*'];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Strip placeholder characters from both ends of a time cell.
pub fn trim_placeholders(t: &str) -> &str {
    t.trim_matches(&TIME_PLACEHOLDERS[..])
}

/// Parse a time of day after stripping placeholders.
///
/// Accepts `H:MM`, `HH:MM` and `HH:MM:SS`. Anything else, including an
/// empty or placeholder-only cell, is `None`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = trim_placeholders(t);
    if t.is_empty() {
        return None;
    }
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

/// Cell variant of [`parse_time`].
pub fn parse_time_cell(cell: Option<&str>) -> Option<NaiveTime> {
    cell.and_then(parse_time)
}
