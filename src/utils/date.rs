//! Calendar helpers: tolerant date parsing, leap years, day enumeration
//! and month names.

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// Whole-cell shapes: optional weekday abbreviation, the date, optional time.
static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\p{L}{2,3}\.?,?\s+)?(\d{4})-(\d{1,2})-(\d{1,2})(?:[ T]\d{1,2}:\d{2}(?::\d{2}(?:\.\d+)?)?)?$")
        .expect("valid ISO date regex")
});

static EU_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\p{L}{2,3}\.?,?\s+)?(\d{1,2})[./](\d{1,2})[./](\d{4}|\d{2})(?:\s+\d{1,2}:\d{2}(?::\d{2})?)?$")
        .expect("valid dotted date regex")
});

/// Language used when displaying month names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Parse a date cell. The whole (trimmed) cell must be a date.
///
/// Supported shapes:
/// - `YYYY-MM-DD`, optionally followed by ` HH:MM[:SS]` or `THH:MM[:SS]`
/// - `DD.MM.YYYY`, `DD.MM.YY`, `DD/MM/YYYY`, optionally followed by a time
///
/// A leading weekday abbreviation (`Mo 01.01.2024`, `Thu, 2024-03-07`) is
/// allowed; any other text makes the cell unparsable.
/// Two-digit years are mapped to 20YY.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Some(c) = ISO_DATE.captures(s) {
        let y: i32 = c[1].parse().ok()?;
        let m: u32 = c[2].parse().ok()?;
        let d: u32 = c[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(y, m, d);
    }

    if let Some(c) = EU_DATE.captures(s) {
        let d: u32 = c[1].parse().ok()?;
        let m: u32 = c[2].parse().ok()?;
        let mut y: i32 = c[3].parse().ok()?;
        if c[3].len() == 2 {
            y += 2000;
        }
        return NaiveDate::from_ymd_opt(y, m, d);
    }

    None
}

/// Cell variant of [`parse_date`].
pub fn parse_date_cell(cell: Option<&str>) -> Option<NaiveDate> {
    cell.and_then(parse_date)
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_year(year: i32) -> usize {
    if is_leap_year(year) { 366 } else { 365 }
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let Some(mut d) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return out;
    };

    while d.month() == month && d.year() == year {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

/// Every date from January 1 to December 31 of `year`, in order.
pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    (1..=12)
        .flat_map(|month| all_days_of_month(year, month))
        .collect()
}

/// Month name for display; `month` is 1-based.
pub fn month_name(month: u32, lang: Language) -> &'static str {
    let names = match lang {
        Language::En => &MONTHS_EN,
        Language::De => &MONTHS_DE,
    };
    names
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("?")
}
