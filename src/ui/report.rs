//! Console rendering of an [`Analysis`].
//!
//! Every section is built as a `String` first so it can be tested without
//! capturing stdout.

use crate::core::analysis::{Analysis, YearReport};
use crate::core::coverage::{CoverageReport, MonthStatus};
use crate::core::reconcile::Reconciliation;
use crate::errors::AppResult;
use crate::models::DayCategory;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::Language;
use crate::utils::colors::{
    GREEN, GREY, RED, YELLOW, color_for_category, color_for_match, colorize_optional, paint,
};
use crate::utils::date::month_name;
use crate::utils::table::{Column, Table};
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub show_bookings: bool,
    pub language: Language,
    pub separator: char,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_bookings: false,
            language: Language::En,
            separator: '-',
        }
    }
}

pub fn print_json(analysis: &Analysis) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(analysis)?);
    Ok(())
}

pub fn print_report(analysis: &Analysis, opts: &ReportOptions) {
    let report = match analysis {
        Analysis::NoData { rows_read } => {
            info(format!("Read {rows_read} rows, parsed 0 time booking entries."));
            warning("No valid entries found in the file.");
            return;
        }
        Analysis::Report(r) => r,
    };

    info(format!(
        "Read {} rows, parsed {} time booking entries.",
        report.rows_read,
        report.records.len()
    ));

    header(format!(
        "Checking if all days of {} are present in the parsed bookings",
        report.coverage.year
    ));
    print!("{}", render_coverage(&report.coverage));
    if report.coverage.is_complete() {
        success("Complete year is included in the list.");
    } else {
        warning(format!(
            "Incomplete year. Missing {} days.",
            report.coverage.missing_count()
        ));
        print!("{}", render_missing_days(&report.coverage.missing_days, opts.language));
    }
    if !report.coverage.out_of_year.is_empty() {
        warning(format!(
            "{} booked days lie outside {} and are not counted as covered.",
            report.coverage.out_of_year.len(),
            report.coverage.year
        ));
    }

    header("Checking if all days of each month are present in the parsed bookings");
    print!("{}", render_months(&report.coverage, opts));

    header("Type analysis");
    print!("{}", render_categories(&report.reconciliation, opts));
    let rec = &report.reconciliation;
    if rec.matches {
        success("The number of categorized days matches the total days in the year.");
    } else {
        warning(mismatch_message(rec));
    }
    print!("{}", render_anomalies(rec));

    if opts.show_bookings {
        header("All parsed bookings");
        print!("{}", render_bookings(report, opts));
    }
}

pub fn render_coverage(cov: &CoverageReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total days in year: {}\n", cov.total_days));
    out.push_str(&format!("Days with bookings: {}\n", cov.covered_days));
    out.push_str(&format!("Days missing:       {}\n", cov.missing_count()));
    out
}

/// Missing days grouped by month, one line per month.
pub fn render_missing_days(days: &[NaiveDate], lang: Language) -> String {
    let mut out = String::new();
    let mut current: Option<u32> = None;

    for d in days {
        if current != Some(d.month()) {
            if current.is_some() {
                out.push('\n');
            }
            out.push_str(&format!("  {:<10} ", month_name(d.month(), lang)));
            current = Some(d.month());
        } else {
            out.push_str(", ");
        }
        out.push_str(&d.day().to_string());
    }
    if current.is_some() {
        out.push('\n');
    }
    out
}

fn status_cell(status: MonthStatus, covered: usize, total: usize) -> String {
    match status {
        MonthStatus::Complete => paint(status.label(), GREEN),
        MonthStatus::Partial => paint(&format!("{} ({covered}/{total} days)", status.label()), YELLOW),
        MonthStatus::NoData => paint(status.label(), GREY),
    }
}

pub fn render_months(cov: &CoverageReport, opts: &ReportOptions) -> String {
    let mut table = Table::new(vec![
        Column::left("Month"),
        Column::right("Days"),
        Column::left("Status"),
    ])
    .with_separator(opts.separator);

    for m in &cov.months {
        table.add_row(vec![
            month_name(m.month, opts.language).to_string(),
            format!("{}/{}", m.covered_days, m.total_days),
            status_cell(m.status, m.covered_days, m.total_days),
        ]);
    }

    table.render()
}

pub fn render_categories(rec: &Reconciliation, opts: &ReportOptions) -> String {
    let mut table = Table::new(vec![Column::left("Category"), Column::right("Days")])
        .with_separator(opts.separator);

    table.add_row(vec![
        "Days with only home-office bookings".to_string(),
        rec.home_office_days.to_string(),
    ]);
    table.add_row(vec![
        "Days with at least one office booking".to_string(),
        rec.office_days.to_string(),
    ]);
    table.add_row(vec![
        "Days without work".to_string(),
        rec.no_work_days.to_string(),
    ]);
    table.add_separator();
    table.add_row(vec![
        "Total days as checksum".to_string(),
        paint(&rec.categorized_days.to_string(), color_for_match(rec.matches)),
    ]);
    table.add_row(vec![
        "Total days in year".to_string(),
        rec.total_days.to_string(),
    ]);

    table.render()
}

/// Warning line for a reconciliation mismatch, with the signed gap
/// (positive = days missing from the categories).
pub fn mismatch_message(rec: &Reconciliation) -> String {
    format!(
        "The number of categorized days ({}) does NOT match the total days in the year ({})! Difference: {:+}",
        rec.categorized_days,
        rec.total_days,
        rec.difference()
    )
}

/// Days explaining a reconciliation mismatch.
pub fn render_anomalies(rec: &Reconciliation) -> String {
    let mut out = String::new();

    if !rec.uncategorized_days.is_empty() {
        out.push_str(&format!(
            "{}\n",
            paint(
                &format!("Booked days without category ({}):", rec.uncategorized_days.len()),
                RED
            )
        ));
        for d in &rec.uncategorized_days {
            out.push_str(&format!("  {}\n", d.format("%Y-%m-%d (%a)")));
        }
    }

    if !rec.overlaps.is_empty() {
        out.push_str(&format!(
            "{}\n",
            paint(
                &format!("Days counted in more than one category ({}):", rec.overlaps.len()),
                RED
            )
        ));
        for o in &rec.overlaps {
            let cats: Vec<&str> = o.categories.iter().map(|c| c.label()).collect();
            out.push_str(&format!("  {}: {}\n", o.date.format("%Y-%m-%d"), cats.join(" + ")));
        }
    }

    out
}

fn categories_cell(cats: &[DayCategory]) -> String {
    if cats.is_empty() {
        return paint(DayCategory::Uncategorized.code(), color_for_category(DayCategory::Uncategorized));
    }
    cats.iter()
        .map(|c| paint(c.code(), color_for_category(*c)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_bookings(report: &YearReport, opts: &ReportOptions) -> String {
    let mut table = Table::new(vec![
        Column::left("Day"),
        Column::left("Date"),
        Column::left("Start"),
        Column::left("End"),
        Column::left("Type"),
        Column::left("Rule violation"),
    ])
    .with_separator(opts.separator);

    let mut last_date: Option<NaiveDate> = None;
    for (b, cats) in report.bookings_by_day() {
        if last_date.is_some_and(|d| d != b.date) {
            table.add_separator();
        }
        last_date = Some(b.date);

        table.add_row(vec![
            categories_cell(&cats),
            b.date_str(),
            colorize_optional(&b.start_str()),
            colorize_optional(&b.end_str()),
            b.kind.trim().to_string(),
            b.violation_note.trim().to_string(),
        ]);
    }

    table.render()
}
