//! End-to-end analysis of one export:
//! rows → bookings → day categories → coverage + reconciliation.

use crate::core::classifier::{DayClassification, classify};
use crate::core::coverage::{CoverageReport, check_coverage, target_year};
use crate::core::normalizer::normalize;
use crate::core::reconcile::{Reconciliation, reconcile};
use crate::models::{BookingRecord, DayCategory, RawRow};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize)]
pub struct YearReport {
    pub rows_read: usize,
    pub records: Vec<BookingRecord>,
    pub classification: DayClassification,
    pub coverage: CoverageReport,
    pub reconciliation: Reconciliation,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Analysis {
    /// No row produced a booking; nothing else was computed.
    NoData { rows_read: usize },
    Report(Box<YearReport>),
}

impl YearReport {
    /// Bookings ordered by date then start time, each with the categories
    /// of its day (empty = uncategorized).
    pub fn bookings_by_day(&self) -> Vec<(&BookingRecord, Vec<DayCategory>)> {
        let mut sorted: Vec<&BookingRecord> = self.records.iter().collect();
        sorted.sort_by_key(|r| (r.date, r.start_time));
        sorted
            .into_iter()
            .map(|r| (r, self.classification.categories_of(&r.date)))
            .collect()
    }
}

pub fn analyze(rows: &[RawRow], home_office_label: &str) -> Analysis {
    let records = normalize(rows);
    info!(rows = rows.len(), records = records.len(), "bookings parsed");

    let classification = classify(&records, home_office_label);
    let Some(year) = target_year(&classification.booked) else {
        return Analysis::NoData {
            rows_read: rows.len(),
        };
    };

    let coverage = check_coverage(year, &classification.booked);
    debug!(
        year,
        covered = coverage.covered_days,
        missing = coverage.missing_count(),
        "coverage checked"
    );

    let reconciliation = reconcile(&classification, coverage.total_days);
    debug!(
        categorized = reconciliation.categorized_days,
        matches = reconciliation.matches,
        "categories reconciled"
    );

    Analysis::Report(Box::new(YearReport {
        rows_read: rows.len(),
        records,
        classification,
        coverage,
        reconciliation,
    }))
}
