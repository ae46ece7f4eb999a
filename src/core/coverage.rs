//! Year coverage: which calendar days of the target year have bookings.
//!
//! Presence based only; categories play no role here.

use crate::core::classifier::DateSet;
use crate::utils::date::{all_days_of_month, all_days_of_year, days_in_year};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonthStatus {
    Complete,
    Partial,
    NoData,
}

impl MonthStatus {
    pub fn from_counts(covered: usize, total: usize) -> Self {
        if covered == total {
            MonthStatus::Complete
        } else if covered > 0 {
            MonthStatus::Partial
        } else {
            MonthStatus::NoData
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MonthStatus::Complete => "Complete",
            MonthStatus::Partial => "Partial",
            MonthStatus::NoData => "No data",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCoverage {
    pub month: u32,
    pub covered_days: usize,
    pub total_days: usize,
    pub status: MonthStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub year: i32,
    pub total_days: usize,
    pub covered_days: usize,
    pub missing_days: Vec<NaiveDate>,
    pub months: Vec<MonthCoverage>,
    /// Booked dates outside the target year; never counted as covered.
    pub out_of_year: Vec<NaiveDate>,
}

impl CoverageReport {
    pub fn missing_count(&self) -> usize {
        self.missing_days.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_days.is_empty()
    }
}

/// Year of the earliest booked date, if any.
pub fn target_year(booked: &DateSet) -> Option<i32> {
    booked.first().map(|d| d.year())
}

/// Check every day of `year` against the booked dates.
pub fn check_coverage(year: i32, booked: &DateSet) -> CoverageReport {
    let total_days = days_in_year(year);
    let all_days = all_days_of_year(year);

    let missing_days: Vec<NaiveDate> = all_days
        .into_iter()
        .filter(|d| !booked.contains(d))
        .collect();

    let months = (1..=12)
        .map(|month| {
            let days = all_days_of_month(year, month);
            let covered = days.iter().filter(|d| booked.contains(d)).count();
            MonthCoverage {
                month,
                covered_days: covered,
                total_days: days.len(),
                status: MonthStatus::from_counts(covered, days.len()),
            }
        })
        .collect();

    let out_of_year = booked.iter().filter(|d| d.year() != year).copied().collect();

    CoverageReport {
        year,
        total_days,
        covered_days: total_days - missing_days.len(),
        missing_days,
        months,
        out_of_year,
    }
}
