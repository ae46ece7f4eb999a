//! Cross-check of the category counts against the length of the year.
//!
//! A mismatch is a warning in the report, never an error.

use crate::core::classifier::{DayClassification, Overlap};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub office_days: usize,
    pub home_office_days: usize,
    pub no_work_days: usize,
    pub categorized_days: usize,
    pub total_days: usize,
    pub matches: bool,
    /// Booked days in none of the three categories.
    pub uncategorized_days: Vec<NaiveDate>,
    /// Days counted in more than one category.
    pub overlaps: Vec<Overlap>,
}

impl Reconciliation {
    /// Signed gap between the year length and the categorized days.
    pub fn difference(&self) -> i64 {
        self.total_days as i64 - self.categorized_days as i64
    }
}

pub fn reconcile(classes: &DayClassification, total_days: usize) -> Reconciliation {
    let office_days = classes.office.len();
    let home_office_days = classes.home_office.len();
    let no_work_days = classes.no_work.len();
    let categorized_days = office_days + home_office_days + no_work_days;

    Reconciliation {
        office_days,
        home_office_days,
        no_work_days,
        categorized_days,
        total_days,
        matches: categorized_days == total_days,
        uncategorized_days: classes.uncategorized().into_iter().collect(),
        overlaps: classes.overlaps(),
    }
}
