//! Day classification.
//!
//! Each booking is tested against three predicates (office, home office,
//! no work). A day belongs to a category when at least one of its bookings
//! matches. Office presence wins over home office: the legal home-office
//! days are the home-office days minus the office days.
//!
//! The violation note only matters for no-work days. A timed booking with
//! a note still counts as office or home office; this asymmetry mirrors the
//! export's business rule and is kept as is.

use crate::models::{BookingRecord, DayCategory};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Default label of mobile work bookings in Interflex exports.
pub const DEFAULT_HOME_OFFICE_LABEL: &str = "mobiles arbeiten";

pub type DateSet = BTreeSet<NaiveDate>;

pub fn is_office_booking(rec: &BookingRecord) -> bool {
    rec.is_timed() && rec.kind_is_empty()
}

pub fn is_home_office_booking(rec: &BookingRecord, label: &str) -> bool {
    rec.is_timed() && rec.kind.trim().to_lowercase() == label.trim().to_lowercase()
}

pub fn is_no_work_booking(rec: &BookingRecord) -> bool {
    rec.is_untimed() && rec.kind_is_empty() && !rec.has_violation()
}

/// The per-day category sets of one export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayClassification {
    /// Every distinct date with at least one booking.
    pub booked: DateSet,
    /// Days with at least one office booking.
    pub office: DateSet,
    /// Days with a home-office booking and no office booking.
    pub home_office: DateSet,
    /// Days with at least one no-work booking.
    pub no_work: DateSet,
}

/// A day that landed in more than one category set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub date: NaiveDate,
    pub categories: Vec<DayCategory>,
}

impl DayClassification {
    pub fn set_of(&self, cat: DayCategory) -> Option<&DateSet> {
        match cat {
            DayCategory::Office => Some(&self.office),
            DayCategory::HomeOffice => Some(&self.home_office),
            DayCategory::NoWork => Some(&self.no_work),
            DayCategory::Uncategorized => None,
        }
    }

    /// All category sets a day belongs to, in priority order.
    pub fn categories_of(&self, date: &NaiveDate) -> Vec<DayCategory> {
        DayCategory::priority_order()
            .into_iter()
            .filter(|cat| self.set_of(*cat).is_some_and(|s| s.contains(date)))
            .collect()
    }

    /// Booked days that match none of the three categories.
    pub fn uncategorized(&self) -> DateSet {
        self.booked
            .iter()
            .filter(|d| {
                !self.office.contains(d) && !self.home_office.contains(d) && !self.no_work.contains(d)
            })
            .copied()
            .collect()
    }

    /// Days in more than one category set. Office and home office never
    /// overlap, so these are always a working day that also has a clean
    /// no-work booking.
    pub fn overlaps(&self) -> Vec<Overlap> {
        self.office
            .union(&self.home_office)
            .filter(|d| self.no_work.contains(d))
            .map(|d| Overlap {
                date: *d,
                categories: self.categories_of(d),
            })
            .collect()
    }
}

/// Classify the days of a booking set.
pub fn classify(records: &[BookingRecord], home_office_label: &str) -> DayClassification {
    let booked: DateSet = records.iter().map(|r| r.date).collect();

    let office: DateSet = records
        .iter()
        .filter(|r| is_office_booking(r))
        .map(|r| r.date)
        .collect();

    let home_office_any: DateSet = records
        .iter()
        .filter(|r| is_home_office_booking(r, home_office_label))
        .map(|r| r.date)
        .collect();

    let no_work: DateSet = records
        .iter()
        .filter(|r| is_no_work_booking(r))
        .map(|r| r.date)
        .collect();

    let home_office: DateSet = home_office_any.difference(&office).copied().collect();

    debug!(
        booked = booked.len(),
        office = office.len(),
        home_office = home_office.len(),
        no_work = no_work.len(),
        "days classified"
    );

    DayClassification {
        booked,
        office,
        home_office,
        no_work,
    }
}
