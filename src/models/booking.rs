use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One normalized booking of the export.
///
/// `date` is always resolved (carried forward when the row had none);
/// start and end times are independent optionals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRecord {
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub kind: String,
    pub violation_note: String,
}

impl BookingRecord {
    pub fn new(
        date: NaiveDate,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
        kind: &str,
        violation_note: &str,
    ) -> Self {
        Self {
            date,
            start_time,
            end_time,
            kind: kind.to_string(),
            violation_note: violation_note.to_string(),
        }
    }

    /// Both start and end are present: a working booking.
    pub fn is_timed(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }

    /// Neither start nor end is present.
    pub fn is_untimed(&self) -> bool {
        self.start_time.is_none() && self.end_time.is_none()
    }

    pub fn kind_is_empty(&self) -> bool {
        self.kind.trim().is_empty()
    }

    pub fn has_violation(&self) -> bool {
        !self.violation_note.trim().is_empty()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        fmt_time(self.start_time)
    }

    pub fn end_str(&self) -> String {
        fmt_time(self.end_time)
    }
}

fn fmt_time(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
