//! Turns raw export rows into [`BookingRecord`]s.
//!
//! Exports only print the date on the first row of a day; the rows that
//! follow inherit it. Normalization is therefore a fold over the rows in
//! file order with the last seen date as state.

use crate::models::{BookingRecord, RawRow};
use crate::utils::date::parse_date_cell;
use crate::utils::time::parse_time_cell;
use chrono::NaiveDate;
use tracing::{debug, trace};

/// Carry-forward state: the most recent date seen in the date column.
pub type CarryDate = Option<NaiveDate>;

/// Process one row.
///
/// Returns the updated state and, when the row qualifies, the booking it
/// contributes. A row qualifies when it parsed a date or a start time and
/// some date is known; the record always carries the current state date.
pub fn step(state: CarryDate, row: &RawRow) -> (CarryDate, Option<BookingRecord>) {
    let row_date = parse_date_cell(row.date.as_deref());
    let start_time = parse_time_cell(row.start.as_deref());
    let end_time = parse_time_cell(row.end.as_deref());

    let state = row_date.or(state);

    let qualifies = row_date.is_some() || start_time.is_some();
    let record = match state {
        Some(date) if qualifies => Some(BookingRecord::new(
            date,
            start_time,
            end_time,
            row.kind.as_deref().unwrap_or(""),
            row.violation.as_deref().unwrap_or(""),
        )),
        _ => {
            trace!(line = row.line, "row skipped");
            None
        }
    };

    (state, record)
}

/// Normalize all rows, preserving their order.
pub fn normalize(rows: &[RawRow]) -> Vec<BookingRecord> {
    let (_, records) = rows.iter().fold(
        (None, Vec::with_capacity(rows.len())),
        |(state, mut out), row| {
            let (state, record) = step(state, row);
            out.extend(record);
            (state, out)
        },
    );

    debug!(rows = rows.len(), records = records.len(), "rows normalized");
    records
}
