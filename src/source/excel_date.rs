//! Excel serial dates → text.
//!
//! Workbook cells formatted as date or time arrive as serial numbers
//! (days since 1899-12-30, fraction = time of day). They are turned back
//! into the text shapes the normalizer parses.

use chrono::{Duration, NaiveDate, NaiveDateTime};

fn excel_epoch() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)
}

/// Convert a 1900-system serial into a date-time, rounded to the second.
pub(crate) fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let secs = (serial * 86400.0).round() as i64;
    excel_epoch()?.checked_add_signed(Duration::seconds(secs))
}

/// Text form of a serial:
/// - `< 1.0` → time only (`HH:MM:SS`)
/// - whole days → `YYYY-MM-DD`
/// - otherwise → `YYYY-MM-DD HH:MM:SS`
pub(crate) fn excel_serial_to_text(serial: f64) -> Option<String> {
    let dt = excel_serial_to_datetime(serial)?;

    let text = if serial < 1.0 {
        dt.format("%H:%M:%S").to_string()
    } else if serial.fract().abs() < 1e-9 {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    };
    Some(text)
}
