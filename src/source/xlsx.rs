//! Workbook row source (xlsx, xlsm, xls, xlsb, ods) via calamine.

use crate::config::Columns;
use crate::errors::{AppError, AppResult};
use crate::models::RawRow;
use crate::source::excel_date::excel_serial_to_text;
use crate::source::pick_columns;
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::io::{Read, Seek};
use std::path::Path;
use tracing::debug;

/// Read the rows of one sheet. `sheet` is a sheet name, a 0-based index,
/// or empty for the first sheet.
pub fn read_rows(path: &Path, cols: &Columns, sheet: &str) -> AppResult<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = select_sheet(&mut workbook, sheet)?;
    Ok(range_to_rows(&range, cols))
}

fn select_sheet<RS: Read + Seek>(workbook: &mut Sheets<RS>, sheet: &str) -> AppResult<Range<Data>> {
    let sheet = sheet.trim();
    let names = workbook.sheet_names();
    debug!(sheets = ?names, requested = sheet, "selecting sheet");

    if sheet.is_empty() {
        return workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::SheetNotFound("workbook has no sheets".to_string()))?
            .map_err(AppError::from);
    }

    if names.iter().any(|n| n == sheet) {
        return Ok(workbook.worksheet_range(sheet)?);
    }

    if let Ok(idx) = sheet.parse::<usize>() {
        return workbook
            .worksheet_range_at(idx)
            .ok_or_else(|| AppError::SheetNotFound(format!("#{idx}")))?
            .map_err(AppError::from);
    }

    Err(AppError::SheetNotFound(format!(
        "{sheet} (available: {})",
        names.join(", ")
    )))
}

/// Convert a sheet range into rows. Line numbers are 1-based sheet rows,
/// so they match what the user sees in the spreadsheet application.
pub(crate) fn range_to_rows(range: &Range<Data>, cols: &Columns) -> Vec<RawRow> {
    let (first_row, first_col) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    range
        .rows()
        .enumerate()
        .map(|(i, cells)| {
            pick_columns(first_row + i + 1, cols, |abs_col| {
                abs_col
                    .checked_sub(first_col)
                    .and_then(|c| cells.get(c))
                    .and_then(cell_text)
            })
        })
        .collect()
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                Some(format!("{}", *n as i64))
            } else {
                Some(format!("{n}"))
            }
        }
        Data::Int(n) => Some(n.to_string()),
        Data::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::Error(_) => None,
        Data::DateTime(dt) => excel_serial_to_text(dt.as_f64()),
        Data::DateTimeIso(s) => Some(s.clone()),
        Data::DurationIso(s) => Some(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_offset_is_respected() {
        // Data starts at B3 (row 2, col 1, 0-based).
        let mut range: Range<Data> = Range::new((2, 1), (3, 11));
        range.set_value((2, 1), Data::String("Mo 01.01.2024".into()));
        range.set_value((2, 4), Data::String("08:00".into()));
        range.set_value((2, 6), Data::String("16:00".into()));
        range.set_value((3, 4), Data::String("* 17:00".into()));
        range.set_value((3, 11), Data::String("Pause".into()));

        let rows = range_to_rows(&range, &Columns::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 3);
        assert_eq!(rows[0].date.as_deref(), Some("Mo 01.01.2024"));
        assert_eq!(rows[0].start.as_deref(), Some("08:00"));
        assert_eq!(rows[0].end.as_deref(), Some("16:00"));
        assert_eq!(rows[1].line, 4);
        assert_eq!(rows[1].date, None);
        assert_eq!(rows[1].start.as_deref(), Some("* 17:00"));
        assert_eq!(rows[1].violation.as_deref(), Some("Pause"));
    }

    #[test]
    fn numeric_cells_become_text() {
        assert_eq!(cell_text(&Data::Float(12.0)).as_deref(), Some("12"));
        assert_eq!(cell_text(&Data::Float(1.5)).as_deref(), Some("1.5"));
        assert_eq!(cell_text(&Data::Int(7)).as_deref(), Some("7"));
        assert_eq!(cell_text(&Data::Empty), None);
    }
}
