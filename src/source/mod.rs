//! Row sources: read the export file into [`RawRow`]s.
//!
//! Workbooks (`xlsx`, `xlsm`, `xls`, `xlsb`, `ods`) go through calamine,
//! text exports (`csv`, `txt`) through the csv reader. Only the five
//! configured columns are picked up; everything else in the row is ignored.

pub mod csv;
pub mod excel_date;
pub mod xlsx;

use crate::config::{Columns, Config};
use crate::errors::{AppError, AppResult};
use crate::models::RawRow;
use crate::models::raw_row::non_empty;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Workbook,
    Csv,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Ok(SourceKind::Workbook),
            "csv" | "txt" => Ok(SourceKind::Csv),
            "" => Err(AppError::UnsupportedFormat(format!(
                "{} (no file extension)",
                path.display()
            ))),
            other => Err(AppError::UnsupportedFormat(format!(".{other}"))),
        }
    }
}

/// Read every row of the export in file order.
///
/// `sheet` overrides the configured sheet for workbooks; CSV files ignore it.
pub fn load_rows(path: &Path, cfg: &Config, sheet: Option<&str>) -> AppResult<Vec<RawRow>> {
    if !path.is_file() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let rows = match SourceKind::from_path(path)? {
        SourceKind::Workbook => {
            let sheet = sheet.unwrap_or(cfg.sheet.as_str());
            xlsx::read_rows(path, &cfg.columns, sheet)?
        }
        SourceKind::Csv => csv::read_rows(path, &cfg.columns, cfg.delimiter()?, cfg.has_header)?,
    };

    info!(path = %path.display(), rows = rows.len(), "export read");
    Ok(rows)
}

/// Build a row from positional cells; `cell(i)` returns the 0-based cell `i`.
pub(crate) fn pick_columns<F>(line: usize, cols: &Columns, cell: F) -> RawRow
where
    F: Fn(usize) -> Option<String>,
{
    let get = |pos: usize| pos.checked_sub(1).and_then(&cell).and_then(|s| non_empty(&s));
    RawRow {
        line,
        date: get(cols.date),
        start: get(cols.start),
        end: get(cols.end),
        kind: get(cols.kind),
        violation: get(cols.violation),
    }
}
