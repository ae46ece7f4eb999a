//! Delimited text row source.
//!
//! Rows are read as bytes and decoded lossily, so exports saved in a
//! legacy code page still yield their dates and times.

use crate::config::Columns;
use crate::errors::AppResult;
use crate::models::RawRow;
use crate::source::pick_columns;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

pub fn read_rows(path: &Path, cols: &Columns, delimiter: u8, has_header: bool) -> AppResult<Vec<RawRow>> {
    let file = std::fs::File::open(path)?;
    read_from(file, cols, delimiter, has_header)
}

pub fn read_from<R: Read>(
    reader: R,
    cols: &Columns,
    delimiter: u8,
    has_header: bool,
) -> AppResult<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(has_header)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, rec) in rdr.byte_records().enumerate() {
        let rec = rec?;
        let line = rec
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 1);
        rows.push(pick_columns(line, cols, |c| {
            rec.get(c)
                .map(|b| String::from_utf8_lossy(b).into_owned())
        }));
    }

    Ok(rows)
}
