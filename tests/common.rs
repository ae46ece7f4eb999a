#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Datelike, NaiveDate, Weekday};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::{Path, PathBuf};

pub fn rwd() -> Command {
    cargo_bin_cmd!("rworkdays")
}

/// One booking line in the default journal layout
/// (B = date, E = start, G = end, J = type, L = rule violation).
pub struct Line<'a> {
    pub date: &'a str,
    pub start: &'a str,
    pub end: &'a str,
    pub kind: &'a str,
    pub violation: &'a str,
}

pub fn line<'a>(date: &'a str, start: &'a str, end: &'a str, kind: &'a str, violation: &'a str) -> Line<'a> {
    Line {
        date,
        start,
        end,
        kind,
        violation,
    }
}

fn journal_cells(l: &Line) -> Vec<String> {
    let mut cells = vec![String::new(); 12];
    cells[1] = l.date.to_string();
    cells[4] = l.start.to_string();
    cells[6] = l.end.to_string();
    cells[9] = l.kind.to_string();
    cells[11] = l.violation.to_string();
    cells
}

/// Write a semicolon separated journal export.
pub fn write_csv(dir: &Path, name: &str, lines: &[Line]) -> PathBuf {
    let path = dir.join(name);
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(&path)
        .expect("create csv");
    for l in lines {
        wtr.write_record(journal_cells(l)).expect("write csv row");
    }
    wtr.flush().expect("flush csv");
    path
}

/// Write a journal workbook with text cells only.
pub fn write_xlsx(dir: &Path, name: &str, sheet: &str, lines: &[Line]) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name(sheet).expect("sheet name");
    for (r, l) in lines.iter().enumerate() {
        for (c, cell) in journal_cells(l).iter().enumerate() {
            if !cell.is_empty() {
                ws.write_string(r as u32, c as u16, cell).expect("write cell");
            }
        }
    }
    workbook.save(&path).expect("save xlsx");
    path
}

/// Journal with one clean booking per day: Mon–Thu office, Fri home office,
/// weekends free.
pub fn full_year(year: i32) -> Vec<(String, &'static str, &'static str, &'static str)> {
    let mut d = NaiveDate::from_ymd_opt(year, 1, 1).expect("jan 1");
    let mut out = Vec::new();
    while d.year() == year {
        let date = d.format("%d.%m.%Y").to_string();
        let entry = match d.weekday() {
            Weekday::Sat | Weekday::Sun => (date, "", "", ""),
            Weekday::Fri => (date, "08:00", "14:00", "mobiles arbeiten"),
            _ => (date, "07:30", "16:00", ""),
        };
        out.push(entry);
        d = d.succ_opt().expect("next day");
    }
    out
}

pub fn write_full_year_csv(dir: &Path, year: i32) -> PathBuf {
    let days = full_year(year);
    let lines: Vec<Line> = days
        .iter()
        .map(|(date, s, e, k)| line(date, s, e, k, ""))
        .collect();
    write_csv(dir, &format!("journal_{year}.csv"), &lines)
}

/// Workbook with native date and time cells (dates formatted dd.mm.yyyy,
/// times hh:mm), the way the journal export produces them.
pub fn write_native_xlsx(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    let date_fmt = Format::new().set_num_format("dd.mm.yyyy");
    let time_fmt = Format::new().set_num_format("hh:mm");

    ws.write_string(0, 1, "Datum").expect("header");
    ws.write_string(0, 4, "Kommt").expect("header");
    ws.write_string(0, 6, "Geht").expect("header");

    // 2024-01-02: office in the morning, home office in the afternoon
    let d = ExcelDateTime::from_ymd(2024, 1, 2).expect("date");
    ws.write_datetime_with_format(1, 1, &d, &date_fmt).expect("date cell");
    ws.write_datetime_with_format(1, 4, &ExcelDateTime::from_hms(8, 0, 0).expect("t"), &time_fmt)
        .expect("time cell");
    ws.write_datetime_with_format(1, 6, &ExcelDateTime::from_hms(12, 0, 0).expect("t"), &time_fmt)
        .expect("time cell");
    ws.write_datetime_with_format(2, 4, &ExcelDateTime::from_hms(12, 30, 0).expect("t"), &time_fmt)
        .expect("time cell");
    ws.write_datetime_with_format(2, 6, &ExcelDateTime::from_hms(16, 45, 0).expect("t"), &time_fmt)
        .expect("time cell");
    ws.write_string(2, 9, "Mobiles Arbeiten").expect("kind");

    // 2024-01-03: home office only
    let d = ExcelDateTime::from_ymd(2024, 1, 3).expect("date");
    ws.write_datetime_with_format(3, 1, &d, &date_fmt).expect("date cell");
    ws.write_datetime_with_format(3, 4, &ExcelDateTime::from_hms(9, 0, 0).expect("t"), &time_fmt)
        .expect("time cell");
    ws.write_datetime_with_format(3, 6, &ExcelDateTime::from_hms(17, 0, 0).expect("t"), &time_fmt)
        .expect("time cell");
    ws.write_string(3, 9, "mobiles arbeiten").expect("kind");

    workbook.save(&path).expect("save xlsx");
    path
}
