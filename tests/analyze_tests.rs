use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{line, rwd, write_csv, write_full_year_csv, write_native_xlsx, write_xlsx};

#[test]
fn test_full_year_is_complete_and_reconciled() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_full_year_csv(dir.path(), 2023);

    rwd()
        .args(["--test", "analyze"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("parsed 365 time booking entries."))
        .stdout(contains("Total days in year: 365"))
        .stdout(contains("Complete year is included in the list."))
        .stdout(contains("December"))
        .stdout(contains("Partial").not())
        .stdout(contains("The number of categorized days matches the total days in the year."));
}

#[test]
fn test_gaps_and_violations_are_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "gaps.csv",
        &[
            line("01.01.2024", "", "", "", ""),
            line("02.01.2024", "08:00", "16:00", "", ""),
            line("03.01.2024", "", "", "", "late arrival"),
        ],
    );

    rwd()
        .args(["--test", "analyze"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Incomplete year. Missing 363 days."))
        .stdout(contains("Partial (3/31 days)"))
        .stdout(contains("No data"))
        .stdout(contains("does NOT match the total days in the year (366)! Difference: +364"))
        .stdout(contains("Booked days without category (1):"))
        .stdout(contains("2024-01-03"));
}

#[test]
fn test_file_without_dates_reports_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "empty.csv",
        &[
            line("Datum", "Kommt", "Geht", "Typ", "Regelverletzung"),
            line("", "08:00", "16:00", "", ""),
        ],
    );

    rwd()
        .args(["--test", "analyze"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("No valid entries found in the file."))
        .stdout(contains("Type analysis").not());
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.xlsx");

    rwd()
        .args(["--test", "analyze"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("File not found"));
}

#[test]
fn test_unsupported_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.pdf");
    std::fs::write(&path, b"%PDF-1.4").unwrap();

    rwd()
        .args(["--test", "analyze"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Unsupported input format"));
}

#[test]
fn test_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "json.csv",
        &[
            line("04.03.2024", "09:00", "17:00", "", ""),
            line("", "17:30", "19:00", "mobiles arbeiten", ""),
            line("05.03.2024", "08:00", "16:00", "Mobiles Arbeiten", ""),
            line("06.03.2024", "", "", "", ""),
        ],
    );

    let out = rwd()
        .args(["--test", "analyze", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["status"], "report");
    assert_eq!(v["records"].as_array().unwrap().len(), 4);
    assert_eq!(v["coverage"]["year"], 2024);
    assert_eq!(v["coverage"]["covered_days"], 3);
    assert_eq!(v["coverage"]["months"][2]["status"], "Partial");
    assert_eq!(v["reconciliation"]["office_days"], 1);
    assert_eq!(v["reconciliation"]["home_office_days"], 1);
    assert_eq!(v["reconciliation"]["no_work_days"], 1);
    assert_eq!(v["reconciliation"]["matches"], false);
    assert_eq!(v["classification"]["office"][0], "2024-03-04");
    assert_eq!(v["classification"]["home_office"][0], "2024-03-05");
}

#[test]
fn test_json_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "none.csv", &[line("", "", "", "Summe", "")]);

    let out = rwd()
        .args(["--test", "analyze", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["status"], "no_data");
    assert_eq!(v["rows_read"], 1);
}

#[test]
fn test_xlsx_text_cells_and_bookings_listing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_xlsx(
        dir.path(),
        "journal.xlsx",
        "Monatsjournal",
        &[
            line("Mo 01.01.2024", "", "", "", ""),
            line("Di 02.01.2024", "* 08:00", "12:00 -", "", ""),
            line("", "12:30", "16:00", "mobiles arbeiten", ""),
        ],
    );

    rwd()
        .args(["--test", "analyze", "--bookings"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("parsed 3 time booking entries."))
        .stdout(contains("All parsed bookings"))
        .stdout(contains("2024-01-02"))
        .stdout(contains("12:30"))
        .stdout(contains("mobiles arbeiten"));
}

#[test]
fn test_xlsx_native_date_and_time_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_native_xlsx(dir.path(), "native.xlsx");

    let out = rwd()
        .args(["--test", "analyze", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let records = v["records"].as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["date"], "2024-01-02");
    assert_eq!(records[0]["start_time"], "08:00:00");
    assert_eq!(records[1]["date"], "2024-01-02");
    assert_eq!(records[1]["end_time"], "16:45:00");
    assert_eq!(v["reconciliation"]["office_days"], 1);
    assert_eq!(v["reconciliation"]["home_office_days"], 1);
    assert_eq!(v["classification"]["home_office"][0], "2024-01-03");
}

#[test]
fn test_sheet_selection() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_xlsx(
        dir.path(),
        "named.xlsx",
        "Journal",
        &[line("2024-06-03", "08:00", "16:00", "", "")],
    );

    rwd()
        .args(["--test", "analyze", "--sheet", "Journal"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("parsed 1 time booking entries."));

    rwd()
        .args(["--test", "analyze", "--sheet", "0"])
        .arg(&path)
        .assert()
        .success();

    rwd()
        .args(["--test", "analyze", "--sheet", "Overview"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Sheet not found: Overview"));
}

#[test]
fn test_label_flag_and_german_months() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "label.csv",
        &[line("01.03.2024", "08:00", "16:00", "Homeoffice", "")],
    );

    let out = rwd()
        .args(["--test", "analyze", "--json", "--label", "homeoffice"])
        .arg(&path)
        .output()
        .unwrap();
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["reconciliation"]["home_office_days"], 1);

    rwd()
        .args(["--test", "analyze", "--lang", "de"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("März"))
        .stdout(contains("Dezember"));
}

#[test]
fn test_bookings_and_json_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_full_year_csv(dir.path(), 2023);

    rwd()
        .args(["--test", "analyze", "--json", "--bookings"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn test_title_and_footer_dates_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "footer.csv",
        &[
            line("Monatsjournal 01.01.2024 - 31.01.2024", "", "", "", ""),
            line("02.01.2024", "08:00", "16:00", "", ""),
            line("", "16:30", "17:00", "", ""),
            line("Druckdatum 15.02.2025", "", "", "", ""),
        ],
    );

    let out = rwd()
        .args(["--test", "analyze", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["records"].as_array().unwrap().len(), 2);
    assert_eq!(v["coverage"]["year"], 2024);
    assert_eq!(v["coverage"]["out_of_year"].as_array().unwrap().len(), 0);
    assert_eq!(v["reconciliation"]["no_work_days"], 0);
    assert_eq!(v["reconciliation"]["office_days"], 1);
}

#[test]
fn test_diagnostics_are_plain_when_stderr_is_redirected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "plain.csv",
        &[line("02.01.2024", "08:00", "16:00", "", "")],
    );

    rwd()
        .env_remove("RUST_LOG")
        .args(["--test", "-vv", "analyze", "--json"])
        .arg(&path)
        .assert()
        .success()
        .stderr(contains("rows normalized"))
        .stderr(contains("\x1b[").not());
}
