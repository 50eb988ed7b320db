//! End-to-end report runs over files on disk.

use std::io::Write;

use territory_cli::pipeline::load_report;
use territory_cli::render::report_csv;
use territory_model::{ReportOptions, ReportView, TerritoryColumn};

fn territory_file(rows: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "{}", TerritoryColumn::header_line()).expect("write header");
    for row in rows {
        writeln!(file, "{row}").expect("write row");
    }
    file.flush().expect("flush");
    file
}

#[test]
fn report_from_file_orders_by_assignment() {
    let file = territory_file(&[
        "T1,C,Cat,1,,,2024-03-01,camp,Ann,",
        "T2,C,Cat,2,,,,camp,,",
        "T3,C,Cat,3,,,2024-01-05,camp,Bob,",
    ]);
    let result = load_report(file.path(), &ReportOptions::default()).expect("report");

    assert_eq!(result.source, file.path());
    assert!(result.warnings.is_empty());
    let csv = report_csv(&result.report).expect("csv");
    let ids: Vec<&str> = csv
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').next())
        .collect();
    assert_eq!(ids, ["T2", "T3", "T1"]);
}

#[test]
fn upload_order_keeps_file_order() {
    let file = territory_file(&[
        "T1,C,Cat,1,,,2024-03-01,camp,Ann,",
        "T2,C,Cat,2,,,,camp,,",
    ]);
    let options = ReportOptions::default().with_view(ReportView::UploadOrder);
    let result = load_report(file.path(), &options).expect("report");
    let ids: Vec<&str> = result
        .report
        .rows
        .iter()
        .map(|row| row.territory_id.as_str())
        .collect();
    assert_eq!(ids, ["T1", "T2"]);
}

#[test]
fn unreadable_dates_surface_as_warnings() {
    let file = territory_file(&[
        "T1,C,Cat,1,,,2024-03-01,camp,Ann,",
        "T2,C,Cat,2,,,someday,camp,Bob,",
    ]);
    let result = load_report(file.path(), &ReportOptions::default()).expect("report");
    assert_eq!(result.report.rows.len(), 1);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].territory_id, "T2");
    assert_eq!(result.warnings[0].line, 3);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.csv");
    let error = load_report(&path, &ReportOptions::default()).expect_err("missing file");
    assert!(format!("{error:#}").contains("absent.csv"));
}
