//! Integration tests for sorting, projection and the upload board.

use chrono::NaiveDate;
use proptest::prelude::*;

use territory_model::{
    AssignmentStatus, ParseError, ReportOptions, ReportView, SourceRow, TerritoryColumn,
    TerritoryRecord,
};
use territory_report::{NEVER, TerritoryBoard, TerritoryReport, sort_by_assignment};

fn sample_file() -> String {
    [
        TerritoryColumn::header_line().as_str(),
        "T1,C,Cat,10,A,,,camp,,",
        "T2,C,Cat,20,B,2024-01-01,2023-12-01,camp,Jane,",
        "T3,C,Cat,30,C,,2023-11-01,camp,Bob,",
        ",C,Cat,0,,,,,,",
        "T4,R,Rural,40,,,2023-11-01,camp,Ann,G2",
        "",
    ]
    .join("\n")
}

#[test]
fn board_holds_both_views() {
    let mut board = TerritoryBoard::new();
    board.upload(&sample_file()).expect("upload");

    let upload: Vec<&str> = board.records().iter().map(|r| r.territory_id.as_str()).collect();
    assert_eq!(upload, vec!["T1", "T2", "T3", "T4"]);
    let sorted: Vec<&str> = board.sorted().iter().map(|r| r.territory_id.as_str()).collect();
    assert_eq!(sorted, vec!["T1", "T3", "T4", "T2"]);
    assert_eq!(board.error(), None);
}

#[test]
fn report_rows_follow_display_rules() {
    let mut board = TerritoryBoard::new();
    board.upload(&sample_file()).expect("upload");
    let report = board.report(&ReportOptions::default()).expect("report");

    let first = &report.rows[0];
    assert_eq!(first.territory_id, "T1");
    assert_eq!(first.display_number, "10A");
    assert_eq!(first.publisher, "Unassigned");
    assert_eq!(first.last_assigned, NEVER);
    assert_eq!(first.status, AssignmentStatus::Unassigned);
    assert!(first.progress.is_none());

    let completed = report.rows.iter().find(|r| r.territory_id == "T2").unwrap();
    assert_eq!(completed.publisher, "Unassigned");
    assert_eq!(completed.last_completed, "1/1/2024");
    assert_eq!(completed.last_assigned, "12/1/2023");

    let open = report.rows.iter().find(|r| r.territory_id == "T3").unwrap();
    assert_eq!(open.publisher, "Bob");
    assert_eq!(open.status, AssignmentStatus::Assigned);
    assert!(open.progress.is_some());

    assert_eq!(report.totals.total, 4);
    assert_eq!(report.totals.assigned, 2);
    assert_eq!(report.totals.unassigned, 2);
}

#[test]
fn failed_upload_keeps_previous_records() {
    let mut board = TerritoryBoard::new();
    board.upload(&sample_file()).expect("upload");

    let error = board.upload("").unwrap_err();
    assert_eq!(error.to_string(), ParseError::USER_MESSAGE);
    assert_eq!(board.error(), Some(ParseError::USER_MESSAGE));
    assert_eq!(board.records().len(), 4);

    let replacement = format!("{}\nT9,,,,,,,,,", TerritoryColumn::header_line());
    board.upload_bytes(replacement.as_bytes()).expect("upload");
    assert_eq!(board.records().len(), 1);
    assert_eq!(board.sorted()[0].territory_id, "T9");
    assert_eq!(board.error(), None);
}

#[test]
fn upload_order_view_is_unsorted() {
    let mut board = TerritoryBoard::new();
    board.upload(&sample_file()).expect("upload");
    let options = ReportOptions::default().with_view(ReportView::UploadOrder);
    let report = board.report(&options).expect("report");
    let ids: Vec<&str> = report.rows.iter().map(|r| r.territory_id.as_str()).collect();
    assert_eq!(ids, vec!["T1", "T2", "T3", "T4"]);
    assert_eq!(report.view, ReportView::UploadOrder);
}

#[test]
fn report_serializes_for_renderers() {
    let mut board = TerritoryBoard::new();
    board.upload(&sample_file()).expect("upload");
    let report = board.report(&ReportOptions::default()).expect("report");
    let json = serde_json::to_value(&report).expect("serialize");
    assert_eq!(json["rows"][0]["territoryId"], "T1");
    assert_eq!(json["rows"][1]["status"], "Assigned");
    assert_eq!(json["rows"][1]["progress"], "InProgress");
    assert_eq!(json["totals"]["total"], 4);
}

#[test]
fn build_sorts_by_default() {
    let mut board = TerritoryBoard::new();
    board.upload(&sample_file()).expect("upload");
    let built = TerritoryReport::build(board.records(), &ReportOptions::default()).unwrap();
    let from_board = board.report(&ReportOptions::default()).unwrap();
    assert_eq!(built.rows, from_board.rows);
}

fn record(index: usize, assigned: Option<u32>) -> TerritoryRecord {
    let id = format!("T{index}");
    TerritoryRecord::from_source(
        SourceRow {
            territory_id: &id,
            ..SourceRow::default()
        },
        None,
        assigned.and_then(|day| NaiveDate::from_ymd_opt(2024, 1, day)),
    )
}

proptest! {
    #[test]
    fn sort_matches_stable_key_order(days in prop::collection::vec(prop::option::of(1u32..=5), 0..40)) {
        let records: Vec<TerritoryRecord> = days
            .iter()
            .enumerate()
            .map(|(index, day)| record(index, *day))
            .collect();
        let sorted = sort_by_assignment(&records);

        let mut expected = records.clone();
        expected.sort_by_key(|r| r.date_assigned);
        prop_assert_eq!(&sorted, &expected);

        let first_dated = sorted.iter().position(|r| r.date_assigned.is_some()).unwrap_or(sorted.len());
        prop_assert!(sorted[first_dated..].iter().all(|r| r.date_assigned.is_some()));
        prop_assert!(sorted[..first_dated].iter().all(|r| r.date_assigned.is_none()));
    }
}
