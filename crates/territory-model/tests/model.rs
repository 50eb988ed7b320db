//! Tests for territory-model types.

use std::error::Error;

use chrono::NaiveDate;
use territory_model::{
    AssignmentStatus, DEFAULT_DATE_FORMAT, ParseError, ParseFailure, ReportOptions, ReportView,
    SourceRow, StatusFilter, TerritoryRecord, derive_is_assigned,
};

#[test]
fn is_assigned_requires_publisher_and_open_assignment() {
    assert!(derive_is_assigned("Bob", ""));
    assert!(!derive_is_assigned("", ""));
    assert!(!derive_is_assigned("Jane", "2024-01-01"));
    assert!(!derive_is_assigned("", "2024-01-01"));
}

#[test]
fn record_serializes_with_camel_case_keys() {
    let record = TerritoryRecord::from_source(
        SourceRow {
            territory_id: "T3",
            category_code: "C",
            category: "Cat",
            number: "30",
            suffix: "C",
            date_assigned: "2023-11-01",
            campaign_id: "camp",
            publisher: "Bob",
            ..SourceRow::default()
        },
        None,
        NaiveDate::from_ymd_opt(2023, 11, 1),
    );
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["territoryId"], "T3");
    assert_eq!(json["dateAssigned"], "2023-11-01");
    assert_eq!(json["dateCompleted"], serde_json::Value::Null);
    assert_eq!(json["fieldServiceGroup"], serde_json::Value::Null);
    assert_eq!(json["isAssigned"], true);
    assert_eq!(record.status(), AssignmentStatus::Assigned);
}

#[test]
fn parse_error_keeps_technical_cause_as_source() {
    let bytes = [0xff_u8, 0xfe];
    let utf8 = std::str::from_utf8(&bytes).unwrap_err();
    let error = ParseError::from(ParseFailure::from(utf8));

    assert_eq!(
        error.to_string(),
        "Error parsing CSV file. Please ensure it's properly formatted."
    );
    let source = error.source().expect("source");
    assert!(source.to_string().starts_with("input is not valid UTF-8"));
}

#[test]
fn report_options_builders() {
    let options = ReportOptions::new();
    assert_eq!(options.date_format, DEFAULT_DATE_FORMAT);
    assert_eq!(options.view, ReportView::ByAssignment);
    assert_eq!(options.status_filter, StatusFilter::All);

    let options = options
        .with_date_format("%Y-%m-%d")
        .with_view(ReportView::UploadOrder)
        .with_status_filter(StatusFilter::Unassigned);
    assert_eq!(options.date_format, "%Y-%m-%d");
    assert_eq!(options.view, ReportView::UploadOrder);
    assert!(options.status_filter.accepts(false));
    assert!(!options.status_filter.accepts(true));
}
