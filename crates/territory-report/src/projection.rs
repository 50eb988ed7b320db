use std::fmt::Write;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use territory_model::{
    AssignmentStatus, ProgressBadge, ReportOptions, ReportView, TerritoryRecord,
};

use crate::sort::sort_by_assignment;

/// Shown in place of an absent date.
pub const NEVER: &str = "Never";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid date format {0:?}")]
    InvalidDateFormat(String),
}

/// One display row. Every field is derived from the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub territory_id: String,
    pub category: String,
    pub display_number: String,
    pub publisher: String,
    pub last_assigned: String,
    pub last_completed: String,
    pub progress: Option<ProgressBadge>,
    pub status: AssignmentStatus,
}

impl ReportRow {
    pub fn project(record: &TerritoryRecord, options: &ReportOptions) -> Result<Self, ReportError> {
        let items = date_items(&options.date_format)?;
        Ok(Self::project_with(record, &items))
    }

    fn project_with(record: &TerritoryRecord, items: &[Item<'_>]) -> Self {
        Self {
            territory_id: record.territory_id.clone(),
            category: record.category.clone().unwrap_or_default(),
            display_number: record.display_number(),
            publisher: record.display_publisher().to_string(),
            last_assigned: display_date(record.date_assigned, items),
            last_completed: display_date(record.date_completed, items),
            progress: record.progress(),
            status: record.status(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportTotals {
    pub total: usize,
    pub assigned: usize,
    pub unassigned: usize,
}

impl ReportTotals {
    pub fn from_records(records: &[TerritoryRecord]) -> Self {
        let assigned = records.iter().filter(|r| r.is_assigned()).count();
        Self {
            total: records.len(),
            assigned,
            unassigned: records.len() - assigned,
        }
    }
}

/// Report over one uploaded file, ready for any renderer.
#[derive(Debug, Clone, Serialize)]
pub struct TerritoryReport {
    pub view: ReportView,
    pub rows: Vec<ReportRow>,
    /// Counts over all records, regardless of the status filter.
    pub totals: ReportTotals,
}

impl TerritoryReport {
    /// Build a report from records in upload order.
    pub fn build(
        records: &[TerritoryRecord],
        options: &ReportOptions,
    ) -> Result<Self, ReportError> {
        match options.view {
            ReportView::ByAssignment => Self::from_view(&sort_by_assignment(records), options),
            ReportView::UploadOrder => Self::from_view(records, options),
        }
    }

    /// Build a report from records that are already in the requested view order.
    pub fn from_view(
        records: &[TerritoryRecord],
        options: &ReportOptions,
    ) -> Result<Self, ReportError> {
        let items = date_items(&options.date_format)?;
        let rows: Vec<ReportRow> = records
            .iter()
            .filter(|record| options.status_filter.accepts(record.is_assigned()))
            .map(|record| ReportRow::project_with(record, &items))
            .collect();
        let totals = ReportTotals::from_records(records);
        info!(
            rows = rows.len(),
            total = totals.total,
            assigned = totals.assigned,
            "built territory report"
        );
        Ok(Self {
            view: options.view,
            rows,
            totals,
        })
    }
}

fn date_items(format: &str) -> Result<Vec<Item<'_>>, ReportError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    let invalid = || ReportError::InvalidDateFormat(format.to_string());
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }
    // Time and zone specifiers only fail once a date is rendered.
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDate::MIN.format_with_items(items.iter())).map_err(|_| invalid())?;
    Ok(items)
}

fn display_date(date: Option<NaiveDate>, items: &[Item<'_>]) -> String {
    match date {
        Some(date) => date.format_with_items(items.iter()).to_string(),
        None => NEVER.to_string(),
    }
}
