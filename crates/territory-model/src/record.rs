use chrono::NaiveDate;
use serde::Serialize;

use crate::status::{AssignmentStatus, ProgressBadge};

/// Publisher shown when the source row names nobody.
pub const DEFAULT_PUBLISHER: &str = "Unassigned";

/// Derive the assignment flag from the raw publisher and date-completed cells.
///
/// A territory is assigned when somebody holds it and it has not been
/// completed yet. A completed territory with a publisher is *not* assigned.
pub fn derive_is_assigned(raw_publisher: &str, raw_date_completed: &str) -> bool {
    !raw_publisher.is_empty() && raw_date_completed.is_empty()
}

/// One territory row from an uploaded file.
///
/// The assignment flag is computed once in [`TerritoryRecord::from_source`]
/// and is only readable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerritoryRecord {
    pub territory_id: String,
    pub category_code: Option<String>,
    pub category: Option<String>,
    pub number: String,
    pub suffix: String,
    pub date_completed: Option<NaiveDate>,
    pub date_assigned: Option<NaiveDate>,
    pub campaign_id: Option<String>,
    pub publisher: String,
    pub field_service_group: Option<String>,
    is_assigned: bool,
}

/// Raw cells for a single row, borrowed from the source line.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceRow<'a> {
    pub territory_id: &'a str,
    pub category_code: &'a str,
    pub category: &'a str,
    pub number: &'a str,
    pub suffix: &'a str,
    pub date_completed: &'a str,
    pub date_assigned: &'a str,
    pub campaign_id: &'a str,
    pub publisher: &'a str,
    pub field_service_group: &'a str,
}

impl TerritoryRecord {
    /// Build a record from raw cells and already-parsed dates.
    ///
    /// Empty descriptive cells become `None`; an empty publisher becomes
    /// [`DEFAULT_PUBLISHER`].
    pub fn from_source(
        row: SourceRow<'_>,
        date_completed: Option<NaiveDate>,
        date_assigned: Option<NaiveDate>,
    ) -> Self {
        let publisher = if row.publisher.is_empty() {
            DEFAULT_PUBLISHER.to_string()
        } else {
            row.publisher.to_string()
        };
        Self {
            territory_id: row.territory_id.to_string(),
            category_code: non_empty(row.category_code),
            category: non_empty(row.category),
            number: row.number.to_string(),
            suffix: row.suffix.to_string(),
            date_completed,
            date_assigned,
            campaign_id: non_empty(row.campaign_id),
            publisher,
            field_service_group: non_empty(row.field_service_group),
            is_assigned: derive_is_assigned(row.publisher, row.date_completed),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.is_assigned
    }

    pub fn status(&self) -> AssignmentStatus {
        AssignmentStatus::from_assigned(self.is_assigned)
    }

    /// Progress badge, present only while the territory is out.
    pub fn progress(&self) -> Option<ProgressBadge> {
        self.is_assigned.then_some(ProgressBadge::InProgress)
    }

    /// `number` and `suffix` joined without a separator.
    pub fn display_number(&self) -> String {
        format!("{}{}", self.number, self.suffix)
    }

    /// Publisher as shown in reports: completed territories read as unassigned.
    pub fn display_publisher(&self) -> &str {
        if self.is_assigned {
            &self.publisher
        } else {
            DEFAULT_PUBLISHER
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
