//! Configuration options for report generation.

use serde::Serialize;

/// `chrono` pattern for the en-US short date (`3/7/2024`).
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Which of the two record views a report is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ReportView {
    /// Ordered by assignment date, never-assigned territories first.
    #[default]
    ByAssignment,
    /// Rows in the order they appeared in the file.
    UploadOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum StatusFilter {
    #[default]
    All,
    Assigned,
    Unassigned,
}

impl StatusFilter {
    pub fn accepts(self, is_assigned: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Assigned => is_assigned,
            StatusFilter::Unassigned => !is_assigned,
        }
    }
}

/// Options controlling how a report is projected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportOptions {
    /// `chrono` strftime pattern used for last-assigned/last-completed.
    pub date_format: String,

    pub view: ReportView,

    /// Row filter. Totals are always computed over every record.
    pub status_filter: StatusFilter,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            view: ReportView::default(),
            status_filter: StatusFilter::default(),
        }
    }
}

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    #[must_use]
    pub fn with_view(mut self, view: ReportView) -> Self {
        self.view = view;
        self
    }

    #[must_use]
    pub fn with_status_filter(mut self, filter: StatusFilter) -> Self {
        self.status_filter = filter;
        self
    }
}
