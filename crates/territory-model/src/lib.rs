//! Territory assignment data model.
//!
//! Types shared by the ingest, report and CLI crates: the parsed
//! [`TerritoryRecord`], the positional [`TerritoryColumn`] layout, the
//! derived status badges and the single user-facing [`ParseError`].

pub mod column;
pub mod error;
pub mod options;
pub mod record;
pub mod status;

pub use column::TerritoryColumn;
pub use error::{ParseError, ParseFailure, RowWarning};
pub use options::{DEFAULT_DATE_FORMAT, ReportOptions, ReportView, StatusFilter};
pub use record::{DEFAULT_PUBLISHER, SourceRow, TerritoryRecord, derive_is_assigned};
pub use status::{AssignmentStatus, ProgressBadge};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_message_is_static() {
        let missing = ParseError::from(ParseFailure::MissingHeader);
        assert_eq!(missing.to_string(), ParseError::USER_MESSAGE);
        assert!(matches!(missing.failure(), ParseFailure::MissingHeader));
    }

    #[test]
    fn status_follows_assignment_flag() {
        assert_eq!(AssignmentStatus::from_assigned(true).label(), "Assigned");
        assert_eq!(AssignmentStatus::from_assigned(false).label(), "Unassigned");
    }
}
