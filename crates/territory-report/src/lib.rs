//! Territory report generation.
//!
//! - [`sort_by_assignment`]: orders records by assignment date, never-assigned
//!   territories first
//! - [`TerritoryReport`]: the display projection consumed by renderers
//! - [`TerritoryBoard`]: the upload-order and sorted views of the current file

mod board;
mod projection;
mod sort;

pub use board::TerritoryBoard;
pub use projection::{NEVER, ReportError, ReportRow, ReportTotals, TerritoryReport};
pub use sort::{assignment_order, sort_by_assignment};
