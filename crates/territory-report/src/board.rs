use tracing::{info, warn};

use territory_ingest::{ParsedTerritories, parse_territories, parse_territory_bytes};
use territory_model::{ParseError, ReportOptions, ReportView, RowWarning, TerritoryRecord};

use crate::projection::{ReportError, TerritoryReport};
use crate::sort::sort_by_assignment;

/// The records of the most recent successful upload, held in upload order
/// and in assignment order.
///
/// Uploads take `&mut self`, so one upload must finish before the next
/// starts. A failed upload leaves the previous views in place and records the
/// error message.
#[derive(Debug, Clone, Default)]
pub struct TerritoryBoard {
    records: Vec<TerritoryRecord>,
    sorted: Vec<TerritoryRecord>,
    warnings: Vec<RowWarning>,
    error: Option<String>,
}

impl TerritoryBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload(&mut self, text: &str) -> Result<(), ParseError> {
        let result = parse_territories(text);
        self.apply(result)
    }

    pub fn upload_bytes(&mut self, bytes: &[u8]) -> Result<(), ParseError> {
        let result = parse_territory_bytes(bytes);
        self.apply(result)
    }

    /// Replace both views with an already parsed file.
    pub fn replace(&mut self, parsed: ParsedTerritories) {
        self.sorted = sort_by_assignment(&parsed.records);
        self.records = parsed.records;
        self.warnings = parsed.warnings;
        self.error = None;
        info!(records = self.records.len(), "territory board replaced");
    }

    fn apply(&mut self, result: Result<ParsedTerritories, ParseError>) -> Result<(), ParseError> {
        match result {
            Ok(parsed) => {
                self.replace(parsed);
                Ok(())
            }
            Err(error) => {
                warn!(cause = %error.failure(), "upload rejected, keeping previous records");
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Records in file order.
    pub fn records(&self) -> &[TerritoryRecord] {
        &self.records
    }

    /// Records ordered by assignment date.
    pub fn sorted(&self) -> &[TerritoryRecord] {
        &self.sorted
    }

    pub fn view(&self, view: ReportView) -> &[TerritoryRecord] {
        match view {
            ReportView::ByAssignment => &self.sorted,
            ReportView::UploadOrder => &self.records,
        }
    }

    pub fn warnings(&self) -> &[RowWarning] {
        &self.warnings
    }

    /// Message from the last failed upload, cleared by the next success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn report(&self, options: &ReportOptions) -> Result<TerritoryReport, ReportError> {
        TerritoryReport::from_view(self.view(options.view), options)
    }
}
