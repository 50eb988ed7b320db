//! File-to-report pipeline shared by the `report` command and its tests.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use territory_ingest::read_territory_file;
use territory_model::{ReportOptions, RowWarning};
use territory_report::{TerritoryBoard, TerritoryReport};

use crate::logging::redact_value;

/// Everything the summary printer needs from one run.
#[derive(Debug)]
pub struct ReportResult {
    pub source: PathBuf,
    pub report: TerritoryReport,
    pub warnings: Vec<RowWarning>,
}

/// Read `path`, load it onto a fresh board and build the report.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed, or when the date format in
/// `options` cannot render a date.
pub fn load_report(path: &Path, options: &ReportOptions) -> Result<ReportResult> {
    let span = info_span!("report", file = %path.display());
    let _guard = span.enter();
    let started = Instant::now();

    let parsed = read_territory_file(path)
        .with_context(|| format!("load territories from {}", path.display()))?;

    let mut board = TerritoryBoard::new();
    board.replace(parsed);
    for record in board.sorted() {
        trace!(
            territory_id = %record.territory_id,
            publisher = redact_value(&record.publisher),
            assigned = record.is_assigned(),
            "territory"
        );
    }

    let report = board.report(options).context("build report")?;
    info!(
        rows = report.rows.len(),
        warnings = board.warnings().len(),
        duration_ms = started.elapsed().as_millis(),
        "report complete"
    );
    Ok(ReportResult {
        source: path.to_path_buf(),
        report,
        warnings: board.warnings().to_vec(),
    })
}
