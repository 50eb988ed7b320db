use std::time::Instant;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use territory_model::{
    ParseError, ParseFailure, RowWarning, SourceRow, TerritoryColumn, TerritoryRecord,
};

use crate::dates::parse_date;

/// Result of parsing one uploaded file.
#[derive(Debug, Clone, Default)]
pub struct ParsedTerritories {
    /// Header cells as found in the file. Never validated.
    pub header: Vec<String>,
    /// Records in file order.
    pub records: Vec<TerritoryRecord>,
    /// Rows skipped because a date could not be read.
    pub warnings: Vec<RowWarning>,
    /// Rows skipped because the territory id was empty (blank lines included).
    pub skipped_rows: usize,
}

impl ParsedTerritories {
    pub fn assigned_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_assigned()).count()
    }
}

/// Parse the raw bytes of a territory file.
///
/// The bytes must be UTF-8; a leading byte order mark is ignored.
pub fn parse_territory_bytes(bytes: &[u8]) -> Result<ParsedTerritories, ParseError> {
    let text = std::str::from_utf8(bytes).map_err(ParseFailure::from)?;
    parse_territories(text)
}

/// Parse territory text into records.
///
/// The first line is the header. Every following line is split on `','` and
/// mapped by position; missing cells read as empty. Rows with an empty
/// territory id are dropped. A row whose date cell cannot be parsed is dropped
/// with a [`RowWarning`] and the rest of the file is still returned.
pub fn parse_territories(text: &str) -> Result<ParsedTerritories, ParseError> {
    let started = Instant::now();
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.trim().is_empty() {
        return Err(ParseFailure::MissingHeader.into());
    }
    // The header is not validated; a blank first line is still the header.
    let mut lines = text.split('\n').map(strip_carriage_return);
    let header_line = lines.next().unwrap_or_default();
    let header: Vec<String> = header_line.split(',').map(str::to_string).collect();

    let mut parsed = ParsedTerritories {
        header,
        ..ParsedTerritories::default()
    };

    for (offset, line) in lines.enumerate() {
        // Header is line 1.
        let line_number = offset + 2;
        let cells: Vec<&str> = line.split(',').collect();
        let cell = |column: TerritoryColumn| cells.get(column.index()).copied().unwrap_or("");

        let territory_id = cell(TerritoryColumn::TerritoryId);
        if territory_id.is_empty() {
            debug!(line = line_number, "skipping row without territory id");
            parsed.skipped_rows += 1;
            continue;
        }

        let date_completed = match read_date(cell(TerritoryColumn::DateCompleted)) {
            Ok(date) => date,
            Err(raw) => {
                parsed.warnings.push(invalid_date(
                    line_number,
                    territory_id,
                    TerritoryColumn::DateCompleted,
                    raw,
                ));
                continue;
            }
        };
        let date_assigned = match read_date(cell(TerritoryColumn::DateAssigned)) {
            Ok(date) => date,
            Err(raw) => {
                parsed.warnings.push(invalid_date(
                    line_number,
                    territory_id,
                    TerritoryColumn::DateAssigned,
                    raw,
                ));
                continue;
            }
        };

        let row = SourceRow {
            territory_id,
            category_code: cell(TerritoryColumn::CategoryCode),
            category: cell(TerritoryColumn::Category),
            number: cell(TerritoryColumn::Number),
            suffix: cell(TerritoryColumn::Suffix),
            date_completed: cell(TerritoryColumn::DateCompleted),
            date_assigned: cell(TerritoryColumn::DateAssigned),
            campaign_id: cell(TerritoryColumn::CampaignId),
            publisher: cell(TerritoryColumn::Publisher),
            field_service_group: cell(TerritoryColumn::FieldServiceGroup),
        };
        parsed
            .records
            .push(TerritoryRecord::from_source(row, date_completed, date_assigned));
    }

    info!(
        records = parsed.records.len(),
        assigned = parsed.assigned_count(),
        skipped = parsed.skipped_rows,
        warnings = parsed.warnings.len(),
        duration_ms = started.elapsed().as_millis(),
        "parsed territory file"
    );
    Ok(parsed)
}

fn strip_carriage_return(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Empty cells are an absent date; anything else must parse.
fn read_date(raw: &str) -> Result<Option<NaiveDate>, &str> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_date(raw).map(Some).ok_or(raw)
}

fn invalid_date(
    line: usize,
    territory_id: &str,
    column: TerritoryColumn,
    raw: &str,
) -> RowWarning {
    warn!(
        line,
        territory_id,
        column = column.header(),
        value = raw,
        "unreadable date, row skipped"
    );
    RowWarning {
        line,
        territory_id: territory_id.to_string(),
        message: format!("unreadable {} value {raw:?}", column.header()),
    }
}
