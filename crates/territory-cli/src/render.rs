//! Terminal, CSV and JSON renderings of a territory report.

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use territory_model::{AssignmentStatus, ProgressBadge, TerritoryColumn};
use territory_report::TerritoryReport;

const REPORT_HEADERS: [&str; 8] = [
    "Territory ID",
    "Category",
    "Number",
    "Publisher",
    "Last Assigned",
    "Last Completed",
    "Progress",
    "Assignment Status",
];

pub fn report_table(report: &TerritoryReport) -> Table {
    let mut table = Table::new();
    table.set_header(REPORT_HEADERS.iter().map(|label| header_cell(label)));
    apply_report_table_style(&mut table);
    for row in &report.rows {
        table.add_row(vec![
            Cell::new(&row.territory_id).add_attribute(Attribute::Bold),
            Cell::new(&row.category),
            Cell::new(&row.display_number),
            publisher_cell(&row.publisher, row.status),
            date_cell(&row.last_assigned),
            date_cell(&row.last_completed),
            progress_cell(row.progress),
            status_cell(row.status),
        ]);
    }
    let totals = report.totals;
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} territories", totals.total))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        count_cell(totals.assigned, Color::Yellow),
        Cell::new(format!(
            "{} assigned / {} unassigned",
            totals.assigned, totals.unassigned
        ))
        .add_attribute(Attribute::Bold),
    ]);
    table
}

/// Expected file layout, one row per positional column.
pub fn columns_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Description"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    align_column(&mut table, 0, CellAlignment::Right);
    for column in TerritoryColumn::ALL {
        table.add_row(vec![
            Cell::new(column.index()),
            Cell::new(column.header()).fg(Color::Blue),
            Cell::new(column.description()),
        ]);
    }
    table
}

pub fn report_csv(report: &TerritoryReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(REPORT_HEADERS).context("write csv header")?;
    for row in &report.rows {
        writer
            .write_record([
                row.territory_id.as_str(),
                row.category.as_str(),
                row.display_number.as_str(),
                row.publisher.as_str(),
                row.last_assigned.as_str(),
                row.last_completed.as_str(),
                row.progress.map(ProgressBadge::label).unwrap_or_default(),
                row.status.label(),
            ])
            .with_context(|| format!("write csv row {}", row.territory_id))?;
    }
    let bytes = writer.into_inner().context("flush csv output")?;
    String::from_utf8(bytes).context("csv output is not UTF-8")
}

pub fn report_json(report: &TerritoryReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize report")
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    align_column(table, 2, CellAlignment::Right);
    align_column(table, 4, CellAlignment::Right);
    align_column(table, 5, CellAlignment::Right);
    align_column(table, 6, CellAlignment::Center);
    align_column(table, 7, CellAlignment::Center);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn publisher_cell(publisher: &str, status: AssignmentStatus) -> Cell {
    match status {
        AssignmentStatus::Assigned => Cell::new(publisher),
        AssignmentStatus::Unassigned => dim_cell(publisher),
    }
}

fn date_cell(value: &str) -> Cell {
    if value == territory_report::NEVER {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn progress_cell(progress: Option<ProgressBadge>) -> Cell {
    match progress {
        Some(badge) => Cell::new(badge.label()).fg(Color::Yellow),
        None => Cell::new(""),
    }
}

fn status_cell(status: AssignmentStatus) -> Cell {
    match status {
        AssignmentStatus::Assigned => Cell::new(status.label())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        AssignmentStatus::Unassigned => Cell::new(status.label()).fg(Color::Red),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
