use anyhow::Result;

use territory_cli::pipeline::ReportResult;
use territory_cli::render::{report_csv, report_json, report_table};

use crate::cli::OutputFormatArg;

pub fn print_report(result: &ReportResult, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Table => {
            println!("File: {}", result.source.display());
            println!("{}", report_table(&result.report));
        }
        OutputFormatArg::Json => println!("{}", report_json(&result.report)?),
        OutputFormatArg::Csv => print!("{}", report_csv(&result.report)?),
    }
    print_warnings(result);
    Ok(())
}

// Stderr keeps machine-readable stdout clean.
fn print_warnings(result: &ReportResult) {
    if result.warnings.is_empty() {
        return;
    }
    eprintln!("Skipped rows:");
    for warning in &result.warnings {
        eprintln!(
            "- line {} ({}): {}",
            warning.line, warning.territory_id, warning.message
        );
    }
}
