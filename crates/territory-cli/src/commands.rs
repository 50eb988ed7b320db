use anyhow::Result;

use territory_cli::pipeline::{ReportResult, load_report};
use territory_cli::render::columns_table;
use territory_model::{ReportOptions, ReportView, StatusFilter};

use crate::cli::{ReportArgs, StatusArg};

pub fn run_columns() {
    println!("{}", columns_table());
}

pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    load_report(&args.file, &report_options(args))
}

fn report_options(args: &ReportArgs) -> ReportOptions {
    let view = if args.upload_order {
        ReportView::UploadOrder
    } else {
        ReportView::ByAssignment
    };
    let status_filter = match args.status {
        StatusArg::All => StatusFilter::All,
        StatusArg::Assigned => StatusFilter::Assigned,
        StatusArg::Unassigned => StatusFilter::Unassigned,
    };
    ReportOptions::new()
        .with_date_format(args.date_format.clone())
        .with_view(view)
        .with_status_filter(status_filter)
}
