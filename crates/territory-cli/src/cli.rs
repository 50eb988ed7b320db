//! CLI argument definitions for the territory report.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use territory_model::DEFAULT_DATE_FORMAT;

#[derive(Parser)]
#[command(
    name = "territory",
    version,
    about = "Territory assignment report",
    long_about = "Read a territory assignment CSV file and report which territories are\n\
                  assigned, ordered by the date they were last assigned.\n\n\
                  Columns are matched by position; see `territory columns`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix each log line with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow publisher names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a territory file and print the assignment report.
    Report(ReportArgs),

    /// List the expected column layout.
    Columns,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Territory CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub file: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// strftime pattern for the last-assigned and last-completed columns.
    #[arg(long = "date-format", value_name = "FMT", default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// Keep file order instead of ordering by assignment date.
    #[arg(long = "upload-order")]
    pub upload_order: bool,

    /// Only show territories with this status.
    #[arg(long = "status", value_enum, default_value = "all")]
    pub status: StatusArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    All,
    Assigned,
    Unassigned,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
