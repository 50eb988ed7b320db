//! Territory file ingestion.
//!
//! Turns the raw text of an uploaded territory file into
//! [`TerritoryRecord`](territory_model::TerritoryRecord)s. Lines are split on
//! `'\n'` and cells on `','`; quoting is not supported.

pub mod dates;
pub mod file;
pub mod parser;

pub use dates::parse_date;
pub use file::{IngestError, read_territory_file};
pub use parser::{ParsedTerritories, parse_territories, parse_territory_bytes};
