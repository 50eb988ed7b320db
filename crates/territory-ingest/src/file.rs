use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use territory_model::ParseError;

use crate::parser::{ParsedTerritories, parse_territory_bytes};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read territory file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Read a territory file to completion, then parse it.
pub fn read_territory_file(path: &Path) -> Result<ParsedTerritories, IngestError> {
    let bytes = fs::read(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read territory file");
    Ok(parse_territory_bytes(&bytes)?)
}
