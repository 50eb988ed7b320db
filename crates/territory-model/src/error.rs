use serde::Serialize;
use thiserror::Error;

/// Failure to turn an uploaded file into records.
///
/// The display text is a fixed, user-facing message. The technical cause is
/// kept as the error source for logs.
#[derive(Debug, Error)]
#[error("{}", ParseError::USER_MESSAGE)]
pub struct ParseError {
    #[source]
    failure: ParseFailure,
}

impl ParseError {
    pub const USER_MESSAGE: &'static str =
        "Error parsing CSV file. Please ensure it's properly formatted.";

    pub fn failure(&self) -> &ParseFailure {
        &self.failure
    }
}

impl From<ParseFailure> for ParseError {
    fn from(failure: ParseFailure) -> Self {
        Self { failure }
    }
}

#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error("input has no header line")]
    MissingHeader,
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// A row that was skipped without failing the whole upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowWarning {
    /// 1-based line number in the source text (the header is line 1).
    pub line: usize,
    pub territory_id: String,
    pub message: String,
}
