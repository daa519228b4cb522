use std::fmt;

use crate::header::HEADER_SCAN_ROWS;

#[derive(Debug)]
pub enum IngestError {
    /// The byte stream is not a recognizable spreadsheet container.
    Decode(String),
    /// The first sheet has zero rows.
    EmptySheet,
    /// No row within the scan bound matched the mandatory columns.
    /// `missing` names the logical columns that never matched on the best
    /// candidate row, so the user can be told exactly what to fix.
    HeaderNotFound { missing: Vec<&'static str> },
    /// A vocabulary override file failed to parse.
    Vocabulary(String),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(msg) => write!(f, "cannot read workbook: {msg}"),
            Self::EmptySheet => write!(f, "the price-list sheet is empty"),
            Self::HeaderNotFound { missing } => {
                write!(
                    f,
                    "no header row found in the first {HEADER_SCAN_ROWS} rows: missing {} column(s)",
                    missing.join(", ")
                )
            }
            Self::Vocabulary(msg) => write!(f, "vocabulary parse error: {msg}"),
        }
    }
}

impl std::error::Error for IngestError {}
