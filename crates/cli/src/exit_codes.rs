//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of
//! the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args, missing file) |
//! | 10-19   | import           | Price-list ingestion codes               |

use cotador_ingest::IngestError;

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

// 1 is reserved for unspecified failures; 2 is what clap itself exits with
// on bad arguments. Neither needs a constant here.

/// IO error - file unreadable/unwritable.
pub const EXIT_IO: u8 = 3;

/// Parse error - a catalog/quote JSON file failed to deserialize.
pub const EXIT_PARSE: u8 = 4;

// =============================================================================
// Import (10-19)
// =============================================================================

/// The workbook bytes are not a recognizable spreadsheet container.
pub const EXIT_IMPORT_DECODE: u8 = 10;

/// The first sheet has no rows.
pub const EXIT_IMPORT_EMPTY: u8 = 11;

/// No header row matched within the scan bound.
pub const EXIT_IMPORT_HEADER: u8 = 12;

/// A vocabulary override file failed to parse.
pub const EXIT_IMPORT_VOCAB: u8 = 13;

/// Map an ingestion error onto its registry code.
pub fn ingest_exit_code(err: &IngestError) -> u8 {
    match err {
        IngestError::Decode(_) => EXIT_IMPORT_DECODE,
        IngestError::EmptySheet => EXIT_IMPORT_EMPTY,
        IngestError::HeaderNotFound { .. } => EXIT_IMPORT_HEADER,
        IngestError::Vocabulary(_) => EXIT_IMPORT_VOCAB,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_ingest_error_has_its_own_code() {
        let codes = [
            ingest_exit_code(&IngestError::Decode("x".into())),
            ingest_exit_code(&IngestError::EmptySheet),
            ingest_exit_code(&IngestError::HeaderNotFound { missing: vec!["unit"] }),
            ingest_exit_code(&IngestError::Vocabulary("x".into())),
        ];
        let mut unique = codes.to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), codes.len());
        assert!(codes.iter().all(|c| (10..20).contains(c)));
    }
}
