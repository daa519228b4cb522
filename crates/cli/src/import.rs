//! `cotador import` — price-list spreadsheet to service-catalog JSON.

use std::fs;
use std::path::{Path, PathBuf};

use cotador_ingest::{ingest_with_vocabulary, HeaderVocabulary, IngestError};

use crate::exit_codes;
use crate::CliError;

pub fn cmd_import(
    input: PathBuf,
    output: Option<PathBuf>,
    vocab: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let bytes = fs::read(&input)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", input.display())))?;

    let vocab = load_vocabulary(vocab.as_deref())?;

    let grid = cotador_io::read(&bytes).map_err(CliError::ingest)?;
    let catalog = ingest_with_vocabulary(&grid, &vocab).map_err(CliError::ingest)?;

    let json = serde_json::to_string_pretty(&catalog)
        .map_err(|e| CliError::io(format!("catalog serialization error: {e}")))?;

    match &output {
        Some(path) => fs::write(path, json.as_bytes())
            .map_err(|e| CliError::io(format!("cannot write {}: {e}", path.display())))?,
        None => println!("{json}"),
    }

    if !quiet {
        eprintln!(
            "{} service{} imported from {}",
            catalog.len(),
            if catalog.len() == 1 { "" } else { "s" },
            input.display()
        );
    }

    Ok(())
}

fn load_vocabulary(path: Option<&Path>) -> Result<HeaderVocabulary, CliError> {
    match path {
        None => Ok(HeaderVocabulary::default()),
        Some(path) => {
            let contents = fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))?;
            HeaderVocabulary::from_toml_str(&contents).map_err(CliError::ingest)
        }
    }
}

impl CliError {
    /// Map an ingestion error to its exit code plus an actionable hint.
    pub fn ingest(err: IngestError) -> Self {
        let hint = match &err {
            IngestError::Decode(_) => {
                Some("check that the file is an .xlsx/.xls/.xlsb/.ods export".to_string())
            }
            IngestError::HeaderNotFound { .. } => Some(
                "expected header cells like SERVIÇO/ITEM, UNIDADE and VALOR/PREÇO \
                 within the first 50 rows"
                    .to_string(),
            ),
            IngestError::EmptySheet | IngestError::Vocabulary(_) => None,
        };
        Self {
            code: exit_codes::ingest_exit_code(&err),
            message: err.to_string(),
            hint,
        }
    }
}
