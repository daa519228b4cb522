use cotador_engine::{ServiceCatalog, ServiceEntry};

use crate::error::IngestError;
use crate::grid::{Cell, Grid};
use crate::header::{locate_header, unmatched_required, HeaderVocabulary};
use crate::price::parse_price;

/// Ingest a raw grid with the default pt-BR vocabulary.
pub fn ingest(grid: &Grid) -> Result<ServiceCatalog, IngestError> {
    ingest_with_vocabulary(grid, &HeaderVocabulary::default())
}

/// Ingest a raw grid into a fresh catalog. Pure: no side effects beyond the
/// return value; the previous catalog (if any) is the caller's to discard.
pub fn ingest_with_vocabulary(
    grid: &Grid,
    vocab: &HeaderVocabulary,
) -> Result<ServiceCatalog, IngestError> {
    if grid.is_empty() {
        return Err(IngestError::EmptySheet);
    }

    let header = locate_header(grid, vocab).ok_or_else(|| IngestError::HeaderNotFound {
        missing: unmatched_required(grid, vocab),
    })?;

    let mut entries = Vec::new();
    for row in &grid[header.row + 1..] {
        // Rows without a service name are spacers/merged-cell remnants.
        if row.get(header.service).map_or(true, Cell::is_blank) {
            continue;
        }

        let name = row
            .get(header.service)
            .map(|c| c.text().trim().to_string())
            .unwrap_or_default();
        let unit = row
            .get(header.unit)
            .map(|c| c.text().trim().to_string())
            .unwrap_or_default();
        let scope = header.scope.and_then(|col| {
            let text = row.get(col).map(|c| c.text()).unwrap_or_default();
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        });

        entries.push(ServiceEntry {
            name,
            unit,
            unit_price: row.get(header.value).map(parse_price).unwrap_or(0.0),
            scope,
        });
    }

    Ok(ServiceCatalog::from_entries(entries))
}
