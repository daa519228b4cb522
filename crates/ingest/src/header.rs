use serde::Deserialize;

use crate::error::IngestError;
use crate::grid::{fold_text, Cell, Grid};

/// Header rows are assumed near the top; rows beyond this bound are never
/// searched, which also bounds the scan on arbitrarily large sheets.
pub const HEADER_SCAN_ROWS: usize = 50;

/// Candidate substrings per logical column, matched against accent-folded,
/// lowercased cell text. A declarative table: new supplier vocabularies are
/// added here (or via a TOML override) without touching the scan itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeaderVocabulary {
    pub service: Vec<String>,
    pub unit: Vec<String>,
    pub value: Vec<String>,
    pub scope: Vec<String>,
}

impl Default for HeaderVocabulary {
    fn default() -> Self {
        // "preço" folds to "preco", so the accented spelling is covered.
        Self {
            service: vec!["servico".into(), "item".into()],
            unit: vec!["unidade".into(), "unid".into()],
            value: vec!["valor".into(), "preco".into()],
            scope: vec!["escopo".into(), "descricao".into(), "detalhe".into()],
        }
    }
}

impl HeaderVocabulary {
    /// Parse a TOML override. Omitted tables keep their defaults.
    ///
    /// ```toml
    /// service = ["servico", "item", "produto"]
    /// value = ["valor", "preco", "custo"]
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, IngestError> {
        toml::from_str(s).map_err(|e| IngestError::Vocabulary(e.to_string()))
    }
}

/// A located header row: its index plus the column index of each logical
/// column. `scope` stays `None` when the sheet carries no scope column.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMatch {
    pub row: usize,
    pub service: usize,
    pub unit: usize,
    pub value: usize,
    pub scope: Option<usize>,
}

/// Per-row match state. All columns are located independently; first match
/// wins per column, scanning left to right.
#[derive(Debug, Default)]
struct RowHits {
    service: Option<usize>,
    unit: Option<usize>,
    value: Option<usize>,
    scope: Option<usize>,
}

impl RowHits {
    fn mandatory_count(&self) -> usize {
        [self.service, self.unit, self.value]
            .iter()
            .filter(|c| c.is_some())
            .count()
    }

    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.service.is_none() {
            missing.push("service");
        }
        if self.unit.is_none() {
            missing.push("unit");
        }
        if self.value.is_none() {
            missing.push("value");
        }
        missing
    }
}

fn contains_any(folded: &str, candidates: &[String]) -> bool {
    candidates.iter().any(|c| folded.contains(c.as_str()))
}

fn match_row(row: &[Cell], vocab: &HeaderVocabulary) -> RowHits {
    let mut hits = RowHits::default();
    for (col, cell) in row.iter().enumerate() {
        if cell.is_blank() {
            continue;
        }
        let folded = fold_text(&cell.text());
        if hits.service.is_none() && contains_any(&folded, &vocab.service) {
            hits.service = Some(col);
        }
        if hits.unit.is_none() && contains_any(&folded, &vocab.unit) {
            hits.unit = Some(col);
        }
        if hits.value.is_none() && contains_any(&folded, &vocab.value) {
            hits.value = Some(col);
        }
        if hits.scope.is_none() && contains_any(&folded, &vocab.scope) {
            hits.scope = Some(col);
        }
    }
    hits
}

/// Scan the first [`HEADER_SCAN_ROWS`] rows for the first row where the
/// three mandatory columns all match. Pure; returns `None` when no row
/// qualifies within the bound.
pub fn locate_header(grid: &Grid, vocab: &HeaderVocabulary) -> Option<HeaderMatch> {
    for (row_idx, row) in grid.iter().take(HEADER_SCAN_ROWS).enumerate() {
        let hits = match_row(row, vocab);
        if let (Some(service), Some(unit), Some(value)) = (hits.service, hits.unit, hits.value) {
            return Some(HeaderMatch {
                row: row_idx,
                service,
                unit,
                value,
                scope: hits.scope,
            });
        }
    }
    None
}

/// Mandatory columns still missing on the closest candidate row (the scanned
/// row matching the most mandatory columns; earlier rows win ties). Feeds
/// the actionable half of [`IngestError::HeaderNotFound`].
pub(crate) fn unmatched_required(grid: &Grid, vocab: &HeaderVocabulary) -> Vec<&'static str> {
    let mut best: Option<RowHits> = None;
    for row in grid.iter().take(HEADER_SCAN_ROWS) {
        let hits = match_row(row, vocab);
        if best.as_ref().map_or(true, |b| hits.mandatory_count() > b.mandatory_count()) {
            best = Some(hits);
        }
    }
    best.map(|b| b.missing())
        .unwrap_or_else(|| vec!["service", "unit", "value"])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|s| Cell::Text((*s).into())).collect()
    }

    #[test]
    fn header_found_with_accented_uppercase_cells() {
        let grid: Grid = vec![
            vec![Cell::Empty, Cell::Empty],
            text_row(&["Tabela de Preços 2026"]),
            text_row(&["SERVIÇO", "UNIDADE", "VALOR UNITÁRIO", "ESCOPO"]),
        ];
        let m = locate_header(&grid, &HeaderVocabulary::default()).unwrap();
        assert_eq!(m.row, 2);
        assert_eq!(m.service, 0);
        assert_eq!(m.unit, 1);
        assert_eq!(m.value, 2);
        assert_eq!(m.scope, Some(3));
    }

    #[test]
    fn scope_column_is_optional() {
        let grid: Grid = vec![text_row(&["Item", "Unid.", "Preço"])];
        let m = locate_header(&grid, &HeaderVocabulary::default()).unwrap();
        assert_eq!(m.row, 0);
        assert_eq!(m.scope, None);
    }

    #[test]
    fn first_match_wins_per_column() {
        // Two value-ish cells: the leftmost is taken.
        let grid: Grid = vec![text_row(&["serviço", "unid", "preço kg", "valor total"])];
        let m = locate_header(&grid, &HeaderVocabulary::default()).unwrap();
        assert_eq!(m.value, 2);
    }

    #[test]
    fn rows_beyond_bound_are_not_searched() {
        let mut grid: Grid = vec![vec![Cell::Empty]; HEADER_SCAN_ROWS];
        grid.push(text_row(&["serviço", "unidade", "valor"]));
        assert!(locate_header(&grid, &HeaderVocabulary::default()).is_none());

        // Row 49 is still inside the bound.
        let mut grid: Grid = vec![vec![Cell::Empty]; HEADER_SCAN_ROWS - 1];
        grid.push(text_row(&["serviço", "unidade", "valor"]));
        let m = locate_header(&grid, &HeaderVocabulary::default()).unwrap();
        assert_eq!(m.row, HEADER_SCAN_ROWS - 1);
    }

    #[test]
    fn missing_columns_reported_from_best_row() {
        let grid: Grid = vec![
            text_row(&["qualquer coisa"]),
            text_row(&["serviço", "valor"]), // unit never matches
        ];
        assert!(locate_header(&grid, &HeaderVocabulary::default()).is_none());
        assert_eq!(unmatched_required(&grid, &HeaderVocabulary::default()), vec!["unit"]);
    }

    #[test]
    fn toml_override_extends_vocabulary() {
        let vocab = HeaderVocabulary::from_toml_str(
            r#"
            service = ["produto"]
            value = ["custo"]
            "#,
        )
        .unwrap();
        let grid: Grid = vec![text_row(&["Produto", "Unidade", "Custo"])];
        assert!(locate_header(&grid, &vocab).is_some());
        // Defaults for omitted keys survive.
        assert_eq!(vocab.unit, HeaderVocabulary::default().unit);

        assert!(HeaderVocabulary::from_toml_str("service = 3").is_err());
    }
}
