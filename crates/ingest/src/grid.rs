use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A raw cell as decoded from the workbook. Booleans, error values and
/// date serials arrive coerced to text/number by the reader.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

/// Rectangular-or-ragged sheet contents, row-major, first sheet only.
pub type Grid = Vec<Vec<Cell>>;

impl Cell {
    /// String form of the cell, coercing numbers the way the sheet would
    /// display them (integers without a decimal point).
    pub fn text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }

    /// True if the cell is empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }
}

/// Fold text for vocabulary matching: NFD-decompose, drop combining marks,
/// lowercase. "Preço" and "PREÇO" both become "preco".
pub fn fold_text(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_strips_diacritics_and_case() {
        assert_eq!(fold_text("SERVIÇO"), "servico");
        assert_eq!(fold_text("Preço Unitário"), "preco unitario");
        assert_eq!(fold_text("descrição"), "descricao");
        assert_eq!(fold_text("unid."), "unid.");
    }

    #[test]
    fn number_cells_display_like_the_sheet() {
        assert_eq!(Cell::Number(42.0).text(), "42");
        assert_eq!(Cell::Number(85.5).text(), "85.5");
        assert_eq!(Cell::Empty.text(), "");
    }

    #[test]
    fn blankness() {
        assert!(Cell::Empty.is_blank());
        assert!(Cell::Text("   ".into()).is_blank());
        assert!(!Cell::Text("x".into()).is_blank());
        assert!(!Cell::Number(0.0).is_blank());
    }
}
