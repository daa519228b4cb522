use crate::grid::Cell;

/// Normalize a price cell to a decimal value.
///
/// Numeric cells pass through untouched. Text goes through the Brazilian
/// price-list normalization: leading `R$` marker stripped, whitespace
/// removed, thousands-separator dots removed, the decimal comma turned into
/// a dot. Anything that still fails to parse degrades to `0.0` — rejecting a
/// 500-row import over one bad cell is worse than a visibly-wrong zero the
/// operator can fix by hand.
pub fn parse_price(cell: &Cell) -> f64 {
    match cell {
        Cell::Number(n) => *n,
        Cell::Empty => 0.0,
        Cell::Text(s) => parse_price_text(s),
    }
}

pub fn parse_price_text(s: &str) -> f64 {
    let cleaned: String = s
        .trim()
        .trim_start_matches("R$")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();
    cleaned.replacen(',', ".", 1).parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_marker_and_grouping() {
        assert_eq!(parse_price_text("R$ 1.234,56"), 1234.56);
        assert_eq!(parse_price_text("R$1.234.567,89"), 1234567.89);
    }

    #[test]
    fn padded_comma_decimal() {
        assert_eq!(parse_price_text("  85,5 "), 85.5);
    }

    #[test]
    fn plain_dot_decimal_loses_its_dot() {
        // The dot is a thousands separator in this convention.
        assert_eq!(parse_price_text("4.55"), 455.0);
    }

    #[test]
    fn garbage_degrades_to_zero() {
        assert_eq!(parse_price_text("a combinar"), 0.0);
        assert_eq!(parse_price_text("12,3,4"), 0.0);
        assert_eq!(parse_price_text(""), 0.0);
    }

    #[test]
    fn numeric_cells_pass_through() {
        assert_eq!(parse_price(&Cell::Number(85.5)), 85.5);
        assert_eq!(parse_price(&Cell::Empty), 0.0);
        assert_eq!(parse_price(&Cell::Text("R$ 99,90".into())), 99.9);
    }
}
