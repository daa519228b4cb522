// Terminal display formatting, pt-BR convention:
// dot thousands grouping, comma decimals. Presentation only — the model
// keeps exact f64 values and rounding happens here, at the last moment.

/// Money: two decimal places, "1.234,56".
pub(crate) fn format_brl(value: f64) -> String {
    format_decimal(value, 2)
}

/// Quantities/weights: three decimal places, "693,000".
pub(crate) fn format_qty(value: f64) -> String {
    format_decimal(value, 3)
}

fn format_decimal(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped},{frac_part}")
}
