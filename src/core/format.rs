/// Currency symbol used by report payloads.
pub const EURO: &str = "€";

/// Render an amount the way report payloads display it: symbol, a space,
/// then the digits grouped in thousands with `.`.
pub fn format_amount(value: u64, symbol: &str) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{symbol} {grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract::parse_value;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_amount(0, EURO), "€ 0");
        assert_eq!(format_amount(999, EURO), "€ 999");
        assert_eq!(format_amount(1200, EURO), "€ 1.200");
        assert_eq!(format_amount(1234567, "$"), "$ 1.234.567");
    }

    #[test]
    fn formatted_amounts_parse_back() {
        for value in [0, 7, 1200, 100_000, u64::MAX] {
            assert_eq!(parse_value(format_amount(value, EURO)), value);
        }
    }
}
