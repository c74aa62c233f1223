//! Currency amount normalization.

/// Fixed USD -> EUR rate applied when a dollar marker is seen.
pub const USD_TO_EUR: f64 = 0.94;

/// Strips currency symbols and thousands separators down to a plain amount.
///
/// Keeps ASCII digits, the decimal point and the minus sign; everything else
/// (currency marks, commas, stray text) is dropped. When nothing numeric
/// remains the amount is 0, the lenient unformat contract the feed's values
/// were written against.
pub fn strip_currency(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_symbols_and_separators() {
        assert_eq!(strip_currency("€125,044"), 125044.0);
        assert_eq!(strip_currency("$100"), 100.0);
        assert_eq!(strip_currency("1,234.56"), 1234.56);
        assert_eq!(strip_currency("-250"), -250.0);
    }

    #[test]
    fn non_numeric_residue_is_zero() {
        assert_eq!(strip_currency(""), 0.0);
        assert_eq!(strip_currency("n/a"), 0.0);
        assert_eq!(strip_currency("€"), 0.0);
    }
}
