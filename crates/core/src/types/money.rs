//! Currency formatting for BRL amounts.
//!
//! Prices are carried as [`rust_decimal::Decimal`] throughout the domain and
//! only formatted at display boundaries (storefront views, order messages).
//! Brazilian convention: two decimal digits, comma separator, no thousands
//! grouping.

use rust_decimal::Decimal;

/// Format a decimal amount with two digits and a comma separator.
///
/// ```rust
/// # use hott_rossi_core::types::money::format_amount;
/// # use rust_decimal::Decimal;
/// assert_eq!(format_amount(Decimal::new(4590, 2)), "45,90");
/// ```
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("{amount:.2}").replace('.', ",")
}

/// Format a decimal amount as a display price, e.g. `R$ 45,90`.
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    format!("R$ {}", format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimal_places() {
        assert_eq!(format_amount(Decimal::new(459, 1)), "45,90");
        assert_eq!(format_amount(Decimal::new(5500, 2)), "55,00");
        assert_eq!(format_amount(Decimal::ZERO), "0,00");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_amount(Decimal::new(12_346, 3)), "12,35");
        assert_eq!(format_amount(Decimal::new(12_344, 3)), "12,34");
    }

    #[test]
    fn no_thousands_grouping() {
        assert_eq!(format_brl(Decimal::new(123_456, 2)), "R$ 1234,56");
    }
}
