//! Order pricing.
//!
//! Totals are computed once at order-creation time and never recomputed, so
//! the arithmetic must be exact: `Decimal` instead of floating point avoids
//! rounding drift on repeated cent values.

use rust_decimal::Decimal;

/// Compute the total amount for an order line.
///
/// `total = unit_price × quantity`, exact decimal multiplication.
#[must_use]
pub fn order_total(unit_price: Decimal, quantity: u32) -> Decimal {
    unit_price * Decimal::from(quantity)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_total_is_exact() {
        let price = Decimal::from_str_exact("19.99").unwrap();
        assert_eq!(
            order_total(price, 3),
            Decimal::from_str_exact("59.97").unwrap()
        );
    }

    #[test]
    fn test_zero_quantity() {
        let price = Decimal::from_str_exact("4.50").unwrap();
        assert_eq!(order_total(price, 0), Decimal::ZERO);
    }

    #[test]
    fn test_zero_price() {
        assert_eq!(order_total(Decimal::ZERO, 100), Decimal::ZERO);
    }

    #[test]
    fn test_no_drift_on_cent_values() {
        // 0.10 * 3 must be exactly 0.30, the classic f64 failure case
        let price = Decimal::from_str_exact("0.10").unwrap();
        assert_eq!(
            order_total(price, 3),
            Decimal::from_str_exact("0.30").unwrap()
        );
    }
}
