//! Custom Askama template filters.

use std::fmt::Display;

/// Format a money amount with two decimal places.
///
/// Usage in templates: `{{ product.price|money }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn money(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("{value:.2}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    #[test]
    fn test_money_pads_and_rounds() {
        let one_dp = Decimal::from_str_exact("19.9").unwrap();
        assert_eq!(format!("{one_dp:.2}"), "19.90");
        let exact = Decimal::from_str_exact("59.97").unwrap();
        assert_eq!(format!("{exact:.2}"), "59.97");
    }
}
