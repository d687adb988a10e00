//! Prices

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD, VND},
};
use thiserror::Error;

use crate::items::LineItem;

/// A money amount in one of the ISO currencies.
pub type Price = Money<'static, Currency>;

/// Errors that can occur while parsing a price string.
#[derive(Debug, Error, PartialEq)]
pub enum PriceParseError {
    /// Not in the `AMOUNT CURRENCY` format.
    #[error("expected format 'AMOUNT CURRENCY', got: {0}")]
    Format(String),

    /// The amount is not a non-negative number representable in minor units.
    #[error("invalid amount: {0}")]
    Amount(String),

    /// Unknown currency code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Price of `quantity` units, saturating at the bounds of the minor unit type.
pub fn line_total(unit_price: &Price, quantity: u32) -> Price {
    let minor = unit_price
        .to_minor_units()
        .saturating_mul(i64::from(quantity));

    Money::from_minor(minor, unit_price.currency())
}

/// Sum of the line totals of `items`, in `currency`.
///
/// An empty sequence totals to zero.
pub fn total_price<'i>(
    items: impl IntoIterator<Item = &'i LineItem>,
    currency: &'static Currency,
) -> Price {
    let minor = items.into_iter().fold(0_i64, |acc, item| {
        acc.saturating_add(item.line_total().to_minor_units())
    });

    Money::from_minor(minor, currency)
}

/// Looks up one of the currencies the storefront can be priced in.
pub fn currency_from_code(code: &str) -> Option<&'static Currency> {
    match code {
        "VND" => Some(VND),
        "USD" => Some(USD),
        "GBP" => Some(GBP),
        "EUR" => Some(EUR),
        _ => None,
    }
}

/// Parse a price string (e.g. `"25000 VND"` or `"2.99 GBP"`).
///
/// # Errors
///
/// Returns an error if the string is not in the format `AMOUNT CURRENCY`, if the
/// amount is negative or cannot be represented in minor units, or if the currency
/// code is not recognised.
pub fn parse_price(s: &str) -> Result<Price, PriceParseError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(PriceParseError::Format(s.to_string()));
    };

    let currency =
        currency_from_code(code).ok_or_else(|| PriceParseError::UnknownCurrency(code.to_string()))?;

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| PriceParseError::Amount(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(PriceParseError::Amount(s.to_string()));
    }

    let minor_units = 10_i64
        .checked_pow(currency.exponent)
        .and_then(|scale| amount.checked_mul(Decimal::from(scale)))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| PriceParseError::Amount(s.to_string()))?;

    Ok(Money::from_minor(minor_units, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::testing::product_ref;

    use super::*;

    #[test]
    fn line_total_multiplies_unit_price() {
        let unit = Price::from_minor(25_000, VND);

        assert_eq!(line_total(&unit, 3), Price::from_minor(75_000, VND));
    }

    #[test]
    fn line_total_saturates() {
        let unit = Price::from_minor(i64::MAX / 2, VND);

        assert_eq!(line_total(&unit, 4), Price::from_minor(i64::MAX, VND));
    }

    #[test]
    fn total_price_sums_line_totals() {
        let mut tea = LineItem::from(product_ref(1, 25_000));
        tea.increment();

        let coffee = LineItem::from(product_ref(2, 30_000));

        assert_eq!(
            total_price([&tea, &coffee], VND),
            Price::from_minor(80_000, VND)
        );
    }

    #[test]
    fn total_price_empty_is_zero() {
        let items: [LineItem; 0] = [];

        assert_eq!(total_price(&items, VND), Price::from_minor(0, VND));
    }

    #[test]
    fn parse_price_vnd_has_no_minor_digits() -> TestResult {
        assert_eq!(parse_price("25000 VND")?, Price::from_minor(25_000, VND));

        Ok(())
    }

    #[test]
    fn parse_price_scales_by_currency_exponent() -> TestResult {
        assert_eq!(parse_price("2.99 GBP")?, Price::from_minor(299, GBP));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_bad_input() {
        assert!(matches!(
            parse_price("25000"),
            Err(PriceParseError::Format(_))
        ));
        assert!(matches!(
            parse_price("25000 VND extra"),
            Err(PriceParseError::Format(_))
        ));
        assert!(matches!(
            parse_price("abc VND"),
            Err(PriceParseError::Amount(_))
        ));
        assert!(matches!(
            parse_price("-5 VND"),
            Err(PriceParseError::Amount(_))
        ));
        assert!(matches!(
            parse_price("5 XYZ"),
            Err(PriceParseError::UnknownCurrency(code)) if code == "XYZ"
        ));
    }
}
