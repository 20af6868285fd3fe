//! Pricing

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money, MoneyError,
    iso::{Currency, EUR, GBP, USD},
};
use thiserror::Error;

use crate::products::Product;

/// Errors that can occur while parsing prices or totalling products.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A product's currency differs from the requested one.
    ///
    /// Fields: index, product currency, requested currency.
    #[error("Product {0} has currency {1}, but cart is priced in {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// Wrapped money arithmetic error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Calculates the total price of a list of products in the given currency.
///
/// An empty list totals zero.
///
/// # Errors
///
/// - [`PricingError::CurrencyMismatch`]: a product is priced in another currency.
/// - [`PricingError::Money`]: wrapped money arithmetic error.
pub fn total_price<'a>(
    products: &[Product<'a>],
    currency: &'static Currency,
) -> Result<Money<'a, Currency>, PricingError> {
    products
        .iter()
        .enumerate()
        .try_fold(Money::from_minor(0, currency), |acc, (i, product)| {
            let product_currency = product.price.currency();

            if product_currency != currency {
                return Err(PricingError::CurrencyMismatch(
                    i,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            acc.add(product.price).map_err(PricingError::from)
        })
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal number with at most two
/// decimal places, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), PricingError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(PricingError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| PricingError::InvalidPrice(s.to_string()))?
        .normalize();

    // Amounts must be whole minor units and not negative.
    if amount.scale() > 2 || amount.is_sign_negative() {
        return Err(PricingError::InvalidPrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.to_i64())
        .ok_or_else(|| PricingError::InvalidPrice(s.to_string()))?;

    let currency = match currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(PricingError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
