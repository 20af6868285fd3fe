//! Cart Summary

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{cart::CartState, pricing::PricingError};

/// Errors that can occur when summarising a cart.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Error calculating the cart subtotal.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Error writing the summary.
    #[error("Failed to write summary: {0}")]
    Io(#[from] io::Error),
}

/// Printable summary of a cart's contents.
#[derive(Debug)]
pub struct CartSummary<'s, 'a> {
    state: &'s CartState<'a>,
    subtotal: Money<'a, Currency>,
}

impl<'s, 'a> CartSummary<'s, 'a> {
    /// Summarise `state`, pricing it in `currency`.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] if the subtotal cannot be calculated.
    pub fn new(
        state: &'s CartState<'a>,
        currency: &'static Currency,
    ) -> Result<Self, SummaryError> {
        let subtotal = state.subtotal(currency)?;

        Ok(Self { state, subtotal })
    }

    /// Cart subtotal
    #[must_use]
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Write the summary table followed by the item count and subtotal.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError::Io`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SummaryError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Id", "Item", "Price"]);

        for (position, product) in self.state.iter().enumerate() {
            builder.push_record([
                (position + 1).to_string(),
                product.id.clone(),
                product.name.clone(),
                product.price.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(3..4), Alignment::right());

        writeln!(out, "\n{table}")?;
        writeln!(out, " Items:    {}", self.state.len())?;
        writeln!(out, " Subtotal: {}", self.subtotal)?;

        Ok(())
    }
}
