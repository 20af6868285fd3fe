//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    actions::{ADD_TO_CART, ActionError, ActionRecord, CartAction, REMOVE_FROM_CART},
    cart::{CartState, add_to_cart, remove_from_cart},
    fixtures::{Fixture, FixtureError},
    pricing::{PricingError, total_price},
    products::{Product, ProductKey, ProductRecord},
    store::{CartStore, reduce},
    summary::{CartSummary, SummaryError},
};
