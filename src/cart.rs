//! Cart

use rusty_money::{Money, iso::Currency};

use crate::{
    pricing::{PricingError, total_price},
    products::Product,
};

/// Cart state: the ordered line items currently in the cart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState<'a> {
    /// Line items in insertion order
    pub cart: Vec<Product<'a>>,
}

impl<'a> CartState<'a> {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cart holding the given products, in order.
    pub fn with_products(products: impl Into<Vec<Product<'a>>>) -> Self {
        Self {
            cart: products.into(),
        }
    }

    /// Calculate the subtotal of the cart in `currency`.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a line item is priced in another currency
    /// or the money arithmetic fails.
    pub fn subtotal(
        &self,
        currency: &'static Currency,
    ) -> Result<Money<'a, Currency>, PricingError> {
        total_price(&self.cart, currency)
    }

    /// Iterate over the line items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.cart.iter()
    }

    /// Whether a product with the given identifier is in the cart.
    pub fn contains(&self, id: &str) -> bool {
        self.cart.iter().any(|product| product.id == id)
    }

    /// Number of line items with the given identifier.
    pub fn count(&self, id: &str) -> usize {
        self.cart.iter().filter(|product| product.id == id).count()
    }

    /// Get the number of line items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }
}

/// Append `product` to the end of the cart.
///
/// Identical products are kept as separate line items.
pub fn add_to_cart<'a>(state: CartState<'a>, product: Product<'a>) -> CartState<'a> {
    let CartState { mut cart } = state;

    cart.push(product);

    CartState { cart }
}

/// Remove the first line item with the same identifier as `product`.
///
/// A product that is not in the cart leaves the state unchanged.
pub fn remove_from_cart<'a>(state: CartState<'a>, product: &Product<'_>) -> CartState<'a> {
    let CartState { mut cart } = state;

    if let Some(position) = cart.iter().position(|item| item.same_product(product)) {
        cart.remove(position);
    }

    CartState { cart }
}
