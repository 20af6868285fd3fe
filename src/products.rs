//! Products

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use slotmap::new_key_type;

use crate::pricing::{PricingError, parse_price};

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Product
///
/// The cart treats a product as an opaque payload; only `id` takes part in
/// matching when a product is removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product identifier
    pub id: String,

    /// Product display name
    pub name: String,

    /// Product price
    pub price: Money<'a, Currency>,

    /// Product image reference
    pub image: String,

    /// Optional product description
    pub description: Option<String>,
}

impl<'a> Product<'a> {
    /// Create a new product without a description.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money<'a, Currency>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            description: None,
        }
    }

    /// Attach a description to the product.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether `other` refers to the same product, by identifier.
    pub fn same_product(&self, other: &Product<'_>) -> bool {
        self.id == other.id
    }
}

/// Serialized product, as found in action payloads and catalogue fixtures.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    /// Product identifier
    pub id: String,

    /// Product display name
    #[serde(alias = "title")]
    pub name: String,

    /// Product price (e.g., "2.99 GBP")
    pub price: String,

    /// Product image reference
    pub image: String,

    /// Product description
    #[serde(default)]
    pub description: Option<String>,
}

impl TryFrom<ProductRecord> for Product<'_> {
    type Error = PricingError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&record.price)?;

        Ok(Product {
            id: record.id,
            name: record.name,
            price: Money::from_minor(minor_units, currency),
            image: record.image,
            description: record.description,
        })
    }
}
