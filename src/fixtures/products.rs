//! Product Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::products::ProductRecord;

/// Wrapper for a product catalogue in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product key -> product record
    pub products: FxHashMap<String, ProductRecord>,
}
