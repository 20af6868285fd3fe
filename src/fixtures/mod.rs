//! Fixtures
//!
//! YAML product catalogues and scripted action lists, laid out under a base
//! path as `products/<name>.yml` and `actions/<name>.yml`.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;
use tracing::debug;

use crate::{
    actions::{ActionError, CartAction},
    cart::CartState,
    fixtures::{actions::ActionsFixture, products::ProductsFixture},
    pricing::{PricingError, parse_price},
    products::{Product, ProductKey},
};

pub mod actions;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid product price
    #[error(transparent)]
    Price(#[from] PricingError),

    /// Invalid scripted action
    #[error(transparent)]
    Action(#[from] ActionError),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Loaded products
    product_meta: SlotMap<ProductKey, Product<'a>>,

    /// String key -> `SlotMap` key mappings for lookups
    product_keys: FxHashMap<String, ProductKey>,

    /// Scripted actions, in load order
    actions: Vec<CartAction<'a>>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            product_meta: SlotMap::with_key(),
            product_keys: FxHashMap::default(),
            actions: Vec::new(),
            currency: None,
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if there are currency mismatches.
    /// On error nothing from the file is kept. Products whose key is already loaded are
    /// replaced.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        // Validate the whole catalogue before touching loaded state.
        let mut currency = self.currency;
        let mut staged = Vec::with_capacity(fixture.products.len());

        for (key, record) in fixture.products {
            let (_minor_units, product_currency) = parse_price(&record.price)?;

            match currency {
                Some(existing) if existing != product_currency => {
                    return Err(FixtureError::CurrencyMismatch(
                        existing.iso_alpha_code.to_string(),
                        product_currency.iso_alpha_code.to_string(),
                    ));
                }
                Some(_) => {}
                None => currency = Some(product_currency),
            }

            let product: Product<'a> = record.try_into()?;

            staged.push((key, product));
        }

        for (key, product) in staged {
            let product_key = self.product_meta.insert(product);

            if let Some(replaced) = self.product_keys.insert(key, product_key) {
                self.product_meta.remove(replaced);
            }
        }

        self.currency = currency;

        debug!(
            fixture = name,
            products = self.product_keys.len(),
            "loaded product fixtures"
        );

        Ok(self)
    }

    /// Load scripted actions from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, if a referenced product
    /// doesn't exist, or if a cart action is missing its product.
    pub fn load_actions(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("actions").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ActionsFixture = serde_norway::from_str(&contents)?;

        for action in fixture.actions {
            let payload = action
                .product
                .as_deref()
                .map(|key| self.product(key).cloned())
                .transpose()?;

            self.actions.push(CartAction::from_parts(action.kind, payload)?);
        }

        debug!(
            fixture = name,
            actions = self.actions.len(),
            "loaded action fixtures"
        );

        Ok(self)
    }

    /// Load a complete fixture set (products and actions with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?.load_actions(name)?;

        Ok(fixture)
    }

    /// Get a product by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, key: &str) -> Result<&Product<'a>, FixtureError> {
        let product_key = self.product_key(key)?;

        self.product_meta
            .get(product_key)
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Get a product key by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product_key(&self, key: &str) -> Result<ProductKey, FixtureError> {
        self.product_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Build a cart holding the products with the given keys, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any product is not found.
    pub fn cart(&self, keys: &[&str]) -> Result<CartState<'a>, FixtureError> {
        let products = keys
            .iter()
            .map(|key| self.product(key).cloned())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CartState::with_products(products))
    }

    /// Get the loaded products
    pub fn product_meta_map(&self) -> &SlotMap<ProductKey, Product<'a>> {
        &self.product_meta
    }

    /// Get the loaded actions, in dispatch order
    pub fn actions(&self) -> &[CartAction<'a>] {
        &self.actions
    }

    /// Take the loaded actions, leaving none behind
    pub fn take_actions(&mut self) -> Vec<CartAction<'a>> {
        std::mem::take(&mut self.actions)
    }

    /// Get the currency shared by the loaded products
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}
