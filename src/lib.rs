//! Storefront
//!
//! Shopping cart state for a storefront: products, cart actions and the
//! reducer that applies them, plus YAML fixtures and a printable summary.

pub mod actions;
pub mod cart;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod store;
pub mod summary;
