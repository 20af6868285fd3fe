//! Actions
//!
//! Cart actions are tagged values describing a requested transition. On the
//! wire they travel as `{ "type": "ADD_TO_CART", "payload": { ... } }`
//! records; any `type` the cart does not know decodes to
//! [`CartAction::Unrecognized`] and is ignored by the reducer.

use serde::Deserialize;
use thiserror::Error;

use crate::{
    pricing::PricingError,
    products::{Product, ProductRecord},
};

/// Type tag of the add action.
pub const ADD_TO_CART: &str = "ADD_TO_CART";

/// Type tag of the remove action.
pub const REMOVE_FROM_CART: &str = "REMOVE_FROM_CART";

/// Errors raised while decoding actions.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The action record is not valid JSON or has the wrong shape.
    #[error("Failed to parse action: {0}")]
    Json(#[from] serde_json::Error),

    /// A recognized action arrived without a product payload.
    #[error("Action {0} requires a product payload")]
    MissingPayload(String),

    /// The payload's price could not be read.
    #[error("Invalid action payload: {0}")]
    Payload(#[from] PricingError),
}

/// Cart Action
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction<'a> {
    /// Append a product to the cart.
    AddToCart(Product<'a>),

    /// Remove the first line item matching the product.
    RemoveFromCart(Product<'a>),

    /// An action type the cart does not handle.
    Unrecognized(String),
}

impl<'a> CartAction<'a> {
    /// Create an add action for `product`.
    pub fn add_to_cart(product: Product<'a>) -> Self {
        Self::AddToCart(product)
    }

    /// Create a remove action for `product`.
    pub fn remove_from_cart(product: Product<'a>) -> Self {
        Self::RemoveFromCart(product)
    }

    /// Build an action from its type tag and optional payload.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingPayload`] if a recognized type has no payload.
    pub fn from_parts(kind: String, payload: Option<Product<'a>>) -> Result<Self, ActionError> {
        let variant: fn(Product<'a>) -> Self = if kind == ADD_TO_CART {
            Self::AddToCart
        } else if kind == REMOVE_FROM_CART {
            Self::RemoveFromCart
        } else {
            return Ok(Self::Unrecognized(kind));
        };

        payload
            .map(variant)
            .ok_or(ActionError::MissingPayload(kind))
    }

    /// Decode a single JSON action record.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] if the JSON is malformed or the payload is invalid.
    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        let record: ActionRecord = serde_json::from_str(json)?;

        record.try_into()
    }

    /// Decode a JSON array of action records.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] for the first record that fails to decode.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, ActionError> {
        let records: Vec<ActionRecord> = serde_json::from_str(json)?;

        records.into_iter().map(Self::try_from).collect()
    }

    /// The type tag of the action.
    pub fn action_type(&self) -> &str {
        match self {
            Self::AddToCart(_) => ADD_TO_CART,
            Self::RemoveFromCart(_) => REMOVE_FROM_CART,
            Self::Unrecognized(kind) => kind.as_str(),
        }
    }

    /// The product carried by the action, if any.
    pub fn payload(&self) -> Option<&Product<'a>> {
        match self {
            Self::AddToCart(product) | Self::RemoveFromCart(product) => Some(product),
            Self::Unrecognized(_) => None,
        }
    }
}

/// Serialized action record.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRecord {
    /// Action type tag
    #[serde(rename = "type")]
    pub kind: String,

    /// Product payload
    #[serde(default)]
    pub payload: Option<ProductRecord>,
}

impl TryFrom<ActionRecord> for CartAction<'_> {
    type Error = ActionError;

    fn try_from(record: ActionRecord) -> Result<Self, Self::Error> {
        let ActionRecord { kind, payload } = record;

        let payload = payload.map(Product::try_from).transpose()?;

        CartAction::from_parts(kind, payload)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use super::*;

    fn product_mock<'a>() -> Product<'a> {
        Product::new(
            "1",
            "Camiseta",
            Money::from_minor(2500, USD),
            "https://example.com/camiseta.png",
        )
        .with_description("bla bla bla")
    }

    const PRODUCT_JSON: &str = r#"{
        "id": "1",
        "title": "Camiseta",
        "price": "25.00 USD",
        "image": "https://example.com/camiseta.png",
        "description": "bla bla bla"
    }"#;

    #[test]
    fn add_to_cart_creator_wraps_payload() {
        let action = CartAction::add_to_cart(product_mock());

        assert_eq!(action, CartAction::AddToCart(product_mock()));
        assert_eq!(action.action_type(), ADD_TO_CART);
    }

    #[test]
    fn remove_from_cart_creator_wraps_payload() {
        let action = CartAction::remove_from_cart(product_mock());

        assert_eq!(action, CartAction::RemoveFromCart(product_mock()));
        assert_eq!(action.action_type(), REMOVE_FROM_CART);
    }

    #[test]
    fn payload_is_exposed_for_cart_actions() {
        let product = product_mock();

        assert_eq!(CartAction::add_to_cart(product.clone()).payload(), Some(&product));
        assert_eq!(CartAction::Unrecognized("RESET".to_string()).payload(), None);
    }

    #[test]
    fn from_json_decodes_add_action() -> TestResult {
        let json = format!(r#"{{"type":"ADD_TO_CART","payload":{PRODUCT_JSON}}}"#);

        let action = CartAction::from_json(&json)?;

        assert_eq!(action, CartAction::add_to_cart(product_mock()));

        Ok(())
    }

    #[test]
    fn from_json_decodes_remove_action() -> TestResult {
        let json = format!(r#"{{"type":"REMOVE_FROM_CART","payload":{PRODUCT_JSON}}}"#);

        let action = CartAction::from_json(&json)?;

        assert_eq!(action, CartAction::remove_from_cart(product_mock()));

        Ok(())
    }

    #[test]
    fn from_json_keeps_unknown_types() -> TestResult {
        let action = CartAction::from_json(r#"{"type":"UNKNOWN"}"#)?;

        assert_eq!(action, CartAction::Unrecognized("UNKNOWN".to_string()));
        assert_eq!(action.action_type(), "UNKNOWN");

        Ok(())
    }

    #[test]
    fn from_json_rejects_missing_payload() {
        let result = CartAction::from_json(r#"{"type":"ADD_TO_CART"}"#);

        assert!(matches!(result, Err(ActionError::MissingPayload(kind)) if kind == ADD_TO_CART));
    }

    fn add_action_json(price: &str) -> String {
        serde_json::json!({
            "type": ADD_TO_CART,
            "payload": { "id": "1", "name": "x", "price": price, "image": "x.png" }
        })
        .to_string()
    }

    #[test]
    fn from_json_rejects_bad_price() {
        assert!(matches!(
            CartAction::from_json(&add_action_json("25")),
            Err(ActionError::Payload(PricingError::InvalidPrice(_)))
        ));
    }

    #[test]
    fn from_json_rejects_sub_cent_price() {
        assert!(matches!(
            CartAction::from_json(&add_action_json("19.995 USD")),
            Err(ActionError::Payload(PricingError::InvalidPrice(price))) if price == "19.995 USD"
        ));
    }

    #[test]
    fn from_json_rejects_negative_price() {
        assert!(matches!(
            CartAction::from_json(&add_action_json("-5.00 USD")),
            Err(ActionError::Payload(PricingError::InvalidPrice(price))) if price == "-5.00 USD"
        ));
    }

    #[test]
    fn from_json_rejects_missing_type() {
        assert!(matches!(
            CartAction::from_json(r#"{"payload":null}"#),
            Err(ActionError::Json(_))
        ));
    }

    #[test]
    fn list_from_json_preserves_order() -> TestResult {
        let json = format!(
            r#"[
                {{"type":"ADD_TO_CART","payload":{PRODUCT_JSON}}},
                {{"type":"NOOP"}},
                {{"type":"REMOVE_FROM_CART","payload":{PRODUCT_JSON}}}
            ]"#
        );

        let actions = CartAction::list_from_json(&json)?;
        let types: Vec<&str> = actions.iter().map(CartAction::action_type).collect();

        assert_eq!(types, [ADD_TO_CART, "NOOP", REMOVE_FROM_CART]);

        Ok(())
    }
}
