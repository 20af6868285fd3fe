//! Transition properties of the cart reducer.

use rusty_money::{Money, iso::GBP};

use storefront::prelude::*;

fn product<'a>(id: &str, minor: i64) -> Product<'a> {
    Product::new(id, format!("Product {id}"), Money::from_minor(minor, GBP), format!("{id}.png"))
}

fn sample_states<'a>() -> Vec<CartState<'a>> {
    vec![
        CartState::new(),
        CartState::with_products([product("1", 100)]),
        CartState::with_products([product("1", 100), product("2", 200), product("1", 100)]),
    ]
}

#[test]
fn unrecognized_actions_are_identity_for_every_state() {
    for state in sample_states() {
        for kind in ["UNKNOWN", "", "add_to_cart", "CLEAR_CART"] {
            let action = CartAction::Unrecognized(kind.to_string());

            assert_eq!(reduce(state.clone(), action), state, "action {kind:?}");
        }
    }
}

#[test]
fn add_to_empty_cart_yields_single_item() {
    let state = reduce(CartState::new(), CartAction::add_to_cart(product("1", 100)));

    assert_eq!(state, CartState::with_products([product("1", 100)]));
}

#[test]
fn add_appends_to_the_end_of_every_state() {
    for state in sample_states() {
        let before = state.len();
        let after = reduce(state, CartAction::add_to_cart(product("9", 900)));

        assert_eq!(after.len(), before + 1);
        assert_eq!(after.cart.last(), Some(&product("9", 900)));
    }
}

#[test]
fn add_then_remove_of_new_product_restores_state() {
    for state in sample_states() {
        let before = state.clone();
        let added = reduce(state, CartAction::add_to_cart(product("9", 900)));
        let removed = reduce(added, CartAction::remove_from_cart(product("9", 900)));

        assert_eq!(removed, before);
    }
}

#[test]
fn remove_takes_out_one_occurrence_only() {
    for state in sample_states() {
        let count = state.count("1");
        let after = reduce(state, CartAction::remove_from_cart(product("1", 100)));

        assert_eq!(after.count("1"), count.saturating_sub(1));
    }
}

#[test]
fn remove_absent_product_is_identity() {
    for state in sample_states() {
        let after = reduce(state.clone(), CartAction::remove_from_cart(product("404", 1)));

        assert_eq!(after, state);
    }
}

#[test]
fn action_creators_are_pure() {
    assert_eq!(
        CartAction::add_to_cart(product("1", 100)),
        CartAction::AddToCart(product("1", 100))
    );
    assert_eq!(
        CartAction::remove_from_cart(product("1", 100)),
        CartAction::RemoveFromCart(product("1", 100))
    );
    assert_eq!(
        CartAction::add_to_cart(product("1", 100)),
        CartAction::add_to_cart(product("1", 100))
    );
}
