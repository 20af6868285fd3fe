//! Cart Store
//!
//! [`reduce`] is the only place cart transitions happen. [`CartStore`] owns
//! the current state and feeds dispatched actions through it; callers pass the
//! store around explicitly rather than reaching for a shared global.

use std::mem;

use tracing::{debug, trace};

use crate::{
    actions::CartAction,
    cart::{CartState, add_to_cart, remove_from_cart},
};

/// Compute the next cart state from `state` and `action`.
///
/// Unrecognized actions return `state` unchanged.
pub fn reduce<'a>(state: CartState<'a>, action: CartAction<'a>) -> CartState<'a> {
    match action {
        CartAction::AddToCart(product) => add_to_cart(state, product),
        CartAction::RemoveFromCart(product) => remove_from_cart(state, &product),
        CartAction::Unrecognized(_) => state,
    }
}

/// Store holding the current cart state.
#[derive(Debug, Default)]
pub struct CartStore<'a> {
    state: CartState<'a>,
    dispatched: usize,
}

impl<'a> CartStore<'a> {
    /// Create a store with an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store starting from `state`.
    #[must_use]
    pub fn with_state(state: CartState<'a>) -> Self {
        Self {
            state,
            dispatched: 0,
        }
    }

    /// Apply `action` to the current state and return the new state.
    pub fn dispatch(&mut self, action: CartAction<'a>) -> &CartState<'a> {
        self.dispatched += 1;

        if let CartAction::Unrecognized(kind) = &action {
            trace!(action = %kind, "ignoring unrecognized cart action");
        } else {
            debug!(action = action.action_type(), "dispatching cart action");
        }

        let state = mem::take(&mut self.state);
        self.state = reduce(state, action);

        debug!(items = self.state.len(), "cart updated");

        &self.state
    }

    /// Apply each action in order and return the final state.
    pub fn dispatch_all(
        &mut self,
        actions: impl IntoIterator<Item = CartAction<'a>>,
    ) -> &CartState<'a> {
        for action in actions {
            self.dispatch(action);
        }

        &self.state
    }

    /// The current cart state.
    #[must_use]
    pub fn state(&self) -> &CartState<'a> {
        &self.state
    }

    /// Number of actions dispatched so far, including unrecognized ones.
    #[must_use]
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Consume the store, returning the current state.
    #[must_use]
    pub fn into_state(self) -> CartState<'a> {
        self.state
    }
}
