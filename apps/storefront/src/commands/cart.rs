//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │   Form   │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       place_order                        │
//! │                   update_item       (checkout.rs)                      │
//! │                   remove_item                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use furniro_core::notice::Notice;
use furniro_core::validation::validate_quantity;
use furniro_core::{Money, Product, SessionStore, StoreOutcome};

use crate::error::ApiError;
use crate::state::StoreState;

/// Cart totals summary for API responses.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct products.
    pub item_count: usize,
    /// Sum of quantities (the header badge).
    pub total_quantity: u32,
    pub total: Money,
}

impl From<&SessionStore> for CartTotals {
    fn from(store: &SessionStore) -> Self {
        CartTotals {
            item_count: store.cart().len(),
            total_quantity: store.cart_quantity(),
            total: store.cart_total(),
        }
    }
}

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<Product>,
    pub totals: CartTotals,
}

impl From<&SessionStore> for CartResponse {
    fn from(store: &SessionStore) -> Self {
        CartResponse {
            items: store.cart().to_vec(),
            totals: CartTotals::from(store),
        }
    }
}

/// Cart response after a transition.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartUpdate {
    pub cart: CartResponse,
    pub outcome: StoreOutcome,
    pub notice: Option<Notice>,
}

/// Gets the current cart contents.
pub fn get_cart(store: &StoreState) -> CartResponse {
    debug!("get_cart command");
    store.with_store(|s| CartResponse::from(s))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases by `product.quantity`
/// - If product not in cart: a copy is appended
/// - Either way the shopper sees "<title> has been added to the cart."
pub fn add_to_cart(store: &StoreState, product: Product) -> Result<CartUpdate, ApiError> {
    debug!(product_id = %product.id, quantity = product.quantity, "add_to_cart command");

    if product.id.trim().is_empty() {
        return Err(ApiError::validation("Product id is required"));
    }

    let (outcome, cart) = store.with_store_mut(|s| {
        let outcome = s.add_to_cart(&product);
        (outcome, CartResponse::from(&*s))
    });

    Ok(CartUpdate {
        cart,
        outcome,
        notice: Some(Notice::for_cart_add(&product)),
    })
}

/// Sets the quantity of a cart entry.
///
/// ## Behavior
/// - Quantity 0 or below: removes the item
/// - Quantity above the maximum: validation error, cart unchanged
/// - Product not in cart: no-op (`NotPresent`)
pub fn update_cart_item(
    store: &StoreState,
    product_id: &str,
    quantity: i64,
) -> Result<CartUpdate, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    if quantity > 0 {
        validate_quantity(quantity).map_err(|e| ApiError::validation(e.to_string()))?;
    }

    let (outcome, cart) = store.with_store_mut(|s| {
        let outcome = s.update_cart_quantity(product_id, quantity);
        (outcome, CartResponse::from(&*s))
    });

    Ok(CartUpdate {
        cart,
        outcome,
        notice: None,
    })
}

/// Removes an item from the cart. Removing an absent id is a no-op.
pub fn remove_from_cart(store: &StoreState, product_id: &str) -> CartUpdate {
    debug!(product_id = %product_id, "remove_from_cart command");

    let (title, outcome, cart) = store.with_store_mut(|s| {
        let title = s.cart_entry(product_id).map(|p| p.title.clone());
        let outcome = s.remove_from_cart(product_id);
        (title, outcome, CartResponse::from(&*s))
    });

    let notice = title.map(|t| Notice::for_cart_remove(&t, outcome));
    CartUpdate {
        cart,
        outcome,
        notice,
    }
}

/// Clears all items from the cart.
pub fn clear_cart(store: &StoreState) -> CartResponse {
    debug!("clear_cart command");

    store.with_store_mut(|s| {
        s.clear_cart();
        CartResponse::from(&*s)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn chair() -> Product {
        Product::new("a", "Asgaard chair", Money::from_cents(1000))
    }

    #[test]
    fn test_add_twice_increments() {
        let store = StoreState::new();

        let first = add_to_cart(&store, chair()).unwrap();
        assert_eq!(first.outcome, StoreOutcome::Added);

        let second = add_to_cart(&store, chair().with_quantity(2)).unwrap();
        assert_eq!(second.outcome, StoreOutcome::Incremented { quantity: 3 });
        assert_eq!(second.cart.items.len(), 1);
        assert_eq!(second.cart.totals.total, Money::from_cents(3000));
        assert_eq!(
            second.notice.unwrap().message,
            "Asgaard chair has been added to the cart."
        );
    }

    #[test]
    fn test_add_rejects_blank_id() {
        let store = StoreState::new();
        let err = add_to_cart(&store, Product::new(" ", "Ghost", Money::zero())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(get_cart(&store).items.is_empty());
    }

    #[test]
    fn test_update_quantity() {
        let store = StoreState::new();
        add_to_cart(&store, chair()).unwrap();

        let update = update_cart_item(&store, "a", 5).unwrap();
        assert_eq!(update.outcome, StoreOutcome::Updated { quantity: 5 });
        assert_eq!(update.cart.totals.total_quantity, 5);

        let update = update_cart_item(&store, "a", 0).unwrap();
        assert_eq!(update.outcome, StoreOutcome::Removed);
        assert!(update.cart.items.is_empty());
    }

    #[test]
    fn test_update_quantity_over_max_is_rejected() {
        let store = StoreState::new();
        add_to_cart(&store, chair()).unwrap();

        let err = update_cart_item(&store, "a", 1000).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_cart(&store).totals.total_quantity, 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let store = StoreState::new();
        add_to_cart(&store, chair()).unwrap();

        let update = remove_from_cart(&store, "missing");
        assert_eq!(update.outcome, StoreOutcome::NotPresent);
        assert!(update.notice.is_none());
        assert_eq!(update.cart.items.len(), 1);

        let update = remove_from_cart(&store, "a");
        assert_eq!(update.outcome, StoreOutcome::Removed);
        assert!(update.notice.is_some());
    }

    #[test]
    fn test_clear_cart() {
        let store = StoreState::new();
        add_to_cart(&store, chair()).unwrap();

        let cart = clear_cart(&store);
        assert!(cart.items.is_empty());
        assert_eq!(cart.totals.total, Money::zero());
    }
}
