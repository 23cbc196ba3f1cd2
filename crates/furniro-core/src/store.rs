//! # Session Store
//!
//! The cart / wishlist / comparison state container shared by every page.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Store Operations                             │
//! │                                                                         │
//! │  Page Action              Transition                State Change        │
//! │  ───────────              ──────────                ────────────        │
//! │                                                                         │
//! │  Add to Cart ───────────► add_to_cart() ─────────► push / qty += n     │
//! │  Change Quantity ───────► update_cart_quantity() ► qty = n (0 removes) │
//! │  Heart button ──────────► toggle_like() ─────────► liked ± product     │
//! │  Compare button ────────► toggle_comparison() ───► comparison ± (≤ 2)  │
//! │                                                                         │
//! │  Every transition returns a StoreOutcome; none of them fail.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Within each list, `id` is unique
//! - `comparison.len() <= MAX_COMPARISON_ITEMS` at all times
//! - Cart quantities are always within 1..=MAX_ITEM_QUANTITY
//! - The three lists are independent and hold their own clones
//!
//! Lists are plain vectors searched linearly; a session holds a handful of
//! products at most.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;
use crate::{MAX_COMPARISON_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Store Outcome
// =============================================================================

/// What a transition did.
///
/// Callers pick the notice to show from this; the store itself never
/// reports an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StoreOutcome {
    /// The product was appended to the list.
    Added,
    /// The product was already in the cart; its quantity grew to `quantity`.
    Incremented { quantity: u32 },
    /// A cart entry's quantity was set.
    Updated { quantity: u32 },
    /// The entry was removed.
    Removed,
    /// Membership unchanged: the product was already in the list.
    AlreadyPresent,
    /// Nothing to remove or update: the id is not in the list.
    NotPresent,
    /// The comparison set is full; state unchanged.
    RejectedAtCap { max: usize },
}

impl StoreOutcome {
    /// True when the transition changed state.
    pub fn changed(&self) -> bool {
        matches!(
            self,
            StoreOutcome::Added
                | StoreOutcome::Incremented { .. }
                | StoreOutcome::Updated { .. }
                | StoreOutcome::Removed
        )
    }
}

// =============================================================================
// Session Store
// =============================================================================

/// Session-scoped product lists.
///
/// Construct one per session (or per test); there is no global instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionStore {
    cart: Vec<Product>,
    liked: Vec<Product>,
    comparison: Vec<Product>,
}

impl SessionStore {
    /// Creates a store with three empty lists.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds a product to the cart or increases the quantity if present.
    ///
    /// ## Behavior
    /// - Not in cart: appends a clone of `product`
    /// - In cart: entry quantity += `product.quantity` (1 when unspecified)
    ///
    /// Quantities saturate at `MAX_ITEM_QUANTITY`.
    pub fn add_to_cart(&mut self, product: &Product) -> StoreOutcome {
        let requested = product.requested_quantity().min(MAX_ITEM_QUANTITY);

        if let Some(entry) = self.cart.iter_mut().find(|p| p.id == product.id) {
            entry.quantity = entry
                .quantity
                .saturating_add(requested)
                .min(MAX_ITEM_QUANTITY);
            return StoreOutcome::Incremented {
                quantity: entry.quantity,
            };
        }

        let mut entry = product.clone();
        entry.quantity = requested;
        self.cart.push(entry);
        StoreOutcome::Added
    }

    /// Removes a cart entry by product id.
    pub fn remove_from_cart(&mut self, id: &str) -> StoreOutcome {
        remove_by_id(&mut self.cart, id)
    }

    /// Sets the quantity of a cart entry.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the entry
    /// - id not in cart: no-op
    pub fn update_cart_quantity(&mut self, id: &str, quantity: i64) -> StoreOutcome {
        if quantity <= 0 {
            return self.remove_from_cart(id);
        }

        let quantity = quantity.min(MAX_ITEM_QUANTITY as i64) as u32;
        match self.cart.iter_mut().find(|p| p.id == id) {
            Some(entry) => {
                entry.quantity = quantity;
                StoreOutcome::Updated { quantity }
            }
            None => StoreOutcome::NotPresent,
        }
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Adds a product to the wishlist unless it is already there.
    pub fn like_product(&mut self, product: &Product) -> StoreOutcome {
        if contains(&self.liked, &product.id) {
            return StoreOutcome::AlreadyPresent;
        }
        self.liked.push(product.clone());
        StoreOutcome::Added
    }

    /// Removes a product from the wishlist.
    pub fn unlike_product(&mut self, id: &str) -> StoreOutcome {
        remove_by_id(&mut self.liked, id)
    }

    /// Unlikes a liked product, likes it otherwise.
    pub fn toggle_like(&mut self, product: &Product) -> StoreOutcome {
        if contains(&self.liked, &product.id) {
            self.unlike_product(&product.id)
        } else {
            self.like_product(product)
        }
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Adds a product to the comparison set.
    ///
    /// The cap is checked before membership, so a full set answers
    /// `RejectedAtCap` even for a product it already holds.
    pub fn add_to_comparison(&mut self, product: &Product) -> StoreOutcome {
        if self.comparison.len() >= MAX_COMPARISON_ITEMS {
            return StoreOutcome::RejectedAtCap {
                max: MAX_COMPARISON_ITEMS,
            };
        }
        if contains(&self.comparison, &product.id) {
            return StoreOutcome::AlreadyPresent;
        }
        self.comparison.push(product.clone());
        StoreOutcome::Added
    }

    /// Removes a product from the comparison set.
    pub fn remove_from_comparison(&mut self, id: &str) -> StoreOutcome {
        remove_by_id(&mut self.comparison, id)
    }

    /// Removes a compared product, adds it otherwise (subject to the cap).
    pub fn toggle_comparison(&mut self, product: &Product) -> StoreOutcome {
        if contains(&self.comparison, &product.id) {
            self.remove_from_comparison(&product.id)
        } else {
            self.add_to_comparison(product)
        }
    }

    // =========================================================================
    // Selectors
    // =========================================================================

    /// Cart entries in insertion order.
    pub fn cart(&self) -> &[Product] {
        &self.cart
    }

    /// Wishlist entries in insertion order.
    pub fn liked_products(&self) -> &[Product] {
        &self.liked
    }

    /// Comparison set in insertion order.
    pub fn comparison(&self) -> &[Product] {
        &self.comparison
    }

    /// Σ price × quantity over the cart; zero for an empty cart.
    pub fn cart_total(&self) -> Money {
        self.cart.iter().map(Product::line_total).sum()
    }

    /// Total units across all cart entries (the header badge).
    pub fn cart_quantity(&self) -> u32 {
        self.cart
            .iter()
            .fold(0u32, |acc, p| acc.saturating_add(p.quantity))
    }

    pub fn cart_entry(&self, id: &str) -> Option<&Product> {
        self.cart.iter().find(|p| p.id == id)
    }

    pub fn is_in_cart(&self, id: &str) -> bool {
        contains(&self.cart, id)
    }

    pub fn is_liked(&self, id: &str) -> bool {
        contains(&self.liked, id)
    }

    pub fn is_compared(&self, id: &str) -> bool {
        contains(&self.comparison, id)
    }

    pub fn comparison_is_full(&self) -> bool {
        self.comparison.len() >= MAX_COMPARISON_ITEMS
    }
}

fn contains(list: &[Product], id: &str) -> bool {
    list.iter().any(|p| p.id == id)
}

fn remove_by_id(list: &mut Vec<Product>, id: &str) -> StoreOutcome {
    let before = list.len();
    list.retain(|p| p.id != id);
    if list.len() == before {
        StoreOutcome::NotPresent
    } else {
        StoreOutcome::Removed
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
