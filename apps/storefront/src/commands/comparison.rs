//! # Comparison Commands
//!
//! The "Compare" button on product cards and the comparison page.
//!
//! ```text
//!  [ ]  [ ]  ── add ──►  [A]  [ ]  ── add ──►  [A]  [B]  ── add C ──► rejected
//!                                               ▲
//!                          toggle A ────────────┘ removes A
//! ```

use tracing::debug;

use furniro_core::notice::Notice;
use furniro_core::Product;

use super::ListUpdate;
use crate::state::StoreState;

/// Gets the products being compared.
pub fn get_comparison(store: &StoreState) -> Vec<Product> {
    debug!("get_comparison command");
    store.with_store(|s| s.comparison().to_vec())
}

/// Adds a product to the comparison set (max 2).
pub fn add_to_comparison(store: &StoreState, product: Product) -> ListUpdate {
    debug!(product_id = %product.id, "add_to_comparison command");

    let (outcome, items) = store.with_store_mut(|s| {
        let outcome = s.add_to_comparison(&product);
        (outcome, s.comparison().to_vec())
    });

    ListUpdate {
        items,
        outcome,
        notice: Notice::for_comparison(&product, outcome),
    }
}

/// Removes a product from the comparison set by id.
pub fn remove_from_comparison(store: &StoreState, product_id: &str) -> ListUpdate {
    debug!(product_id = %product_id, "remove_from_comparison command");

    let (removed, outcome, items) = store.with_store_mut(|s| {
        let removed = s
            .comparison()
            .iter()
            .find(|p| p.id == product_id)
            .cloned();
        let outcome = s.remove_from_comparison(product_id);
        (removed, outcome, s.comparison().to_vec())
    });

    let notice = match removed {
        Some(product) => Notice::for_comparison(&product, outcome),
        None => Notice::info("Product is not in comparison."),
    };

    ListUpdate {
        items,
        outcome,
        notice,
    }
}

/// Compare button: removes a compared product, adds it otherwise.
pub fn toggle_comparison(store: &StoreState, product: Product) -> ListUpdate {
    debug!(product_id = %product.id, "toggle_comparison command");

    let (outcome, items) = store.with_store_mut(|s| {
        let outcome = s.toggle_comparison(&product);
        (outcome, s.comparison().to_vec())
    });

    ListUpdate {
        items,
        outcome,
        notice: Notice::for_comparison(&product, outcome),
    }
}
