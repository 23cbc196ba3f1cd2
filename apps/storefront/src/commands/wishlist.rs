//! # Wishlist Commands
//!
//! The heart icon on product cards and the wishlist page.

use tracing::debug;

use furniro_core::notice::Notice;
use furniro_core::Product;

use super::ListUpdate;
use crate::state::StoreState;

/// Gets the liked products in the order they were liked.
pub fn get_wishlist(store: &StoreState) -> Vec<Product> {
    debug!("get_wishlist command");
    store.with_store(|s| s.liked_products().to_vec())
}

/// Likes a product. Liking it again leaves the wishlist unchanged.
pub fn like_product(store: &StoreState, product: Product) -> ListUpdate {
    debug!(product_id = %product.id, "like_product command");

    let (outcome, items) = store.with_store_mut(|s| {
        let outcome = s.like_product(&product);
        (outcome, s.liked_products().to_vec())
    });

    ListUpdate {
        items,
        outcome,
        notice: Notice::for_like(&product, outcome),
    }
}

/// Removes a product from the wishlist by id.
pub fn unlike_product(store: &StoreState, product_id: &str) -> ListUpdate {
    debug!(product_id = %product_id, "unlike_product command");

    let (outcome, items) = store.with_store_mut(|s| {
        let outcome = s.unlike_product(product_id);
        (outcome, s.liked_products().to_vec())
    });

    ListUpdate {
        items,
        outcome,
        notice: Notice::for_unlike(outcome),
    }
}

/// Heart icon: unlikes a liked product, likes it otherwise.
pub fn toggle_like(store: &StoreState, product: Product) -> ListUpdate {
    debug!(product_id = %product.id, "toggle_like command");

    let (outcome, items) = store.with_store_mut(|s| {
        let outcome = s.toggle_like(&product);
        (outcome, s.liked_products().to_vec())
    });

    ListUpdate {
        items,
        outcome,
        notice: Notice::for_like(&product, outcome),
    }
}
