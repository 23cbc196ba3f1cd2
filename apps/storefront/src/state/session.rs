//! # Session Store State
//!
//! Holds the session's cart, wishlist and comparison lists.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every page reads or writes the same lists
//! 2. Only one command should modify them at a time
//! 3. Commands can run concurrently
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store State Operations                               │
//! │                                                                         │
//! │  Page Action              Command                 Store Transition      │
//! │  ───────────              ───────                 ────────────────      │
//! │                                                                         │
//! │  "Add To Cart" ──────────► add_to_cart() ────────► add_to_cart         │
//! │                                                                         │
//! │  Heart icon ─────────────► toggle_like() ────────► toggle_like         │
//! │                                                                         │
//! │  "Compare" ──────────────► toggle_comparison() ──► toggle_comparison   │
//! │                                                                         │
//! │  Quantity box ───────────► update_cart_item() ───► update_cart_quantity│
//! │                                                                         │
//! │  Cart badge ─────────────► get_cart() ───────────► (read only)         │
//! │                                                                         │
//! │  NOTE: The lock is never held across an await.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use furniro_core::SessionStore;

/// Shared session store.
///
/// Cloning shares the same lists.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    store: Arc<Mutex<SessionStore>>,
}

impl StoreState {
    /// Creates state around an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = store_state.with_store(|s| s.cart_total());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SessionStore) -> R,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// Transitions never panic, so a poisoned lock still holds a
    /// consistent store and is recovered.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SessionStore) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }

    /// Clone of the current lists.
    pub fn snapshot(&self) -> SessionStore {
        self.with_store(SessionStore::clone)
    }
}
