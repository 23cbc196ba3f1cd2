//! # Storefront Commands Module
//!
//! All commands the page components call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports, shared responses)
//! ├── catalog.rs     ◄─── Home, shop, product page, search
//! ├── cart.rs        ◄─── Cart manipulation
//! ├── wishlist.rs    ◄─── Likes
//! ├── comparison.rs  ◄─── Side-by-side comparison (max 2)
//! └── checkout.rs    ◄─── Order placement, payment amount, discount flag
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Page component                                                         │
//! │  ──────────────                                                         │
//! │  toggle_comparison(&sf.store, product)                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command                                                                │
//! │  ───────                                                                │
//! │  1. debug! with structured fields                                       │
//! │  2. one store transition under the lock                                 │
//! │  3. StoreOutcome ──► Notice                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Page receives: { items, outcome, notice }                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the backend
//! async fn load_shop(content: &B) -> Listing
//!
//! // Only needs the store
//! fn get_cart(store: &StoreState) -> CartResponse
//!
//! // Needs store, discount flag and backend
//! async fn place_order(store: &StoreState, discount: &DiscountFlag, content: &B, ...)
//! ```

use serde::Serialize;
use ts_rs::TS;

use furniro_core::notice::Notice;
use furniro_core::{Product, StoreOutcome};

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod comparison;
pub mod wishlist;

/// Response of a wishlist or comparison transition.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ListUpdate {
    /// The list after the transition.
    pub items: Vec<Product>,
    pub outcome: StoreOutcome,
    pub notice: Notice,
}
