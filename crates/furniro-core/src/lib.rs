//! # furniro-core: Pure Session Logic for the Furniro Storefront
//!
//! This crate holds everything the storefront decides on its own, as pure
//! functions and plain data with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Furniro Storefront Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Page Components                              │   │
//! │  │    Home ──► Shop ──► Product ──► Wishlist ──► Checkout          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Storefront Commands (apps/storefront)           │   │
//! │  │    add_to_cart, toggle_comparison, place_order, etc.            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ furniro-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐  │   │
//! │  │   │  store  │ │  money  │ │  order  │ │validation│ │catalog │  │   │
//! │  │   │  cart   │ │  Money  │ │ OrderDoc│ │ billing  │ │ records│  │   │
//! │  │   │  liked  │ │         │ │         │ │  rules   │ │ search │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              furniro-content (Content Backend Seam)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ImageRef)
//! - [`money`] - Money type with integer arithmetic
//! - [`store`] - Cart / wishlist / comparison state container
//! - [`catalog`] - Fetch-boundary normalization, search, listings
//! - [`validation`] - Billing form rules and input checks
//! - [`order`] - Order document written to the content backend
//! - [`payment`] - Amount handed to the hosted payment widget
//! - [`notice`] - Transient messages describing each user action
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use furniro_core::money::Money;
//! use furniro_core::store::SessionStore;
//! use furniro_core::types::Product;
//!
//! let mut store = SessionStore::new();
//! let chair = Product::new("a", "Asgaard chair", Money::from_cents(1000));
//!
//! store.add_to_cart(&chair);
//! store.add_to_cart(&chair.clone().with_quantity(2));
//!
//! assert_eq!(store.cart()[0].quantity, 3);
//! assert_eq!(store.cart_total().cents(), 3000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod notice;
pub mod order;
pub mod payment;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{SessionStore, StoreOutcome};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of products in the comparison set.
///
/// The side-by-side view has exactly two columns; a third add is rejected,
/// never truncated.
pub const MAX_COMPARISON_ITEMS: usize = 2;

/// Maximum quantity of a single item in cart.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Highest unit price accepted from the content backend, in cents
/// ($10,000,000.00). Records priced above it are rejected at the fetch
/// boundary.
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;

/// Maximum length of a search query after normalization.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

/// Currency the storefront prices are expressed in.
pub const DEFAULT_CURRENCY: &str = "usd";
