//! # Domain Types
//!
//! Core domain types shared by the store, the catalog boundary and checkout.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    ImageRef     │   │  ProductRecord  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  (catalog.rs)   │       │
//! │  │  id             │   │  asset_ref      │   │  raw wire shape │       │
//! │  │  title          │   │                 │   │  normalized ──► │       │
//! │  │  price (Money)  │   └─────────────────┘   │  into Product   │       │
//! │  │  quantity       │                          └─────────────────┘       │
//! │  │  tags, ...      │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `id`, `price` and `quantity` carry meaning for the store. The other
//! attributes are display data passed through untouched.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Image Reference
// =============================================================================

/// Reference to an image asset held by the content backend.
///
/// URL construction belongs to the page layer; the session only carries the
/// asset reference around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    /// Asset document id, e.g. `image-3f2c...-800x600-png`.
    pub asset_ref: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product listed by the storefront.
///
/// Each store list keeps its own clone, so later changes to a cart entry's
/// quantity never leak into the wishlist or comparison copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier (`_id` in the content backend).
    pub id: String,

    /// Display name.
    pub title: String,

    /// Unit price.
    pub price: Money,

    /// Units of this product. Meaningful in the cart only; 0 means
    /// "unspecified" and counts as 1 when added.
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Shows the "New" badge.
    #[serde(default)]
    pub is_new: bool,

    #[serde(default)]
    pub description: String,

    /// Whole-percent discount shown on the card (0-100).
    #[serde(default)]
    pub discount_percentage: u32,

    #[serde(default)]
    pub product_image: Option<ImageRef>,

    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_quantity() -> u32 {
    1
}

impl Product {
    /// Creates a product with a quantity of 1 and empty display attributes.
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            title: title.into(),
            price,
            quantity: default_quantity(),
            is_new: false,
            description: String::new(),
            discount_percentage: 0,
            product_image: None,
            tags: Vec::new(),
        }
    }

    /// Returns the product with the given quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Returns the product with the given tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Quantity to use when this product is added to the cart.
    #[inline]
    pub fn requested_quantity(&self) -> u32 {
        self.quantity.max(1)
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }

    /// Price before the advertised discount, if one applies.
    pub fn original_price(&self) -> Option<Money> {
        if self.discount_percentage == 0 || self.discount_percentage >= 100 {
            return None;
        }
        let cents = self.price.cents() * 100 / (100 - self.discount_percentage as i64);
        Some(Money::from_cents(cents))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
