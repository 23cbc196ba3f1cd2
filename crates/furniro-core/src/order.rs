//! # Order Document
//!
//! The document checkout writes to the content backend.
//!
//! ## Write Shape
//! ```text
//! {
//!   "_type": "order",
//!   "firstName": "...", "lastName": "...", "address": "...", "city": "...",
//!   "zipCode": "...", "phone": "...", "email": "...",
//!   "cartItems": [
//!     { "_key": "<uuid>", "_type": "object",
//!       "product": { "_type": "reference", "_ref": "<product id>" },
//!       "quantity": 2 }
//!   ],
//!   "total": 30.5,
//!   "orderDate": "2026-01-01T12:00:00Z",
//!   "status": "pending"
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{validate_billing, BillingDetails};

// =============================================================================
// Order Status
// =============================================================================

/// Fulfilment status of an order. New orders are always `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Success,
    Dispatch,
}

// =============================================================================
// Cart Lines
// =============================================================================

/// Reference to another document by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reference {
    #[serde(rename = "_type")]
    pub ref_type: String,
    #[serde(rename = "_ref")]
    pub reference: String,
}

impl Reference {
    pub fn to(id: impl Into<String>) -> Self {
        Reference {
            ref_type: "reference".to_string(),
            reference: id.into(),
        }
    }
}

/// One cart entry inside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    /// Array-item key; unique within the document.
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub line_type: String,
    pub product: Reference,
    pub quantity: u32,
}

impl OrderLine {
    fn from_cart_entry(entry: &Product) -> Self {
        OrderLine {
            key: Uuid::new_v4().to_string(),
            line_type: "object".to_string(),
            product: Reference::to(entry.id.clone()),
            quantity: entry.requested_quantity(),
        }
    }
}

// =============================================================================
// Order Document
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderDocument {
    #[serde(rename = "_type")]
    pub doc_type: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    pub cart_items: Vec<OrderLine>,
    /// Cart total in major units.
    pub total: f64,
    #[ts(as = "String")]
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
}

impl OrderDocument {
    /// Builds a pending order from the billing form and a cart snapshot.
    ///
    /// ## Errors
    /// - `CoreError::Validation` when any billing rule fails (checked first)
    /// - `CoreError::EmptyCart` when the snapshot has no entries
    pub fn from_checkout(
        details: &BillingDetails,
        cart: &[Product],
        now: DateTime<Utc>,
    ) -> CoreResult<Self> {
        validate_billing(details).into_result()?;

        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let details = details.trimmed();
        let total: Money = cart.iter().map(Product::line_total).sum();

        Ok(OrderDocument {
            doc_type: "order".to_string(),
            first_name: details.first_name,
            last_name: details.last_name,
            address: details.address,
            city: details.city,
            zip_code: details.zip_code,
            phone: details.phone,
            email: details.email,
            cart_items: cart.iter().map(OrderLine::from_cart_entry).collect(),
            total: total.to_major_units(),
            order_date: now,
            status: OrderStatus::Pending,
        })
    }

    /// Sum of line quantities.
    pub fn item_count(&self) -> u32 {
        self.cart_items.iter().map(|line| line.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
