//! # Notices
//!
//! Short messages shown after a user action. Each command returns one next
//! to its result; the page decides how to display it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::store::StoreOutcome;
use crate::types::Product;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub const ORDER_CANCELED: &str = "Order placement canceled.";
pub const ORDER_CONFIRMED: &str = "Order confirmed! Processing your order...";
pub const ORDER_PLACED: &str = "Your order has been placed successfully! A confirmation email has been sent to your email address.";
pub const ORDER_FAILED: &str = "Failed to place order. Please try again.";
pub const REMOVED_FROM_WISHLIST: &str = "Product removed from wishlist.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Notice {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    // =========================================================================
    // Store outcomes
    // =========================================================================

    /// After `add_to_cart`. Adding again is still a success.
    pub fn for_cart_add(product: &Product) -> Self {
        Self::success(format!("{} has been added to the cart.", product.title))
    }

    pub fn for_cart_remove(product_title: &str, outcome: StoreOutcome) -> Self {
        match outcome {
            StoreOutcome::Removed => Self::info(format!("{} removed from the cart.", product_title)),
            _ => Self::info("Item is not in the cart."),
        }
    }

    pub fn for_like(product: &Product, outcome: StoreOutcome) -> Self {
        match outcome {
            StoreOutcome::Added => Self::success(format!("You liked {}.", product.title)),
            StoreOutcome::Removed => Self::info(REMOVED_FROM_WISHLIST),
            _ => Self::info(format!("{} is already in your wishlist.", product.title)),
        }
    }

    pub fn for_unlike(outcome: StoreOutcome) -> Self {
        match outcome {
            StoreOutcome::Removed => Self::info(REMOVED_FROM_WISHLIST),
            _ => Self::info("Product is not in your wishlist."),
        }
    }

    /// After `add_to_comparison` or `toggle_comparison`.
    pub fn for_comparison(product: &Product, outcome: StoreOutcome) -> Self {
        match outcome {
            StoreOutcome::Added => Self::success(format!("{} added to comparison.", product.title)),
            StoreOutcome::Removed => {
                Self::info(format!("{} removed from comparison.", product.title))
            }
            StoreOutcome::RejectedAtCap { max } => {
                Self::warning(format!("You can only compare up to {} products.", max))
            }
            _ => Self::info(format!("{} is already in comparison.", product.title)),
        }
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    pub fn fill_all_fields() -> Self {
        Self::error(FILL_ALL_FIELDS)
    }

    pub fn order_canceled() -> Self {
        Self::info(ORDER_CANCELED)
    }

    /// Shown once the shopper confirms, before the backend write.
    pub fn order_confirmed() -> Self {
        Self::success(ORDER_CONFIRMED)
    }

    pub fn order_placed() -> Self {
        Self::success(ORDER_PLACED)
    }

    pub fn order_failed() -> Self {
        Self::error(ORDER_FAILED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn sofa() -> Product {
        Product::new("s", "Asgaard sofa", Money::from_cents(25_000))
    }

    #[test]
    fn test_cart_add_message() {
        let notice = Notice::for_cart_add(&sofa());
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Asgaard sofa has been added to the cart.");
    }

    #[test]
    fn test_like_messages() {
        assert_eq!(
            Notice::for_like(&sofa(), StoreOutcome::Added).message,
            "You liked Asgaard sofa."
        );
        assert_eq!(
            Notice::for_like(&sofa(), StoreOutcome::Removed).message,
            "Product removed from wishlist."
        );
        assert_eq!(
            Notice::for_unlike(StoreOutcome::Removed).message,
            REMOVED_FROM_WISHLIST
        );
    }

    #[test]
    fn test_comparison_messages() {
        assert_eq!(
            Notice::for_comparison(&sofa(), StoreOutcome::Added).message,
            "Asgaard sofa added to comparison."
        );
        assert_eq!(
            Notice::for_comparison(&sofa(), StoreOutcome::AlreadyPresent).message,
            "Asgaard sofa is already in comparison."
        );

        let capped = Notice::for_comparison(&sofa(), StoreOutcome::RejectedAtCap { max: 2 });
        assert_eq!(capped.level, NoticeLevel::Warning);
        assert_eq!(capped.message, "You can only compare up to 2 products.");

        assert_eq!(
            Notice::for_comparison(&sofa(), StoreOutcome::Removed).message,
            "Asgaard sofa removed from comparison."
        );
    }

    #[test]
    fn test_checkout_notices() {
        assert_eq!(Notice::fill_all_fields().level, NoticeLevel::Error);
        assert_eq!(Notice::order_canceled().message, "Order placement canceled.");
        assert_eq!(Notice::order_placed().level, NoticeLevel::Success);
        assert_eq!(
            Notice::order_failed().message,
            "Failed to place order. Please try again."
        );
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_value(Notice::warning("x")).unwrap();
        assert_eq!(json["level"], "warning");
        assert_eq!(json["message"], "x");
    }
}
