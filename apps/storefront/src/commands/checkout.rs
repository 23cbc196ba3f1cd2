//! # Checkout Commands
//!
//! Order placement, the payment amount and the discount flag.
//!
//! ## Order Placement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    place_order(details, confirmed)                      │
//! │                                                                         │
//! │  validate_billing(details)                                              │
//! │       ├── any rule failed ──► "Please fill in all fields." + flags      │
//! │       ▼                                                                 │
//! │  confirmed?                                                             │
//! │       ├── no ──────────────► "Order placement canceled."                │
//! │       ▼                                                                 │
//! │  snapshot cart (lock released) ──► OrderDocument::from_checkout         │
//! │       ├── empty cart ──────► ApiError CART_ERROR                        │
//! │       ▼                                                                 │
//! │  "Order confirmed! Processing your order..."                            │
//! │       ▼                                                                 │
//! │  content.create_order(&doc).await                                       │
//! │       ├── Ok(id)  ──► discount.clear() ──► "Your order has been..."     │
//! │       └── Err(e)  ──► discount kept     ──► "Failed to place order..."  │
//! │                                                                         │
//! │  The cart is left as it was in every branch.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, error, info, warn};
use ts_rs::TS;

use furniro_content::ContentBackend;
use furniro_core::notice::Notice;
use furniro_core::order::OrderDocument;
use furniro_core::payment::{payment_success_message, PaymentRequest};
use furniro_core::validation::{validate_billing, BillingDetails, FormErrors};

use crate::error::ApiError;
use crate::state::{AppliedDiscount, ConfigState, DiscountFlag, StoreState};

/// Result of a checkout submission.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    /// Backend document id, set only when the order was stored.
    pub order_id: Option<String>,
    /// Per-field flags for the billing form.
    pub form_errors: FormErrors,
    /// Notices to show, in order.
    pub notices: Vec<Notice>,
}

impl CheckoutResponse {
    fn not_submitted(form_errors: FormErrors, notice: Notice) -> Self {
        CheckoutResponse {
            order_id: None,
            form_errors,
            notices: vec![notice],
        }
    }

    pub fn is_placed(&self) -> bool {
        self.order_id.is_some()
    }
}

/// Places an order for the current cart.
///
/// `confirmed` is the shopper's answer to the confirmation prompt.
///
/// ## Errors
/// - `CART_ERROR` when the cart is empty
///
/// A backend failure is not an `Err`: it is reported through the
/// failure notice so the form stays filled in.
pub async fn place_order<B: ContentBackend>(
    store: &StoreState,
    discount: &DiscountFlag,
    content: &B,
    details: BillingDetails,
    confirmed: bool,
) -> Result<CheckoutResponse, ApiError> {
    debug!(confirmed, "place_order command");

    let form_errors = validate_billing(&details);
    if !form_errors.is_valid() {
        debug!(fields = ?form_errors.failed_fields(), "Billing form rejected");
        return Ok(CheckoutResponse::not_submitted(
            form_errors,
            Notice::fill_all_fields(),
        ));
    }

    if !confirmed {
        return Ok(CheckoutResponse::not_submitted(
            form_errors,
            Notice::order_canceled(),
        ));
    }

    let cart = store.with_store(|s| s.cart().to_vec());
    let order = OrderDocument::from_checkout(&details, &cart, Utc::now())?;

    let mut notices = vec![Notice::order_confirmed()];

    match content.create_order(&order).await {
        Ok(order_id) => {
            if let Err(e) = discount.clear() {
                warn!(error = %e, "Failed to clear discount flag");
            }

            info!(
                order_id = %order_id,
                lines = order.cart_items.len(),
                items = order.item_count(),
                total = order.total,
                "Order placed"
            );

            notices.push(Notice::order_placed());
            Ok(CheckoutResponse {
                order_id: Some(order_id),
                form_errors,
                notices,
            })
        }
        Err(e) => {
            error!(error = %e, retryable = e.is_retryable(), "Failed to place order");

            notices.push(Notice::order_failed());
            Ok(CheckoutResponse {
                order_id: None,
                form_errors,
                notices,
            })
        }
    }
}

/// Builds the payment widget parameters for the current cart total.
///
/// ## Errors
/// - `PAYMENT_ERROR` when the total is zero
pub fn prepare_payment(store: &StoreState, config: &ConfigState) -> Result<PaymentRequest, ApiError> {
    debug!("prepare_payment command");

    let total = store.with_store(|s| s.cart_total());
    let request = PaymentRequest::for_amount(total, &config.currency)?;

    debug!(amount = request.amount, currency = %request.currency, "Payment prepared");
    Ok(request)
}

/// Notice shown once the payment widget reports success.
pub fn confirm_payment(request: &PaymentRequest) -> Notice {
    debug!(amount = request.amount, "confirm_payment command");
    Notice::success(payment_success_message(request.total()))
}

/// Marks a discount code as applied.
pub fn apply_discount(discount: &DiscountFlag, code: &str) -> Result<AppliedDiscount, ApiError> {
    debug!(code = %code, "apply_discount command");

    if code.trim().is_empty() {
        return Err(ApiError::validation("Discount code is required"));
    }

    Ok(discount.apply(code)?)
}

pub fn get_discount(discount: &DiscountFlag) -> Option<AppliedDiscount> {
    debug!("get_discount command");
    discount.current()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use furniro_content::{ContentError, MemoryContent};
    use furniro_core::notice::{NoticeLevel, ORDER_FAILED, ORDER_PLACED};
    use furniro_core::{Money, Product};

    const GRIFO: &str = "b1f0c2a4-0005-4d0e-9a61-grifo";

    fn details() -> BillingDetails {
        BillingDetails {
            first_name: "Ayesha".to_string(),
            last_name: "Khan".to_string(),
            address: "12 Canal Road".to_string(),
            city: "Lahore".to_string(),
            zip_code: "54000".to_string(),
            phone: "03001234567".to_string(),
            email: "ayesha@example.com".to_string(),
        }
    }

    fn store_with_lamp() -> StoreState {
        let store = StoreState::new();
        store.with_store_mut(|s| {
            s.add_to_cart(&Product::new(GRIFO, "Grifo", Money::from_cents(15_000)).with_quantity(2))
        });
        store
    }

    fn sample() -> MemoryContent {
        MemoryContent::with_sample_catalog().unwrap()
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_submitted() {
        let content = sample();
        let mut bad = details();
        bad.zip_code = "12".to_string();
        bad.email = "nope".to_string();

        let response = place_order(&store_with_lamp(), &DiscountFlag::in_memory(), &content, bad, true)
            .await
            .unwrap();

        assert!(!response.is_placed());
        assert!(response.form_errors.zip_code);
        assert!(response.form_errors.email);
        assert!(!response.form_errors.first_name);
        assert_eq!(response.notices, vec![Notice::fill_all_fields()]);
        assert!(content.orders().await.is_empty());
    }

    #[tokio::test]
    async fn test_declined_confirmation_cancels() {
        let content = sample();
        let response = place_order(
            &store_with_lamp(),
            &DiscountFlag::in_memory(),
            &content,
            details(),
            false,
        )
        .await
        .unwrap();

        assert_eq!(response.notices, vec![Notice::order_canceled()]);
        assert!(content.orders().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_cart_is_an_error() {
        let err = place_order(
            &StoreState::new(),
            &DiscountFlag::in_memory(),
            &sample(),
            details(),
            true,
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[tokio::test]
    async fn test_successful_order_clears_discount() {
        let content = sample();
        let store = store_with_lamp();
        let discount = DiscountFlag::in_memory();
        discount.apply("welcome10").unwrap();

        let response = place_order(&store, &discount, &content, details(), true)
            .await
            .unwrap();

        assert!(response.is_placed());
        assert_eq!(response.notices[0], Notice::order_confirmed());
        assert_eq!(response.notices[1].message, ORDER_PLACED);
        assert!(!discount.is_applied());

        let orders = content.orders().await;
        assert_eq!(orders.len(), 1);
        assert_eq!(Some(&orders[0].id), response.order_id.as_ref());
        assert_eq!(orders[0].document["total"], 300.0);
        assert_eq!(orders[0].document["cartItems"][0]["quantity"], 2);

        // cart is left as it was
        assert_eq!(store.with_store(|s| s.cart_quantity()), 2);
    }

    #[tokio::test]
    async fn test_failed_order_keeps_discount_and_cart() {
        let content = sample();
        content.fail_with(ContentError::backend(503, "unavailable")).await;
        let store = store_with_lamp();
        let discount = DiscountFlag::in_memory();
        discount.apply("WELCOME10").unwrap();

        let response = place_order(&store, &discount, &content, details(), true)
            .await
            .unwrap();

        assert!(!response.is_placed());
        assert_eq!(response.notices[1].level, NoticeLevel::Error);
        assert_eq!(response.notices[1].message, ORDER_FAILED);
        assert!(discount.is_applied());
        assert_eq!(store.with_store(|s| s.cart().len()), 1);
    }

    #[test]
    fn test_prepare_payment() {
        let store = StoreState::new();
        store.with_store_mut(|s| s.add_to_cart(&Product::new("m", "Muggo", Money::from_cents(3050))));

        let request = prepare_payment(&store, &ConfigState::default()).unwrap();
        assert_eq!(request.mode, "payment");
        assert_eq!(request.amount, 3050);
        assert_eq!(request.currency, "usd");

        assert_eq!(
            confirm_payment(&request).message,
            "Thank you for purchasing $ 30.50"
        );
    }

    #[test]
    fn test_prepare_payment_empty_cart() {
        let err = prepare_payment(&StoreState::new(), &ConfigState::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::PaymentError);
    }

    #[test]
    fn test_apply_discount() {
        let discount = DiscountFlag::in_memory();

        let err = apply_discount(&discount, "  ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(get_discount(&discount).is_none());

        let applied = apply_discount(&discount, " welcome10 ").unwrap();
        assert_eq!(applied.code, "WELCOME10");
        assert_eq!(get_discount(&discount), Some(applied));
    }
}
