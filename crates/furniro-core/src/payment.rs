//! # Payment Amount
//!
//! What the storefront hands to the hosted payment widget. The gateway
//! protocol itself lives outside this workspace.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_payment_amount;
use crate::DEFAULT_CURRENCY;

/// Parameters for a one-off card payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentRequest {
    /// Always `"payment"` (one-off charge, not a subscription).
    pub mode: String,
    /// Amount in the smallest currency unit.
    pub amount: i64,
    pub currency: String,
}

impl PaymentRequest {
    /// Builds a request for `total`.
    ///
    /// ```rust
    /// use furniro_core::money::Money;
    /// use furniro_core::payment::PaymentRequest;
    ///
    /// let request = PaymentRequest::for_amount(Money::from_cents(3050), "usd").unwrap();
    /// assert_eq!(request.amount, 3050);
    /// ```
    pub fn for_amount(total: Money, currency: &str) -> CoreResult<Self> {
        validate_payment_amount(total.cents()).map_err(|e| CoreError::InvalidPaymentAmount {
            reason: e.to_string(),
        })?;

        let currency = currency.trim().to_lowercase();
        let currency = if currency.is_empty() {
            DEFAULT_CURRENCY.to_string()
        } else {
            currency
        };

        Ok(PaymentRequest {
            mode: "payment".to_string(),
            amount: total.cents(),
            currency,
        })
    }

    pub fn total(&self) -> Money {
        Money::from_cents(self.amount)
    }
}

/// Confirmation line shown after the widget reports success.
pub fn payment_success_message(total: Money) -> String {
    format!(
        "Thank you for purchasing $ {}.{:02}",
        total.dollars(),
        total.cents_part()
    )
}
