//! # Validation Module
//!
//! Billing form rules and input checks for the Furniro storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Validation                                │
//! │                                                                         │
//! │  Billing form (page)                                                   │
//! │  ├── Values trimmed as they are typed                                  │
//! │  └── Field flags rendered inline                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  validate_billing() ← THIS MODULE                                      │
//! │  ├── One boolean per field (FormErrors)                                │
//! │  └── Any flag set → submission blocked, nothing is written             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  OrderDocument::from_checkout() (order.rs)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use furniro_core::validation::{validate_billing, BillingDetails};
//!
//! let details = BillingDetails {
//!     zip_code: "12".to_string(),
//!     ..BillingDetails::default()
//! };
//! let errors = validate_billing(&details);
//! assert!(errors.zip_code);
//! assert!(!errors.is_valid());
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::{MAX_ITEM_QUANTITY, MAX_SEARCH_QUERY_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Patterns
// =============================================================================

static ZIP_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5,6}$").expect("Invalid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,15}$").expect("Invalid regex"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("Invalid regex")
});

// =============================================================================
// Billing Form
// =============================================================================

/// Billing details entered on the checkout page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillingDetails {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
}

impl BillingDetails {
    /// Returns a copy with every field trimmed.
    pub fn trimmed(&self) -> Self {
        BillingDetails {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            zip_code: self.zip_code.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

/// Per-field failure flags; `true` means the field's rule failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormErrors {
    pub first_name: bool,
    pub last_name: bool,
    pub address: bool,
    pub city: bool,
    pub zip_code: bool,
    pub phone: bool,
    pub email: bool,
}

impl FormErrors {
    /// True when no rule failed.
    pub fn is_valid(&self) -> bool {
        self.failed_fields().is_empty()
    }

    /// Wire names of the failed fields, in form order.
    pub fn failed_fields(&self) -> Vec<&'static str> {
        [
            ("firstName", self.first_name),
            ("lastName", self.last_name),
            ("address", self.address),
            ("city", self.city),
            ("zipCode", self.zip_code),
            ("phone", self.phone),
            ("email", self.email),
        ]
        .into_iter()
        .filter_map(|(name, failed)| failed.then_some(name))
        .collect()
    }

    /// `Ok(())` when valid, `InvalidFields` naming every failed field otherwise.
    pub fn into_result(self) -> ValidationResult<()> {
        let fields = self.failed_fields();
        if fields.is_empty() {
            return Ok(());
        }
        Err(ValidationError::InvalidFields {
            fields: fields.into_iter().map(str::to_string).collect(),
        })
    }
}

/// Checks every billing rule and reports one flag per field.
///
/// ## Rules
/// - first name, last name, address, city: non-empty
/// - zip code: 5-6 digits
/// - phone: 10-15 digits
/// - email: `local@domain.tld`
///
/// Values are trimmed before checking.
pub fn validate_billing(details: &BillingDetails) -> FormErrors {
    let d = details.trimmed();
    FormErrors {
        first_name: d.first_name.is_empty(),
        last_name: d.last_name.is_empty(),
        address: d.address.is_empty(),
        city: d.city.is_empty(),
        zip_code: !ZIP_CODE_RE.is_match(&d.zip_code),
        phone: !PHONE_RE.is_match(&d.phone),
        email: !EMAIL_RE.is_match(&d.email),
    }
}

// =============================================================================
// Other Validators
// =============================================================================

/// Validates a cart quantity entered by the shopper.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY as i64 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates a search query (after normalization).
///
/// ## Rules
/// - Must not be empty
/// - Must not exceed MAX_SEARCH_QUERY_LEN characters
/// - Must not contain quotes, backslashes, `*` or control characters,
///   which would break a backend match expression
pub fn validate_search_query(query: &str) -> ValidationResult<()> {
    if query.is_empty() {
        return Err(ValidationError::Required {
            field: "query".to_string(),
        });
    }

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    if query
        .chars()
        .any(|c| matches!(c, '"' | '\\' | '*') || c.is_control())
    {
        return Err(ValidationError::InvalidFormat {
            field: "query".to_string(),
            reason: "contains reserved characters".to_string(),
        });
    }

    Ok(())
}

/// Validates a payment amount in cents.
///
/// Cannot pay zero or negative amounts.
pub fn validate_payment_amount(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "payment amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_details() -> BillingDetails {
        BillingDetails {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            address: "12 Analytical Row".to_string(),
            city: "London".to_string(),
            zip_code: "75001".to_string(),
            phone: "03001234567".to_string(),
            email: "ada.lovelace@example.co.uk".to_string(),
        }
    }

    #[test]
    fn test_valid_details_pass() {
        let errors = validate_billing(&valid_details());
        assert!(errors.is_valid());
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn test_short_zip_code_fails() {
        let details = BillingDetails {
            zip_code: "12".to_string(),
            ..valid_details()
        };
        let errors = validate_billing(&details);
        assert!(errors.zip_code);
        assert!(!errors.phone);
        assert_eq!(errors.failed_fields(), ["zipCode"]);
    }

    #[test]
    fn test_zip_code_lengths() {
        for (zip, ok) in [("12345", true), ("123456", true), ("1234", false), ("1234567", false), ("12a45", false)] {
            let details = BillingDetails {
                zip_code: zip.to_string(),
                ..valid_details()
            };
            assert_eq!(validate_billing(&details).zip_code, !ok, "zip {}", zip);
        }
    }

    #[test]
    fn test_phone_lengths() {
        for (phone, ok) in [("0123456789", true), ("012345678901234", true), ("012345678", false), ("+1234567890", false)] {
            let details = BillingDetails {
                phone: phone.to_string(),
                ..valid_details()
            };
            assert_eq!(validate_billing(&details).phone, !ok, "phone {}", phone);
        }
    }

    #[test]
    fn test_email_pattern() {
        for (email, ok) in [
            ("a@b.co", true),
            ("first-last@mail.example.com", true),
            ("no-at-sign.com", false),
            ("a@b.c", false),
            ("a@b.toolong", false),
            ("a b@c.com", false),
        ] {
            let details = BillingDetails {
                email: email.to_string(),
                ..valid_details()
            };
            assert_eq!(validate_billing(&details).email, !ok, "email {}", email);
        }
    }

    #[test]
    fn test_blank_fields_fail_after_trim() {
        let details = BillingDetails {
            first_name: "   ".to_string(),
            city: "\t".to_string(),
            ..valid_details()
        };
        let errors = validate_billing(&details);
        assert!(errors.first_name);
        assert!(errors.city);
        assert!(!errors.last_name);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let details = BillingDetails {
            zip_code: " 75001 ".to_string(),
            email: " ada@example.com\n".to_string(),
            ..valid_details()
        };
        assert!(validate_billing(&details).is_valid());
    }

    #[test]
    fn test_empty_form_flags_everything() {
        let errors = validate_billing(&BillingDetails::default());
        assert_eq!(errors.failed_fields().len(), 7);
        assert!(matches!(
            errors.into_result(),
            Err(ValidationError::InvalidFields { fields }) if fields.len() == 7
        ));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert!(validate_search_query("sofa").is_ok());
        assert!(validate_search_query("").is_err());
        assert!(validate_search_query(&"a".repeat(101)).is_err());
        assert!(matches!(
            validate_search_query("sofa\"]"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_search_query("lamp*").is_err());
    }

    #[test]
    fn test_validate_payment_amount() {
        assert!(validate_payment_amount(1).is_ok());
        assert!(validate_payment_amount(0).is_err());
        assert!(validate_payment_amount(-100).is_err());
    }
}
