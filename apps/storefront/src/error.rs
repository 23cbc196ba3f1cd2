//! # API Error Type
//!
//! Unified error type for storefront commands, plus the startup error.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Page                        Session layer                              │
//! │  ────                        ─────────────                              │
//! │                                                                         │
//! │  load_product(id)                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Backend Error? ─── ContentError::Network("...") ──┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Domain Error? ──── CoreError::EmptyCart ──────── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  e.code    = "NOT_FOUND"                                                │
//! │  e.message = "No product found for the given ID."                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog listings do not use this type for load failures. They return
//! `Listing::Failed` so the page can render the retry state.

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use furniro_content::ContentError;
use furniro_core::catalog::{
    FETCH_FAILED_MESSAGE, NETWORK_ERROR_MESSAGE, PRODUCT_NOT_FOUND_MESSAGE,
};
use furniro_core::CoreError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "CART_ERROR",
///   "message": "Cannot place an order with an empty cart"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Content backend unreachable or failing
    ContentUnavailable,

    /// Content backend refused a write
    ContentRejected,

    /// Cart operation failed
    CartError,

    /// Payment amount could not be prepared
    PaymentError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, message)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts content backend errors to API errors.
impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::Network(e) => {
                tracing::warn!("Content backend unreachable: {}", e);
                ApiError::new(ErrorCode::ContentUnavailable, NETWORK_ERROR_MESSAGE)
            }
            ContentError::Backend { status, message } => {
                tracing::error!(status, "Content backend error: {}", message);
                ApiError::new(ErrorCode::ContentUnavailable, FETCH_FAILED_MESSAGE)
            }
            ContentError::Serialization(e) => {
                tracing::error!("Content payload error: {}", e);
                ApiError::internal("Content payload could not be processed")
            }
            ContentError::Rejected(reason) => ApiError::new(ErrorCode::ContentRejected, reason),
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => {
                tracing::debug!(product_id = %id, "Product not found");
                ApiError::not_found(PRODUCT_NOT_FOUND_MESSAGE)
            }
            CoreError::InvalidProduct { id, reason } => {
                tracing::error!(id = %id, "Invalid product record: {}", reason);
                ApiError::internal("Product data is invalid")
            }
            err @ CoreError::EmptyCart => ApiError::cart(err.to_string()),
            CoreError::InvalidPaymentAmount { reason } => ApiError::new(
                ErrorCode::PaymentError,
                format!("Invalid payment amount: {}", reason),
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// File-backed state (discount flag) failures.
impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Storage error: {}", err);
        ApiError::internal("Local storage is unavailable")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Errors
// =============================================================================

/// Errors raised while loading configuration and building state.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] ContentError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use furniro_core::ValidationError;

    #[test]
    fn test_serializes_screaming_snake_code() {
        let err = ApiError::cart("Cannot place an order with an empty cart");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "CART_ERROR");
        assert_eq!(json["message"], "Cannot place an order with an empty cart");
    }

    #[test]
    fn test_content_error_mapping() {
        let err = ApiError::from(ContentError::Network("offline".into()));
        assert_eq!(err.code, ErrorCode::ContentUnavailable);
        assert_eq!(err.message, NETWORK_ERROR_MESSAGE);

        let err = ApiError::from(ContentError::backend(500, "boom"));
        assert_eq!(err.message, FETCH_FAILED_MESSAGE);

        let err = ApiError::from(ContentError::Rejected("unknown product reference x".into()));
        assert_eq!(err.code, ErrorCode::ContentRejected);
    }

    #[test]
    fn test_core_error_mapping() {
        assert_eq!(ApiError::from(CoreError::EmptyCart).code, ErrorCode::CartError);

        let err = ApiError::from(CoreError::ProductNotFound("p-404".into()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, PRODUCT_NOT_FOUND_MESSAGE);

        let err = ApiError::from(CoreError::Validation(ValidationError::InvalidFields {
            fields: vec!["email".into()],
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Invalid billing details: email");
    }

    #[test]
    fn test_display() {
        let err = ApiError::not_found("No product found for the given ID.");
        assert_eq!(err.to_string(), "[NotFound] No product found for the given ID.");
    }
}
