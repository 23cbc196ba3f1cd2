//! # Content Error Types
//!
//! Error types for content backend operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Backend failure (transport, HTTP status, bad payload)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ContentError (this module) ← Categorized                              │
//! │       │                                                                 │
//! │       ├──► Listing::Failed  (catalog loads, retry offered)             │
//! │       └──► ApiError         (checkout, serialized for the page)        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Content backend errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The backend could not be reached.
    ///
    /// ## When This Occurs
    /// - Offline client
    /// - DNS or TLS failure
    /// - Request timed out
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with an error status.
    #[error("Content backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    /// A payload could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A write was refused.
    ///
    /// ## When This Occurs
    /// - Order references a product the backend does not hold
    /// - Document fails the backend's schema checks
    #[error("Document rejected: {0}")]
    Rejected(String),
}

impl ContentError {
    /// True for connectivity failures; picks the listing message.
    pub fn is_network(&self) -> bool {
        matches!(self, ContentError::Network(_))
    }

    /// True when repeating the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ContentError::Network(_) => true,
            ContentError::Backend { status, .. } => *status >= 500 || *status == 429,
            ContentError::Serialization(_) | ContentError::Rejected(_) => false,
        }
    }

    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        ContentError::Backend {
            status,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Serialization(err.to_string())
    }
}

/// Result type for content backend operations.
pub type ContentResult<T> = Result<T, ContentError>;
