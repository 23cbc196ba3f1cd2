//! # Discount Flag
//!
//! Marker recording that the shopper applied a discount code. It outlives
//! the session and is cleared once an order is placed.
//!
//! ```text
//!  apply("WELCOME10") ──► applied-discount.json written
//!  place_order() Ok  ──► file removed
//!  place_order() Err ──► file kept
//! ```

use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppliedDiscount {
    pub code: String,
    #[ts(as = "String")]
    pub applied_at: DateTime<Utc>,
}

/// Applied-discount marker, optionally persisted as a JSON file.
#[derive(Debug, Default)]
pub struct DiscountFlag {
    path: Option<PathBuf>,
    current: Mutex<Option<AppliedDiscount>>,
}

impl DiscountFlag {
    /// A flag that lives only in memory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens the flag stored at `path`.
    ///
    /// A missing file means no discount. An unreadable or malformed file is
    /// logged and treated the same way.
    pub fn open(path: PathBuf) -> Self {
        let current = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<AppliedDiscount>(&contents) {
                Ok(discount) => Some(discount),
                Err(e) => {
                    warn!(?path, error = %e, "Ignoring malformed discount flag");
                    None
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(?path, error = %e, "Could not read discount flag");
                None
            }
        };

        DiscountFlag {
            path: Some(path),
            current: Mutex::new(current),
        }
    }

    /// Records `code` as applied, replacing any earlier code.
    pub fn apply(&self, code: &str) -> io::Result<AppliedDiscount> {
        let discount = AppliedDiscount {
            code: code.trim().to_uppercase(),
            applied_at: Utc::now(),
        };

        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string(&discount).map_err(io::Error::other)?;
            std::fs::write(path, json)?;
        }

        debug!(code = %discount.code, "Discount applied");
        *self.lock() = Some(discount.clone());
        Ok(discount)
    }

    pub fn is_applied(&self) -> bool {
        self.lock().is_some()
    }

    pub fn current(&self) -> Option<AppliedDiscount> {
        self.lock().clone()
    }

    /// Removes the marker. Clearing an absent flag succeeds.
    pub fn clear(&self) -> io::Result<()> {
        if let Some(path) = &self.path {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }

        *self.lock() = None;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<AppliedDiscount>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("furniro-discount-{}", uuid::Uuid::new_v4()))
            .join("applied-discount.json")
    }

    #[test]
    fn test_in_memory_apply_and_clear() {
        let flag = DiscountFlag::in_memory();
        assert!(!flag.is_applied());

        flag.apply(" welcome10 ").unwrap();
        assert!(flag.is_applied());
        assert_eq!(flag.current().unwrap().code, "WELCOME10");

        flag.clear().unwrap();
        assert!(!flag.is_applied());
    }

    #[test]
    fn test_persists_across_reopen() {
        let path = temp_path();

        DiscountFlag::open(path.clone()).apply("SAVE5").unwrap();
        let reopened = DiscountFlag::open(path.clone());
        assert_eq!(reopened.current().unwrap().code, "SAVE5");

        reopened.clear().unwrap();
        assert!(!path.exists());
        assert!(!DiscountFlag::open(path.clone()).is_applied());

        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_clear_without_file_is_ok() {
        let flag = DiscountFlag::open(temp_path());
        assert!(flag.clear().is_ok());
    }

    #[test]
    fn test_malformed_file_means_no_discount() {
        let path = temp_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();

        assert!(!DiscountFlag::open(path.clone()).is_applied());

        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
