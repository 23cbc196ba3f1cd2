//! # Content Backend Trait
//!
//! The seam between the storefront and wherever products and orders live.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront command (load_shop, place_order, ...)                       │
//! │       │                                                                 │
//! │       │  backend.fetch_products(&ProductQuery::All)                     │
//! │       ▼                                                                 │
//! │  ContentBackend (THIS TRAIT)                                            │
//! │  ├── fetch_products(&self, query) → raw records                         │
//! │  └── create_order(&self, order)   → document id                         │
//! │       │                                                                 │
//! │       ├──► MemoryContent   (tests, local development)                   │
//! │       └──► hosted CMS client (lives outside this workspace)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records come back untyped. Callers run them through
//! `furniro_core::catalog::normalize_products` before use.

use std::future::Future;

use serde_json::Value;

use furniro_core::order::OrderDocument;

use crate::error::ContentResult;
use crate::query::ProductQuery;

pub trait ContentBackend: Send + Sync {
    /// Runs a product query and returns the matching records.
    fn fetch_products(
        &self,
        query: &ProductQuery,
    ) -> impl Future<Output = ContentResult<Vec<Value>>> + Send;

    /// Writes an order document and returns the id the backend assigned.
    fn create_order(
        &self,
        order: &OrderDocument,
    ) -> impl Future<Output = ContentResult<String>> + Send;
}
