//! # furniro-content: Content Backend Seam for the Furniro Storefront
//!
//! Products and orders live in a headless content backend. This crate
//! defines the queries the storefront issues against it, the errors it can
//! return, and an in-memory implementation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Furniro Storefront Data Flow                        │
//! │                                                                         │
//! │  Storefront command (load_shop)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  furniro-content (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ ContentBackend│    │ ProductQuery  │    │ MemoryContent│  │   │
//! │  │   │ (backend.rs)  │    │ (query.rs)    │    │ (memory.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ fetch_products│◄───│ All, Featured │    │ sample data  │  │   │
//! │  │   │ create_order  │    │ ById, Search  │    │ forced fails │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  raw records ──► furniro_core::catalog::normalize_products              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`backend`] - The `ContentBackend` trait
//! - [`query`] - Product queries issued by the pages
//! - [`memory`] - In-memory backend with a bundled sample catalog
//! - [`error`] - Content error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use furniro_content::{ContentBackend, MemoryContent, ProductQuery};
//!
//! let content = MemoryContent::with_sample_catalog()?;
//! let records = content.fetch_products(&ProductQuery::featured()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod error;
pub mod memory;
pub mod query;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::ContentBackend;
pub use error::{ContentError, ContentResult};
pub use memory::{MemoryContent, StoredOrder};
pub use query::{ProductQuery, FEATURED_LIMIT, RELATED_LIMIT};
