//! # Catalog Commands
//!
//! Product reads for the home, shop, product and search pages.
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load_shop()                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  content.fetch_products(&ProductQuery::All)                             │
//! │       │                                                                 │
//! │       ├── Err(Network)  ──► Listing::Failed { "Network error..." }      │
//! │       ├── Err(other)    ──► Listing::Failed { "Failed to fetch..." }    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  normalize_products(records)   malformed records dropped + logged       │
//! │       │                                                                 │
//! │       ├── []            ──► Listing::Empty { "No products found." }     │
//! │       └── [..]          ──► Listing::Loaded { products }                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Retrying is calling the same command again.

use tracing::{debug, error, warn};

use furniro_content::{ContentBackend, ProductQuery};
use furniro_core::catalog::{
    normalize_products, Listing, SearchQuery, INVALID_QUERY_MESSAGE, PRODUCT_ID_MISSING_MESSAGE,
};
use furniro_core::{CoreError, Product};

use crate::error::ApiError;
use crate::state::ConfigState;

/// Home page: the first few products.
pub async fn load_featured<B: ContentBackend>(content: &B, config: &ConfigState) -> Listing {
    debug!(limit = config.featured_limit, "load_featured command");
    let query = ProductQuery::Featured {
        limit: config.featured_limit,
    };
    load_listing(content, &query, None).await
}

/// Shop page: every product.
pub async fn load_shop<B: ContentBackend>(content: &B) -> Listing {
    debug!("load_shop command");
    load_listing(content, &ProductQuery::All, None).await
}

/// Product page: one product by id.
///
/// ## Errors
/// - `VALIDATION_ERROR` when the id is blank
/// - `NOT_FOUND` when the backend has no valid product with that id
/// - `CONTENT_UNAVAILABLE` when the backend cannot be reached
pub async fn load_product<B: ContentBackend>(content: &B, id: &str) -> Result<Product, ApiError> {
    debug!(product_id = %id, "load_product command");

    if id.trim().is_empty() {
        return Err(ApiError::validation(PRODUCT_ID_MISSING_MESSAGE));
    }

    let records = content
        .fetch_products(&ProductQuery::ById(id.to_string()))
        .await?;

    normalize_products(records)
        .products
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::ProductNotFound(id.to_string()).into())
}

/// "Related Products" under a product page.
pub async fn load_related<B: ContentBackend>(
    content: &B,
    config: &ConfigState,
    product_id: &str,
) -> Listing {
    debug!(product_id = %product_id, "load_related command");
    let query = ProductQuery::Related {
        exclude: product_id.to_string(),
        limit: config.related_limit,
    };
    load_listing(content, &query, None).await
}

/// Search results for a raw (already URL-decoded) query.
///
/// An empty or oversized query is answered without touching the backend.
pub async fn search_products<B: ContentBackend>(content: &B, raw_query: &str) -> Listing {
    debug!(query = %raw_query, "search_products command");

    let query = match SearchQuery::parse(raw_query) {
        Ok(q) => q,
        Err(e) => {
            warn!(error = %e, "Rejected search query");
            return Listing::Failed {
                message: INVALID_QUERY_MESSAGE.to_string(),
                retryable: false,
            };
        }
    };

    load_listing(content, &ProductQuery::Search(query.clone()), Some(&query)).await
}

async fn load_listing<B: ContentBackend>(
    content: &B,
    query: &ProductQuery,
    search: Option<&SearchQuery>,
) -> Listing {
    match content.fetch_products(query).await {
        Ok(records) => {
            let normalized = normalize_products(records);
            if normalized.rejected > 0 {
                warn!(query = %query, rejected = normalized.rejected, "Dropped malformed products");
            }
            Listing::from_products(normalized.products, search)
        }
        Err(e) => {
            error!(query = %query, error = %e, "Failed to fetch products");
            Listing::failed(e.is_network())
        }
    }
}
