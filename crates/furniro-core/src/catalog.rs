//! # Catalog Boundary
//!
//! Everything between the content backend's loosely-typed records and the
//! closed `Product` type the rest of the session relies on.
//!
//! ## Fetch Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Content backend                                                        │
//! │    [{ "_id": "...", "title": "...", "price": 250.5, ... }, ...]         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  normalize_products() ← THIS MODULE                                    │
//! │    ├── serde into ProductRecord (every field optional)                  │
//! │    ├── Product::try_from(record)                                        │
//! │    │     missing _id / title / price  ──► rejected                      │
//! │    │     negative or non-finite price ──► rejected                      │
//! │    │     discount outside 0..=100     ──► rejected                      │
//! │    └── rejected records are counted and logged, never passed on         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Listing::from_products() → Loaded | Empty                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{ImageRef, Product};
use crate::validation::{validate_search_query, ValidationResult};
use crate::MAX_PRICE_CENTS;

// =============================================================================
// Listing Messages
// =============================================================================

pub const NO_PRODUCTS_MESSAGE: &str = "No products found.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your internet connection.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products. Please try again later.";
pub const PRODUCT_NOT_FOUND_MESSAGE: &str = "No product found for the given ID.";
pub const INVALID_QUERY_MESSAGE: &str = "Invalid query parameter.";
pub const PRODUCT_ID_MISSING_MESSAGE: &str = "Product ID is missing.";

// =============================================================================
// Wire Records
// =============================================================================

/// A product document as the content backend returns it.
///
/// Every field is optional here; `Product::try_from` decides what is
/// acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "_type")]
    pub doc_type: Option<String>,
    pub title: Option<String>,
    pub is_new: Option<bool>,
    pub description: Option<String>,
    pub discount_percentage: Option<f64>,
    pub price: Option<f64>,
    pub product_image: Option<ImageRecord>,
    pub tags: Option<Vec<String>>,
}

/// Image field: `{ "asset": { "_ref": "image-..." } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageRecord {
    pub asset: Option<AssetRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetRecord {
    #[serde(rename = "_ref")]
    pub reference: Option<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CoreError;

    fn try_from(record: ProductRecord) -> CoreResult<Self> {
        let id = record
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| invalid("<missing>", "missing _id"))?;

        if let Some(doc_type) = record.doc_type.as_deref() {
            if doc_type != "product" {
                return Err(invalid(&id, &format!("unexpected _type {}", doc_type)));
            }
        }

        let title = record
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| invalid(&id, "missing title"))?;

        let price = record
            .price
            .ok_or_else(|| invalid(&id, "missing price"))
            .and_then(|p| {
                Money::from_major_units(p).ok_or_else(|| invalid(&id, "price must be a non-negative number"))
            })?;

        if price.cents() > MAX_PRICE_CENTS {
            return Err(invalid(&id, "price exceeds the maximum unit price"));
        }

        let discount_percentage = match record.discount_percentage {
            None => 0,
            Some(d) if d.is_finite() && (0.0..=100.0).contains(&d) => d.round() as u32,
            Some(_) => return Err(invalid(&id, "discountPercentage must be between 0 and 100")),
        };

        let product_image = record
            .product_image
            .and_then(|img| img.asset)
            .and_then(|asset| asset.reference)
            .map(|asset_ref| ImageRef { asset_ref });

        Ok(Product {
            id,
            title,
            price,
            quantity: 1,
            is_new: record.is_new.unwrap_or(false),
            description: record.description.unwrap_or_default(),
            discount_percentage,
            product_image,
            tags: record.tags.unwrap_or_default(),
        })
    }
}

fn invalid(id: &str, reason: &str) -> CoreError {
    CoreError::InvalidProduct {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}

/// Result of normalizing a batch of backend records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub products: Vec<Product>,
    /// Records that were skipped.
    pub rejected: usize,
}

/// Turns raw backend records into products, skipping anything malformed.
///
/// Order is preserved. Duplicate ids keep their first occurrence.
pub fn normalize_products(records: Vec<serde_json::Value>) -> Normalized {
    let mut out = Normalized::default();

    for value in records {
        let parsed = serde_json::from_value::<ProductRecord>(value)
            .map_err(|e| invalid("<unparsed>", &e.to_string()))
            .and_then(Product::try_from);

        match parsed {
            Ok(product) if out.products.iter().any(|p| p.id == product.id) => {
                warn!(id = %product.id, "Skipping duplicate product record");
                out.rejected += 1;
            }
            Ok(product) => out.products.push(product),
            Err(e) => {
                warn!(error = %e, "Skipping malformed product record");
                out.rejected += 1;
            }
        }
    }

    out
}

// =============================================================================
// Search
// =============================================================================

/// A normalized search query: whitespace runs become `-`, lowercase.
///
/// ```rust
/// use furniro_core::catalog::SearchQuery;
///
/// let q = SearchQuery::parse("  Modern  Sofa ").unwrap();
/// assert_eq!(q.as_str(), "modern-sofa");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalizes a raw (already URL-decoded) query.
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let normalized = raw
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        validate_search_query(&normalized)?;
        Ok(SearchQuery(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the title contains the query (`-` read as a space) or a
    /// tag equals it, case-insensitively.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_fields(&product.title, &product.tags)
    }

    /// Same rule on bare fields, for backends holding raw records.
    pub fn matches_fields<S: AsRef<str>>(&self, title: &str, tags: &[S]) -> bool {
        let title = title.to_lowercase();
        let phrase = self.0.replace('-', " ");
        title.contains(&phrase)
            || title.contains(&self.0)
            || tags.iter().any(|t| t.as_ref().to_lowercase() == self.0)
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Listing
// =============================================================================

/// What a page shows after a catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Listing {
    /// At least one product.
    Loaded { products: Vec<Product> },
    /// The query succeeded with zero products. Informational, not an error.
    Empty { message: String },
    /// The load failed; the page offers a retry.
    Failed { message: String, retryable: bool },
}

impl Listing {
    /// Classifies a successful load.
    pub fn from_products(products: Vec<Product>, query: Option<&SearchQuery>) -> Self {
        if !products.is_empty() {
            return Listing::Loaded { products };
        }
        let message = match query {
            Some(q) => format!("No products found for \"{}\".", q),
            None => NO_PRODUCTS_MESSAGE.to_string(),
        };
        Listing::Empty { message }
    }

    /// A failed load; `network` picks the connectivity message.
    pub fn failed(network: bool) -> Self {
        let message = if network {
            NETWORK_ERROR_MESSAGE
        } else {
            FETCH_FAILED_MESSAGE
        };
        Listing::Failed {
            message: message.to_string(),
            retryable: true,
        }
    }

    /// Products to render; empty unless loaded.
    pub fn products(&self) -> &[Product] {
        match self {
            Listing::Loaded { products } => products,
            _ => &[],
        }
    }

    /// The "Showing 1–n of n results" count.
    pub fn result_count(&self) -> usize {
        self.products().len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
