//! # In-Memory Content Backend
//!
//! A `ContentBackend` holding its records in process memory. Used by tests
//! and by local development with the bundled sample catalog.
//!
//! ## Usage
//! ```rust,ignore
//! let content = MemoryContent::with_sample_catalog()?;
//! let records = content.fetch_products(&ProductQuery::featured()).await?;
//!
//! // Simulate an outage
//! content.fail_with(ContentError::Network("offline".into())).await;
//! ```

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use furniro_core::order::OrderDocument;

use crate::backend::ContentBackend;
use crate::error::{ContentError, ContentResult};
use crate::query::ProductQuery;

/// Sample catalog shipped with the crate.
const SAMPLE_CATALOG: &str = include_str!("../data/catalog.json");

/// An order accepted by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredOrder {
    pub id: String,
    pub document: Value,
}

#[derive(Debug, Default)]
struct Inner {
    records: Vec<Value>,
    orders: Vec<StoredOrder>,
    failure: Option<ContentError>,
    fetches: usize,
}

/// Cloning shares the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct MemoryContent {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryContent {
    /// Creates a backend holding `records`.
    pub fn new(records: Vec<Value>) -> Self {
        MemoryContent {
            inner: Arc::new(RwLock::new(Inner {
                records,
                ..Inner::default()
            })),
        }
    }

    /// Creates a backend from a JSON array of product records.
    pub fn from_json(json: &str) -> ContentResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Array(records) => Ok(Self::new(records)),
            other => Err(ContentError::Serialization(format!(
                "expected an array of records, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Creates a backend holding the bundled sample catalog.
    pub fn with_sample_catalog() -> ContentResult<Self> {
        Self::from_json(SAMPLE_CATALOG)
    }

    /// Makes every following call fail with `err` until `recover`.
    pub async fn fail_with(&self, err: ContentError) {
        self.inner.write().await.failure = Some(err);
    }

    pub async fn recover(&self) {
        self.inner.write().await.failure = None;
    }

    /// Appends a raw record.
    pub async fn insert(&self, record: Value) {
        self.inner.write().await.records.push(record);
    }

    /// Orders accepted so far, oldest first.
    pub async fn orders(&self) -> Vec<StoredOrder> {
        self.inner.read().await.orders.clone()
    }

    /// Number of product fetches served (failed ones included).
    pub async fn fetch_count(&self) -> usize {
        self.inner.read().await.fetches
    }

    fn has_product(records: &[Value], id: &str) -> bool {
        records
            .iter()
            .any(|r| r.get("_id").and_then(Value::as_str) == Some(id))
    }
}

impl ContentBackend for MemoryContent {
    async fn fetch_products(&self, query: &ProductQuery) -> ContentResult<Vec<Value>> {
        let mut inner = self.inner.write().await;
        inner.fetches += 1;

        if let Some(err) = inner.failure.clone() {
            warn!(query = %query, error = %err, "Simulated fetch failure");
            return Err(err);
        }

        let records = query.apply(&inner.records);
        debug!(query = %query, count = records.len(), "Fetched products");
        Ok(records)
    }

    async fn create_order(&self, order: &OrderDocument) -> ContentResult<String> {
        let mut inner = self.inner.write().await;

        if let Some(err) = inner.failure.clone() {
            warn!(error = %err, "Simulated order write failure");
            return Err(err);
        }

        if let Some(line) = order
            .cart_items
            .iter()
            .find(|line| !Self::has_product(&inner.records, &line.product.reference))
        {
            return Err(ContentError::Rejected(format!(
                "unknown product reference {}",
                line.product.reference
            )));
        }

        let document = serde_json::to_value(order)?;
        let id = Uuid::new_v4().to_string();
        inner.orders.push(StoredOrder {
            id: id.clone(),
            document,
        });

        info!(order_id = %id, lines = order.cart_items.len(), "Order document created");
        Ok(id)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use furniro_core::catalog::normalize_products;
    use furniro_core::validation::BillingDetails;
    use furniro_core::{Money, Product};
    use serde_json::json;

    fn billing() -> BillingDetails {
        BillingDetails {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            address: "12 Analytical Row".into(),
            city: "London".into(),
            zip_code: "75001".into(),
            phone: "03001234567".into(),
            email: "ada@example.com".into(),
        }
    }

    #[tokio::test]
    async fn test_sample_catalog_normalizes_cleanly() {
        let content = MemoryContent::with_sample_catalog().unwrap();
        let records = content.fetch_products(&ProductQuery::All).await.unwrap();
        let normalized = normalize_products(records);

        assert_eq!(normalized.rejected, 0);
        assert_eq!(normalized.products.len(), 10);
    }

    #[tokio::test]
    async fn test_featured_returns_eight() {
        let content = MemoryContent::with_sample_catalog().unwrap();
        let records = content.fetch_products(&ProductQuery::featured()).await.unwrap();
        assert_eq!(records.len(), 8);
    }

    #[test]
    fn test_from_json_requires_array() {
        assert!(MemoryContent::from_json("{}").is_err());
        assert!(MemoryContent::from_json("not json").is_err());
        assert!(MemoryContent::from_json("[]").is_ok());
    }

    #[tokio::test]
    async fn test_forced_failure_and_recovery() {
        let content = MemoryContent::new(vec![json!({"_id": "1", "title": "Grifo", "price": 1})]);

        content.fail_with(ContentError::Network("offline".into())).await;
        let err = content.fetch_products(&ProductQuery::All).await.unwrap_err();
        assert!(err.is_network());

        content.recover().await;
        assert_eq!(content.fetch_products(&ProductQuery::All).await.unwrap().len(), 1);
        assert_eq!(content.fetch_count().await, 2);
    }

    #[tokio::test]
    async fn test_create_order_records_document() {
        let content = MemoryContent::new(vec![json!({"_id": "a", "title": "Grifo", "price": 10})]);
        let cart = vec![Product::new("a", "Grifo", Money::from_cents(1000)).with_quantity(2)];
        let order = OrderDocument::from_checkout(&billing(), &cart, Utc::now()).unwrap();

        let id = content.create_order(&order).await.unwrap();
        let orders = content.orders().await;

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, id);
        assert_eq!(orders[0].document["_type"], "order");
        assert_eq!(orders[0].document["cartItems"][0]["quantity"], 2);
    }

    #[tokio::test]
    async fn test_create_order_rejects_unknown_product() {
        let content = MemoryContent::new(vec![]);
        let cart = vec![Product::new("ghost", "Ghost", Money::from_cents(1000))];
        let order = OrderDocument::from_checkout(&billing(), &cart, Utc::now()).unwrap();

        let err = content.create_order(&order).await.unwrap_err();
        assert!(matches!(err, ContentError::Rejected(_)));
        assert!(content.orders().await.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let content = MemoryContent::new(vec![]);
        let other = content.clone();
        other.insert(json!({"_id": "x", "title": "Potty", "price": 5})).await;
        assert_eq!(content.fetch_products(&ProductQuery::All).await.unwrap().len(), 1);
    }
}
