//! # Product Queries
//!
//! The product reads the pages issue, independent of any query language.
//!
//! | Page            | Query                                   |
//! |-----------------|-----------------------------------------|
//! | Home            | `Featured { limit: 8 }`                 |
//! | Shop            | `All`                                   |
//! | Product         | `ById(id)` then `Related { limit: 4 }`  |
//! | Search results  | `Search(query)`                         |

use serde_json::Value;

use furniro_core::catalog::SearchQuery;

/// Products shown on the home page.
pub const FEATURED_LIMIT: usize = 8;

/// Products shown under "Related Products".
pub const RELATED_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductQuery {
    /// Every product, in backend order.
    All,
    /// The first `limit` products.
    Featured { limit: usize },
    /// Zero or one product.
    ById(String),
    /// Title contains the query, or a tag equals it.
    Search(SearchQuery),
    /// Up to `limit` products other than `exclude`.
    Related { exclude: String, limit: usize },
}

impl ProductQuery {
    pub fn featured() -> Self {
        ProductQuery::Featured {
            limit: FEATURED_LIMIT,
        }
    }

    pub fn related(exclude: impl Into<String>) -> Self {
        ProductQuery::Related {
            exclude: exclude.into(),
            limit: RELATED_LIMIT,
        }
    }

    /// Upper bound on the number of results.
    pub fn limit(&self) -> Option<usize> {
        match self {
            ProductQuery::Featured { limit } | ProductQuery::Related { limit, .. } => Some(*limit),
            ProductQuery::ById(_) => Some(1),
            ProductQuery::All | ProductQuery::Search(_) => None,
        }
    }

    /// Whether a raw product record satisfies the filter part of the query.
    ///
    /// Records with other `_type`s never match.
    pub fn matches(&self, record: &Value) -> bool {
        if record.get("_type").and_then(Value::as_str).unwrap_or("product") != "product" {
            return false;
        }

        let id = record.get("_id").and_then(Value::as_str);

        match self {
            ProductQuery::All | ProductQuery::Featured { .. } => true,
            ProductQuery::ById(wanted) => id == Some(wanted.as_str()),
            ProductQuery::Related { exclude, .. } => id != Some(exclude.as_str()),
            ProductQuery::Search(query) => {
                let title = record.get("title").and_then(Value::as_str).unwrap_or_default();
                let tags: Vec<&str> = record
                    .get("tags")
                    .and_then(Value::as_array)
                    .map(|tags| tags.iter().filter_map(Value::as_str).collect())
                    .unwrap_or_default();
                query.matches_fields(title, &tags)
            }
        }
    }

    /// Filters and truncates a record set the way a backend would.
    pub fn apply<'a, I>(&self, records: I) -> Vec<Value>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let matching = records.into_iter().filter(|r| self.matches(r)).cloned();
        match self.limit() {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}

impl std::fmt::Display for ProductQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductQuery::All => write!(f, "all"),
            ProductQuery::Featured { limit } => write!(f, "featured({})", limit),
            ProductQuery::ById(id) => write!(f, "by_id({})", id),
            ProductQuery::Search(q) => write!(f, "search({})", q),
            ProductQuery::Related { exclude, limit } => {
                write!(f, "related({}, {})", exclude, limit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Value> {
        vec![
            json!({"_id": "1", "_type": "product", "title": "Asgaard Sofa", "tags": ["living"]}),
            json!({"_id": "2", "title": "Grifo", "tags": ["lamp"]}),
            json!({"_id": "3", "_type": "order", "title": "Sofa order"}),
            json!({"_id": "4", "_type": "product", "title": "Outdoor Sofa Set"}),
        ]
    }

    #[test]
    fn test_all_skips_other_document_types() {
        let out = ProductQuery::All.apply(&records());
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_featured_limit() {
        let out = ProductQuery::Featured { limit: 2 }.apply(&records());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0]["_id"], "1");
    }

    #[test]
    fn test_by_id() {
        let out = ProductQuery::ById("4".into()).apply(&records());
        assert_eq!(out.len(), 1);
        assert!(ProductQuery::ById("missing".into()).apply(&records()).is_empty());
    }

    #[test]
    fn test_related_excludes_current() {
        let out = ProductQuery::related("1").apply(&records());
        let ids: Vec<_> = out.iter().map(|r| r["_id"].as_str().unwrap()).collect();
        assert_eq!(ids, ["2", "4"]);
    }

    #[test]
    fn test_search_by_title_and_tag() {
        let q = SearchQuery::parse("sofa").unwrap();
        let out = ProductQuery::Search(q).apply(&records());
        assert_eq!(out.len(), 2);

        let q = SearchQuery::parse("LAMP").unwrap();
        let out = ProductQuery::Search(q).apply(&records());
        assert_eq!(out[0]["_id"], "2");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ProductQuery::featured().limit(), Some(8));
        assert_eq!(ProductQuery::related("x").limit(), Some(4));
        assert_eq!(ProductQuery::All.limit(), None);
    }
}
