//! Partner marketplace snapshot facts and the two-tier lookup store.
//!
//! The generated table is produced by an offline job against the booking
//! partner's API and shipped as a static JSON document. The fallback table is
//! hand-maintained for codes the generator has not covered yet. Lookup order
//! is generated first, fallback second; whichever table has the key wins
//! entirely for that key — there is no field-level merge.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::ProductCode;

/// Marketplace facts for one bookable product, captured offline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Product title as listed on the partner marketplace.
    pub title: String,
    /// Currency-tagged display price, e.g. `"Price from EUR 89"`, or the
    /// `"Price from (see options)"` placeholder when no number is known.
    pub from_price_display: String,
    /// Average rating; 0.0 when the product has no reviews yet.
    #[serde(default)]
    pub rating: f32,
    /// Review count; 0 when unknown.
    #[serde(default)]
    pub review_count: u32,
    /// Hero image URL, when the marketplace exposes one.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Whether the partner offers free cancellation on this product.
    #[serde(default)]
    pub free_cancellation: bool,
    /// Operator attribution as shown on the marketplace.
    #[serde(default)]
    pub operator: Option<String>,
}

impl ProductSnapshot {
    /// Create a snapshot with the required facts; the rest defaults to
    /// "unknown" the same way a sparse feed row does.
    pub fn new(title: impl Into<String>, from_price_display: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            from_price_display: from_price_display.into(),
            rating: 0.0,
            review_count: 0,
            image_url: None,
            free_cancellation: false,
            operator: None,
        }
    }

    /// Set rating and review count together; the feed never has one without
    /// the other.
    pub fn with_reviews(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Set the hero image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Mark the product as free-cancellation.
    pub fn with_free_cancellation(mut self) -> Self {
        self.free_cancellation = true;
        self
    }

    /// Set the marketplace operator attribution.
    pub fn with_operator(mut self, name: impl Into<String>) -> Self {
        self.operator = Some(name.into());
        self
    }
}

/// One parsed snapshot document: the facts table plus capture metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotTable {
    /// When the offline job captured this table.
    pub captured_at: DateTime<Utc>,
    /// Facts keyed by partner product code.
    pub products: HashMap<ProductCode, ProductSnapshot>,
}

impl SnapshotTable {
    /// Parse a generated snapshot document.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Number of products in the table.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Which tier of the store answered a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnapshotSource {
    /// The generated table (authoritative).
    Generated,
    /// The hand-maintained fallback table.
    Fallback,
}

impl SnapshotSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotSource::Generated => "generated",
            SnapshotSource::Fallback => "fallback",
        }
    }
}

/// Read-only, two-tier snapshot lookup.
///
/// Absence is a normal result, not a failure: editorial code lists are
/// edited independently of snapshot coverage, so callers skip codes that
/// resolve to nothing.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    generated: SnapshotTable,
    fallback: HashMap<ProductCode, ProductSnapshot>,
}

impl SnapshotStore {
    /// Build the store from the generated table and the fallback rows.
    pub fn new(
        generated: SnapshotTable,
        fallback: impl IntoIterator<Item = (ProductCode, ProductSnapshot)>,
    ) -> Self {
        Self {
            generated,
            fallback: fallback.into_iter().collect(),
        }
    }

    /// Look up the snapshot for a product code.
    pub fn lookup(&self, code: &ProductCode) -> Option<&ProductSnapshot> {
        self.generated
            .products
            .get(code)
            .or_else(|| self.fallback.get(code))
    }

    /// Which tier would answer a lookup for this code, if any.
    pub fn source_of(&self, code: &ProductCode) -> Option<SnapshotSource> {
        if self.generated.products.contains_key(code) {
            Some(SnapshotSource::Generated)
        } else if self.fallback.contains_key(code) {
            Some(SnapshotSource::Fallback)
        } else {
            None
        }
    }

    /// When the generated table was captured.
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.generated.captured_at
    }

    /// Size of the generated table.
    pub fn generated_len(&self) -> usize {
        self.generated.len()
    }

    /// Size of the fallback table.
    pub fn fallback_len(&self) -> usize {
        self.fallback.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SnapshotStore {
        let generated = SnapshotTable {
            captured_at: "2026-07-18T06:30:00Z".parse().unwrap(),
            products: HashMap::from([
                (
                    ProductCode::new("7411KUTNA"),
                    ProductSnapshot::new("Kutna Hora Day Trip", "Price from EUR 64")
                        .with_reviews(4.7, 1205),
                ),
                (
                    ProductCode::new("4452TASTE"),
                    ProductSnapshot::new("Prague Food Tour", "Price from CZK 2,150"),
                ),
            ]),
        };
        let fallback = vec![
            (
                ProductCode::new("8415VIENNA"),
                ProductSnapshot::new("Vienna Day Trip", "Price from EUR 99"),
            ),
            (
                // Also present in the generated table; generated must win.
                ProductCode::new("4452TASTE"),
                ProductSnapshot::new("Stale Food Tour Title", "Price from EUR 1"),
            ),
        ];
        SnapshotStore::new(generated, fallback)
    }

    #[test]
    fn test_generated_hit() {
        let store = store();
        let snap = store.lookup(&ProductCode::new("7411KUTNA")).unwrap();
        assert_eq!(snap.title, "Kutna Hora Day Trip");
        assert_eq!(snap.review_count, 1205);
        assert_eq!(
            store.source_of(&ProductCode::new("7411KUTNA")),
            Some(SnapshotSource::Generated)
        );
    }

    #[test]
    fn test_fallback_hit() {
        let store = store();
        let snap = store.lookup(&ProductCode::new("8415VIENNA")).unwrap();
        assert_eq!(snap.title, "Vienna Day Trip");
        assert_eq!(
            store.source_of(&ProductCode::new("8415VIENNA")),
            Some(SnapshotSource::Fallback)
        );
    }

    #[test]
    fn test_generated_wins_on_collision() {
        let store = store();
        let snap = store.lookup(&ProductCode::new("4452TASTE")).unwrap();
        assert_eq!(snap.title, "Prague Food Tour");
    }

    #[test]
    fn test_absent_is_none() {
        let store = store();
        assert!(store.lookup(&ProductCode::new("0000NOWHERE")).is_none());
        assert!(store.source_of(&ProductCode::new("0000NOWHERE")).is_none());
    }

    #[test]
    fn test_table_from_json() {
        let raw = r#"{
            "captured_at": "2026-07-18T06:30:00Z",
            "products": {
                "2386KARLOVY": {
                    "title": "Karlovy Vary Spa Day",
                    "from_price_display": "Price from EUR 85",
                    "rating": 4.4,
                    "review_count": 310,
                    "free_cancellation": true
                }
            }
        }"#;
        let table = SnapshotTable::from_json(raw).unwrap();
        assert_eq!(table.len(), 1);
        let snap = &table.products[&ProductCode::new("2386KARLOVY")];
        assert_eq!(snap.rating, 4.4);
        assert!(snap.free_cancellation);
        // Fields missing from the document default to "unknown".
        assert!(snap.image_url.is_none());
        assert!(snap.operator.is_none());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(SnapshotTable::from_json("{ not json").is_err());
    }
}
