//! The catalog resolver: merges partner snapshot facts with authored
//! listings into display-ready tour summaries.
//!
//! The resolver never fails at resolve time. Codes without a snapshot are
//! dropped, codes without a listing link externally, and price strings that
//! cannot be normalized pass through as-is. The only hard failures in the
//! catalog happen earlier, when the registries load.

use serde::Serialize;

use crate::ids::{CategorySlug, ProductCode};
use crate::listing::ListingRegistry;
use crate::price::normalize_price_display;
use crate::snapshot::SnapshotStore;

/// Builds the outbound booking URL for codes that have no authored listing.
///
/// The partner URL format belongs to the surrounding application; the
/// catalog only ever calls this, it never assembles partner URLs itself.
pub trait BookingLinker {
    fn booking_url(&self, code: &ProductCode) -> String;
}

/// One display-ready tour card, built per page render and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTour {
    /// Partner product code.
    pub code: ProductCode,
    /// Display title: the listing's SEO title when authored, else the
    /// marketplace title verbatim.
    pub title: String,
    /// Where the card links: `/{category}/{slug}` when a listing exists,
    /// else the partner booking URL.
    pub outbound_url: String,
    /// USD-normalized display price.
    pub from_price_display: String,
    /// Marketplace rating; 0.0 means no reviews yet.
    pub rating: f32,
    /// Marketplace review count.
    pub review_count: u32,
    /// Hero image, when the marketplace has one.
    pub image_url: Option<String>,
    /// Whether the partner offers free cancellation.
    pub free_cancellation: bool,
    /// Operator attribution: marketplace first, authored listing second.
    pub operator: Option<String>,
}

impl ResolvedTour {
    /// Whether the card links to one of our own listing pages.
    pub fn links_internally(&self) -> bool {
        self.outbound_url.starts_with('/')
    }
}

/// Read-only aggregation over the snapshot store and listing registry.
pub struct CatalogResolver<'a> {
    snapshots: &'a SnapshotStore,
    listings: &'a ListingRegistry,
    linker: &'a dyn BookingLinker,
}

impl<'a> CatalogResolver<'a> {
    pub fn new(
        snapshots: &'a SnapshotStore,
        listings: &'a ListingRegistry,
        linker: &'a dyn BookingLinker,
    ) -> Self {
        Self {
            snapshots,
            listings,
            linker,
        }
    }

    /// Resolve an ordered code list into display-ready summaries.
    ///
    /// Output order matches input order exactly; the editorial ranking is
    /// positional and must survive resolution. Codes with no snapshot are
    /// dropped rather than emitted half-populated.
    pub fn resolve(&self, category: &CategorySlug, codes: &[ProductCode]) -> Vec<ResolvedTour> {
        codes
            .iter()
            .filter_map(|code| self.resolve_one(category, code))
            .collect()
    }

    /// Resolve a single code. `None` means "no snapshot coverage, skip".
    pub fn resolve_one(
        &self,
        category: &CategorySlug,
        code: &ProductCode,
    ) -> Option<ResolvedTour> {
        let snapshot = self.snapshots.lookup(code)?;
        let listing = self.listings.find_by_code(category, code);

        let title = listing
            .and_then(|l| l.seo_title.clone())
            .unwrap_or_else(|| snapshot.title.clone());

        // Marketplace attribution wins when both sides name an operator; it
        // reflects who actually runs the tour today.
        let operator = snapshot
            .operator
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| {
                listing
                    .map(|l| l.operator.clone())
                    .filter(|name| !name.is_empty())
            });

        let outbound_url = match listing {
            Some(l) => format!("/{}/{}", category, l.slug),
            None => self.linker.booking_url(code),
        };

        Some(ResolvedTour {
            code: code.clone(),
            title,
            outbound_url,
            from_price_display: normalize_price_display(&snapshot.from_price_display),
            rating: snapshot.rating,
            review_count: snapshot.review_count,
            image_url: snapshot.image_url.clone(),
            free_cancellation: snapshot.free_cancellation,
            operator,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::listing::TourListing;
    use crate::snapshot::{ProductSnapshot, SnapshotTable};

    struct TestLinker;

    impl BookingLinker for TestLinker {
        fn booking_url(&self, code: &ProductCode) -> String {
            format!("https://partner.example/tours/{}", code)
        }
    }

    fn day_trips() -> CategorySlug {
        CategorySlug::new("prague-day-trips")
    }

    fn snapshots() -> SnapshotStore {
        let generated = SnapshotTable {
            captured_at: "2026-07-18T06:30:00Z".parse().unwrap(),
            products: HashMap::from([
                (
                    ProductCode::new("7411KUTNA"),
                    ProductSnapshot::new("Kutna Hora: Marketplace Title", "Price from EUR 64")
                        .with_reviews(4.7, 1205)
                        .with_image("https://cdn.partner.example/kutna.jpg")
                        .with_operator("Bohemia Day Tours s.r.o."),
                ),
                (
                    ProductCode::new("5520CESKY"),
                    ProductSnapshot::new("Cesky Krumlov Day Trip", "Price from CZK 2,150")
                        .with_free_cancellation(),
                ),
                (
                    ProductCode::new("2386KARLOVY"),
                    ProductSnapshot::new("Karlovy Vary Spa Day", "Price from (see options)"),
                ),
            ]),
        };
        SnapshotStore::new(generated, Vec::new())
    }

    fn listings() -> ListingRegistry {
        ListingRegistry::new([(
            day_trips(),
            vec![
                TourListing::new(
                    "kutna-hora-sedlec-ossuary",
                    "7411KUTNA",
                    "Bohemia Tours",
                    "The bone church everyone asks about",
                )
                .with_seo_title("Kutna Hora & Sedlec Ossuary Day Trip from Prague"),
                // No seo title: the marketplace title must show verbatim.
                TourListing::new(
                    "cesky-krumlov-full-day",
                    "5520CESKY",
                    "Bohemia Tours",
                    "A fairytale town in a river bend",
                ),
            ],
        )])
        .unwrap()
    }

    fn codes(raw: &[&str]) -> Vec<ProductCode> {
        raw.iter().map(|c| ProductCode::new(*c)).collect()
    }

    #[test]
    fn test_order_preserved_after_drops() {
        let snapshots = snapshots();
        let listings = listings();
        let resolver = CatalogResolver::new(&snapshots, &listings, &TestLinker);

        // 0000MISSING has no snapshot and must vanish without disturbing
        // the order of its neighbors.
        let resolved = resolver.resolve(
            &day_trips(),
            &codes(&["2386KARLOVY", "0000MISSING", "7411KUTNA", "5520CESKY"]),
        );
        let out: Vec<&str> = resolved.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(out, vec!["2386KARLOVY", "7411KUTNA", "5520CESKY"]);
    }

    #[test]
    fn test_missing_snapshot_never_panics() {
        let snapshots = snapshots();
        let listings = listings();
        let resolver = CatalogResolver::new(&snapshots, &listings, &TestLinker);

        let resolved = resolver.resolve(&day_trips(), &codes(&["0000MISSING"]));
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_listing_gets_internal_route() {
        let snapshots = snapshots();
        let listings = listings();
        let resolver = CatalogResolver::new(&snapshots, &listings, &TestLinker);

        let tour = resolver
            .resolve_one(&day_trips(), &ProductCode::new("7411KUTNA"))
            .unwrap();
        assert_eq!(tour.outbound_url, "/prague-day-trips/kutna-hora-sedlec-ossuary");
        assert!(tour.links_internally());
    }

    #[test]
    fn test_no_listing_links_externally() {
        let snapshots = snapshots();
        let listings = listings();
        let resolver = CatalogResolver::new(&snapshots, &listings, &TestLinker);

        let tour = resolver
            .resolve_one(&day_trips(), &ProductCode::new("2386KARLOVY"))
            .unwrap();
        assert_eq!(tour.outbound_url, "https://partner.example/tours/2386KARLOVY");
        assert!(!tour.links_internally());
    }

    #[test]
    fn test_title_precedence() {
        let snapshots = snapshots();
        let listings = listings();
        let resolver = CatalogResolver::new(&snapshots, &listings, &TestLinker);

        let with_seo = resolver
            .resolve_one(&day_trips(), &ProductCode::new("7411KUTNA"))
            .unwrap();
        assert_eq!(with_seo.title, "Kutna Hora & Sedlec Ossuary Day Trip from Prague");

        let without_seo = resolver
            .resolve_one(&day_trips(), &ProductCode::new("5520CESKY"))
            .unwrap();
        assert_eq!(without_seo.title, "Cesky Krumlov Day Trip");
    }

    #[test]
    fn test_operator_precedence() {
        let snapshots = snapshots();
        let listings = listings();
        let resolver = CatalogResolver::new(&snapshots, &listings, &TestLinker);

        // Snapshot and listing both name an operator: snapshot wins.
        let kutna = resolver
            .resolve_one(&day_trips(), &ProductCode::new("7411KUTNA"))
            .unwrap();
        assert_eq!(kutna.operator.as_deref(), Some("Bohemia Day Tours s.r.o."));

        // Snapshot silent, listing authored: listing fills in.
        let cesky = resolver
            .resolve_one(&day_trips(), &ProductCode::new("5520CESKY"))
            .unwrap();
        assert_eq!(cesky.operator.as_deref(), Some("Bohemia Tours"));

        // Neither side: absent.
        let karlovy = resolver
            .resolve_one(&day_trips(), &ProductCode::new("2386KARLOVY"))
            .unwrap();
        assert!(karlovy.operator.is_none());
    }

    #[test]
    fn test_prices_normalized_to_usd() {
        let snapshots = snapshots();
        let listings = listings();
        let resolver = CatalogResolver::new(&snapshots, &listings, &TestLinker);

        let eur = resolver
            .resolve_one(&day_trips(), &ProductCode::new("7411KUTNA"))
            .unwrap();
        assert_eq!(eur.from_price_display, "Price from $69");

        let czk = resolver
            .resolve_one(&day_trips(), &ProductCode::new("5520CESKY"))
            .unwrap();
        assert_eq!(czk.from_price_display, "Price from $92");

        let placeholder = resolver
            .resolve_one(&day_trips(), &ProductCode::new("2386KARLOVY"))
            .unwrap();
        assert_eq!(placeholder.from_price_display, "Price from (see options)");
    }

    #[test]
    fn test_snapshot_facts_carried_through() {
        let snapshots = snapshots();
        let listings = listings();
        let resolver = CatalogResolver::new(&snapshots, &listings, &TestLinker);

        let tour = resolver
            .resolve_one(&day_trips(), &ProductCode::new("7411KUTNA"))
            .unwrap();
        assert_eq!(tour.rating, 4.7);
        assert_eq!(tour.review_count, 1205);
        assert_eq!(
            tour.image_url.as_deref(),
            Some("https://cdn.partner.example/kutna.jpg")
        );
        assert!(!tour.free_cancellation);

        let cesky = resolver
            .resolve_one(&day_trips(), &ProductCode::new("5520CESKY"))
            .unwrap();
        assert!(cesky.free_cancellation);
    }

    #[test]
    fn test_category_without_listings_resolves_externally() {
        let snapshots = snapshots();
        let listings = listings();
        let resolver = CatalogResolver::new(&snapshots, &listings, &TestLinker);

        let cruises = CategorySlug::new("vltava-river-cruises");
        let resolved = resolver.resolve(&cruises, &codes(&["7411KUTNA", "5520CESKY"]));
        assert_eq!(resolved.len(), 2);
        assert!(resolved.iter().all(|t| !t.links_internally()));
    }

    #[test]
    fn test_empty_code_list_resolves_empty() {
        let snapshots = snapshots();
        let listings = listings();
        let resolver = CatalogResolver::new(&snapshots, &listings, &TestLinker);

        assert!(resolver.resolve(&day_trips(), &[]).is_empty());
    }
}
