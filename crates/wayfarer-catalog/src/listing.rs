//! Authored tour listings and the per-category listing registry.
//!
//! A listing is the SEO/narrative content our writers author for one bookable
//! product. Listings are written at build time and never change at runtime. A
//! product without a listing is a normal state: the category page then shows
//! marketplace facts only and links straight out to the booking partner.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::{CategorySlug, ListingSlug, ProductCode};

/// One question/answer pair in a listing's FAQ block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// Authored content for one bookable tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourListing {
    /// URL slug, unique within the listing's category.
    pub slug: ListingSlug,
    /// Partner product code this listing describes.
    pub code: ProductCode,
    /// Tour operator as named by our writers.
    pub operator: String,
    /// Title override for category cards and the listing page `<title>`.
    /// When absent the marketplace title is shown verbatim.
    pub seo_title: Option<String>,
    /// One-line hook shown under the title.
    pub headline: String,
    /// Editorial paragraph: why this tour made the list.
    pub why_we_picked_it: String,
    /// What the ticket includes, one bullet per entry.
    pub inclusions: Vec<String>,
    /// Itinerary stops in order, one entry per stop.
    pub itinerary: Vec<String>,
    /// FAQ block for the listing page.
    pub faqs: Vec<Faq>,
}

impl TourListing {
    /// Create a listing with the required fields; narrative blocks start
    /// empty and are filled in with the `with_` builders.
    pub fn new(
        slug: impl Into<ListingSlug>,
        code: impl Into<ProductCode>,
        operator: impl Into<String>,
        headline: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            code: code.into(),
            operator: operator.into(),
            seo_title: None,
            headline: headline.into(),
            why_we_picked_it: String::new(),
            inclusions: Vec::new(),
            itinerary: Vec::new(),
            faqs: Vec::new(),
        }
    }

    /// Set the SEO title override.
    pub fn with_seo_title(mut self, title: impl Into<String>) -> Self {
        self.seo_title = Some(title.into());
        self
    }

    /// Set the "why we picked it" paragraph.
    pub fn with_why(mut self, copy: impl Into<String>) -> Self {
        self.why_we_picked_it = copy.into();
        self
    }

    /// Set the inclusions bullets.
    pub fn with_inclusions(mut self, items: Vec<&str>) -> Self {
        self.inclusions = items.into_iter().map(String::from).collect();
        self
    }

    /// Set the itinerary stops.
    pub fn with_itinerary(mut self, stops: Vec<&str>) -> Self {
        self.itinerary = stops.into_iter().map(String::from).collect();
        self
    }

    /// Set the FAQ block.
    pub fn with_faqs(mut self, faqs: Vec<Faq>) -> Self {
        self.faqs = faqs;
        self
    }
}

/// Read-only registry of authored listings, grouped by category.
///
/// A category registered with an empty listing vec is "supported, currently
/// empty"; a category never registered at all is "listings unsupported".
/// Both resolve externally today, but the distinction is kept so partial
/// registries stay possible later.
#[derive(Debug, Clone)]
pub struct ListingRegistry {
    by_category: HashMap<CategorySlug, Vec<TourListing>>,
}

impl ListingRegistry {
    /// Build the registry, enforcing per-category uniqueness of both slugs
    /// and product codes. Violations are authoring mistakes that would ship
    /// wrong links, so they fail the whole load.
    pub fn new(
        entries: impl IntoIterator<Item = (CategorySlug, Vec<TourListing>)>,
    ) -> Result<Self, CatalogError> {
        let mut by_category: HashMap<CategorySlug, Vec<TourListing>> = HashMap::new();

        for (category, listings) in entries {
            if by_category.contains_key(&category) {
                return Err(CatalogError::DuplicateCategory(category));
            }

            let mut slugs: HashSet<&ListingSlug> = HashSet::new();
            let mut codes: HashSet<&ProductCode> = HashSet::new();
            for listing in &listings {
                if !slugs.insert(&listing.slug) {
                    return Err(CatalogError::DuplicateListingSlug {
                        category,
                        slug: listing.slug.clone(),
                    });
                }
                if !codes.insert(&listing.code) {
                    return Err(CatalogError::DuplicateListingCode {
                        category,
                        code: listing.code.clone(),
                    });
                }
            }

            by_category.insert(category, listings);
        }

        Ok(Self { by_category })
    }

    /// All listings for a category, in authoring order. Empty for both
    /// empty and unsupported categories.
    pub fn for_category(&self, category: &CategorySlug) -> &[TourListing] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find the listing for a product code within a category.
    pub fn find_by_code(
        &self,
        category: &CategorySlug,
        code: &ProductCode,
    ) -> Option<&TourListing> {
        self.for_category(category)
            .iter()
            .find(|listing| &listing.code == code)
    }

    /// Find a listing by its slug within a category.
    pub fn find_by_slug(
        &self,
        category: &CategorySlug,
        slug: &ListingSlug,
    ) -> Option<&TourListing> {
        self.for_category(category)
            .iter()
            .find(|listing| &listing.slug == slug)
    }

    /// Categories that support listings at all (including ones registered
    /// with zero listings so far).
    pub fn categories_with_listings(&self) -> HashSet<&CategorySlug> {
        self.by_category.keys().collect()
    }

    /// Whether a category supports listings.
    pub fn supports_category(&self, category: &CategorySlug) -> bool {
        self.by_category.contains_key(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_trips() -> CategorySlug {
        CategorySlug::new("prague-day-trips")
    }

    fn kutna_hora() -> TourListing {
        TourListing::new(
            "kutna-hora-sedlec-ossuary",
            "7411KUTNA",
            "Bohemia Tours",
            "The bone church everyone asks about",
        )
        .with_seo_title("Kutna Hora & Sedlec Ossuary Day Trip from Prague")
    }

    fn cesky_krumlov() -> TourListing {
        TourListing::new(
            "cesky-krumlov-full-day",
            "5520CESKY",
            "Bohemia Tours",
            "A fairytale town in a river bend",
        )
    }

    #[test]
    fn test_find_by_code_and_slug() {
        let registry =
            ListingRegistry::new([(day_trips(), vec![kutna_hora(), cesky_krumlov()])]).unwrap();

        let listing = registry
            .find_by_code(&day_trips(), &ProductCode::new("7411KUTNA"))
            .unwrap();
        assert_eq!(listing.slug.as_str(), "kutna-hora-sedlec-ossuary");

        let listing = registry
            .find_by_slug(&day_trips(), &ListingSlug::new("cesky-krumlov-full-day"))
            .unwrap();
        assert_eq!(listing.code.as_str(), "5520CESKY");
    }

    #[test]
    fn test_missing_listing_is_none() {
        let registry = ListingRegistry::new([(day_trips(), vec![kutna_hora()])]).unwrap();
        assert!(registry
            .find_by_code(&day_trips(), &ProductCode::new("0000NOWHERE"))
            .is_none());
        assert!(registry
            .find_by_code(&CategorySlug::new("prague-food-tours"), &ProductCode::new("7411KUTNA"))
            .is_none());
    }

    #[test]
    fn test_authoring_order_preserved() {
        let registry =
            ListingRegistry::new([(day_trips(), vec![kutna_hora(), cesky_krumlov()])]).unwrap();
        let slugs: Vec<&str> = registry
            .for_category(&day_trips())
            .iter()
            .map(|l| l.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["kutna-hora-sedlec-ossuary", "cesky-krumlov-full-day"]);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut dup = cesky_krumlov();
        dup.slug = ListingSlug::new("kutna-hora-sedlec-ossuary");

        let err = ListingRegistry::new([(day_trips(), vec![kutna_hora(), dup])]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateListingSlug { .. }));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut dup = cesky_krumlov();
        dup.code = ProductCode::new("7411KUTNA");

        let err = ListingRegistry::new([(day_trips(), vec![kutna_hora(), dup])]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateListingCode { .. }));
    }

    #[test]
    fn test_empty_vs_unsupported() {
        let registry = ListingRegistry::new([(day_trips(), Vec::new())]).unwrap();

        assert!(registry.supports_category(&day_trips()));
        assert!(registry.for_category(&day_trips()).is_empty());

        let cruises = CategorySlug::new("vltava-river-cruises");
        assert!(!registry.supports_category(&cruises));
        assert_eq!(registry.categories_with_listings(), HashSet::from([&day_trips()]));
    }
}
