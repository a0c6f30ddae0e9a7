//! Sub-category guide pages and cross-linking between sibling guides.
//!
//! Guides share the `/{category}/{slug}` URL position with tour listings, so
//! a guide slug colliding with a listing slug would make routing ambiguous.
//! The registry cross-checks against the listing registry at load and fails
//! fast on overlap.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::{CategorySlug, GuideSlug, ListingSlug};
use crate::listing::ListingRegistry;

/// An authored guide page curating a themed subset of a category's tours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    /// URL slug, unique within the category and disjoint from listing slugs.
    pub slug: GuideSlug,
    /// Display title.
    pub title: String,
    /// Intro paragraph.
    pub intro: String,
    /// Curated picks, as listing slugs in display order.
    pub picks: Vec<ListingSlug>,
}

impl Guide {
    pub fn new(
        slug: impl Into<GuideSlug>,
        title: impl Into<String>,
        intro: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            intro: intro.into(),
            picks: Vec::new(),
        }
    }

    /// Set the curated picks, in display order.
    pub fn with_picks(mut self, slugs: Vec<&str>) -> Self {
        self.picks = slugs.into_iter().map(ListingSlug::from).collect();
        self
    }
}

/// A sibling-guide cross-link: just enough for a "related guides" block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedGuide {
    pub slug: GuideSlug,
    pub title: String,
}

/// Read-only registry of guide pages, grouped by category.
#[derive(Debug, Clone)]
pub struct GuideRegistry {
    by_category: HashMap<CategorySlug, Vec<Guide>>,
}

impl GuideRegistry {
    /// Build the registry. Fails on a duplicate guide slug within a
    /// category, and on a guide slug that shadows a listing slug in the same
    /// category (both would ship ambiguous routes).
    pub fn new(
        entries: impl IntoIterator<Item = (CategorySlug, Vec<Guide>)>,
        listings: &ListingRegistry,
    ) -> Result<Self, CatalogError> {
        let mut by_category: HashMap<CategorySlug, Vec<Guide>> = HashMap::new();

        for (category, guides) in entries {
            if by_category.contains_key(&category) {
                return Err(CatalogError::DuplicateCategory(category));
            }

            let listing_slugs: HashSet<&str> = listings
                .for_category(&category)
                .iter()
                .map(|listing| listing.slug.as_str())
                .collect();

            let mut seen: HashSet<&GuideSlug> = HashSet::new();
            for guide in &guides {
                if !seen.insert(&guide.slug) {
                    return Err(CatalogError::DuplicateGuideSlug {
                        category,
                        slug: guide.slug.clone(),
                    });
                }
                if listing_slugs.contains(guide.slug.as_str()) {
                    return Err(CatalogError::GuideSlugCollision {
                        category,
                        slug: guide.slug.clone(),
                    });
                }
            }

            by_category.insert(category, guides);
        }

        Ok(Self { by_category })
    }

    /// All guides for a category, in authoring order.
    pub fn for_category(&self, category: &CategorySlug) -> &[Guide] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find a guide by slug within a category.
    pub fn find(&self, category: &CategorySlug, slug: &GuideSlug) -> Option<&Guide> {
        self.for_category(category)
            .iter()
            .find(|guide| &guide.slug == slug)
    }

    /// Guide slugs within a category, used by routing to tell a guide page
    /// apart from a listing page in the same URL position.
    pub fn slugs_for_category(&self, category: &CategorySlug) -> HashSet<&GuideSlug> {
        self.for_category(category)
            .iter()
            .map(|guide| &guide.slug)
            .collect()
    }

    /// Sibling guides for the "related guides" block: the current guide is
    /// excluded, authoring order is kept, and the list is truncated to
    /// `limit`. No scoring, no shuffling.
    pub fn related_guides(
        &self,
        category: &CategorySlug,
        current: &GuideSlug,
        limit: usize,
    ) -> Vec<RelatedGuide> {
        self.for_category(category)
            .iter()
            .filter(|guide| &guide.slug != current)
            .take(limit)
            .map(|guide| RelatedGuide {
                slug: guide.slug.clone(),
                title: guide.title.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::TourListing;

    fn day_trips() -> CategorySlug {
        CategorySlug::new("prague-day-trips")
    }

    fn guides() -> Vec<Guide> {
        vec![
            Guide::new(
                "best-day-trips-from-prague",
                "The 7 Best Day Trips from Prague",
                "Our full ranking.",
            )
            .with_picks(vec!["kutna-hora-sedlec-ossuary"]),
            Guide::new(
                "day-trips-by-train",
                "Prague Day Trips You Can Do by Train",
                "No bus, no tour van.",
            ),
            Guide::new(
                "unesco-towns-near-prague",
                "UNESCO Towns Within Reach of Prague",
                "World heritage in a day.",
            ),
            Guide::new(
                "winter-day-trips",
                "Winter Day Trips from Prague",
                "Spa towns and snow.",
            ),
        ]
    }

    fn listings() -> ListingRegistry {
        ListingRegistry::new([(
            day_trips(),
            vec![TourListing::new(
                "kutna-hora-sedlec-ossuary",
                "7411KUTNA",
                "Bohemia Tours",
                "The bone church everyone asks about",
            )],
        )])
        .unwrap()
    }

    #[test]
    fn test_find_guide() {
        let registry = GuideRegistry::new([(day_trips(), guides())], &listings()).unwrap();

        let guide = registry
            .find(&day_trips(), &GuideSlug::new("day-trips-by-train"))
            .unwrap();
        assert_eq!(guide.title, "Prague Day Trips You Can Do by Train");

        assert!(registry
            .find(&day_trips(), &GuideSlug::new("no-such-guide"))
            .is_none());
    }

    #[test]
    fn test_slug_set_for_routing() {
        let registry = GuideRegistry::new([(day_trips(), guides())], &listings()).unwrap();
        let slugs = registry.slugs_for_category(&day_trips());
        assert_eq!(slugs.len(), 4);
        assert!(slugs.contains(&GuideSlug::new("unesco-towns-near-prague")));
    }

    #[test]
    fn test_related_excludes_current_and_truncates() {
        let registry = GuideRegistry::new([(day_trips(), guides())], &listings()).unwrap();

        let related =
            registry.related_guides(&day_trips(), &GuideSlug::new("day-trips-by-train"), 3);
        let slugs: Vec<&str> = related.iter().map(|g| g.slug.as_str()).collect();

        assert_eq!(
            slugs,
            vec![
                "best-day-trips-from-prague",
                "unesco-towns-near-prague",
                "winter-day-trips"
            ]
        );
        assert!(!slugs.contains(&"day-trips-by-train"));
    }

    #[test]
    fn test_related_limit_zero() {
        let registry = GuideRegistry::new([(day_trips(), guides())], &listings()).unwrap();
        assert!(registry
            .related_guides(&day_trips(), &GuideSlug::new("day-trips-by-train"), 0)
            .is_empty());
    }

    #[test]
    fn test_duplicate_guide_slug_rejected() {
        let mut dup = guides();
        dup.push(Guide::new("day-trips-by-train", "Dup", "Dup."));

        let err = GuideRegistry::new([(day_trips(), dup)], &listings()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateGuideSlug { .. }));
    }

    #[test]
    fn test_listing_slug_collision_rejected() {
        let mut colliding = guides();
        colliding.push(Guide::new(
            "kutna-hora-sedlec-ossuary",
            "Shadowing a listing",
            "Would break routing.",
        ));

        let err = GuideRegistry::new([(day_trips(), colliding)], &listings()).unwrap_err();
        assert!(matches!(err, CatalogError::GuideSlugCollision { .. }));
    }
}
