//! Authored content and partner data for the Wayfarer travel site.
//!
//! Everything the catalog resolves lives here: the pillar list, the
//! editorial code rankings, the tour listings and guides our writers
//! author, the embedded partner snapshot document, and the affiliate link
//! builder. [`SiteContent::load`] assembles it all with fail-fast
//! validation; the site loads it once at startup and never mutates it.

mod codes;
mod guides;
mod listings;
mod partner;
mod pillars;
mod snapshots;

pub use partner::{PartnerLinks, DEFAULT_CAMPAIGN, DEFAULT_LINK_TEMPLATE};

use wayfarer_catalog::prelude::*;

/// The fully assembled, validated content set.
pub struct SiteContent {
    pub categories: CategoryRegistry,
    pub code_book: CodeBook,
    pub listings: ListingRegistry,
    pub guides: GuideRegistry,
    pub snapshots: SnapshotStore,
    pub partner: PartnerLinks,
}

impl SiteContent {
    /// Load the full dataset with the default partner link builder.
    ///
    /// Any `Err` here is an authoring mistake (duplicate slug, reused code,
    /// guide shadowing a listing route) and should fail the build.
    pub fn load() -> Result<Self, CatalogError> {
        Self::load_with_partner(PartnerLinks::default())
    }

    /// Load the full dataset with a configured partner link builder.
    pub fn load_with_partner(partner: PartnerLinks) -> Result<Self, CatalogError> {
        let categories = CategoryRegistry::new(pillars::pillars())?;

        let rankings = codes::rankings();
        let listing_entries = listings::listings();
        let guide_entries = guides::guides();

        // Content registered under a slug missing from the pillar list would
        // be unreachable; treat it like any other authoring fault.
        for slug in rankings
            .iter()
            .map(|(slug, _)| slug)
            .chain(listing_entries.iter().map(|(slug, _)| slug))
            .chain(guide_entries.iter().map(|(slug, _)| slug))
        {
            if !categories.is_valid(slug) {
                return Err(CatalogError::UnknownCategory(slug.clone()));
            }
        }

        let code_book = CodeBook::new(rankings)?;
        let listings = ListingRegistry::new(listing_entries)?;
        let guides = GuideRegistry::new(guide_entries, &listings)?;
        let snapshots = snapshots::snapshot_store()?;

        Ok(Self {
            categories,
            code_book,
            listings,
            guides,
            snapshots,
            partner,
        })
    }

    /// A resolver over this content set.
    pub fn resolver(&self) -> CatalogResolver<'_> {
        CatalogResolver::new(&self.snapshots, &self.listings, &self.partner)
    }

    /// Resolve one category's full ranked tour list.
    pub fn resolve_category(&self, category: &CategorySlug) -> Vec<ResolvedTour> {
        self.resolver()
            .resolve(category, self.code_book.codes_for(category))
    }
}
