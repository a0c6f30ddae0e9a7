//! Catalog error types.
//!
//! Only data-integrity faults surface here, and only at load time. Missing
//! snapshots, missing listings, and empty categories are expected states and
//! are represented as `Option`/empty results, never as errors.

use thiserror::Error;

use crate::ids::{CategorySlug, GuideSlug, ListingSlug, ProductCode};

/// Faults detected while building the catalog from authored content.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A registry was handed the same category twice.
    #[error("Category '{0}' registered twice")]
    DuplicateCategory(CategorySlug),

    /// Two listings in one category share a slug.
    #[error("Duplicate listing slug '{slug}' in category '{category}'")]
    DuplicateListingSlug {
        category: CategorySlug,
        slug: ListingSlug,
    },

    /// Two listings in one category claim the same product code.
    #[error("Duplicate product code '{code}' in listings for category '{category}'")]
    DuplicateListingCode {
        category: CategorySlug,
        code: ProductCode,
    },

    /// The same product code appears twice in one category's ranking.
    #[error("Product code '{code}' ranked twice in category '{category}'")]
    DuplicateRankedCode {
        category: CategorySlug,
        code: ProductCode,
    },

    /// A product code is ranked under two different categories.
    #[error("Product code '{code}' is ranked in both '{first}' and '{second}'")]
    CodeInTwoCategories {
        code: ProductCode,
        first: CategorySlug,
        second: CategorySlug,
    },

    /// Two guides in one category share a slug.
    #[error("Duplicate guide slug '{slug}' in category '{category}'")]
    DuplicateGuideSlug {
        category: CategorySlug,
        slug: GuideSlug,
    },

    /// A guide slug shadows a listing slug, which would make the
    /// `/{category}/{slug}` route ambiguous.
    #[error("Guide slug '{slug}' collides with a listing slug in category '{category}'")]
    GuideSlugCollision {
        category: CategorySlug,
        slug: GuideSlug,
    },

    /// A category's related-links block points at a slug that does not exist.
    #[error("Category '{category}' links to unknown related category '{related}'")]
    UnknownRelatedCategory {
        category: CategorySlug,
        related: CategorySlug,
    },

    /// Listings, guides, or ranked codes were registered under a slug that is
    /// not in the pillar list.
    #[error("'{0}' is not a registered category")]
    UnknownCategory(CategorySlug),

    /// The generated snapshot document could not be parsed.
    #[error("Snapshot document is malformed: {0}")]
    MalformedSnapshot(#[from] serde_json::Error),
}
