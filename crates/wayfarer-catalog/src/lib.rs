//! Tour catalog resolution for the Wayfarer travel site.
//!
//! This crate is the layer between the authored marketing content and the
//! page templates:
//!
//! - **Snapshot**: static marketplace facts per product code, two-tier
//!   (generated table with a hand-maintained fallback)
//! - **Listing**: authored SEO/narrative content per tour, keyed by code
//!   and slug
//! - **Category / codes**: the pillar list and the positional editorial
//!   ranking per pillar
//! - **Guide**: themed sub-category pages with sibling cross-links
//! - **Resolver**: the merge that produces display-ready tour cards and
//!   chooses internal vs partner links
//!
//! Everything is loaded once at build/process start and read-only after
//! that; every lookup is synchronous and infallible past load.
//!
//! # Example
//!
//! ```rust,ignore
//! use wayfarer_catalog::prelude::*;
//!
//! let resolver = CatalogResolver::new(&snapshots, &listings, &partner);
//! let category = CategorySlug::new("prague-day-trips");
//! let tours = resolver.resolve(&category, code_book.codes_for(&category));
//!
//! let (top_picks, more_options) =
//!     tours.split_at(DEFAULT_TOP_PICKS.min(tours.len()));
//! ```

pub mod category;
pub mod codes;
pub mod error;
pub mod guide;
pub mod ids;
pub mod listing;
pub mod price;
pub mod resolver;
pub mod snapshot;

pub use error::CatalogError;
pub use ids::*;
pub use resolver::{BookingLinker, CatalogResolver, ResolvedTour};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;

    pub use crate::category::{Category, CategoryRegistry};
    pub use crate::codes::{CodeBook, DEFAULT_MORE_OPTIONS, DEFAULT_TOP_PICKS};
    pub use crate::guide::{Guide, GuideRegistry, RelatedGuide};
    pub use crate::listing::{Faq, ListingRegistry, TourListing};
    pub use crate::price::{normalize_price_display, usd_rate, PRICE_PREFIX, USD_RATES};
    pub use crate::resolver::{BookingLinker, CatalogResolver, ResolvedTour};
    pub use crate::snapshot::{ProductSnapshot, SnapshotSource, SnapshotStore, SnapshotTable};
}
