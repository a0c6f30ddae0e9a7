//! Authored tour listings, one module per pillar.
//!
//! Cruises and castle tickets have no listings yet; their category pages
//! link every tour straight out to the booking partner.

mod day_trips;
mod food_tours;

use wayfarer_catalog::prelude::*;

/// Listings per pillar, in pillar order.
pub fn listings() -> Vec<(CategorySlug, Vec<TourListing>)> {
    vec![
        (CategorySlug::new("prague-day-trips"), day_trips::listings()),
        (CategorySlug::new("prague-food-tours"), food_tours::listings()),
    ]
}
