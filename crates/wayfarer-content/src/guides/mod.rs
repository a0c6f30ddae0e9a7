//! Authored guide pages, one module per pillar that has them.

mod day_trips;
mod food_tours;

use wayfarer_catalog::prelude::*;

/// Guides per pillar, in pillar order.
pub fn guides() -> Vec<(CategorySlug, Vec<Guide>)> {
    vec![
        (CategorySlug::new("prague-day-trips"), day_trips::guides()),
        (CategorySlug::new("prague-food-tours"), food_tours::guides()),
    ]
}
