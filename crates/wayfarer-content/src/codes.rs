//! Editorial product-code rankings.
//!
//! Order is the ranking: the first `DEFAULT_TOP_PICKS` codes of each list
//! render as "top picks", the rest as "more options". Edited by hand when
//! the editorial team reshuffles a page.

use wayfarer_catalog::prelude::*;

/// Ranked code lists per pillar, in pillar order.
pub fn rankings() -> Vec<(CategorySlug, Vec<ProductCode>)> {
    vec![
        (
            CategorySlug::new("prague-day-trips"),
            ranked(&[
                "7411KUTNA",
                "5520CESKY",
                "3310BOHEMIA",
                "8415TEREZIN",
                "2386KARLOVY",
                "6642PILSEN",
                "9104DRESDEN",
                "1275KONOPISTE",
            ]),
        ),
        (
            CategorySlug::new("prague-food-tours"),
            ranked(&[
                "4452TASTE",
                "7023BEER",
                "3391MARKET",
                "2217CRAFT",
                "5518DINNER",
                "8840SWEET",
            ]),
        ),
        (
            CategorySlug::new("vltava-river-cruises"),
            ranked(&["3345EVENING", "6120LUNCH", "9902JAZZ", "1188SIGHTSEE"]),
        ),
        (
            CategorySlug::new("prague-castle-tickets"),
            ranked(&["4410GUIDED", "7755CASTLE", "2288NIGHT"]),
        ),
        // No tours ranked yet; the pillar page renders guides only.
        (CategorySlug::new("prague-bike-tours"), Vec::new()),
    ]
}

fn ranked(codes: &[&str]) -> Vec<ProductCode> {
    codes.iter().map(|code| ProductCode::new(*code)).collect()
}
