//! Guides for the Prague Food Tours pillar.

use wayfarer_catalog::prelude::*;

pub fn guides() -> Vec<Guide> {
    vec![
        Guide::new(
            "prague-food-tour-guide",
            "Which Prague Food Tour Should You Book?",
            "Daytime tasting walk, evening beer crawl, or market brunch? They \
             overlap less than you would think. A decision guide based on \
             appetite, schedule, and how you feel about beer.",
        )
        .with_picks(vec![
            "taste-of-prague-old-town",
            "czech-beer-and-tapas-crawl",
            "farmers-market-brunch-walk",
        ]),
        Guide::new(
            "vegetarian-prague-food-guide",
            "Eating Vegetarian in Prague (Yes, Really)",
            "Czech cuisine is famously meat-heavy, but fried cheese is a \
             national dish and the new wave of bistros has changed the city. \
             Which food tours handle vegetarians well, and where to eat on \
             your own.",
        )
        .with_picks(vec!["taste-of-prague-old-town", "farmers-market-brunch-walk"]),
    ]
}
