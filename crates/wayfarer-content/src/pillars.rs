//! The pillar category list.

use wayfarer_catalog::prelude::*;

/// All pillar categories, in navigation order.
pub fn pillars() -> Vec<Category> {
    vec![
        Category::new(
            "prague-day-trips",
            "Day Trips from Prague",
            "Castles, spa towns, and UNESCO gems, all within a couple of hours \
             of the city. These are the escapes we actually send friends on.",
        )
        .with_hero_image("https://images.wayfarer.travel/pillars/day-trips.jpg")
        .with_related(vec!["prague-castle-tickets", "prague-food-tours"]),
        Category::new(
            "prague-food-tours",
            "Prague Food Tours",
            "From Old Town tasting walks to microbrewery crawls in Vinohrady. \
             Skip the tourist-trap goulash and eat where locals do.",
        )
        .with_hero_image("https://images.wayfarer.travel/pillars/food-tours.jpg")
        .with_related(vec!["prague-day-trips", "vltava-river-cruises"]),
        Category::new(
            "vltava-river-cruises",
            "Vltava River Cruises",
            "Prague looks best from the water. Lunch buffets, evening jazz, or \
             a quick hour under Charles Bridge.",
        )
        .with_hero_image("https://images.wayfarer.travel/pillars/river-cruises.jpg")
        .with_related(vec!["prague-food-tours"]),
        Category::new(
            "prague-castle-tickets",
            "Prague Castle Tickets & Tours",
            "The world's largest castle complex, and its longest queues. Here \
             is how to get in without wasting your morning.",
        )
        .with_hero_image("https://images.wayfarer.travel/pillars/castle.jpg")
        .with_related(vec!["prague-day-trips"]),
        // New pillar awaiting its first ranked tours.
        Category::new(
            "prague-bike-tours",
            "Prague Bike & E-Bike Tours",
            "Cobblestones and hills sound bad on a bike until you try an \
             e-bike. Guided rides along the river and up to the castle.",
        )
        .with_related(vec!["prague-day-trips"]),
    ]
}
