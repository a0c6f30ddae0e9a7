//! Guides for the Day Trips from Prague pillar.

use wayfarer_catalog::prelude::*;

pub fn guides() -> Vec<Guide> {
    vec![
        Guide::new(
            "best-day-trips-from-prague",
            "The 7 Best Day Trips from Prague, Ranked",
            "We have done every major day trip from Prague at least twice, on \
             tours and independently. This is the full ranking, including which \
             ones to skip and when a rental car beats any tour.",
        )
        .with_picks(vec![
            "kutna-hora-sedlec-ossuary",
            "cesky-krumlov-full-day",
            "bohemian-switzerland-hiking",
        ]),
        Guide::new(
            "day-trips-by-train",
            "Prague Day Trips You Can Do by Train",
            "No coach, no pickup point, no waiting for the slowest member of \
             the group. These destinations work on Czech Railways alone, with \
             departure tables and ticket-buying tips.",
        )
        .with_picks(vec!["kutna-hora-sedlec-ossuary"]),
        Guide::new(
            "unesco-towns-near-prague",
            "UNESCO Towns Within Reach of Prague",
            "The Czech Republic packs more UNESCO sites per square kilometer \
             than almost anywhere. Three of the best are day-trippable from \
             Prague; here is how to pair them.",
        )
        .with_picks(vec!["kutna-hora-sedlec-ossuary", "cesky-krumlov-full-day"]),
        Guide::new(
            "winter-day-trips",
            "Winter Day Trips from Prague That Are Better in the Cold",
            "Spa towns built for freezing weather, empty castle courtyards, \
             and the one hike that is genuinely magical in snow.",
        )
        .with_picks(vec!["bohemian-switzerland-hiking"]),
    ]
}
