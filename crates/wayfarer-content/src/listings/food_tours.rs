//! Listings for the Prague Food Tours pillar.

use wayfarer_catalog::prelude::*;

pub fn listings() -> Vec<TourListing> {
    vec![
        TourListing::new(
            "taste-of-prague-old-town",
            "4452TASTE",
            "Prague Culinary Walks",
            "Four hours, six stops, zero tourist-trap goulash",
        )
        .with_seo_title("Taste of Prague: The Old Town Food Tour Worth Booking")
        .with_why(
            "This is the food tour we take our own visiting parents on. The \
             stops rotate with the seasons, the portions genuinely add up to a \
             meal, and the guides talk about the neighborhoods between bites \
             instead of shuffling you to the next counter in silence.",
        )
        .with_inclusions(vec![
            "Six tasting stops with drinks pairings",
            "Local guide, groups capped at ten",
            "Dietary substitutions arranged in advance",
        ])
        .with_itinerary(vec![
            "11:00 - Meet at the Powder Tower",
            "11:15 - Open-faced sandwiches at a classic lahudky counter",
            "12:00 - Farmers market stop (seasonal)",
            "13:00 - Pub stop: beer and pickled hermelin",
            "14:00 - Traditional svickova lunch",
            "15:00 - Dessert and coffee finish in a first-republic cafe",
        ])
        .with_faqs(vec![
            Faq::new(
                "Can vegetarians do this tour?",
                "Yes, with notice at booking. Four of the six stops have strong \
                 vegetarian swaps; the pub stop becomes fried cheese, which is \
                 arguably an upgrade.",
            ),
            Faq::new(
                "How much food is it really?",
                "Come hungry and skip breakfast. Most guests cannot finish the \
                 final dessert course.",
            ),
            Faq::new(
                "Is alcohol included?",
                "Two beers and one glass of Moravian wine are included; \
                 non-alcoholic pairings are available at every stop.",
            ),
        ]),
        TourListing::new(
            "czech-beer-and-tapas-crawl",
            "7023BEER",
            "Prague Culinary Walks",
            "An evening pub crawl that cares more about the beer than the crawl",
        )
        .with_seo_title("Czech Beer & Tapas Evening Crawl: Our Honest Review")
        .with_why(
            "Most Prague beer tours are stag-party bait. This one visits three \
             taprooms a tourist would not find, the guide can explain why Czech \
             lager tastes different without a lecture, and the tapas-style \
             snacks at each stop keep the evening civilized.",
        )
        .with_inclusions(vec![
            "Five beer tastings across three taprooms",
            "Czech snack pairing at every stop",
            "Beer-certified local guide",
        ])
        .with_itinerary(vec![
            "17:30 - Meet in Vinohrady",
            "17:45 - Stop one: tank pilsner and utopenec",
            "19:00 - Stop two: unfiltered lagers at a brewpub",
            "20:15 - Stop three: dark beer and brewer's goulash",
        ])
        .with_faqs(vec![Faq::new(
            "I don't drink beer. Should I come?",
            "Honestly, probably not. This tour is built around the tastings; \
             look at the food tours on this page instead.",
        )]),
        // Marketplace title reads fine on cards; no seo override.
        TourListing::new(
            "farmers-market-brunch-walk",
            "3391MARKET",
            "Chef Katka Tours",
            "Saturday brunch assembled stall by stall with a working chef",
        )
        .with_why(
            "New this season and already our favorite Saturday morning in \
             Prague. You shop the Naplavka riverside market with a chef, then \
             eat what you picked, assembled into brunch on the embankment. Runs \
             only when the market does, which is exactly the point.",
        )
        .with_inclusions(vec![
            "Guided market walk with tastings",
            "Riverside brunch from the morning's haul",
            "Coffee from a market roaster",
        ])
        .with_itinerary(vec![
            "09:00 - Meet at the Naplavka embankment",
            "09:15 - Market walk: cheese, charcuterie, pastries",
            "10:30 - Brunch assembly and riverside breakfast",
            "12:00 - Finish with coffee and recommendations list",
        ])
        .with_faqs(vec![Faq::new(
            "What happens if it rains?",
            "The market runs rain or shine; brunch moves under the bridge \
             arches. Tours cancel only in storms, with a full refund.",
        )]),
    ]
}
