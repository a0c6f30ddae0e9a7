//! Listings for the Day Trips from Prague pillar.

use wayfarer_catalog::prelude::*;

pub fn listings() -> Vec<TourListing> {
    vec![
        TourListing::new(
            "kutna-hora-sedlec-ossuary",
            "7411KUTNA",
            "Bohemia Day Tours",
            "The bone church everyone asks about, plus a UNESCO silver town",
        )
        .with_seo_title("Kutna Hora & Sedlec Ossuary Day Trip from Prague")
        .with_why(
            "Every visitor to Prague hears about the bone church, and most tours \
             rush it. This one pairs the ossuary with a proper walk through Kutna \
             Hora's medieval center and St. Barbara's Cathedral, and the guide \
             actually explains the silver-mining history instead of reciting it. \
             Half a day, back in Prague by mid-afternoon.",
        )
        .with_inclusions(vec![
            "Round-trip transport from central Prague",
            "Sedlec Ossuary entry ticket",
            "St. Barbara's Cathedral entry ticket",
            "English-speaking guide",
        ])
        .with_itinerary(vec![
            "08:30 - Pickup near the National Museum",
            "09:45 - Sedlec Ossuary visit",
            "11:00 - Walk through Kutna Hora old town",
            "11:45 - St. Barbara's Cathedral",
            "13:00 - Free time for lunch in town",
            "14:30 - Arrival back in Prague",
        ])
        .with_faqs(vec![
            Faq::new(
                "Is the ossuary suitable for children?",
                "It depends on the child. The chapel is small and genuinely \
                 decorated with human bones; some kids find it fascinating, \
                 others find it frightening. There is no age restriction.",
            ),
            Faq::new(
                "Can I take photos inside the ossuary?",
                "Personal photography is allowed without flash. Tripods and \
                 commercial shoots need a permit from the parish.",
            ),
            Faq::new(
                "How much walking is involved?",
                "Around three kilometers total, mostly on cobblestones. Wear \
                 comfortable shoes; the walk from the ossuary to the old town \
                 is gently uphill.",
            ),
        ]),
        TourListing::new(
            "cesky-krumlov-full-day",
            "5520CESKY",
            "Bohemia Day Tours",
            "A fairytale town wrapped in a river bend, worth the longer ride",
        )
        .with_seo_title("Cesky Krumlov Day Trip from Prague: Is It Worth It?")
        .with_why(
            "Cesky Krumlov is the furthest day trip we recommend from Prague, \
             and the three-hour ride each way filters out everyone who is not \
             sure they want to go. The old town is tiny, absurdly photogenic, \
             and best enjoyed with the four hours of free time this tour gives \
             you rather than a forced group march.",
        )
        .with_inclusions(vec![
            "Round-trip coach with onboard Wi-Fi",
            "Guided orientation walk on arrival",
            "Four hours of free time in the old town",
        ])
        .with_itinerary(vec![
            "08:00 - Departure from Florenc coach station",
            "11:00 - Orientation walk through the old town",
            "12:00 - Free time: castle tower, riverside lunch, museums",
            "16:00 - Departure for Prague",
            "19:00 - Arrival back in Prague",
        ])
        .with_faqs(vec![
            Faq::new(
                "Is the castle interior included?",
                "No. Castle courtyard and gardens are free to enter; interior \
                 routes are ticketed separately and sell out in summer, so book \
                 ahead on the castle website if you want one.",
            ),
            Faq::new(
                "Is one day enough for Cesky Krumlov?",
                "For the old town, yes. If you want to raft the Vltava loop or \
                 see the castle interiors without rushing, stay overnight.",
            ),
        ]),
        TourListing::new(
            "bohemian-switzerland-hiking",
            "3310BOHEMIA",
            "Northern Hikes",
            "Sandstone arches and gorge boat rides on the Czech-German border",
        )
        .with_seo_title("Bohemian Switzerland Day Hike from Prague")
        .with_why(
            "The Pravcicka Gate is the largest natural sandstone arch in Europe \
             and somehow still feels undiscovered compared to the Old Town \
             crowds. This operator runs small groups, actual hiking pace, and \
             includes the Kamenice gorge boat section most cheaper tours skip.",
        )
        .with_inclusions(vec![
            "Hotel pickup and drop-off",
            "National park entry fees",
            "Kamenice gorge boat ride",
            "Certified mountain guide",
        ])
        .with_itinerary(vec![
            "07:30 - Hotel pickup in Prague",
            "09:30 - Trailhead briefing at Hrensko",
            "10:30 - Pravcicka Gate viewpoint",
            "13:00 - Picnic lunch stop",
            "14:30 - Kamenice gorge boat ride",
            "18:30 - Drop-off in Prague",
        ])
        .with_faqs(vec![
            Faq::new(
                "How fit do I need to be?",
                "You should be comfortable walking 12 kilometers with around \
                 400 meters of elevation gain. It is a real hike, not a stroll, \
                 but the pace includes plenty of photo stops.",
            ),
            Faq::new(
                "Does the tour run in winter?",
                "Yes, with microspikes provided when trails are icy. The gorge \
                 boats stop running from November to March, so the winter route \
                 substitutes a second viewpoint.",
            ),
        ]),
        // Marketplace title is strong here; no seo override.
        TourListing::new(
            "terezin-memorial-tour",
            "8415TEREZIN",
            "Prague Remembrance Tours",
            "A sobering, well-told half day at the Terezin memorial",
        )
        .with_why(
            "Terezin needs a guide who can carry the weight of the place, and \
             this operator's guides are historians, not script readers. The \
             half-day format keeps the visit focused on the Small Fortress and \
             the Ghetto Museum without padding.",
        )
        .with_inclusions(vec![
            "Round-trip transport from Prague",
            "Terezin Memorial entry ticket",
            "Historian-led guided visit",
        ])
        .with_itinerary(vec![
            "09:00 - Departure from central Prague",
            "10:00 - Small Fortress guided visit",
            "11:45 - Ghetto Museum and Magdeburg Barracks",
            "13:15 - Departure for Prague",
            "14:15 - Arrival back in Prague",
        ])
        .with_faqs(vec![Faq::new(
            "Is the visit appropriate for teenagers?",
            "Yes. The memorial recommends age 12 and up; guides adjust the \
             level of detail for mixed groups.",
        )]),
    ]
}
