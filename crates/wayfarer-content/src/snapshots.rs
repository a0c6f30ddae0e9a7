//! Partner snapshot data: the generated table plus hand-maintained fallback
//! rows.
//!
//! `data/partner_snapshot.json` is rewritten by the offline snapshot job;
//! do not edit it by hand. The fallback rows below cover codes the job has
//! not picked up yet and lose to the generated table on any collision.

use wayfarer_catalog::prelude::*;

/// The generated snapshot document, embedded at build time.
const GENERATED_SNAPSHOT: &str = include_str!("../data/partner_snapshot.json");

/// Build the two-tier snapshot store.
pub fn snapshot_store() -> Result<SnapshotStore, CatalogError> {
    let generated = SnapshotTable::from_json(GENERATED_SNAPSHOT)?;
    Ok(SnapshotStore::new(generated, fallback_rows()))
}

/// Hand-maintained facts for codes the generator has not covered yet.
/// Prune a row once it shows up in the generated table.
fn fallback_rows() -> Vec<(ProductCode, ProductSnapshot)> {
    vec![
        (
            ProductCode::new("9902JAZZ"),
            ProductSnapshot::new(
                "Jazz Boat Evening Cruise with Welcome Drink",
                "Price from EUR 49",
            )
            .with_reviews(4.5, 1120)
            .with_image("https://cdn.tourvista.com/img/9902JAZZ-cover.jpg")
            .with_operator("Jazzboat Prague"),
        ),
        (
            ProductCode::new("1275KONOPISTE"),
            ProductSnapshot::new(
                "Konopiste Chateau Half Day Trip from Prague",
                "Price from CZK 1,790",
            )
            .with_reviews(4.3, 167)
            .with_free_cancellation(),
        ),
    ]
}
