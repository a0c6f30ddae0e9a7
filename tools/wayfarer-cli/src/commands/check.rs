//! Dataset validation command. Run in CI after every content edit.

use anyhow::{bail, Result};

use super::CheckArgs;
use crate::context::Context;

/// Run the check command.
pub async fn run(args: CheckArgs, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Validating authored content");
    let content = ctx.load_content();
    spinner.finish_and_clear();

    // Load already enforced slug/code uniqueness and guide route collisions;
    // an Err here carries the exact authoring fault.
    let content = content?;

    let categories = content.categories.categories();
    let listing_count: usize = categories
        .iter()
        .map(|c| content.listings.for_category(&c.slug).len())
        .sum();
    let guide_count: usize = categories
        .iter()
        .map(|c| content.guides.for_category(&c.slug).len())
        .sum();

    let mut uncovered: Vec<String> = Vec::new();
    for category in categories {
        for code in content.code_book.codes_for(&category.slug) {
            if content.snapshots.lookup(code).is_none() {
                uncovered.push(format!("{} ({})", code, category.slug));
            }
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&CheckReport {
            valid: true,
            categories: categories.len(),
            ranked_codes: content.code_book.total_codes(),
            listings: listing_count,
            guides: guide_count,
            snapshot_generated: content.snapshots.generated_len(),
            snapshot_fallback: content.snapshots.fallback_len(),
            codes_without_snapshot: uncovered.clone(),
        });
    } else {
        ctx.output.success("Content validation passed");
        ctx.output.kv("Categories", &categories.len().to_string());
        ctx.output.kv("Ranked codes", &content.code_book.total_codes().to_string());
        ctx.output.kv("Listings", &listing_count.to_string());
        ctx.output.kv("Guides", &guide_count.to_string());
        ctx.output.kv(
            "Snapshot rows",
            &format!(
                "{} generated, {} fallback",
                content.snapshots.generated_len(),
                content.snapshots.fallback_len()
            ),
        );

        if !uncovered.is_empty() {
            ctx.output.warn(&format!(
                "{} ranked code(s) have no snapshot and will be dropped from pages:",
                uncovered.len()
            ));
            for code in &uncovered {
                ctx.output.list_item(code);
            }
        }
    }

    if args.strict && !uncovered.is_empty() {
        bail!(
            "{} ranked code(s) without snapshot coverage (strict mode)",
            uncovered.len()
        );
    }

    Ok(())
}

#[derive(serde::Serialize, Clone)]
struct CheckReport {
    valid: bool,
    categories: usize,
    ranked_codes: usize,
    listings: usize,
    guides: usize,
    snapshot_generated: usize,
    snapshot_fallback: usize,
    codes_without_snapshot: Vec<String>,
}
