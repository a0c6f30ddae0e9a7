//! Category resolution preview: what the category page will actually show.

use anyhow::{bail, Result};

use wayfarer_catalog::prelude::*;

use super::ResolveArgs;
use crate::context::Context;
use crate::output::format_rating;

/// Run the resolve command.
pub async fn run(args: ResolveArgs, ctx: &Context) -> Result<()> {
    let content = ctx.load_content()?;
    let category = CategorySlug::new(args.category.as_str());

    if !content.categories.is_valid(&category) {
        bail!("'{}' is not a registered category", category);
    }

    let ranked = content.code_book.codes_for(&category);
    let tours = content.resolve_category(&category);
    let dropped = ranked.len() - tours.len();
    ctx.output.debug(&format!(
        "{} code(s) ranked, {} resolved",
        ranked.len(),
        tours.len()
    ));

    let boundary = ctx.config.display.top_picks.min(tours.len());
    let (top_picks, more_options) = tours.split_at(boundary);
    let more_options = &more_options[..ctx.config.display.more_options.min(more_options.len())];

    if ctx.output.is_json() {
        if args.flat {
            ctx.output.json(&tours);
        } else {
            ctx.output.json(&ResolveReport {
                category: &category,
                top_picks,
                more_options,
                dropped,
            });
        }
        return Ok(());
    }

    let title = content
        .categories
        .get(&category)
        .map(|c| c.title.as_str())
        .unwrap_or(category.as_str());
    ctx.output.header(title);

    if tours.is_empty() {
        ctx.output.info("No tours resolve for this category yet.");
        return Ok(());
    }

    if args.flat {
        print_section(ctx, "All tours", &tours);
    } else {
        print_section(ctx, "Top picks", top_picks);
        if !more_options.is_empty() {
            print_section(ctx, "More options", more_options);
        }
    }

    if dropped > 0 {
        ctx.output.warn(&format!(
            "{} ranked code(s) dropped for missing snapshots (see `wayfarer coverage`)",
            dropped
        ));
    }

    Ok(())
}

fn print_section(ctx: &Context, name: &str, tours: &[ResolvedTour]) {
    if tours.is_empty() {
        return;
    }

    ctx.output.info("");
    ctx.output.info(name);
    ctx.output.table_row(
        &["CODE", "TITLE", "PRICE", "RATING", "LINK"],
        &[14, 44, 16, 14, 40],
    );
    for tour in tours {
        let link = if tour.links_internally() {
            tour.outbound_url.clone()
        } else {
            format!("→ {}", tour.outbound_url)
        };
        ctx.output.table_row(
            &[
                tour.code.as_str(),
                &truncate(&tour.title, 44),
                &tour.from_price_display,
                &format_rating(tour.rating, tour.review_count),
                &truncate(&link, 40),
            ],
            &[14, 44, 16, 14, 40],
        );
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[derive(serde::Serialize)]
struct ResolveReport<'a> {
    category: &'a CategorySlug,
    top_picks: &'a [ResolvedTour],
    more_options: &'a [ResolvedTour],
    dropped: usize,
}
