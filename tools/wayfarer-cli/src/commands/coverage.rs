//! Snapshot coverage report: which ranked codes the generated table covers,
//! which still lean on the hand-maintained fallback, and which resolve to
//! nothing and silently drop from pages.

use anyhow::Result;
use chrono::{DateTime, Utc};

use wayfarer_catalog::prelude::*;

use super::CoverageArgs;
use crate::context::Context;
use crate::output::source_badge;

/// Run the coverage command.
pub async fn run(args: CoverageArgs, ctx: &Context) -> Result<()> {
    let content = ctx.load_content()?;

    let mut rows: Vec<CoverageRow> = Vec::new();
    for category in content.categories.categories() {
        for code in content.code_book.codes_for(&category.slug) {
            let source = content.snapshots.source_of(code);
            if args.missing_only && source.is_some() {
                continue;
            }
            rows.push(CoverageRow {
                code: code.clone(),
                category: category.slug.clone(),
                source: source.map(|s| s.as_str()),
                title: content.snapshots.lookup(code).map(|s| s.title.clone()),
            });
        }
    }

    let generated = rows.iter().filter(|r| r.source == Some("generated")).count();
    let fallback = rows.iter().filter(|r| r.source == Some("fallback")).count();
    let missing = rows.iter().filter(|r| r.source.is_none()).count();

    if ctx.output.is_json() {
        ctx.output.json(&CoverageReport {
            captured_at: content.snapshots.captured_at(),
            generated,
            fallback,
            missing,
            rows,
        });
        return Ok(());
    }

    ctx.output.header("Snapshot coverage");
    ctx.output.kv("Captured", &format_captured(content.snapshots.captured_at()));
    ctx.output.info("");

    ctx.output.table_row(&["CODE", "CATEGORY", "SOURCE", "TITLE"], &[14, 24, 10, 50]);
    for row in &rows {
        ctx.output.table_row(
            &[
                row.code.as_str(),
                row.category.as_str(),
                &source_badge(row.source),
                row.title.as_deref().unwrap_or("-"),
            ],
            &[14, 24, 10, 50],
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!(
        "{} generated, {} fallback, {} missing",
        generated, fallback, missing
    ));

    if fallback > 0 {
        ctx.output.warn(&format!(
            "{} code(s) still lean on hand-maintained fallback rows",
            fallback
        ));
    }
    if missing > 0 {
        ctx.output.warn(&format!(
            "{} code(s) resolve to nothing and will not render",
            missing
        ));
    } else if !args.missing_only {
        ctx.output.success("Every ranked code has snapshot coverage");
    }

    Ok(())
}

fn format_captured(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[derive(serde::Serialize)]
struct CoverageRow {
    code: ProductCode,
    category: CategorySlug,
    source: Option<&'static str>,
    title: Option<String>,
}

#[derive(serde::Serialize)]
struct CoverageReport {
    captured_at: DateTime<Utc>,
    generated: usize,
    fallback: usize,
    missing: usize,
    rows: Vec<CoverageRow>,
}
