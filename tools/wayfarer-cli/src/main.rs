//! Wayfarer CLI - Content-ops tool for the travel site catalog.
//!
//! Commands:
//! - `wayfarer check` - Validate the authored dataset
//! - `wayfarer resolve` - Preview a category page's resolved tour list
//! - `wayfarer coverage` - Report snapshot coverage per ranked code

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CheckArgs, CoverageArgs, ResolveArgs};

/// Wayfarer CLI - Validate and preview the travel site catalog
#[derive(Parser)]
#[command(name = "wayfarer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the authored dataset (fails on integrity faults)
    Check(CheckArgs),

    /// Resolve a category and show its top-picks/more-options split
    Resolve(ResolveArgs),

    /// Report snapshot coverage for every ranked code
    Coverage(CoverageArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Check(args) => commands::check::run(args, &ctx).await,
        Commands::Resolve(args) => commands::resolve::run(args, &ctx).await,
        Commands::Coverage(args) => commands::coverage::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
