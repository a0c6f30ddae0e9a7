//! CLI command implementations.

pub mod check;
pub mod coverage;
pub mod resolve;

use clap::Args;

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Also fail when a ranked code has no snapshot coverage.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the resolve command.
#[derive(Args)]
pub struct ResolveArgs {
    /// Category slug to resolve (e.g. prague-day-trips).
    pub category: String,

    /// Print one flat list instead of the top-picks/more-options split.
    #[arg(long)]
    pub flat: bool,
}

/// Arguments for the coverage command.
#[derive(Args)]
pub struct CoverageArgs {
    /// Only show codes with no snapshot coverage.
    #[arg(long)]
    pub missing_only: bool,
}
