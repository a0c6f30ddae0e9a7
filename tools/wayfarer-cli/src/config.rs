//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use wayfarer_content::{DEFAULT_CAMPAIGN, DEFAULT_LINK_TEMPLATE};

/// CLI configuration file (`wayfarer.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Booking partner link settings.
    #[serde(default)]
    pub partner: PartnerConfig,

    /// Category page display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Booking partner link settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerConfig {
    /// Outbound URL template; `{code}` is replaced with the product code.
    #[serde(default = "default_link_template")]
    pub link_template: String,

    /// Affiliate campaign tag appended as `?cmp=`.
    #[serde(default = "default_campaign")]
    pub campaign: String,
}

fn default_link_template() -> String {
    DEFAULT_LINK_TEMPLATE.to_string()
}

fn default_campaign() -> String {
    DEFAULT_CAMPAIGN.to_string()
}

impl Default for PartnerConfig {
    fn default() -> Self {
        Self {
            link_template: default_link_template(),
            campaign: default_campaign(),
        }
    }
}

/// How category pages slice the ranked list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Tours shown as "top picks".
    #[serde(default = "default_top_picks")]
    pub top_picks: usize,

    /// Tours shown under "more options".
    #[serde(default = "default_more_options")]
    pub more_options: usize,
}

fn default_top_picks() -> usize {
    wayfarer_catalog::codes::DEFAULT_TOP_PICKS
}

fn default_more_options() -> usize {
    wayfarer_catalog::codes::DEFAULT_MORE_OPTIONS
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            top_picks: default_top_picks(),
            more_options: default_more_options(),
        }
    }
}
