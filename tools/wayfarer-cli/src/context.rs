//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use wayfarer_content::{PartnerLinks, SiteContent};

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &PathBuf) -> Option<CliConfig> {
        let config_names = ["wayfarer.toml", ".wayfarer.toml"];

        let mut current = start.clone();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Partner link builder from the loaded config.
    pub fn partner_links(&self) -> PartnerLinks {
        PartnerLinks::new(
            self.config.partner.link_template.clone(),
            self.config.partner.campaign.clone(),
        )
    }

    /// Load the authored dataset with this context's partner settings.
    pub fn load_content(&self) -> Result<SiteContent> {
        SiteContent::load_with_partner(self.partner_links())
            .context("Content validation failed")
    }
}
