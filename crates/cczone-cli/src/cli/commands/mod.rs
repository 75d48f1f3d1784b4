//! Command implementations.

pub mod check;
pub mod config;
pub mod directory;
pub mod watch;
pub mod zones;

use std::path::PathBuf;

use cczone::{CatalogClient, Classifier, Platform};

use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective configuration (file + overrides)
    pub config: Config,

    /// Where the configuration was loaded from
    pub config_path: PathBuf,

    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show educational explanations
    pub explain: bool,

    /// Verbose output
    pub verbose: bool,

    /// Disable colors
    pub no_color: bool,
}

impl Context {
    /// Platform description in effect.
    pub const fn platform(&self) -> &Platform {
        &self.config.platform
    }

    /// Create a catalog client for the configured platform API.
    pub fn catalog(&self) -> anyhow::Result<CatalogClient> {
        Ok(CatalogClient::builder()
            .base_url(self.platform().api_base.clone())
            .build()?)
    }

    /// Create a classifier with a fresh session directory.
    pub fn classifier(&self) -> anyhow::Result<Classifier> {
        Ok(Classifier::for_platform(self.platform().clone())?)
    }
}
