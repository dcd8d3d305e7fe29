//! Startup wiring for the review core

use crate::catalog::AnalysisCatalog;
use crate::confidence::ConfidenceScore;
use crate::config::Config;
use crate::error::Result;
use crate::filter::{FilterOptions, FilterPanel};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;

/// Configured components shared by the dashboard views
#[derive(Debug, Clone)]
pub struct ReviewCore {
    config: Config,
    catalog: Arc<AnalysisCatalog>,
}

impl ReviewCore {
    /// Build from configuration and an explicit catalog
    pub fn new(config: Config, catalog: AnalysisCatalog) -> Self {
        let catalog = Arc::new(catalog.with_config(&config.catalog));
        Self { config, catalog }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared read-only catalog
    pub fn catalog(&self) -> Arc<AnalysisCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Confidence score under the configured out-of-range policy
    pub fn score(&self, raw: i64) -> Result<ConfidenceScore> {
        ConfidenceScore::with_policy(raw, self.config.scores.out_of_range)
    }

    /// Fresh filter panel offering `vendors` plus the fixed selector options
    pub fn filter_panel<I, S>(&self, vendors: I) -> FilterPanel
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterPanel::new(FilterOptions::default().with_vendors(vendors))
    }
}

/// Initialize the review core with the built-in catalog
pub fn init_review_core(config: Config) -> anyhow::Result<ReviewCore> {
    info!("Initializing review core");

    let catalog = AnalysisCatalog::builtin().context("failed to load built-in analysis catalog")?;
    let core = ReviewCore::new(config, catalog);

    info!(
        "Review core initialized: {} analyses, miss policy {:?}",
        core.catalog.len(),
        core.catalog.miss_policy()
    );

    Ok(core)
}
