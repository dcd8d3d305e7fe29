//! Metrics collection for observability
//!
//! Counters are kept on a dedicated registry so that embedding applications
//! can merge them into their own exporter or scrape `export_prometheus`.

use once_cell::sync::Lazy;
use prometheus::{register_counter_vec_with_registry, CounterVec, Opts, Registry};
use std::sync::Arc;

/// Global metrics registry
pub static METRICS: Lazy<Arc<Metrics>> = Lazy::new(|| {
    Arc::new(Metrics::new().expect("Failed to initialize metrics"))
});

/// Outcome of a catalog lookup, used as a metric label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Hit,
    Fallback,
    NotFound,
}

impl LookupOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Fallback => "fallback",
            Self::NotFound => "not_found",
        }
    }
}

/// Metrics collector
pub struct Metrics {
    registry: Registry,

    // Catalog metrics
    pub catalog_lookups: CounterVec,

    // Tag parsing metrics
    pub unknown_tags: CounterVec,

    // Confidence score metrics
    pub score_adjustments: CounterVec,

    // Filter panel metrics
    pub filter_changes: CounterVec,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let catalog_lookups = register_counter_vec_with_registry!(
            Opts::new("catalog_lookups_total", "Total analysis catalog lookups"),
            &["outcome"],
            registry
        )?;

        let unknown_tags = register_counter_vec_with_registry!(
            Opts::new("unknown_tags_total", "Unrecognized tags by kind"),
            &["kind"],
            registry
        )?;

        let score_adjustments = register_counter_vec_with_registry!(
            Opts::new("score_adjustments_total", "Out-of-range confidence scores"),
            &["action"],
            registry
        )?;

        let filter_changes = register_counter_vec_with_registry!(
            Opts::new("filter_changes_total", "Filter panel change requests"),
            &["field", "status"],
            registry
        )?;

        Ok(Self {
            registry,
            catalog_lookups,
            unknown_tags,
            score_adjustments,
            filter_changes,
        })
    }

    /// Get the metrics registry for exporting
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Record a catalog lookup
    pub fn record_lookup(&self, outcome: LookupOutcome) {
        self.catalog_lookups.with_label_values(&[outcome.as_str()]).inc();
    }

    /// Record a tag that fell through to the default branch
    pub fn record_unknown_tag(&self, kind: &str) {
        self.unknown_tags.with_label_values(&[kind]).inc();
    }

    /// Record an out-of-range score (`clamped` or `rejected`)
    pub fn record_score_adjustment(&self, action: &str) {
        self.score_adjustments.with_label_values(&[action]).inc();
    }

    /// Record a filter change request
    pub fn record_filter_change(&self, field: &str, accepted: bool) {
        let status = if accepted { "accepted" } else { "ignored" };
        self.filter_changes.with_label_values(&[field, status]).inc();
    }

    /// Export metrics in Prometheus text format
    pub fn export_prometheus(&self) -> String {
        use prometheus::Encoder;

        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).unwrap_or_default();

        String::from_utf8(buffer).unwrap_or_default()
    }
}
