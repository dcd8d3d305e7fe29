//! Read-only analysis catalog keyed by business identifier

use super::models::AnalysisRecord;
use crate::config::{CatalogConfig, MissPolicy};
use crate::error::{Result, ReviewError};
use crate::metrics::{LookupOutcome, METRICS};
use indexmap::IndexMap;
use tracing::{debug, info, warn};

/// Seed records shipped with the dashboard
const BUILTIN_RECORDS: &str = include_str!("seed/analysis_records.json");

/// Immutable mapping from analysis id to record
///
/// Built once at startup and passed by reference (or `Arc`) to whatever
/// renders analyses. The first record in insertion order is the canonical
/// fallback served for unknown identifiers.
#[derive(Debug, Clone)]
pub struct AnalysisCatalog {
    records: IndexMap<String, AnalysisRecord>,
    fallback: AnalysisRecord,
    miss_policy: MissPolicy,
}

impl AnalysisCatalog {
    /// Build a catalog from records; the first becomes the fallback
    pub fn from_records(records: Vec<AnalysisRecord>) -> Result<Self> {
        let fallback = records.first().cloned().ok_or_else(|| {
            ReviewError::Catalog("catalog requires at least one record".to_string())
        })?;

        let mut map = IndexMap::with_capacity(records.len());
        for record in records {
            if map.contains_key(&record.id) {
                return Err(ReviewError::Catalog(format!("duplicate analysis id: {}", record.id)));
            }
            map.insert(record.id.clone(), record);
        }

        Ok(Self {
            records: map,
            fallback,
            miss_policy: MissPolicy::default(),
        })
    }

    /// Build a catalog from a JSON array of records
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<AnalysisRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Catalog of the built-in seed records
    pub fn builtin() -> Result<Self> {
        let catalog = Self::from_json(BUILTIN_RECORDS)?;
        info!(
            "Loaded {} built-in analysis records (fallback: {})",
            catalog.len(),
            catalog.fallback.id
        );
        Ok(catalog)
    }

    /// Apply catalog configuration
    pub fn with_config(mut self, config: &CatalogConfig) -> Self {
        self.miss_policy = config.miss_policy;
        self
    }

    /// Record for `id`, or the fallback record when `id` is unknown
    ///
    /// Unknown ids get real-looking data from the canonical record. Use
    /// [`get`](Self::get) or [`resolve`](Self::resolve) where a miss matters.
    pub fn lookup(&self, id: &str) -> &AnalysisRecord {
        match self.records.get(id) {
            Some(record) => {
                METRICS.record_lookup(LookupOutcome::Hit);
                record
            }
            None => {
                warn!("Analysis {:?} not in catalog, serving {}", id, self.fallback.id);
                METRICS.record_lookup(LookupOutcome::Fallback);
                &self.fallback
            }
        }
    }

    /// Record for `id`, without fallback
    pub fn get(&self, id: &str) -> Option<&AnalysisRecord> {
        self.records.get(id)
    }

    /// Record for `id` under the configured miss policy
    pub fn resolve(&self, id: &str) -> Result<&AnalysisRecord> {
        match self.miss_policy {
            MissPolicy::Fallback => Ok(self.lookup(id)),
            MissPolicy::Strict => match self.records.get(id) {
                Some(record) => {
                    METRICS.record_lookup(LookupOutcome::Hit);
                    Ok(record)
                }
                None => {
                    debug!("Analysis {:?} not found", id);
                    METRICS.record_lookup(LookupOutcome::NotFound);
                    Err(ReviewError::RecordNotFound(id.to_string()))
                }
            },
        }
    }

    /// Canonical record served on a miss
    pub fn fallback(&self) -> &AnalysisRecord {
        &self.fallback
    }

    pub fn miss_policy(&self) -> MissPolicy {
        self.miss_policy
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Identifiers in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; a catalog holds at least its fallback record
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RiskLevel;
    use crate::confidence::ConfidenceScore;

    fn record(id: &str, score: i64, risk: RiskLevel) -> AnalysisRecord {
        AnalysisRecord {
            id: id.to_string(),
            source_documents: vec![format!("{}.pdf", id)],
            reasoning_steps: vec!["reviewed".to_string()],
            generated_insight: format!("insight for {}", id),
            confidence_score: ConfidenceScore::new(score),
            risk_level: risk,
        }
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = AnalysisCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.fallback().id, "CER-10234");

        let record = catalog.lookup("CER-10234");
        assert_eq!(record.risk_level, RiskLevel::High);
        assert_eq!(record.confidence_score.value(), 92);
    }

    #[test]
    fn test_miss_returns_fallback() {
        let catalog = AnalysisCatalog::builtin().unwrap();
        let missing = catalog.lookup("CER-does-not-exist");
        let empty = catalog.lookup("");
        assert_eq!(missing, empty);
        assert_eq!(missing, catalog.fallback());
    }

    #[test]
    fn test_get_has_no_fallback() {
        let catalog = AnalysisCatalog::builtin().unwrap();
        assert!(catalog.get("CER-10240").is_some());
        assert!(catalog.get("CER-does-not-exist").is_none());
    }

    #[test]
    fn test_resolve_honors_miss_policy() {
        let catalog = AnalysisCatalog::builtin().unwrap();
        assert_eq!(catalog.resolve("nope").unwrap().id, "CER-10234");

        let strict = catalog.with_config(&CatalogConfig {
            miss_policy: MissPolicy::Strict,
        });
        assert!(matches!(
            strict.resolve("nope"),
            Err(ReviewError::RecordNotFound(id)) if id == "nope"
        ));
        assert_eq!(strict.resolve("CER-10236").unwrap().risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_first_record_is_fallback() {
        let catalog = AnalysisCatalog::from_records(vec![
            record("B-2", 70, RiskLevel::Medium),
            record("A-1", 90, RiskLevel::Low),
        ])
        .unwrap();
        assert_eq!(catalog.lookup("Z-9").id, "B-2");
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["B-2", "A-1"]);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            AnalysisCatalog::from_records(vec![]),
            Err(ReviewError::Catalog(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = AnalysisCatalog::from_records(vec![
            record("A-1", 90, RiskLevel::Low),
            record("A-1", 50, RiskLevel::High),
        ]);
        assert!(matches!(result, Err(ReviewError::Catalog(msg)) if msg.contains("A-1")));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(AnalysisCatalog::from_json("[{\"id\": 1}]").is_err());
    }

    #[test]
    fn test_catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnalysisCatalog>();
    }
}
