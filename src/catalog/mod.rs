//! Static analysis-record catalog
//!
//! Holds the AI analysis results shown by the analysis explainer and the
//! citation viewer:
//! - Records keyed by business identifier (e.g. `CER-10234`)
//! - Fallback to the canonical record on a miss
//! - Optional strict resolution that reports misses

pub mod models;
pub mod store;

pub use models::{AnalysisRecord, RiskLevel};
pub use store::AnalysisCatalog;
