//! Data models for the analysis catalog

use crate::confidence::{ConfidenceScore, ConfidenceTier};
use serde::{Deserialize, Serialize};

/// Vendor risk level assigned by an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parse a risk level, case-insensitively
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Result of a completed AI analysis for one review item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: String,
    pub source_documents: Vec<String>,
    pub reasoning_steps: Vec<String>,
    pub generated_insight: String,
    pub confidence_score: ConfidenceScore,
    pub risk_level: RiskLevel,
}

impl AnalysisRecord {
    /// Confidence tier of a finished analysis
    pub fn confidence_tier(&self) -> ConfidenceTier {
        crate::confidence::tier_for_score(self.confidence_score.value() as i64)
    }

    /// Source document at `index`, if any
    pub fn source_document(&self, index: usize) -> Option<&str> {
        self.source_documents.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "id": "CER-1",
            "sourceDocuments": ["a.pdf"],
            "reasoningSteps": ["step"],
            "generatedInsight": "insight",
            "confidenceScore": 61,
            "riskLevel": "Medium"
        }"#;
        let record: AnalysisRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "CER-1");
        assert_eq!(record.risk_level, RiskLevel::Medium);
        assert_eq!(record.confidence_tier(), ConfidenceTier::Medium);
        assert_eq!(record.source_document(0), Some("a.pdf"));
        assert_eq!(record.source_document(1), None);
    }

    #[test]
    fn test_record_rejects_bad_score() {
        let json = r#"{
            "id": "CER-1",
            "sourceDocuments": [],
            "reasoningSteps": [],
            "generatedInsight": "",
            "confidenceScore": 101,
            "riskLevel": "Low"
        }"#;
        assert!(serde_json::from_str::<AnalysisRecord>(json).is_err());
    }

    #[test]
    fn test_risk_level_from_tag() {
        assert_eq!(RiskLevel::from_tag("HIGH"), Some(RiskLevel::High));
        assert_eq!(RiskLevel::from_tag("severe"), None);
    }
}
