//! Data models for confidence classification

use crate::config::ScorePolicy;
use crate::error::{Result, ReviewError};
use crate::metrics::METRICS;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Lowest valid confidence score
pub const MIN_SCORE: u8 = 0;
/// Highest valid confidence score
pub const MAX_SCORE: u8 = 100;

/// Confidence score in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ConfidenceScore(u8);

impl ConfidenceScore {
    /// Build a score, clamping out-of-range input into `[0, 100]`
    pub fn new(raw: i64) -> Self {
        match Self::try_new(raw) {
            Ok(score) => score,
            Err(_) => {
                let clamped = raw.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u8;
                warn!("Confidence score {} out of range, clamped to {}", raw, clamped);
                METRICS.record_score_adjustment("clamped");
                Self(clamped)
            }
        }
    }

    /// Build a score, rejecting out-of-range input
    pub fn try_new(raw: i64) -> Result<Self> {
        if (MIN_SCORE as i64..=MAX_SCORE as i64).contains(&raw) {
            Ok(Self(raw as u8))
        } else {
            Err(ReviewError::ScoreOutOfRange {
                score: raw,
                min: MIN_SCORE,
                max: MAX_SCORE,
            })
        }
    }

    /// Build a score under the configured out-of-range policy
    pub fn with_policy(raw: i64, policy: ScorePolicy) -> Result<Self> {
        match policy {
            ScorePolicy::Clamp => Ok(Self::new(raw)),
            ScorePolicy::Reject => Self::try_new(raw).map_err(|e| {
                METRICS.record_score_adjustment("rejected");
                e
            }),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for ConfidenceScore {
    type Error = ReviewError;

    fn try_from(raw: i64) -> Result<Self> {
        Self::try_new(raw)
    }
}

impl From<ConfidenceScore> for u8 {
    fn from(score: ConfidenceScore) -> Self {
        score.0
    }
}

/// Analysis lifecycle of a review item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Lifecycle {
    NotStarted,
    InProgress,
    Finished,
    Repopulated,
}

impl Lifecycle {
    /// Parse a lifecycle flag; anything unrecognized counts as not started
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "not-started" => Self::NotStarted,
            "in-progress" => Self::InProgress,
            "finished" => Self::Finished,
            "repopulated" => Self::Repopulated,
            other => {
                debug!("Unrecognized lifecycle {:?}, treating as not-started", other);
                METRICS.record_unknown_tag("lifecycle");
                Self::NotStarted
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Finished => "finished",
            Self::Repopulated => "repopulated",
        }
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl From<String> for Lifecycle {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<Lifecycle> for String {
    fn from(lifecycle: Lifecycle) -> Self {
        lifecycle.as_str().to_string()
    }
}

/// Qualitative confidence bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Pending,
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a tier name as used by the confidence filter
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Low => "Low Confidence",
            Self::Medium => "Medium Confidence",
            Self::High => "High Confidence",
        }
    }
}

/// Label and tooltip body for a confidence badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierDescription {
    pub tier: ConfidenceTier,
    pub label: &'static str,
    pub tooltip_lines: Vec<String>,
}
