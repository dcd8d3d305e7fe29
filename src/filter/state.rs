//! Filter selections held by the review list

use crate::catalog::RiskLevel;
use crate::confidence::ConfidenceTier;
use serde::{Deserialize, Serialize};

/// Label of the explicit "all" option every selector offers
pub const ALL_LABEL: &str = "all";

/// One selector's value
///
/// `Unset` (nothing picked yet) and `All` (the user picked "all") are
/// distinct even though both admit every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Selection<T> {
    Unset,
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The chosen value, if a specific one was picked
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Only(value) => Some(value),
            _ => None,
        }
    }

    /// Whether a record with `value` passes this selector
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::Unset | Self::All => true,
            Self::Only(chosen) => chosen == value,
        }
    }
}

/// Finished/unfinished analysis selector values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completion {
    Finished,
    Unfinished,
}

impl Completion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finished => "finished",
            Self::Unfinished => "unfinished",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "finished" => Some(Self::Finished),
            "unfinished" => Some(Self::Unfinished),
            _ => None,
        }
    }
}

/// Which filter dimension changed
///
/// `Reset` is reported once when every field is cleared together; it is
/// not part of `ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    Query,
    Vendor,
    Risk,
    Confidence,
    Completion,
    Reset,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        Self::Query,
        Self::Vendor,
        Self::Risk,
        Self::Confidence,
        Self::Completion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Vendor => "vendor",
            Self::Risk => "risk",
            Self::Confidence => "confidence",
            Self::Completion => "completion",
            Self::Reset => "reset",
        }
    }
}

/// Independent filter selections; setters are the only mutation path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    query: String,
    vendor: Selection<String>,
    risk: Selection<RiskLevel>,
    confidence: Selection<ConfidenceTier>,
    completion: Selection<Completion>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn vendor(&self) -> &Selection<String> {
        &self.vendor
    }

    pub fn set_vendor(&mut self, vendor: Selection<String>) {
        self.vendor = vendor;
    }

    pub fn risk(&self) -> &Selection<RiskLevel> {
        &self.risk
    }

    pub fn set_risk(&mut self, risk: Selection<RiskLevel>) {
        self.risk = risk;
    }

    pub fn confidence(&self) -> &Selection<ConfidenceTier> {
        &self.confidence
    }

    pub fn set_confidence(&mut self, confidence: Selection<ConfidenceTier>) {
        self.confidence = confidence;
    }

    pub fn completion(&self) -> &Selection<Completion> {
        &self.completion
    }

    pub fn set_completion(&mut self, completion: Selection<Completion>) {
        self.completion = completion;
    }

    /// Back to the initial state: empty query, every selector unset
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
