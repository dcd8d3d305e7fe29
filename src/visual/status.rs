//! Workflow status badges for review items

use super::models::{ColorToken, IconVariant, VisualDescriptor};
use crate::metrics::METRICS;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Workflow stage of a review item
///
/// Upstream adds stages before this layer learns about them, so any tag
/// outside the known set is carried in `Other` rather than rejected.
/// `Other` is meant to be produced by `from_tag`; a hand-built `Other`
/// holding a known tag still renders as that stage, but does not compare
/// equal to it. Use `normalized` before comparing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusTag {
    CoqRequested,
    CoqResponded,
    ActionItemIssued,
    ActionItemResponded,
    Approved,
    Other(String),
}

impl StatusTag {
    /// Every known stage, in workflow order
    pub const KNOWN: [StatusTag; 5] = [
        Self::CoqRequested,
        Self::CoqResponded,
        Self::ActionItemIssued,
        Self::ActionItemResponded,
        Self::Approved,
    ];

    /// Parse a wire tag; unknown tags become `Other`
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        match Self::known(tag) {
            Some(known) => known,
            None => {
                debug!("Unrecognized status tag: {:?}", tag);
                METRICS.record_unknown_tag("status");
                Self::Other(tag.to_string())
            }
        }
    }

    fn known(tag: &str) -> Option<Self> {
        match tag.trim() {
            "COQRequested" => Some(Self::CoqRequested),
            "COQResponded" => Some(Self::CoqResponded),
            "ActionItemIssued" => Some(Self::ActionItemIssued),
            "ActionItemResponded" => Some(Self::ActionItemResponded),
            "Approved" => Some(Self::Approved),
            _ => None,
        }
    }

    /// Known stage for an `Other` that carries a known tag; otherwise unchanged
    pub fn normalized(self) -> Self {
        match &self {
            Self::Other(tag) => Self::known(tag).unwrap_or(self),
            _ => self,
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::CoqRequested => "COQRequested",
            Self::CoqResponded => "COQResponded",
            Self::ActionItemIssued => "ActionItemIssued",
            Self::ActionItemResponded => "ActionItemResponded",
            Self::Approved => "Approved",
            Self::Other(tag) => tag,
        }
    }

    /// Badge descriptor for this stage
    pub fn visual(&self) -> VisualDescriptor {
        match self {
            Self::CoqRequested => {
                VisualDescriptor::new(ColorToken::Amber, IconVariant::Hourglass, "COQ Requested")
            }
            Self::CoqResponded => {
                VisualDescriptor::new(ColorToken::Blue, IconVariant::Reply, "COQ Responded")
            }
            Self::ActionItemIssued => {
                VisualDescriptor::new(ColorToken::Orange, IconVariant::Flag, "Action Item Issued")
            }
            Self::ActionItemResponded => VisualDescriptor::new(
                ColorToken::Purple,
                IconVariant::ChatBubble,
                "Action Item Responded",
            ),
            Self::Approved => {
                VisualDescriptor::new(ColorToken::Green, IconVariant::CheckCircle, "Approved")
            }
            Self::Other(tag) => match Self::known(tag) {
                Some(known) => known.visual(),
                None => VisualDescriptor::DEFAULT,
            },
        }
    }

    pub fn is_known(&self) -> bool {
        match self {
            Self::Other(tag) => Self::known(tag).is_some(),
            _ => true,
        }
    }
}

impl From<String> for StatusTag {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<StatusTag> for String {
    fn from(tag: StatusTag) -> Self {
        tag.as_tag().to_string()
    }
}
