//! Persona avatars and theming
//!
//! Each persona has two color tables keyed by the same tag: the active
//! color is used for the signed-in persona, the inactive one for the
//! others shown alongside it.

use super::models::{ColorToken, IconVariant, VisualDescriptor};
use crate::metrics::METRICS;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// User role viewing or acting on a review item
///
/// `Other` is meant to be produced by `from_tag`; a hand-built `Other`
/// holding a known persona still renders as that persona. Use
/// `normalized` before comparing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PersonaTag {
    Analyst,
    Vendor,
    Manager,
    Other(String),
}

impl PersonaTag {
    pub const KNOWN: [PersonaTag; 3] = [Self::Analyst, Self::Vendor, Self::Manager];

    /// Parse a persona tag, case-insensitively
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        match Self::known(tag) {
            Some(known) => known,
            None => {
                debug!("Unrecognized persona tag: {:?}", tag);
                METRICS.record_unknown_tag("persona");
                Self::Other(tag.to_string())
            }
        }
    }

    fn known(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("analyst") {
            Some(Self::Analyst)
        } else if tag.eq_ignore_ascii_case("vendor") {
            Some(Self::Vendor)
        } else if tag.eq_ignore_ascii_case("manager") {
            Some(Self::Manager)
        } else {
            None
        }
    }

    /// Known persona for an `Other` that carries a known tag; otherwise unchanged
    pub fn normalized(self) -> Self {
        match &self {
            Self::Other(tag) => Self::known(tag).unwrap_or(self),
            _ => self,
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::Analyst => "analyst",
            Self::Vendor => "vendor",
            Self::Manager => "manager",
            Self::Other(tag) => tag,
        }
    }

    /// Avatar descriptor, using the active or inactive color table
    pub fn visual(&self, is_active: bool) -> VisualDescriptor {
        let (icon, label) = match self {
            Self::Analyst => (IconVariant::Magnifier, "Analyst"),
            Self::Vendor => (IconVariant::Building, "Vendor"),
            Self::Manager => (IconVariant::Briefcase, "Manager"),
            Self::Other(tag) => {
                return match Self::known(tag) {
                    Some(known) => known.visual(is_active),
                    None => VisualDescriptor::DEFAULT,
                };
            }
        };
        let color = if is_active {
            self.active_color()
        } else {
            self.inactive_color()
        };
        VisualDescriptor::new(color, icon, label)
    }

    pub fn active_color(&self) -> ColorToken {
        match self {
            Self::Analyst => ColorToken::Blue,
            Self::Vendor => ColorToken::Purple,
            Self::Manager => ColorToken::Teal,
            Self::Other(tag) => Self::known(tag).map_or(ColorToken::Gray, |k| k.active_color()),
        }
    }

    pub fn inactive_color(&self) -> ColorToken {
        match self {
            Self::Analyst => ColorToken::Sky,
            Self::Vendor => ColorToken::Lavender,
            Self::Manager => ColorToken::Mint,
            Self::Other(tag) => Self::known(tag).map_or(ColorToken::Gray, |k| k.inactive_color()),
        }
    }
}

impl From<String> for PersonaTag {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<PersonaTag> for String {
    fn from(tag: PersonaTag) -> Self {
        tag.as_tag().to_string()
    }
}
