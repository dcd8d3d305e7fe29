//! Rendering descriptors shared by every tag mapping

use serde::Serialize;

/// Palette token understood by the rendering layer
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Gray,
    Blue,
    Sky,
    Purple,
    Lavender,
    Teal,
    Mint,
    Green,
    Amber,
    Orange,
    Red,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Blue => "blue",
            Self::Sky => "sky",
            Self::Purple => "purple",
            Self::Lavender => "lavender",
            Self::Teal => "teal",
            Self::Mint => "mint",
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

/// Icon drawn next to a badge or avatar
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IconVariant {
    /// Neutral fallback for values this layer does not know yet
    Generic,
    Hourglass,
    Reply,
    Flag,
    ChatBubble,
    CheckCircle,
    Magnifier,
    Building,
    Briefcase,
    ShieldCheck,
    ShieldAlert,
    ShieldX,
}

impl IconVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Hourglass => "hourglass",
            Self::Reply => "reply",
            Self::Flag => "flag",
            Self::ChatBubble => "chat_bubble",
            Self::CheckCircle => "check_circle",
            Self::Magnifier => "magnifier",
            Self::Building => "building",
            Self::Briefcase => "briefcase",
            Self::ShieldCheck => "shield_check",
            Self::ShieldAlert => "shield_alert",
            Self::ShieldX => "shield_x",
        }
    }

    /// Relative asset path in the icon set served alongside the dashboard
    pub fn asset_name(&self) -> String {
        let set = match self {
            Self::Generic => "common",
            Self::Hourglass | Self::Reply | Self::Flag | Self::ChatBubble | Self::CheckCircle => {
                "status"
            }
            Self::Magnifier | Self::Building | Self::Briefcase => "persona",
            Self::ShieldCheck | Self::ShieldAlert | Self::ShieldX => "risk",
        };
        format!("icons/{}/{}.svg", set, self.as_str())
    }
}

/// Color, icon and label bundle for one tag value
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct VisualDescriptor {
    pub color: ColorToken,
    pub icon: IconVariant,
    pub label: &'static str,
}

impl VisualDescriptor {
    /// Neutral descriptor for any tag outside the known enumerations
    pub const DEFAULT: Self = Self::new(ColorToken::Gray, IconVariant::Generic, "Unknown");

    pub const fn new(color: ColorToken, icon: IconVariant, label: &'static str) -> Self {
        Self { color, icon, label }
    }

    /// Whether this descriptor came from the default branch
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}
