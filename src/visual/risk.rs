//! Risk level badges

use super::models::{ColorToken, IconVariant, VisualDescriptor};
use crate::catalog::RiskLevel;
use crate::metrics::METRICS;

impl RiskLevel {
    pub fn visual(&self) -> VisualDescriptor {
        match self {
            Self::Low => {
                VisualDescriptor::new(ColorToken::Green, IconVariant::ShieldCheck, "Low Risk")
            }
            Self::Medium => {
                VisualDescriptor::new(ColorToken::Amber, IconVariant::ShieldAlert, "Medium Risk")
            }
            Self::High => VisualDescriptor::new(ColorToken::Red, IconVariant::ShieldX, "High Risk"),
        }
    }
}

/// Badge for a raw risk tag; anything but low/medium/high gets the default
pub fn risk_visual(tag: &str) -> VisualDescriptor {
    match RiskLevel::from_tag(tag) {
        Some(level) => level.visual(),
        None => {
            METRICS.record_unknown_tag("risk");
            VisualDescriptor::DEFAULT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_levels() {
        assert_eq!(RiskLevel::High.visual().color, ColorToken::Red);
        assert_eq!(RiskLevel::Medium.visual().label, "Medium Risk");
        assert_eq!(RiskLevel::Low.visual().icon, IconVariant::ShieldCheck);
    }

    #[test]
    fn test_risk_visual_from_tag() {
        assert_eq!(risk_visual("high"), RiskLevel::High.visual());
        assert!(risk_visual("Critical").is_default());
    }
}
