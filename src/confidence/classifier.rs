//! Confidence tier classification and tooltip text
//!
//! Thresholds are inclusive at the lower edge of each tier:
//! - High: score >= 85
//! - Medium: 60 <= score < 85
//! - Low: score < 60
//!
//! A `not-started` lifecycle forces `Pending` whatever the score.

use super::models::{ConfidenceTier, Lifecycle, TierDescription};
use crate::visual::{ColorToken, IconVariant, VisualDescriptor};

/// Lower bound of the high tier
pub const HIGH_THRESHOLD: i64 = 85;
/// Lower bound of the medium tier
pub const MEDIUM_THRESHOLD: i64 = 60;

const NOT_STARTED_TOOLTIP: [&str; 2] = [
    "AI analysis has not started for this item.",
    "A confidence score will appear once analysis begins.",
];

const IN_PROGRESS_DEFAULT_FIRST_LINE: &str = "AI analysis is in progress.";
const IN_PROGRESS_TOOLTIP_REST: [&str; 1] =
    ["The score may change as more evidence is reviewed."];

const FINISHED_TOOLTIP: [&str; 2] = [
    "AI analysis is complete.",
    "The score reflects all evidence submitted for this item.",
];

const REPOPULATED_TOOLTIP: [&str; 2] = [
    "AI analysis was re-run after new evidence arrived.",
    "The score reflects the most recent run.",
];

/// Tier for a raw score, without lifecycle
///
/// Out-of-range scores land in the nearest tier, which matches clamping
/// them into `[0, 100]` first.
pub fn tier_for_score(score: i64) -> ConfidenceTier {
    match score {
        s if s >= HIGH_THRESHOLD => ConfidenceTier::High,
        s if s >= MEDIUM_THRESHOLD => ConfidenceTier::Medium,
        _ => ConfidenceTier::Low,
    }
}

/// Classify a review item's confidence
///
/// A started item without a score is still `Pending`.
pub fn classify(lifecycle: Lifecycle, score: Option<i64>) -> ConfidenceTier {
    match (lifecycle, score) {
        (Lifecycle::NotStarted, _) => ConfidenceTier::Pending,
        (_, None) => ConfidenceTier::Pending,
        (_, Some(score)) => tier_for_score(score),
    }
}

/// Badge label and tooltip body for a tier under a lifecycle
///
/// `tooltip_override` replaces the first tooltip line for in-progress items
/// only; every other lifecycle has a fixed body.
pub fn describe(
    lifecycle: Lifecycle,
    tier: ConfidenceTier,
    tooltip_override: Option<&str>,
) -> TierDescription {
    let tooltip_lines: Vec<String> = match lifecycle {
        Lifecycle::NotStarted => NOT_STARTED_TOOLTIP.iter().map(|l| l.to_string()).collect(),
        Lifecycle::InProgress => {
            let first = tooltip_override
                .filter(|line| !line.trim().is_empty())
                .unwrap_or(IN_PROGRESS_DEFAULT_FIRST_LINE);
            let mut lines = vec![first.to_string()];
            lines.extend(IN_PROGRESS_TOOLTIP_REST.iter().map(|l| l.to_string()));
            lines
        }
        Lifecycle::Finished => FINISHED_TOOLTIP.iter().map(|l| l.to_string()).collect(),
        Lifecycle::Repopulated => REPOPULATED_TOOLTIP.iter().map(|l| l.to_string()).collect(),
    };

    TierDescription {
        tier,
        label: tier.label(),
        tooltip_lines,
    }
}

/// Classify and describe in one step
pub fn assess(
    lifecycle: Lifecycle,
    score: Option<i64>,
    tooltip_override: Option<&str>,
) -> TierDescription {
    describe(lifecycle, classify(lifecycle, score), tooltip_override)
}

impl ConfidenceTier {
    /// Badge descriptor for the tier
    pub fn visual(&self) -> VisualDescriptor {
        match self {
            Self::Pending => {
                VisualDescriptor::new(ColorToken::Gray, IconVariant::Hourglass, "Pending")
            }
            Self::Low => {
                VisualDescriptor::new(ColorToken::Red, IconVariant::ShieldX, "Low Confidence")
            }
            Self::Medium => VisualDescriptor::new(
                ColorToken::Amber,
                IconVariant::ShieldAlert,
                "Medium Confidence",
            ),
            Self::High => VisualDescriptor::new(
                ColorToken::Green,
                IconVariant::ShieldCheck,
                "High Confidence",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_edges() {
        let lc = Lifecycle::Finished;
        assert_eq!(classify(lc, Some(85)), ConfidenceTier::High);
        assert_eq!(classify(lc, Some(84)), ConfidenceTier::Medium);
        assert_eq!(classify(lc, Some(60)), ConfidenceTier::Medium);
        assert_eq!(classify(lc, Some(59)), ConfidenceTier::Low);
        assert_eq!(classify(lc, Some(0)), ConfidenceTier::Low);
        assert_eq!(classify(lc, Some(100)), ConfidenceTier::High);
    }

    #[test]
    fn test_not_started_is_pending_for_any_score() {
        for score in [None, Some(-50), Some(0), Some(59), Some(85), Some(100), Some(1000)] {
            assert_eq!(classify(Lifecycle::NotStarted, score), ConfidenceTier::Pending);
        }
    }

    #[test]
    fn test_out_of_range_scores_match_clamped() {
        assert_eq!(tier_for_score(250), tier_for_score(100));
        assert_eq!(tier_for_score(-20), tier_for_score(0));
    }

    #[test]
    fn test_started_without_score_is_pending() {
        assert_eq!(classify(Lifecycle::InProgress, None), ConfidenceTier::Pending);
    }

    #[test]
    fn test_in_progress_override() {
        let d = describe(
            Lifecycle::InProgress,
            ConfidenceTier::Medium,
            Some("Partial evidence, missing docs"),
        );
        assert_eq!(d.tooltip_lines[0], "Partial evidence, missing docs");
        assert_eq!(d.tooltip_lines.len(), 2);

        let d = describe(Lifecycle::InProgress, ConfidenceTier::Medium, None);
        assert_eq!(d.tooltip_lines[0], IN_PROGRESS_DEFAULT_FIRST_LINE);
    }

    #[test]
    fn test_override_ignored_outside_in_progress() {
        for lc in [Lifecycle::NotStarted, Lifecycle::Finished, Lifecycle::Repopulated] {
            let with = describe(lc, ConfidenceTier::High, Some("custom"));
            let without = describe(lc, ConfidenceTier::High, None);
            assert_eq!(with, without);
        }
    }

    #[test]
    fn test_each_lifecycle_has_distinct_tooltip() {
        let bodies: Vec<_> = [
            Lifecycle::NotStarted,
            Lifecycle::InProgress,
            Lifecycle::Finished,
            Lifecycle::Repopulated,
        ]
        .into_iter()
        .map(|lc| describe(lc, ConfidenceTier::Low, None).tooltip_lines)
        .collect();

        for (i, a) in bodies.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &bodies[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_assess() {
        let d = assess(Lifecycle::Finished, Some(92), None);
        assert_eq!(d.tier, ConfidenceTier::High);
        assert_eq!(d.label, "High Confidence");
        assert_eq!(ConfidenceTier::High.visual().color, ColorToken::Green);
    }
}
