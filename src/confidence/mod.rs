//! Confidence score classification
//!
//! Turns a numeric confidence score plus the analysis lifecycle into a
//! qualitative tier, and produces the badge label and tooltip body.

pub mod classifier;
pub mod models;

pub use classifier::{
    assess, classify, describe, tier_for_score, HIGH_THRESHOLD, MEDIUM_THRESHOLD,
};
pub use models::{
    ConfidenceScore, ConfidenceTier, Lifecycle, TierDescription, MAX_SCORE, MIN_SCORE,
};
