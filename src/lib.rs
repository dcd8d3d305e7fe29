//! Risk Analyst review core
//!
//! Classification and rendering layer behind the vendor-compliance review
//! dashboard:
//! - Status, persona and risk tags mapped to badge visuals
//! - Confidence scores classified into tiers with tooltip text
//! - A read-only catalog of AI analysis records
//! - Filter sidebar state and dialog callbacks

pub mod app;
pub mod catalog;
pub mod confidence;
pub mod config;
pub mod dialog;
pub mod error;
pub mod filter;
pub mod logging;
pub mod metrics;
pub mod visual;

pub use app::{init_review_core, ReviewCore};
pub use error::{Result, ReviewError};
