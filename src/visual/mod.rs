//! Tag-to-visual mapping
//!
//! Maps workflow status, persona and risk tags to a color, icon and label.
//! Every mapping is total: values outside the known enumerations resolve to
//! `VisualDescriptor::DEFAULT` (gray, generic icon).

pub mod models;
pub mod persona;
pub mod risk;
pub mod status;

pub use models::{ColorToken, IconVariant, VisualDescriptor};
pub use persona::PersonaTag;
pub use risk::risk_visual;
pub use status::StatusTag;
