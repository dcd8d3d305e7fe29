//! Review list filters
//!
//! `FilterState` holds the five independent selections (query, vendor,
//! risk, confidence tier, completion); `FilterPanel` owns one and notifies
//! listeners when the user changes a field.

pub mod panel;
pub mod state;

pub use panel::{FilterListener, FilterOptions, FilterPanel};
pub use state::{Completion, FilterField, FilterState, Selection, ALL_LABEL};
