//! Dialog callback contracts
//!
//! Dialogs hold caller callbacks and fire at most one per user action.

pub mod citation;
pub mod confirmation;

pub use citation::CitationViewer;
pub use confirmation::{ConfirmationDialog, DialogCallback};
