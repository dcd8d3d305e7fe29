//! Citation viewer for an analysis record

use super::confirmation::DialogCallback;
use crate::catalog::{AnalysisCatalog, AnalysisRecord};
use crate::confidence::{describe, Lifecycle, TierDescription};
use crate::error::Result;
use crate::visual::VisualDescriptor;
use tracing::debug;

/// Shows the documents, reasoning and insight behind one analysis
pub struct CitationViewer<'a> {
    record: &'a AnalysisRecord,
    selected: usize,
    open: bool,
    on_close: Option<DialogCallback<'a>>,
}

impl<'a> CitationViewer<'a> {
    /// Open the viewer on `analysis_id`, resolved under the catalog's miss policy
    pub fn open(catalog: &'a AnalysisCatalog, analysis_id: &str) -> Result<Self> {
        let record = catalog.resolve(analysis_id)?;
        debug!("Citation viewer opened on {}", record.id);
        Ok(Self {
            record,
            selected: 0,
            open: true,
            on_close: None,
        })
    }

    pub fn on_close(mut self, callback: impl FnMut() + 'a) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn record(&self) -> &AnalysisRecord {
        self.record
    }

    pub fn documents(&self) -> &[String] {
        &self.record.source_documents
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_document(&self) -> Option<&str> {
        self.record.source_document(self.selected)
    }

    /// Select a document by index; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.record.source_documents.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Advance to the next document, wrapping to the first
    pub fn next_document(&mut self) {
        let count = self.record.source_documents.len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn risk_badge(&self) -> VisualDescriptor {
        self.record.risk_level.visual()
    }

    /// Confidence badge for the completed analysis
    pub fn confidence(&self) -> TierDescription {
        describe(Lifecycle::Finished, self.record.confidence_tier(), None)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
        true
    }
}
