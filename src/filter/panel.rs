//! Filter sidebar: echoes user choices into a `FilterState`
//!
//! The panel only records what the user picked and tells listeners which
//! field changed. Applying the filters to a record set belongs to the
//! listener, so the same panel can front vendors, CERs or test scripts.

use super::state::{Completion, FilterField, FilterState, Selection, ALL_LABEL};
use crate::catalog::RiskLevel;
use crate::confidence::ConfidenceTier;
use crate::metrics::METRICS;
use tracing::{debug, warn};

/// Change listener: receives the field that changed and the new state
pub type FilterListener = Box<dyn FnMut(FilterField, &FilterState)>;

/// Options each selector offers besides "all"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub vendors: Vec<String>,
    pub risks: Vec<RiskLevel>,
    pub confidences: Vec<ConfidenceTier>,
    pub completions: Vec<Completion>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            vendors: Vec::new(),
            risks: vec![RiskLevel::Low, RiskLevel::Medium, RiskLevel::High],
            confidences: vec![
                ConfidenceTier::Pending,
                ConfidenceTier::Low,
                ConfidenceTier::Medium,
                ConfidenceTier::High,
            ],
            completions: vec![Completion::Finished, Completion::Unfinished],
        }
    }
}

impl FilterOptions {
    pub fn with_vendors<I, S>(mut self, vendors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vendors = vendors.into_iter().map(Into::into).collect();
        self
    }
}

/// Filter sidebar state owner
pub struct FilterPanel {
    state: FilterState,
    options: FilterOptions,
    listeners: Vec<FilterListener>,
}

impl FilterPanel {
    pub fn new(options: FilterOptions) -> Self {
        Self {
            state: FilterState::default(),
            options,
            listeners: Vec::new(),
        }
    }

    /// Register a listener fired once per accepted change
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(FilterField, &FilterState) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Free-text query; any text is accepted
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.set_query(query);
        self.notify(FilterField::Query);
    }

    /// Select a vendor by name, or `"all"`
    pub fn select_vendor(&mut self, label: &str) -> bool {
        let selection = parse_selection(label, |v| {
            self.options.vendors.iter().find(|o| o.as_str() == v).cloned()
        });
        match selection {
            Some(selection) => {
                self.state.set_vendor(selection);
                self.notify(FilterField::Vendor);
                true
            }
            None => self.reject(FilterField::Vendor, label),
        }
    }

    /// Select a risk level, or `"all"`
    pub fn select_risk(&mut self, label: &str) -> bool {
        let selection = parse_selection(label, |v| {
            RiskLevel::from_tag(v).filter(|r| self.options.risks.contains(r))
        });
        match selection {
            Some(selection) => {
                self.state.set_risk(selection);
                self.notify(FilterField::Risk);
                true
            }
            None => self.reject(FilterField::Risk, label),
        }
    }

    /// Select a confidence tier, or `"all"`
    pub fn select_confidence(&mut self, label: &str) -> bool {
        let selection = parse_selection(label, |v| {
            ConfidenceTier::from_tag(v).filter(|t| self.options.confidences.contains(t))
        });
        match selection {
            Some(selection) => {
                self.state.set_confidence(selection);
                self.notify(FilterField::Confidence);
                true
            }
            None => self.reject(FilterField::Confidence, label),
        }
    }

    /// Select finished/unfinished, or `"all"`
    pub fn select_completion(&mut self, label: &str) -> bool {
        let selection = parse_selection(label, |v| {
            Completion::from_tag(v).filter(|c| self.options.completions.contains(c))
        });
        match selection {
            Some(selection) => {
                self.state.set_completion(selection);
                self.notify(FilterField::Completion);
                true
            }
            None => self.reject(FilterField::Completion, label),
        }
    }

    /// Clear every field back to its initial value; listeners see one `Reset`
    pub fn reset(&mut self) {
        self.state.reset();
        self.notify(FilterField::Reset);
    }

    fn notify(&mut self, field: FilterField) {
        debug!("Filter {} changed", field.as_str());
        METRICS.record_filter_change(field.as_str(), true);
        for listener in self.listeners.iter_mut() {
            listener(field, &self.state);
        }
    }

    fn reject(&self, field: FilterField, label: &str) -> bool {
        warn!("Ignoring {} filter option not offered: {:?}", field.as_str(), label);
        METRICS.record_filter_change(field.as_str(), false);
        false
    }
}

/// Offered options win over the `"all"` sentinel, so a vendor literally
/// named "All" stays selectable
fn parse_selection<T, F>(label: &str, lookup: F) -> Option<Selection<T>>
where
    F: FnOnce(&str) -> Option<T>,
{
    let label = label.trim();
    match lookup(label) {
        Some(value) => Some(Selection::Only(value)),
        None if label.eq_ignore_ascii_case(ALL_LABEL) => Some(Selection::All),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn panel() -> FilterPanel {
        FilterPanel::new(FilterOptions::default().with_vendors(["Acme Cloud", "Globex Payroll"]))
    }

    #[test]
    fn test_select_vendor() {
        let mut panel = panel();
        assert!(panel.select_vendor("Globex Payroll"));
        assert_eq!(panel.state().vendor(), &Selection::Only("Globex Payroll".to_string()));

        assert!(panel.select_vendor("all"));
        assert_eq!(panel.state().vendor(), &Selection::All);
    }

    #[test]
    fn test_vendor_all_is_independent_of_query() {
        let mut panel = panel();
        panel.set_query("encryption");
        assert!(panel.select_vendor("all"));
        panel.set_query("");
        assert_eq!(panel.state().vendor(), &Selection::All);
    }

    #[test]
    fn test_unknown_option_is_ignored() {
        let mut panel = panel();
        assert!(panel.select_risk("medium"));
        assert!(!panel.select_risk("catastrophic"));
        assert_eq!(panel.state().risk(), &Selection::Only(RiskLevel::Medium));

        assert!(!panel.select_vendor("Initech"));
        assert!(panel.state().vendor().is_unset());
    }

    #[test]
    fn test_options_restrict_choices() {
        let options = FilterOptions {
            risks: vec![RiskLevel::High],
            ..FilterOptions::default()
        };
        let mut panel = FilterPanel::new(options);
        assert!(panel.select_risk("high"));
        assert!(!panel.select_risk("low"));
        assert!(panel.select_risk("ALL"));
        assert_eq!(panel.state().risk(), &Selection::All);
    }

    #[test]
    fn test_listener_fires_once_per_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut panel = panel();
        {
            let seen = Rc::clone(&seen);
            panel.on_change(move |field, state| {
                seen.borrow_mut().push((field, state.query().to_string()));
            });
        }

        panel.set_query("soc");
        panel.select_confidence("high");
        panel.select_completion("nearly");
        panel.select_completion("unfinished");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], (FilterField::Query, "soc".to_string()));
        assert_eq!(seen[1].0, FilterField::Confidence);
        assert_eq!(seen[2].0, FilterField::Completion);
    }

    #[test]
    fn test_reset_notifies_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut panel = panel();
        panel.select_vendor("Acme Cloud");
        panel.select_risk("high");
        {
            let seen = Rc::clone(&seen);
            panel.on_change(move |field, state| {
                seen.borrow_mut().push((field, state.clone()));
            });
        }
        panel.reset();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, FilterField::Reset);
        assert_eq!(seen[0].1, FilterState::default());
        assert_eq!(panel.state(), &FilterState::default());
    }

    #[test]
    fn test_vendor_named_all_is_selectable() {
        let options = FilterOptions::default().with_vendors(["All", "Acme Cloud"]);
        let mut panel = FilterPanel::new(options);
        assert!(panel.select_vendor("All"));
        assert_eq!(panel.state().vendor(), &Selection::Only("All".to_string()));

        assert!(panel.select_vendor("all"));
        assert_eq!(panel.state().vendor(), &Selection::All);
    }
}
