//! Confirmation dialog

use tracing::debug;

/// Callback fired by a dialog action
pub type DialogCallback<'a> = Box<dyn FnMut() + 'a>;

/// Yes/no dialog guarding an irreversible action (e.g. approving a CER)
///
/// Confirm and close each fire their callback once; after either, the
/// dialog is closed and further actions do nothing until it is reopened.
pub struct ConfirmationDialog<'a> {
    title: String,
    message: String,
    open: bool,
    on_confirm: Option<DialogCallback<'a>>,
    on_close: Option<DialogCallback<'a>>,
}

impl<'a> ConfirmationDialog<'a> {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            open: true,
            on_confirm: None,
            on_close: None,
        }
    }

    pub fn on_confirm(mut self, callback: impl FnMut() + 'a) -> Self {
        self.on_confirm = Some(Box::new(callback));
        self
    }

    pub fn on_close(mut self, callback: impl FnMut() + 'a) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn reopen(&mut self) {
        self.open = true;
    }

    /// User confirmed; returns whether the action was taken
    pub fn confirm(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        debug!("Dialog confirmed: {}", self.title);
        if let Some(callback) = self.on_confirm.as_mut() {
            callback();
        }
        true
    }

    /// User dismissed; returns whether the action was taken
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        debug!("Dialog closed: {}", self.title);
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_confirm_fires_once() {
        let confirmed = Cell::new(0);
        let closed = Cell::new(0);
        let mut dialog = ConfirmationDialog::new("Approve CER", "Approve CER-10235?")
            .on_confirm(|| confirmed.set(confirmed.get() + 1))
            .on_close(|| closed.set(closed.get() + 1));

        assert!(dialog.confirm());
        assert!(!dialog.confirm());
        assert!(!dialog.close());
        drop(dialog);

        assert_eq!(confirmed.get(), 1);
        assert_eq!(closed.get(), 0);
    }

    #[test]
    fn test_close_and_reopen() {
        let closed = Cell::new(0);
        let mut dialog = ConfirmationDialog::new("Discard", "Discard draft?")
            .on_close(|| closed.set(closed.get() + 1));

        assert!(dialog.close());
        assert!(!dialog.is_open());
        dialog.reopen();
        assert!(dialog.close());
        drop(dialog);

        assert_eq!(closed.get(), 2);
    }

    #[test]
    fn test_without_callbacks() {
        let mut dialog = ConfirmationDialog::new("t", "m");
        assert_eq!(dialog.title(), "t");
        assert_eq!(dialog.message(), "m");
        assert!(dialog.confirm());
    }
}
