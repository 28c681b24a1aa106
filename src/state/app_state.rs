//! Application state definitions

use super::forms::WizardForm;
use super::markets::MarketBoard;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Markets,
    Apply,
}

impl View {
    pub const ALL: [View; 2] = [View::Markets, View::Apply];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Markets => "Markets",
            Self::Apply => "Apply",
        }
    }
}

/// Confirmation shown after a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    /// Copyable identifier, e.g. the application id
    pub reference: Option<String>,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub sidebar_index: usize,

    // Views
    pub market_board: MarketBoard,
    pub wizard_form: WizardForm,
    pub show_stats: bool,

    // Modals
    errors: VecDeque<String>,
    pub notice: Option<Notice>,
}

impl AppState {
    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn pending_error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Switch view, keeping the sidebar highlight in sync
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
        self.sidebar_index = View::ALL.iter().position(|v| *v == view).unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_view_is_markets() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Markets);
        assert_eq!(state.sidebar_index, 0);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_errors());
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.pending_error_count(), 2);
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
        state.dismiss_error();
        assert_eq!(state.current_error(), None);
    }

    #[test]
    fn test_set_view_syncs_sidebar() {
        let mut state = AppState::default();
        state.set_view(View::Apply);
        assert_eq!(state.sidebar_index, 1);
        state.set_view(View::Markets);
        assert_eq!(state.sidebar_index, 0);
    }
}
