//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::SUBMIT_MODIFIERS;
use crate::state::{AppState, FieldKind, Notice, View, WizardButton, WizardOutcome};
use crate::submission::{ApplicationSink, NoticeSink};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where submitted applications go
    sink: Box<dyn ApplicationSink>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App backed by the local notice sink
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_sink(config, Box::new(NoticeSink::new()))
    }

    /// Create an App with a specific submission sink
    pub fn with_sink(config: &TuiConfig, sink: Box<dyn ApplicationSink>) -> Self {
        let mut state = AppState::default();
        config.apply(&mut state);

        Self {
            state,
            sink,
            quit: false,
            copy_message: None,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Submission notice (modal)
        if self.state.notice.is_some() {
            self.handle_notice_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;
        self.status_message = None;

        match self.state.current_view {
            View::Markets => self.handle_markets_key(key),
            View::Apply => self.handle_apply_key(key).await?,
        }

        Ok(())
    }

    /// Handle keys in Markets view
    fn handle_markets_key(&mut self, key: KeyEvent) {
        let board = &mut self.state.market_board;
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => board.select_next(),
            KeyCode::Up | KeyCode::Char('k') => board.select_prev(),
            KeyCode::Right | KeyCode::Char('l') => board.next_filter(),
            KeyCode::Left | KeyCode::Char('h') => board.prev_filter(),
            KeyCode::Char('s') => board.cycle_sort(),
            KeyCode::Char('t') => self.state.show_stats = !self.state.show_stats,
            KeyCode::Char('n') | KeyCode::Char('a') | KeyCode::Tab => {
                self.state.set_view(View::Apply)
            }
            _ => {}
        }
    }

    /// Handle keys in the application wizard
    async fn handle_apply_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_buttons = self.state.wizard_form.is_buttons_row_active();
        let on_choice = self
            .state
            .wizard_form
            .active_field()
            .is_some_and(|field| matches!(field.spec().kind, FieldKind::Choice(_)));

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.intersects(SUBMIT_MODIFIERS) => {
                self.submit_application().await;
            }
            KeyCode::PageDown => self.step_forward().await,
            KeyCode::PageUp => self.step_back(),
            KeyCode::Esc => self.cancel_application(),
            KeyCode::Tab => self.state.wizard_form.next_field(),
            KeyCode::BackTab => self.state.wizard_form.prev_field(),

            // Buttons row
            KeyCode::Left if on_buttons => self.state.wizard_form.prev_button(),
            KeyCode::Right if on_buttons => self.state.wizard_form.next_button(),
            KeyCode::Enter if on_buttons => match self.state.wizard_form.selected_button {
                WizardButton::Previous => self.step_back(),
                WizardButton::Cancel => self.cancel_application(),
                WizardButton::Next => self.step_forward().await,
            },

            // Field input
            KeyCode::Left if on_choice => self.state.wizard_form.cycle_choice(false),
            KeyCode::Right if on_choice => self.state.wizard_form.cycle_choice(true),
            KeyCode::Enter => {
                if self.state.wizard_form.is_active_field_multiline() {
                    self.state.wizard_form.newline();
                } else {
                    self.state.wizard_form.next_field();
                }
            }
            KeyCode::Backspace => self.state.wizard_form.backspace(),
            // Chords other than Shift are not text
            KeyCode::Char(c)
                if !on_buttons && key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
            {
                self.state.wizard_form.input_char(c)
            }
            _ => {}
        }
        Ok(())
    }

    /// Next on steps 1-5, submit on the last step
    async fn step_forward(&mut self) {
        if self.state.wizard_form.position().is_last() {
            self.submit_application().await;
            return;
        }
        if let Err(err) = self.state.wizard_form.go_next() {
            self.status_message = Some(err.to_string());
        }
    }

    fn step_back(&mut self) {
        self.state.wizard_form.go_previous();
    }

    fn cancel_application(&mut self) {
        let had_input = !self.state.wizard_form.wizard().draft().is_pristine();
        self.state.wizard_form.cancel();
        self.state.set_view(View::Markets);
        if had_input {
            self.status_message = Some("Application discarded".to_string());
        }
    }

    /// Validate, hand off to the sink and show the receipt.
    /// The draft is kept when the sink fails.
    async fn submit_application(&mut self) {
        let snapshot = self.state.wizard_form.clone();

        let application = match self.state.wizard_form.submit() {
            Ok(WizardOutcome::Submitted(application)) => application,
            Ok(WizardOutcome::Cancelled) => return,
            Err(err) => {
                self.status_message = Some(err.to_string());
                return;
            }
        };

        match self.sink.submit(&application).await {
            Ok(receipt) => {
                self.state.notice = Some(Notice {
                    title: receipt.title,
                    message: receipt.message,
                    reference: Some(receipt.reference),
                });
                self.state.set_view(View::Markets);
            }
            Err(err) => {
                tracing::error!("Submission failed: {err:#}");
                self.state.wizard_form = snapshot;
                self.push_error(format!("Failed to submit application: {err}"));
            }
        }
    }

    fn handle_notice_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.state.notice = None,
            KeyCode::Char('y') => {
                let reference = self
                    .state
                    .notice
                    .as_ref()
                    .and_then(|notice| notice.reference.clone());
                if let Some(reference) = reference {
                    match self.copy_to_clipboard(&reference) {
                        Ok(()) => self.copy_message = Some("Copied reference".to_string()),
                        Err(err) => self.push_error(format!("Failed to copy: {err}")),
                    }
                }
            }
            _ => {}
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
