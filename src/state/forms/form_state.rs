//! Form state for the application wizard view
//!
//! Wraps the [`StepWizard`] controller with the focus, button and inline
//! error bookkeeping the view needs.

use super::field::{FieldId, FieldKind, FieldValue};
use super::section::Section;
use super::validation::FieldInvalid;
use super::wizard::{StepWizard, WizardError, WizardOutcome, WizardPosition};
use std::collections::BTreeMap;

/// Buttons on the wizard's bottom row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardButton {
    Previous,
    Cancel,
    /// "Next" on steps 1-5, "Submit for Approval" on the last step
    #[default]
    Next,
}

impl WizardButton {
    pub const ALL: [WizardButton; 3] = [Self::Previous, Self::Cancel, Self::Next];

    fn index(self) -> usize {
        match self {
            Self::Previous => 0,
            Self::Cancel => 1,
            Self::Next => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self, position: WizardPosition) -> &'static str {
        match self {
            Self::Previous => "◂ Previous",
            Self::Cancel => "Cancel",
            Self::Next if position.is_last() => "✓ Submit for Approval",
            Self::Next => "Next ▸",
        }
    }
}

/// Wizard view state
#[derive(Debug, Clone, Default)]
pub struct WizardForm {
    wizard: StepWizard,
    /// Index into the current section's fields; one past the end is the buttons row
    pub active_field_index: usize,
    pub selected_button: WizardButton,
    errors: BTreeMap<FieldId, FieldInvalid>,
}

impl WizardForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wizard(&self) -> &StepWizard {
        &self.wizard
    }

    pub fn section(&self) -> Section {
        self.wizard.current_section()
    }

    pub fn position(&self) -> WizardPosition {
        self.wizard.position()
    }

    /// Fields of the current section
    pub fn fields(&self) -> &'static [FieldId] {
        self.section().fields()
    }

    /// Fields plus the buttons row
    pub fn field_count(&self) -> usize {
        self.fields().len() + 1
    }

    pub fn active_field(&self) -> Option<FieldId> {
        self.fields().get(self.active_field_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index >= self.fields().len()
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field()
            .is_some_and(|field| field.spec().kind.is_multiline())
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        let count = self.field_count();
        self.active_field_index = (self.active_field_index + count - 1) % count;
    }

    pub fn next_button(&mut self) {
        self.selected_button = self.selected_button.next();
    }

    pub fn prev_button(&mut self) {
        self.selected_button = self.selected_button.prev();
    }

    /// Inline error for a field, if the last check reported one
    pub fn error_for(&self, field: FieldId) -> Option<&FieldInvalid> {
        self.errors.get(&field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Type a character into the active text field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_field() else {
            return;
        };
        match field.spec().kind {
            FieldKind::Attestation if c == ' ' => self.toggle_flag(),
            FieldKind::Choice(_) if c == ' ' => self.cycle_choice(true),
            FieldKind::Attestation | FieldKind::Choice(_) => {}
            FieldKind::ShortText | FieldKind::LongText | FieldKind::NumericText => {
                let mut text = self.wizard.draft().text(field).to_string();
                text.push(c);
                self.set_value(field, FieldValue::Text(text));
            }
        }
    }

    /// Remove the last character of the active text field
    pub fn backspace(&mut self) {
        let Some(field) = self.active_field() else {
            return;
        };
        if field.spec().kind.is_flag() {
            return;
        }
        let mut text = self.wizard.draft().text(field).to_string();
        if text.pop().is_some() {
            self.set_value(field, FieldValue::Text(text));
        }
    }

    /// Insert a line break in the active long-text field
    pub fn newline(&mut self) {
        if self.is_active_field_multiline() {
            self.input_char('\n');
        }
    }

    /// Flip the active attestation checkbox
    pub fn toggle_flag(&mut self) {
        let Some(field) = self.active_field() else {
            return;
        };
        if field.spec().kind.is_flag() {
            let checked = self.wizard.draft().flag(field);
            self.set_value(field, FieldValue::Flag(!checked));
        }
    }

    /// Step the active choice field to its next or previous option.
    ///
    /// An empty or unknown value moves to the first (or last) option.
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.active_field() else {
            return;
        };
        let FieldKind::Choice(options) = field.spec().kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = self.wizard.draft().text(field);
        let len = options.len();
        let next = match options.iter().position(|o| o.value == current) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        self.set_value(field, FieldValue::Text(options[next].value.to_string()));
    }

    /// Write a value through the controller and clear that field's error
    pub fn set_value(&mut self, field: FieldId, value: FieldValue) {
        match self.wizard.update_field(field, value) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => tracing::warn!("Ignoring edit: {err}"),
        }
    }

    /// Advance a step, recording inline errors on rejection
    pub fn go_next(&mut self) -> Result<WizardPosition, WizardError> {
        let before = self.position();
        match self.wizard.go_next() {
            Ok(position) => {
                self.errors.clear();
                if position != before {
                    self.focus_first_field();
                }
                Ok(position)
            }
            Err(err) => {
                self.record_errors(&err);
                Err(err)
            }
        }
    }

    pub fn go_previous(&mut self) -> WizardPosition {
        let position = self.wizard.go_previous();
        self.errors.clear();
        self.focus_first_field();
        position
    }

    /// Submit from the last step, recording inline errors on rejection
    pub fn submit(&mut self) -> Result<WizardOutcome, WizardError> {
        match self.wizard.submit() {
            Ok(outcome) => {
                self.reset_view();
                Ok(outcome)
            }
            Err(err) => {
                self.record_errors(&err);
                Err(err)
            }
        }
    }

    pub fn cancel(&mut self) -> WizardOutcome {
        let outcome = self.wizard.cancel();
        self.reset_view();
        outcome
    }

    /// Failing fields that live on steps other than the current one
    pub fn errors_elsewhere(&self) -> impl Iterator<Item = &FieldInvalid> {
        let section = self.section();
        self.errors
            .values()
            .filter(move |invalid| invalid.field.spec().section != section)
    }

    fn record_errors(&mut self, err: &WizardError) {
        self.errors = err
            .invalid_fields()
            .iter()
            .map(|invalid| (invalid.field, invalid.clone()))
            .collect();
        // Jump to the first failing field on this step
        if let Some(index) = self
            .fields()
            .iter()
            .position(|field| self.errors.contains_key(field))
        {
            self.active_field_index = index;
        }
    }

    fn focus_first_field(&mut self) {
        self.active_field_index = 0;
        self.selected_button = WizardButton::Next;
    }

    fn reset_view(&mut self) {
        self.errors.clear();
        self.focus_first_field();
    }
}
