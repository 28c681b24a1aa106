//! Step wizard controller for the pre-approval application
//!
//! Owns the draft and the current step. Forward navigation is gated on the
//! current section's fields; retreat is unconditional and keeps values.
//! Submission re-checks the whole draft and hands back an immutable record.

use super::draft::ApplicationDraft;
use super::field::{FieldId, FieldValue};
use super::payload::{ApplicationPayload, SubmittedApplication};
use super::section::Section;
use super::summary::{summarize, SummaryRow};
use super::validation::{validate_section, FieldInvalid};
use std::fmt;

/// 1-based index of the active step, always within `[1, Section::COUNT]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WizardPosition(u8);

impl WizardPosition {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(Section::COUNT as u8);

    /// Position for a step number, if it is in range
    pub fn new(step: u8) -> Option<Self> {
        (Self::FIRST.0..=Self::LAST.0)
            .contains(&step)
            .then_some(Self(step))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn section(self) -> Section {
        Section::ALL[usize::from(self.0 - 1)]
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    /// One step forward, clamped at the last step
    pub fn advance(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::LAST.0))
    }

    /// One step back, clamped at the first step
    pub fn retreat(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::FIRST.0))
    }
}

impl Default for WizardPosition {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for WizardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors returned by wizard operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("{} field(s) need attention: {}", .0.len(), list_fields(.0))]
    Invalid(Vec<FieldInvalid>),

    #[error("Cannot submit from step {position}; finish step {} first", WizardPosition::LAST)]
    NotOnFinalStep { position: WizardPosition },

    #[error("Field {field} expects a {expected} value")]
    TypeMismatch {
        field: FieldId,
        expected: &'static str,
    },
}

impl WizardError {
    /// Failing fields carried by an `Invalid` error
    pub fn invalid_fields(&self) -> &[FieldInvalid] {
        match self {
            Self::Invalid(failures) => failures,
            _ => &[],
        }
    }
}

fn list_fields(failures: &[FieldInvalid]) -> String {
    failures
        .iter()
        .map(|failure| failure.field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Terminal signal of a wizard session
#[derive(Debug, Clone, PartialEq)]
pub enum WizardOutcome {
    Submitted(SubmittedApplication),
    Cancelled,
}

/// Progress state of a step relative to the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// The wizard controller
#[derive(Debug, Clone, Default)]
pub struct StepWizard {
    draft: ApplicationDraft,
    position: WizardPosition,
}

impl StepWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> WizardPosition {
        self.position
    }

    pub fn current_section(&self) -> Section {
        self.position.section()
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// Advance one step if every field of the current section passes.
    ///
    /// On the last step a passing call leaves the position unchanged.
    pub fn go_next(&mut self) -> Result<WizardPosition, WizardError> {
        let section = self.current_section();
        let failures = validate_section(section, &self.draft);
        if !failures.is_empty() {
            tracing::debug!(
                step = self.position.get(),
                failed = %list_fields(&failures),
                "Step advance rejected"
            );
            return Err(WizardError::Invalid(failures));
        }

        self.position = self.position.advance();
        tracing::debug!(step = self.position.get(), "Advanced to {}", self.current_section().title());
        Ok(self.position)
    }

    /// Retreat one step. Never fails and never clears values.
    pub fn go_previous(&mut self) -> WizardPosition {
        self.position = self.position.retreat();
        self.position
    }

    /// Store a value without applying any rule.
    ///
    /// Only the value's shape is checked: attestations take flags, every
    /// other field takes text.
    pub fn update_field(&mut self, field: FieldId, value: FieldValue) -> Result<(), WizardError> {
        let kind = field.spec().kind;
        if kind.is_flag() != value.is_flag() {
            return Err(WizardError::TypeMismatch {
                field,
                expected: kind.value_type(),
            });
        }
        self.draft.set(field, value);
        Ok(())
    }

    /// Submit the application from the last step.
    ///
    /// Every section is re-validated. On success the draft and position
    /// reset and the record is returned; on failure nothing changes.
    pub fn submit(&mut self) -> Result<WizardOutcome, WizardError> {
        if !self.position.is_last() {
            return Err(WizardError::NotOnFinalStep {
                position: self.position,
            });
        }

        let payload = ApplicationPayload::try_from(&self.draft).map_err(WizardError::Invalid)?;
        let application = SubmittedApplication::new(payload);
        self.reset();

        tracing::info!(id = %application.id(), "Application submitted");
        Ok(WizardOutcome::Submitted(application))
    }

    /// Discard the draft and return to the first step
    pub fn cancel(&mut self) -> WizardOutcome {
        self.reset();
        tracing::info!("Application cancelled");
        WizardOutcome::Cancelled
    }

    fn reset(&mut self) {
        self.draft.reset();
        self.position = WizardPosition::FIRST;
    }

    /// Share of steps reached, 0-100
    pub fn progress_percent(&self) -> f64 {
        f64::from(self.position.get()) / Section::COUNT as f64 * 100.0
    }

    pub fn step_status(&self, section: Section) -> StepStatus {
        match section.number().cmp(&self.position.get()) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// Review-step summary of the current draft
    pub fn summary(&self) -> Vec<SummaryRow> {
        summarize(&self.draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::test_support::{fill_section, valid_draft};
    use crate::state::forms::validation::InvalidReason;
    use pretty_assertions::assert_eq;

    fn wizard_at(step: u8) -> StepWizard {
        let mut wizard = StepWizard::new();
        for section in Section::ALL.iter().take(usize::from(step) - 1) {
            fill_section(&mut wizard, *section);
            wizard.go_next().unwrap();
        }
        assert_eq!(wizard.position().get(), step);
        wizard
    }

    mod position {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_bounds() {
            assert_eq!(WizardPosition::new(0), None);
            assert_eq!(WizardPosition::new(1), Some(WizardPosition::FIRST));
            assert_eq!(WizardPosition::new(6), Some(WizardPosition::LAST));
            assert_eq!(WizardPosition::new(7), None);
        }

        #[test]
        fn test_advance_and_retreat_clamp() {
            assert_eq!(WizardPosition::LAST.advance(), WizardPosition::LAST);
            assert_eq!(WizardPosition::FIRST.retreat(), WizardPosition::FIRST);
            assert_eq!(WizardPosition::FIRST.advance().get(), 2);
        }

        #[test]
        fn test_section_mapping() {
            assert_eq!(WizardPosition::FIRST.section(), Section::Overview);
            assert_eq!(WizardPosition::LAST.section(), Section::Review);
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_title_rejected() {
            let mut wizard = StepWizard::new();
            wizard
                .update_field(FieldId::Description, "d".repeat(50).into())
                .unwrap();
            wizard
                .update_field(FieldId::Category, "robotics".into())
                .unwrap();

            let err = wizard.go_next().unwrap_err();
            assert_eq!(
                err.invalid_fields(),
                &[FieldInvalid::new(FieldId::Title, InvalidReason::Required)]
            );
            assert_eq!(wizard.position(), WizardPosition::FIRST);
        }

        #[test]
        fn test_description_length_boundary() {
            let mut wizard = StepWizard::new();
            wizard.update_field(FieldId::Title, "Drones".into()).unwrap();
            wizard.update_field(FieldId::Category, "agtech".into()).unwrap();

            wizard
                .update_field(FieldId::Description, "d".repeat(49).into())
                .unwrap();
            let err = wizard.go_next().unwrap_err();
            assert_eq!(err.invalid_fields().len(), 1);
            assert_eq!(err.invalid_fields()[0].field, FieldId::Description);

            wizard
                .update_field(FieldId::Description, "d".repeat(50).into())
                .unwrap();
            assert_eq!(wizard.go_next().unwrap().get(), 2);
        }

        #[test]
        fn test_each_section_gates_on_its_own_fields() {
            for section in Section::ALL {
                let mut wizard = wizard_at(section.number());
                if section.fields().iter().all(|f| f.spec().is_optional()) {
                    assert!(wizard.go_next().is_ok(), "{section:?}");
                    continue;
                }
                let err = wizard.go_next().unwrap_err();
                assert!(!err.invalid_fields().is_empty());
                assert!(err
                    .invalid_fields()
                    .iter()
                    .all(|f| f.field.spec().section == section));
                assert_eq!(wizard.current_section(), section);

                fill_section(&mut wizard, section);
                assert!(wizard.go_next().is_ok());
            }
        }

        #[test]
        fn test_canadian_entity_false_blocks_ownership_step() {
            let mut wizard = wizard_at(3);
            wizard.update_field(FieldId::IpOwnership, true.into()).unwrap();
            wizard
                .update_field(FieldId::CompanyRevenue, "under-500k".into())
                .unwrap();
            wizard
                .update_field(FieldId::CanadianEntity, false.into())
                .unwrap();

            let err = wizard.go_next().unwrap_err();
            assert_eq!(
                err.invalid_fields(),
                &[FieldInvalid::new(
                    FieldId::CanadianEntity,
                    InvalidReason::MustBeConfirmed
                )]
            );
            assert_eq!(wizard.position().get(), 3);
        }

        #[test]
        fn test_go_next_on_last_step_stays_put() {
            let mut wizard = wizard_at(6);
            assert_eq!(wizard.go_next().unwrap(), WizardPosition::LAST);
            assert_eq!(wizard.go_next().unwrap(), WizardPosition::LAST);
            assert_eq!(wizard.position(), WizardPosition::LAST);
        }

        #[test]
        fn test_go_previous_keeps_values_and_clamps() {
            let mut wizard = wizard_at(3);
            let before = wizard.draft().clone();
            assert_eq!(wizard.go_previous().get(), 2);
            assert_eq!(wizard.go_previous().get(), 1);
            assert_eq!(wizard.go_previous().get(), 1);
            assert_eq!(wizard.draft(), &before);
        }

        #[test]
        fn test_go_previous_skips_validation() {
            let mut wizard = wizard_at(2);
            wizard.update_field(FieldId::Title, "".into()).unwrap();
            assert_eq!(wizard.go_previous(), WizardPosition::FIRST);
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_update_field_does_not_validate() {
            let mut wizard = StepWizard::new();
            assert!(wizard.update_field(FieldId::Category, "alchemy".into()).is_ok());
            assert_eq!(wizard.draft().text(FieldId::Category), "alchemy");
        }

        #[test]
        fn test_update_field_rejects_wrong_shape() {
            let mut wizard = StepWizard::new();
            assert_eq!(
                wizard.update_field(FieldId::CanadianEntity, "yes".into()),
                Err(WizardError::TypeMismatch {
                    field: FieldId::CanadianEntity,
                    expected: "boolean",
                })
            );
            assert_eq!(
                wizard.update_field(FieldId::Title, true.into()),
                Err(WizardError::TypeMismatch {
                    field: FieldId::Title,
                    expected: "text",
                })
            );
            assert!(wizard.draft().is_pristine());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_returns_payload_and_resets() {
            let mut wizard = wizard_at(6);
            let outcome = wizard.submit().unwrap();
            let WizardOutcome::Submitted(application) = outcome else {
                panic!("expected submission");
            };
            let expected = ApplicationPayload::try_from(&valid_draft()).unwrap();
            assert_eq!(application.payload(), &expected);
            assert_eq!(wizard.position(), WizardPosition::FIRST);
            assert!(wizard.draft().is_pristine());
        }

        #[test]
        fn test_submit_before_last_step_is_refused() {
            let mut wizard = wizard_at(5);
            fill_section(&mut wizard, Section::Timeline);
            assert_eq!(
                wizard.submit(),
                Err(WizardError::NotOnFinalStep {
                    position: WizardPosition::new(5).unwrap(),
                })
            );
            assert_eq!(wizard.position().get(), 5);
        }

        #[test]
        fn test_submit_rechecks_earlier_sections() {
            let mut wizard = wizard_at(6);
            wizard.update_field(FieldId::IpOwnership, false.into()).unwrap();
            let before = wizard.draft().clone();

            let err = wizard.submit().unwrap_err();
            assert_eq!(
                err.invalid_fields(),
                &[FieldInvalid::new(
                    FieldId::IpOwnership,
                    InvalidReason::MustBeConfirmed
                )]
            );
            assert_eq!(wizard.position(), WizardPosition::LAST);
            assert_eq!(wizard.draft(), &before);
        }

        #[test]
        fn test_optional_details_never_block_submission() {
            let mut wizard = wizard_at(6);
            wizard
                .update_field(FieldId::CommercializationDetails, "".into())
                .unwrap();
            assert!(wizard.submit().is_ok());
        }

        #[test]
        fn test_cancel_resets_from_any_step() {
            for step in 1..=6 {
                let mut wizard = wizard_at(step);
                assert_eq!(wizard.cancel(), WizardOutcome::Cancelled);
                assert_eq!(wizard.position(), WizardPosition::FIRST);
                assert!(wizard.draft().is_pristine());
            }
        }

        #[test]
        fn test_cancel_ignores_validity() {
            let mut wizard = StepWizard::new();
            wizard.update_field(FieldId::Category, "alchemy".into()).unwrap();
            assert_eq!(wizard.cancel(), WizardOutcome::Cancelled);
            assert!(wizard.draft().is_pristine());
        }
    }

    mod display {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_progress_percent() {
            assert!((StepWizard::new().progress_percent() - 100.0 / 6.0).abs() < 1e-9);
            assert!((wizard_at(6).progress_percent() - 100.0).abs() < 1e-9);
        }

        #[test]
        fn test_step_status() {
            let wizard = wizard_at(3);
            assert_eq!(wizard.step_status(Section::Overview), StepStatus::Completed);
            assert_eq!(wizard.step_status(Section::Technical), StepStatus::Completed);
            assert_eq!(wizard.step_status(Section::Ownership), StepStatus::Current);
            assert_eq!(wizard.step_status(Section::Review), StepStatus::Upcoming);
        }

        #[test]
        fn test_error_display_lists_fields() {
            let err = StepWizard::new().go_next().unwrap_err();
            assert_eq!(
                err.to_string(),
                "3 field(s) need attention: title, description, category"
            );
        }
    }
}
