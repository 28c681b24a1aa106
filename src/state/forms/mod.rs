//! Form domain layer
//!
//! Type-safe handling of the multi-step SRED pre-approval application:
//! the static field table, the draft, per-section validation, the step
//! wizard controller and the view-side form state around it.

mod draft;
mod field;
mod form_state;
mod payload;
mod schema;
mod section;
mod summary;
mod validation;
mod wizard;

pub use draft::ApplicationDraft;
pub use field::{choice_label, ChoiceOption, FieldId, FieldKind, FieldValue};
pub use form_state::{WizardButton, WizardForm};
pub use payload::{
    ApplicationPayload, PreApprovalPeriod, ResearchCategory, RevenueRange, SubmittedApplication,
};
pub use schema::{FieldSpec, Rule, COMPANY_REVENUES, PRE_APPROVAL_PERIODS, RESEARCH_CATEGORIES};
pub use section::{Section, SectionMeta};
pub use summary::{format_funding_goal, summarize, SummaryRow};
pub use validation::{check_field, validate_all, validate_section, FieldInvalid, InvalidReason};
pub use wizard::{StepStatus, StepWizard, WizardError, WizardOutcome, WizardPosition};

#[cfg(test)]
pub(crate) mod test_support {
    //! Known-good values for every section

    use super::*;

    /// Fill one section's fields with values that pass its rules
    pub fn fill_section(wizard: &mut StepWizard, section: Section) {
        let values: Vec<(FieldId, FieldValue)> = match section {
            Section::Overview => vec![
                (FieldId::Title, "Autonomous Crop Monitoring Drones".into()),
                (
                    FieldId::Description,
                    "AI-powered drones that monitor crop health, predict yield, and optimize fertilizer application."
                        .into(),
                ),
                (FieldId::Category, "agtech".into()),
            ],
            Section::Technical => vec![
                (
                    FieldId::Uncertainty,
                    "Whether multispectral imaging can predict yield early.".into(),
                ),
                (
                    FieldId::Hypothesis,
                    "Canopy reflectance correlates with final yield.".into(),
                ),
                (
                    FieldId::Method,
                    "Fly weekly surveys over 40 test plots and compare with harvest data.".into(),
                ),
                (
                    FieldId::ExpectedOutcome,
                    "A validated yield model for Canadian prairie crops.".into(),
                ),
            ],
            Section::Ownership => vec![
                (FieldId::CanadianEntity, true.into()),
                (FieldId::IpOwnership, true.into()),
                (FieldId::CompanyRevenue, "2m-10m".into()),
            ],
            Section::Commercialization => vec![(FieldId::PilotProjects, true.into())],
            Section::Timeline => vec![
                (FieldId::PreApprovalPeriod, "3-years".into()),
                (FieldId::FundingGoal, "750000".into()),
                (
                    FieldId::ExpectedTimeline,
                    "Prototype in Q1, field trials through Q3.".into(),
                ),
            ],
            Section::Review => vec![],
        };
        for (field, value) in values {
            wizard
                .update_field(field, value)
                .expect("test values match field kinds");
        }
    }

    /// A draft where every section passes
    pub fn valid_draft() -> ApplicationDraft {
        let mut wizard = StepWizard::new();
        for section in Section::ALL {
            fill_section(&mut wizard, section);
        }
        wizard.draft().clone()
    }
}
