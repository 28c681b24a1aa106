//! Typed, immutable record produced by a successful submission

use super::draft::ApplicationDraft;
use super::field::FieldId;
use super::validation::{validate_all, FieldInvalid, InvalidReason};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Research category of the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResearchCategory {
    ArtificialIntelligence,
    Biotechnology,
    CleanEnergy,
    QuantumComputing,
    MedicalDevices,
    Aerospace,
    Robotics,
    Agtech,
    Fintech,
    Other,
}

impl ResearchCategory {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "artificial-intelligence" => Some(Self::ArtificialIntelligence),
            "biotechnology" => Some(Self::Biotechnology),
            "clean-energy" => Some(Self::CleanEnergy),
            "quantum-computing" => Some(Self::QuantumComputing),
            "medical-devices" => Some(Self::MedicalDevices),
            "aerospace" => Some(Self::Aerospace),
            "robotics" => Some(Self::Robotics),
            "agtech" => Some(Self::Agtech),
            "fintech" => Some(Self::Fintech),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Annual revenue bracket of the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevenueRange {
    #[serde(rename = "under-500k")]
    Under500K,
    #[serde(rename = "500k-2m")]
    From500KTo2M,
    #[serde(rename = "2m-10m")]
    From2MTo10M,
    #[serde(rename = "10m-50m")]
    From10MTo50M,
    #[serde(rename = "50m-250m")]
    From50MTo250M,
    #[serde(rename = "over-250m")]
    Over250M,
}

impl RevenueRange {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "under-500k" => Some(Self::Under500K),
            "500k-2m" => Some(Self::From500KTo2M),
            "2m-10m" => Some(Self::From2MTo10M),
            "10m-50m" => Some(Self::From10MTo50M),
            "50m-250m" => Some(Self::From50MTo250M),
            "over-250m" => Some(Self::Over250M),
            _ => None,
        }
    }

    /// Brackets above $250M get a reduced refundable portion
    pub fn has_reduced_refund(self) -> bool {
        matches!(self, Self::Over250M)
    }
}

/// Requested length of the pre-approval, in years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PreApprovalPeriod(u8);

impl PreApprovalPeriod {
    pub fn from_value(value: &str) -> Option<Self> {
        let years = match value {
            "1-year" => 1,
            "2-years" => 2,
            "3-years" => 3,
            "4-years" => 4,
            "5-years" => 5,
            _ => return None,
        };
        Some(Self(years))
    }

    pub fn years(self) -> u8 {
        self.0
    }
}

impl TryFrom<String> for PreApprovalPeriod {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_value(&value).ok_or_else(|| format!("unknown pre-approval period '{value}'"))
    }
}

impl From<PreApprovalPeriod> for String {
    fn from(period: PreApprovalPeriod) -> Self {
        match period.0 {
            1 => "1-year".to_string(),
            n => format!("{n}-years"),
        }
    }
}

/// Every field of a fully valid application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    pub title: String,
    pub description: String,
    pub category: ResearchCategory,
    pub uncertainty: String,
    pub hypothesis: String,
    pub method: String,
    pub expected_outcome: String,
    pub canadian_entity: bool,
    pub ip_ownership: bool,
    pub company_revenue: RevenueRange,
    pub prototype_refinement: bool,
    pub regulatory_approval: bool,
    pub pilot_projects: bool,
    pub ip_registration: bool,
    pub specialized_staff: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commercialization_details: Option<String>,
    pub pre_approval_period: PreApprovalPeriod,
    /// Kept exactly as entered
    pub funding_goal: String,
    pub expected_timeline: String,
}

impl TryFrom<&ApplicationDraft> for ApplicationPayload {
    type Error = Vec<FieldInvalid>;

    /// Validates the whole draft, then reads each field into its typed slot
    fn try_from(draft: &ApplicationDraft) -> Result<Self, Self::Error> {
        let failures = validate_all(draft);
        if !failures.is_empty() {
            return Err(failures);
        }

        let text = |field: FieldId| draft.text(field).to_string();
        let choice = |field: FieldId| {
            FieldInvalid::new(field, InvalidReason::UnknownChoice(text(field)))
        };
        let details = draft.text(FieldId::CommercializationDetails);

        Ok(Self {
            title: text(FieldId::Title),
            description: text(FieldId::Description),
            category: ResearchCategory::from_value(draft.text(FieldId::Category))
                .ok_or_else(|| vec![choice(FieldId::Category)])?,
            uncertainty: text(FieldId::Uncertainty),
            hypothesis: text(FieldId::Hypothesis),
            method: text(FieldId::Method),
            expected_outcome: text(FieldId::ExpectedOutcome),
            canadian_entity: draft.flag(FieldId::CanadianEntity),
            ip_ownership: draft.flag(FieldId::IpOwnership),
            company_revenue: RevenueRange::from_value(draft.text(FieldId::CompanyRevenue))
                .ok_or_else(|| vec![choice(FieldId::CompanyRevenue)])?,
            prototype_refinement: draft.flag(FieldId::PrototypeRefinement),
            regulatory_approval: draft.flag(FieldId::RegulatoryApproval),
            pilot_projects: draft.flag(FieldId::PilotProjects),
            ip_registration: draft.flag(FieldId::IpRegistration),
            specialized_staff: draft.flag(FieldId::SpecializedStaff),
            commercialization_details: (!details.is_empty()).then(|| details.to_string()),
            pre_approval_period: PreApprovalPeriod::from_value(
                draft.text(FieldId::PreApprovalPeriod),
            )
            .ok_or_else(|| vec![choice(FieldId::PreApprovalPeriod)])?,
            funding_goal: text(FieldId::FundingGoal),
            expected_timeline: text(FieldId::ExpectedTimeline),
        })
    }
}

/// A submitted application. Read-only once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedApplication {
    id: Uuid,
    submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    payload: ApplicationPayload,
}

impl SubmittedApplication {
    pub fn new(payload: ApplicationPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            payload,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn payload(&self) -> &ApplicationPayload {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::schema::{COMPANY_REVENUES, PRE_APPROVAL_PERIODS, RESEARCH_CATEGORIES};
    use crate::state::forms::test_support::valid_draft;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_option_parses() {
        for option in RESEARCH_CATEGORIES {
            assert!(ResearchCategory::from_value(option.value).is_some(), "{}", option.value);
        }
        for option in COMPANY_REVENUES {
            assert!(RevenueRange::from_value(option.value).is_some(), "{}", option.value);
        }
        for option in PRE_APPROVAL_PERIODS {
            assert!(PreApprovalPeriod::from_value(option.value).is_some(), "{}", option.value);
        }
    }

    #[test]
    fn test_choice_serialization_uses_option_values() {
        assert_eq!(
            serde_json::to_string(&ResearchCategory::ArtificialIntelligence).unwrap(),
            "\"artificial-intelligence\""
        );
        assert_eq!(
            serde_json::to_string(&RevenueRange::From500KTo2M).unwrap(),
            "\"500k-2m\""
        );
        for option in PRE_APPROVAL_PERIODS {
            let period = PreApprovalPeriod::from_value(option.value).unwrap();
            assert_eq!(String::from(period), option.value);
        }
    }

    #[test]
    fn test_revenue_refund_reduction() {
        assert!(RevenueRange::Over250M.has_reduced_refund());
        assert!(!RevenueRange::From50MTo250M.has_reduced_refund());
    }

    #[test]
    fn test_payload_from_valid_draft() {
        let draft = valid_draft();
        let payload = ApplicationPayload::try_from(&draft).unwrap();
        assert_eq!(payload.title, "Autonomous Crop Monitoring Drones");
        assert_eq!(payload.category, ResearchCategory::Agtech);
        assert_eq!(payload.company_revenue, RevenueRange::From2MTo10M);
        assert_eq!(payload.pre_approval_period.years(), 3);
        assert_eq!(payload.funding_goal, "750000");
        assert!(payload.canadian_entity);
        assert!(payload.pilot_projects);
        assert!(!payload.regulatory_approval);
        assert_eq!(payload.commercialization_details, None);
    }

    #[test]
    fn test_payload_rejects_invalid_draft() {
        let draft = ApplicationDraft::new();
        let failures = ApplicationPayload::try_from(&draft).unwrap_err();
        assert_eq!(failures.len(), 13);
    }

    #[test]
    fn test_submitted_application_serializes_flat() {
        let payload = ApplicationPayload::try_from(&valid_draft()).unwrap();
        let application = SubmittedApplication::new(payload);
        let json = serde_json::to_value(&application).unwrap();
        assert_eq!(json["title"], "Autonomous Crop Monitoring Drones");
        assert_eq!(json["preApprovalPeriod"], "3-years");
        assert_eq!(json["canadianEntity"], true);
        assert_eq!(json["id"], application.id().to_string());
        assert!(json.get("commercializationDetails").is_none());
    }
}
