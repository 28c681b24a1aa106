//! Static field table: labels, kinds and validation rules for every field

use super::field::{ChoiceOption, FieldId, FieldKind};
use super::section::Section;

pub const RESEARCH_CATEGORIES: &[ChoiceOption] = &[
    ChoiceOption { value: "artificial-intelligence", label: "Artificial Intelligence" },
    ChoiceOption { value: "biotechnology", label: "Biotechnology" },
    ChoiceOption { value: "clean-energy", label: "Clean Energy" },
    ChoiceOption { value: "quantum-computing", label: "Quantum Computing" },
    ChoiceOption { value: "medical-devices", label: "Medical Devices" },
    ChoiceOption { value: "aerospace", label: "Aerospace" },
    ChoiceOption { value: "robotics", label: "Robotics" },
    ChoiceOption { value: "agtech", label: "Agricultural Technology" },
    ChoiceOption { value: "fintech", label: "Financial Technology" },
    ChoiceOption { value: "other", label: "Other" },
];

pub const COMPANY_REVENUES: &[ChoiceOption] = &[
    ChoiceOption { value: "under-500k", label: "Under $500K" },
    ChoiceOption { value: "500k-2m", label: "$500K - $2M" },
    ChoiceOption { value: "2m-10m", label: "$2M - $10M" },
    ChoiceOption { value: "10m-50m", label: "$10M - $50M" },
    ChoiceOption { value: "50m-250m", label: "$50M - $250M" },
    ChoiceOption { value: "over-250m", label: "Over $250M" },
];

pub const PRE_APPROVAL_PERIODS: &[ChoiceOption] = &[
    ChoiceOption { value: "1-year", label: "1 Year" },
    ChoiceOption { value: "2-years", label: "2 Years" },
    ChoiceOption { value: "3-years", label: "3 Years" },
    ChoiceOption { value: "4-years", label: "4 Years" },
    ChoiceOption { value: "5-years", label: "5 Years" },
];

/// Validation rule attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// At least one character
    NonEmpty,
    /// At least `n` characters
    MinLength(usize),
    /// Attestation must be checked
    MustBeTrue,
    /// Non-empty and one of the listed values
    OneOf(&'static [ChoiceOption]),
    /// Any value, including the default
    Unconstrained,
    /// May be left empty
    Optional,
}

/// Static description of one field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: FieldId,
    pub section: Section,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rule: Rule,
    /// Shown next to the field when its rule fails
    pub message: &'static str,
    pub placeholder: &'static str,
    pub help: &'static str,
}

impl FieldSpec {
    pub fn is_optional(&self) -> bool {
        matches!(self.rule, Rule::Optional | Rule::Unconstrained)
    }
}

/// Indexed by [`FieldId::index`]
pub static FIELD_SPECS: [FieldSpec; FieldId::COUNT] = [
    FieldSpec {
        id: FieldId::Title,
        section: Section::Overview,
        label: "Project Title",
        kind: FieldKind::ShortText,
        rule: Rule::NonEmpty,
        message: "Project title is required",
        placeholder: "Revolutionary AI Healthcare Solution",
        help: "",
    },
    FieldSpec {
        id: FieldId::Description,
        section: Section::Overview,
        label: "Project Description",
        kind: FieldKind::LongText,
        rule: Rule::MinLength(50),
        message: "Description must be at least 50 characters",
        placeholder: "Provide a comprehensive overview of your innovation project, its objectives, and potential impact...",
        help: "Minimum 50 characters. Describe your project in simple, clear language.",
    },
    FieldSpec {
        id: FieldId::Category,
        section: Section::Overview,
        label: "Research Category",
        kind: FieldKind::Choice(RESEARCH_CATEGORIES),
        rule: Rule::OneOf(RESEARCH_CATEGORIES),
        message: "Category is required",
        placeholder: "Select research category",
        help: "",
    },
    FieldSpec {
        id: FieldId::Uncertainty,
        section: Section::Technical,
        label: "Scientific or Technological Uncertainty",
        kind: FieldKind::LongText,
        rule: Rule::MinLength(20),
        message: "Please describe the scientific or technological uncertainty",
        placeholder: "What specific scientific or technological uncertainty are you trying to resolve? What existing knowledge or technology is insufficient?",
        help: "Describe the gap in scientific or technological knowledge that your project addresses.",
    },
    FieldSpec {
        id: FieldId::Hypothesis,
        section: Section::Technical,
        label: "Hypothesis",
        kind: FieldKind::LongText,
        rule: Rule::MinLength(20),
        message: "Please state your hypothesis clearly",
        placeholder: "What is your hypothesis for resolving this uncertainty? What do you believe will work and why?",
        help: "State your hypothesis clearly using scientific methodology.",
    },
    FieldSpec {
        id: FieldId::Method,
        section: Section::Technical,
        label: "Research Method",
        kind: FieldKind::LongText,
        rule: Rule::MinLength(30),
        message: "Please describe your research method in detail",
        placeholder: "How will you test your hypothesis? What systematic investigation will you conduct?",
        help: "Describe your systematic approach to testing the hypothesis.",
    },
    FieldSpec {
        id: FieldId::ExpectedOutcome,
        section: Section::Technical,
        label: "Expected Outcome",
        kind: FieldKind::LongText,
        rule: Rule::MinLength(20),
        message: "Please describe the expected outcome",
        placeholder: "What advancement in scientific or technological knowledge do you expect to achieve?",
        help: "Describe the expected advancement in knowledge or technology.",
    },
    FieldSpec {
        id: FieldId::CanadianEntity,
        section: Section::Ownership,
        label: "Research performed by Canadian entity",
        kind: FieldKind::Attestation,
        rule: Rule::MustBeTrue,
        message: "Must be performed by Canadian entity",
        placeholder: "",
        help: "Confirm that this R&D work will be performed by a Canadian company or subsidiary.",
    },
    FieldSpec {
        id: FieldId::IpOwnership,
        section: Section::Ownership,
        label: "Canadian entity will own resulting IP",
        kind: FieldKind::Attestation,
        rule: Rule::MustBeTrue,
        message: "Canadian entity must own resulting IP",
        placeholder: "",
        help: "The Canadian entity performing the R&D must own the intellectual property created.",
    },
    FieldSpec {
        id: FieldId::CompanyRevenue,
        section: Section::Ownership,
        label: "Annual Company Revenue",
        kind: FieldKind::Choice(COMPANY_REVENUES),
        rule: Rule::OneOf(COMPANY_REVENUES),
        message: "Annual revenue range is required",
        placeholder: "Select revenue range",
        help: "Companies over $250M revenue have reduced refundable portions.",
    },
    FieldSpec {
        id: FieldId::PrototypeRefinement,
        section: Section::Commercialization,
        label: "Prototype Refinement for Production",
        kind: FieldKind::Attestation,
        rule: Rule::Unconstrained,
        message: "",
        placeholder: "",
        help: "Costs to refine prototypes for manufacturing readiness.",
    },
    FieldSpec {
        id: FieldId::RegulatoryApproval,
        section: Section::Commercialization,
        label: "Regulatory Approval Costs",
        kind: FieldKind::Attestation,
        rule: Rule::Unconstrained,
        message: "",
        placeholder: "",
        help: "Expenses for regulatory compliance and approvals.",
    },
    FieldSpec {
        id: FieldId::PilotProjects,
        section: Section::Commercialization,
        label: "Pilot Projects with Early Customers",
        kind: FieldKind::Attestation,
        rule: Rule::Unconstrained,
        message: "",
        placeholder: "",
        help: "Costs for testing with early adopter customers.",
    },
    FieldSpec {
        id: FieldId::IpRegistration,
        section: Section::Commercialization,
        label: "IP Registration/Protection",
        kind: FieldKind::Attestation,
        rule: Rule::Unconstrained,
        message: "",
        placeholder: "",
        help: "Patent filing and IP protection expenses.",
    },
    FieldSpec {
        id: FieldId::SpecializedStaff,
        section: Section::Commercialization,
        label: "Specialized Staff for Scaling",
        kind: FieldKind::Attestation,
        rule: Rule::Unconstrained,
        message: "",
        placeholder: "",
        help: "Personnel costs for scaling initial results into products.",
    },
    FieldSpec {
        id: FieldId::CommercializationDetails,
        section: Section::Commercialization,
        label: "Additional Commercialization Details (Optional)",
        kind: FieldKind::LongText,
        rule: Rule::Optional,
        message: "",
        placeholder: "Provide additional details about your commercialization strategy and related expenditures...",
        help: "",
    },
    FieldSpec {
        id: FieldId::PreApprovalPeriod,
        section: Section::Timeline,
        label: "Pre-Approval Period",
        kind: FieldKind::Choice(PRE_APPROVAL_PERIODS),
        rule: Rule::OneOf(PRE_APPROVAL_PERIODS),
        message: "Pre-approval period is required",
        placeholder: "Select pre-approval duration",
        help: "How long do you expect this research project to continue?",
    },
    FieldSpec {
        id: FieldId::FundingGoal,
        section: Section::Timeline,
        label: "Total Funding Goal (CAD)",
        kind: FieldKind::NumericText,
        rule: Rule::NonEmpty,
        message: "Funding goal is required",
        placeholder: "500000",
        help: "Expected total R&D expenditures over the pre-approval period.",
    },
    FieldSpec {
        id: FieldId::ExpectedTimeline,
        section: Section::Timeline,
        label: "Project Timeline",
        kind: FieldKind::LongText,
        rule: Rule::NonEmpty,
        message: "Timeline is required",
        placeholder: "Describe key milestones and timeline for your research project...",
        help: "",
    },
];

impl FieldId {
    /// Static description of this field
    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_SPECS[self.index()]
    }
}
