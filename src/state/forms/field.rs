//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one field of the application draft.
///
/// Declaration order is the order fields appear across the wizard, and the
/// discriminant doubles as the index into [`super::schema::FIELD_SPECS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Title,
    Description,
    Category,
    Uncertainty,
    Hypothesis,
    Method,
    ExpectedOutcome,
    CanadianEntity,
    IpOwnership,
    CompanyRevenue,
    PrototypeRefinement,
    RegulatoryApproval,
    PilotProjects,
    IpRegistration,
    SpecializedStaff,
    CommercializationDetails,
    PreApprovalPeriod,
    FundingGoal,
    ExpectedTimeline,
}

impl FieldId {
    pub const COUNT: usize = 19;

    pub const ALL: [FieldId; Self::COUNT] = [
        Self::Title,
        Self::Description,
        Self::Category,
        Self::Uncertainty,
        Self::Hypothesis,
        Self::Method,
        Self::ExpectedOutcome,
        Self::CanadianEntity,
        Self::IpOwnership,
        Self::CompanyRevenue,
        Self::PrototypeRefinement,
        Self::RegulatoryApproval,
        Self::PilotProjects,
        Self::IpRegistration,
        Self::SpecializedStaff,
        Self::CommercializationDetails,
        Self::PreApprovalPeriod,
        Self::FundingGoal,
        Self::ExpectedTimeline,
    ];

    /// Position of this field in [`FieldId::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Identifier used when reporting a field (matches the serialized key)
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Category => "category",
            Self::Uncertainty => "uncertainty",
            Self::Hypothesis => "hypothesis",
            Self::Method => "method",
            Self::ExpectedOutcome => "expectedOutcome",
            Self::CanadianEntity => "canadianEntity",
            Self::IpOwnership => "ipOwnership",
            Self::CompanyRevenue => "companyRevenue",
            Self::PrototypeRefinement => "prototypeRefinement",
            Self::RegulatoryApproval => "regulatoryApproval",
            Self::PilotProjects => "pilotProjects",
            Self::IpRegistration => "ipRegistration",
            Self::SpecializedStaff => "specializedStaff",
            Self::CommercializationDetails => "commercializationDetails",
            Self::PreApprovalPeriod => "preApprovalPeriod",
            Self::FundingGoal => "fundingGoal",
            Self::ExpectedTimeline => "expectedTimeline",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of an enumerated choice set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Stored value
    pub value: &'static str,
    /// Display label
    pub label: &'static str,
}

/// Look up the display label for a stored choice value
pub fn choice_label(options: &[ChoiceOption], value: &str) -> Option<&'static str> {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}

/// Input shape of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    ShortText,
    LongText,
    Choice(&'static [ChoiceOption]),
    /// Checkbox confirming a statement
    Attestation,
    /// Numbers kept as entered, never parsed for validation
    NumericText,
}

impl FieldKind {
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::LongText)
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Attestation)
    }

    /// Short name of the value shape this kind stores
    pub fn value_type(&self) -> &'static str {
        if self.is_flag() {
            "boolean"
        } else {
            "text"
        }
    }

    /// Empty value a fresh draft starts with
    pub fn default_value(&self) -> FieldValue {
        if self.is_flag() {
            FieldValue::Flag(false)
        } else {
            FieldValue::Text(String::new())
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for flags)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the flag value (returns false for text)
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(_) => false,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, FieldValue::Flag(_))
    }

    /// True for empty text and unset flags
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Flag(b) => !b,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}
