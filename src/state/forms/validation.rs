//! Per-field rule checks over a borrowed draft

use super::draft::ApplicationDraft;
use super::field::{FieldId, FieldValue};
use super::schema::{FieldSpec, Rule};
use super::section::Section;
use std::fmt;

/// Why a field failed its rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    Required,
    TooShort { min: usize, actual: usize },
    MustBeConfirmed,
    UnknownChoice(String),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("required"),
            Self::TooShort { min, actual } => {
                write!(f, "too short ({actual} of {min} characters)")
            }
            Self::MustBeConfirmed => f.write_str("must be confirmed"),
            Self::UnknownChoice(value) => write!(f, "unknown option '{value}'"),
        }
    }
}

/// A single field that does not satisfy its rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct FieldInvalid {
    pub field: FieldId,
    pub reason: InvalidReason,
}

impl FieldInvalid {
    pub fn new(field: FieldId, reason: InvalidReason) -> Self {
        Self { field, reason }
    }

    /// Human-readable text shown next to the field
    pub fn message(&self) -> String {
        match &self.reason {
            InvalidReason::UnknownChoice(value) => {
                format!("'{value}' is not a valid {}", self.field.spec().label)
            }
            _ => self.field.spec().message.to_string(),
        }
    }
}

/// Check one value against its field's rule.
///
/// Lengths count characters, not bytes. Text is not trimmed.
pub fn check_field(spec: &FieldSpec, value: &FieldValue) -> Result<(), InvalidReason> {
    match spec.rule {
        Rule::NonEmpty => {
            if value.as_text().is_empty() {
                return Err(InvalidReason::Required);
            }
        }
        Rule::MinLength(min) => {
            let actual = value.as_text().chars().count();
            if actual < min {
                return Err(InvalidReason::TooShort { min, actual });
            }
        }
        Rule::MustBeTrue => {
            if !value.as_flag() {
                return Err(InvalidReason::MustBeConfirmed);
            }
        }
        Rule::OneOf(options) => {
            let text = value.as_text();
            if text.is_empty() {
                return Err(InvalidReason::Required);
            }
            if !options.iter().any(|option| option.value == text) {
                return Err(InvalidReason::UnknownChoice(text.to_string()));
            }
        }
        Rule::Unconstrained | Rule::Optional => {}
    }
    Ok(())
}

/// Every failing field of one section, in display order
pub fn validate_section(section: Section, draft: &ApplicationDraft) -> Vec<FieldInvalid> {
    collect_failures(section.fields().iter().copied(), draft)
}

/// Every failing field of the whole draft, in wizard order
pub fn validate_all(draft: &ApplicationDraft) -> Vec<FieldInvalid> {
    collect_failures(FieldId::ALL.iter().copied(), draft)
}

fn collect_failures(
    fields: impl Iterator<Item = FieldId>,
    draft: &ApplicationDraft,
) -> Vec<FieldInvalid> {
    fields
        .filter_map(|field| {
            check_field(field.spec(), draft.get(field))
                .err()
                .map(|reason| FieldInvalid::new(field, reason))
        })
        .collect()
}
