//! In-progress application draft

use super::field::{FieldId, FieldValue};

/// The in-memory, unsubmitted application record.
///
/// Holds one value per [`FieldId`]; every field starts at its kind's empty
/// default. Values are stored without validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDraft {
    values: [FieldValue; FieldId::COUNT],
}

impl ApplicationDraft {
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|i| FieldId::ALL[i].spec().kind.default_value()),
        }
    }

    pub fn get(&self, field: FieldId) -> &FieldValue {
        &self.values[field.index()]
    }

    pub fn text(&self, field: FieldId) -> &str {
        self.get(field).as_text()
    }

    pub fn flag(&self, field: FieldId) -> bool {
        self.get(field).as_flag()
    }

    pub(crate) fn set(&mut self, field: FieldId, value: FieldValue) {
        self.values[field.index()] = value;
    }

    /// Return every field to its default
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// True when no field differs from its default
    pub fn is_pristine(&self) -> bool {
        *self == Self::new()
    }

    /// Iterate fields in wizard order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldValue)> {
        FieldId::ALL.iter().copied().zip(self.values.iter())
    }
}

impl Default for ApplicationDraft {
    fn default() -> Self {
        Self::new()
    }
}
