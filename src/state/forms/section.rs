//! The six fixed wizard sections and their display metadata

use super::field::FieldId;

/// One step of the application wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Overview,
    Technical,
    Ownership,
    Commercialization,
    Timeline,
    Review,
}

/// Display metadata for a section
#[derive(Debug, Clone, Copy)]
pub struct SectionMeta {
    pub title: &'static str,
    pub glyph: &'static str,
    /// Heading and text of the info box shown above the fields
    pub banner: Option<(&'static str, &'static str)>,
    pub fields: &'static [FieldId],
}

static SECTION_META: [SectionMeta; Section::COUNT] = [
    SectionMeta {
        title: "Project Overview",
        glyph: "≡",
        banner: None,
        fields: &[FieldId::Title, FieldId::Description, FieldId::Category],
    },
    SectionMeta {
        title: "Technical Details",
        glyph: "✦",
        banner: Some((
            "SRED Technical Requirements",
            "Complete these sections using language familiar to scientists and engineers. This forms the core of your SRED pre-approval.",
        )),
        fields: &[
            FieldId::Uncertainty,
            FieldId::Hypothesis,
            FieldId::Method,
            FieldId::ExpectedOutcome,
        ],
    },
    SectionMeta {
        title: "IP & Ownership",
        glyph: "⌂",
        banner: Some((
            "Canadian Ownership Requirements",
            "SRED credits require that the work is performed by Canadian entities and resulting IP remains in Canada.",
        )),
        fields: &[
            FieldId::CanadianEntity,
            FieldId::IpOwnership,
            FieldId::CompanyRevenue,
        ],
    },
    SectionMeta {
        title: "Commercialization",
        glyph: "⚖",
        banner: Some((
            "Commercialization Expenditures",
            "Select applicable commercialization activities tied to your experimental project.",
        )),
        fields: &[
            FieldId::PrototypeRefinement,
            FieldId::RegulatoryApproval,
            FieldId::PilotProjects,
            FieldId::IpRegistration,
            FieldId::SpecializedStaff,
            FieldId::CommercializationDetails,
        ],
    },
    SectionMeta {
        title: "Timeline & Budget",
        glyph: "◷",
        banner: None,
        fields: &[
            FieldId::PreApprovalPeriod,
            FieldId::FundingGoal,
            FieldId::ExpectedTimeline,
        ],
    },
    SectionMeta {
        title: "Review & Submit",
        glyph: "◉",
        banner: None,
        fields: &[],
    },
];

impl Section {
    pub const COUNT: usize = 6;

    pub const ALL: [Section; Self::COUNT] = [
        Self::Overview,
        Self::Technical,
        Self::Ownership,
        Self::Commercialization,
        Self::Timeline,
        Self::Review,
    ];

    /// 1-based step number
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn meta(self) -> &'static SectionMeta {
        &SECTION_META[self as usize]
    }

    pub fn title(self) -> &'static str {
        self.meta().title
    }

    pub fn glyph(self) -> &'static str {
        self.meta().glyph
    }

    /// Fields edited on this step, in display order
    pub fn fields(self) -> &'static [FieldId] {
        self.meta().fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!(Section::Overview.number(), 1);
        assert_eq!(Section::Review.number(), 6);
    }

    #[test]
    fn test_titles() {
        let titles: Vec<_> = Section::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Project Overview",
                "Technical Details",
                "IP & Ownership",
                "Commercialization",
                "Timeline & Budget",
                "Review & Submit",
            ]
        );
    }

    #[test]
    fn test_review_has_no_fields() {
        assert!(Section::Review.fields().is_empty());
    }
}
