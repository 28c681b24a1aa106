//! Derived rows for the review step

use super::draft::ApplicationDraft;
use super::field::{choice_label, FieldId, FieldKind};

const NOT_SPECIFIED: &str = "Not specified";

/// One labelled line of the application summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

impl SummaryRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Build the review-step summary from the current draft
pub fn summarize(draft: &ApplicationDraft) -> Vec<SummaryRow> {
    let ip_ownership = if draft.flag(FieldId::IpOwnership) {
        "✓ Canadian entity"
    } else {
        "Not confirmed"
    };

    vec![
        SummaryRow::new("Project", text_or_default(draft, FieldId::Title)),
        SummaryRow::new("Category", choice_or_default(draft, FieldId::Category)),
        SummaryRow::new(
            "Pre-approval Period",
            choice_or_default(draft, FieldId::PreApprovalPeriod),
        ),
        SummaryRow::new(
            "Funding Goal",
            format_funding_goal(draft.text(FieldId::FundingGoal))
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        ),
        SummaryRow::new("IP Ownership", ip_ownership),
        SummaryRow::new(
            "Revenue Range",
            choice_or_default(draft, FieldId::CompanyRevenue),
        ),
    ]
}

fn text_or_default(draft: &ApplicationDraft, field: FieldId) -> String {
    let value = draft.text(field);
    if value.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        value.to_string()
    }
}

/// Display label for a choice field, falling back to the raw value
fn choice_or_default(draft: &ApplicationDraft, field: FieldId) -> String {
    let value = draft.text(field);
    if value.is_empty() {
        return NOT_SPECIFIED.to_string();
    }
    match field.spec().kind {
        FieldKind::Choice(options) => choice_label(options, value)
            .unwrap_or(value)
            .to_string(),
        _ => value.to_string(),
    }
}

/// Format the funding goal for display.
///
/// Leading digits (after an optional sign) are grouped with commas, like
/// `500000` -> `$500,000 CAD`. Text without leading digits is shown as
/// entered. Returns `None` for an empty goal.
pub fn format_funding_goal(raw: &str) -> Option<String> {
    let trimmed = raw.trim_start();
    if trimmed.is_empty() {
        return None;
    }

    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Some(format!("{raw} CAD"));
    }

    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    Some(format!("${sign}{} CAD", group_thousands(digits)))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::test_support::valid_draft;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_draft_summary() {
        let rows = summarize(&ApplicationDraft::new());
        let values: Vec<_> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "Not specified",
                "Not specified",
                "Not specified",
                "Not specified",
                "Not confirmed",
                "Not specified",
            ]
        );
    }

    #[test]
    fn test_filled_draft_summary_uses_labels() {
        let rows = summarize(&valid_draft());
        assert_eq!(
            rows,
            vec![
                SummaryRow::new("Project", "Autonomous Crop Monitoring Drones"),
                SummaryRow::new("Category", "Agricultural Technology"),
                SummaryRow::new("Pre-approval Period", "3 Years"),
                SummaryRow::new("Funding Goal", "$750,000 CAD"),
                SummaryRow::new("IP Ownership", "✓ Canadian entity"),
                SummaryRow::new("Revenue Range", "$2M - $10M"),
            ]
        );
    }

    #[test]
    fn test_format_funding_goal() {
        assert_eq!(format_funding_goal(""), None);
        assert_eq!(format_funding_goal("500000").as_deref(), Some("$500,000 CAD"));
        assert_eq!(format_funding_goal("1000").as_deref(), Some("$1,000 CAD"));
        assert_eq!(format_funding_goal("999").as_deref(), Some("$999 CAD"));
        assert_eq!(format_funding_goal("0042").as_deref(), Some("$42 CAD"));
        assert_eq!(format_funding_goal("2000000 CAD").as_deref(), Some("$2,000,000 CAD"));
        assert_eq!(format_funding_goal("-1500").as_deref(), Some("$-1,500 CAD"));
        assert_eq!(format_funding_goal("lots").as_deref(), Some("lots CAD"));
    }
}
