//! Field rendering utilities for the application wizard

use crate::state::{choice_label, FieldId, FieldInvalid, FieldKind, FieldValue, RevenueRange};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Rows a field needs, borders included
pub fn field_height(field: FieldId) -> u16 {
    match field.spec().kind {
        FieldKind::LongText => 6,
        FieldKind::ShortText
        | FieldKind::NumericText
        | FieldKind::Choice(_)
        | FieldKind::Attestation => 3,
    }
}

/// Draw one wizard field with its label, value and inline error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldId,
    value: &FieldValue,
    is_active: bool,
    error: Option<&FieldInvalid>,
) {
    let spec = field.spec();

    let border_style = match (error, is_active) {
        (Some(_), _) => Style::default().fg(Color::Red),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };

    let required = if spec.is_optional() { "" } else { " *" };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    // Checkboxes carry their label inline
    if !spec.kind.is_flag() {
        block = block.title(format!(" {}{required} ", spec.label));
    }

    // Error replaces the help line
    if let Some(error) = error {
        block = block.title_bottom(Span::styled(
            format!(" {} ", error.message()),
            Style::default().fg(Color::Red),
        ));
    } else if has_refund_note(field, value) {
        block = block.title_bottom(Span::styled(
            format!(" {} ", spec.help),
            Style::default().fg(Color::Yellow),
        ));
    } else if is_active && !spec.help.is_empty() {
        block = block.title_bottom(Span::styled(
            format!(" {} ", spec.help),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let content = match spec.kind {
        FieldKind::Attestation => {
            let label = format!("{}{required}", spec.label);
            attestation_line(&label, value.as_flag(), is_active)
        }
        FieldKind::Choice(options) => {
            let label = choice_label(options, value.as_text());
            choice_line(label, spec.placeholder, is_active)
        }
        FieldKind::ShortText | FieldKind::LongText | FieldKind::NumericText => {
            text_lines(value.as_text(), spec.placeholder, is_active)
        }
    };

    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

/// The revenue bracket above $250M keeps its refund note visible
fn has_refund_note(field: FieldId, value: &FieldValue) -> bool {
    field == FieldId::CompanyRevenue
        && RevenueRange::from_value(value.as_text()).is_some_and(RevenueRange::has_reduced_refund)
}

fn attestation_line(label: &str, checked: bool, is_active: bool) -> Vec<Line<'static>> {
    let (mark, mark_style) = if checked {
        ("[✓] ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        ("[ ] ", Style::default().fg(Color::DarkGray))
    };
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    vec![Line::from(vec![
        Span::styled(mark, mark_style),
        Span::styled(label.to_string(), text_style),
    ])]
}

fn choice_line(label: Option<&str>, placeholder: &str, is_active: bool) -> Vec<Line<'static>> {
    let (text, style) = match label {
        Some(label) if is_active => (label.to_string(), Style::default().fg(Color::Cyan)),
        Some(label) => (label.to_string(), Style::default()),
        None => (placeholder.to_string(), Style::default().fg(Color::DarkGray)),
    };
    if is_active {
        vec![Line::from(vec![
            Span::styled("◂ ", Style::default().fg(Color::Cyan)),
            Span::styled(text, style),
            Span::styled(" ▸", Style::default().fg(Color::Cyan)),
        ])]
    } else {
        vec![Line::from(Span::styled(text, style))]
    }
}

fn text_lines(value: &str, placeholder: &str, is_active: bool) -> Vec<Line<'static>> {
    let cursor = Span::styled(CURSOR, Style::default().fg(Color::Cyan));

    if value.is_empty() {
        let hint = if placeholder.is_empty() {
            "(empty)"
        } else {
            placeholder
        };
        let mut spans = Vec::new();
        if is_active {
            spans.push(cursor);
        }
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
        return vec![Line::from(spans)];
    }

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect();
    if is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }
    lines
}
