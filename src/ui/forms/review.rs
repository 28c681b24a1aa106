//! Review step: application summary and what happens next

use crate::state::WizardForm;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const NEXT_STEPS: [&str; 5] = [
    "CRA will review your application within 5-10 business days",
    "You'll receive a binding Pre-Approval Certificate with a unique ID",
    "Use the Certificate ID when filing Form T661 annually",
    "No technical narratives required for pre-approved projects",
    "Community prediction markets will activate upon approval",
];

/// Width of the label column in the summary
const LABEL_WIDTH: usize = 22;

pub fn draw_review(frame: &mut Frame, area: Rect, form: &WizardForm) {
    let rows = form.wizard().summary();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    let summary: Vec<Line> = rows
        .iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", format!("{}:", row.label), width = LABEL_WIDTH),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    row.value.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(summary).block(
            Block::default()
                .title(" Application Summary ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        chunks[0],
    );

    let steps: Vec<Line> = NEXT_STEPS
        .iter()
        .map(|step| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::Yellow)),
                Span::styled(*step, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(steps).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Next Steps ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        ),
        chunks[1],
    );
}
