//! Application wizard view

use super::field_renderer::{draw_field, field_height};
use super::review::draw_review;
use crate::app::App;
use crate::state::{FieldId, Section, StepStatus, WizardButton, WizardForm};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

const BANNER_HEIGHT: u16 = 4;

/// Draw the multi-step application form
pub fn draw_wizard(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.wizard_form;
    let section = form.section();

    let block = Block::default()
        .title(" SRED Pre-Approval Application ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner_height = if section.meta().banner.is_some() {
        BANNER_HEIGHT
    } else {
        0
    };
    let elsewhere = form.errors_elsewhere().count();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                              // Step heading
            Constraint::Length(1),                              // Progress gauge
            Constraint::Length(1),                              // Step strip
            Constraint::Length(banner_height),                  // Banner
            Constraint::Min(3),                                 // Fields or review
            Constraint::Length(if elsewhere > 0 { 1 } else { 0 }), // Other-step errors
            Constraint::Length(BUTTON_HEIGHT),                  // Buttons
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_heading(frame, chunks[0], form);
    draw_progress(frame, chunks[1], form);
    draw_step_strip(frame, chunks[2], form);
    if let Some((heading, text)) = section.meta().banner {
        draw_banner(frame, chunks[3], heading, text);
    }

    if section == Section::Review {
        draw_review(frame, chunks[4], form);
    } else {
        draw_fields(frame, chunks[4], form);
    }

    if elsewhere > 0 {
        let steps: Vec<String> = form
            .errors_elsewhere()
            .map(|invalid| invalid.field.spec().section.number().to_string())
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect();
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(
                    "{elsewhere} field(s) on step {} need attention",
                    steps.join(", ")
                ),
                Style::default().fg(Color::Red),
            )),
            chunks[5],
        );
    }

    draw_buttons(frame, chunks[6], form);
}

fn draw_heading(frame: &mut Frame, area: Rect, form: &WizardForm) {
    let section = form.section();
    let line = Line::from(vec![
        Span::styled(
            format!("Step {} of {} ", form.position(), Section::COUNT),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{} {}", section.glyph(), section.title()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_progress(frame: &mut Frame, area: Rect, form: &WizardForm) {
    let percent = form.wizard().progress_percent();
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .ratio((percent / 100.0).clamp(0.0, 1.0))
            .label(format!("{percent:.0}% Complete")),
        area,
    );
}

fn draw_step_strip(frame: &mut Frame, area: Rect, form: &WizardForm) {
    let mut spans = Vec::new();
    for section in Section::ALL {
        let (marker, style) = match form.wizard().step_status(section) {
            StepStatus::Completed => ("✓".to_string(), Style::default().fg(Color::Green)),
            StepStatus::Current => (
                section.glyph().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            StepStatus::Upcoming => (
                section.number().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        };
        if !spans.is_empty() {
            spans.push(Span::styled(" ─ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("{marker} {}", section.title()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_banner(frame: &mut Frame, area: Rect, heading: &str, text: &str) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {heading} "),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

/// Index of the first field to draw so the active one stays visible
pub(crate) fn first_visible_field(fields: &[FieldId], active: usize, height: u16) -> usize {
    let Some(last) = fields.len().checked_sub(1) else {
        return 0;
    };
    let target = active.min(last);
    let mut first = 0;
    while first < target {
        let used: u16 = fields[first..=target].iter().map(|f| field_height(*f)).sum();
        if used <= height {
            break;
        }
        first += 1;
    }
    first
}

fn draw_fields(frame: &mut Frame, area: Rect, form: &WizardForm) {
    let fields = form.fields();
    let draft = form.wizard().draft();
    let first = first_visible_field(fields, form.active_field_index, area.height);

    let mut y = area.y;
    for (offset, field) in fields[first..].iter().enumerate() {
        let height = field_height(*field);
        if y + height > area.y + area.height {
            break;
        }
        let field_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        draw_field(
            frame,
            field_area,
            *field,
            draft.get(*field),
            form.active_field_index == first + offset,
            form.error_for(*field),
        );
        y += height;
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &WizardForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Min(0),
            Constraint::Length(12),
            Constraint::Length(26),
        ])
        .split(area);

    let focused = form.is_buttons_row_active();
    let position = form.position();

    let slots = [
        (WizardButton::Previous, chunks[0], !position.is_first(), None),
        (WizardButton::Cancel, chunks[2], true, Some(Color::Gray)),
        (
            WizardButton::Next,
            chunks[3],
            true,
            Some(if position.is_last() {
                Color::Green
            } else {
                Color::Cyan
            }),
        ),
    ];

    for (button, slot, enabled, accent) in slots {
        render_action_button(
            frame,
            slot,
            button.label(position),
            focused && form.selected_button == button,
            enabled,
            accent,
        );
    }
}
