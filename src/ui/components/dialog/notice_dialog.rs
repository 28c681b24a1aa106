//! Submission confirmation dialog

use super::base::{key_hint, render_dialog, DialogConfig};
use crate::platform::COPY_REFERENCE_KEY;
use crate::state::Notice;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

/// Render the notice shown after an application is accepted
pub fn render_notice_dialog(frame: &mut Frame, notice: &Notice) {
    let detail = notice.reference.as_ref().map(|reference| {
        Line::from(vec![
            Span::styled("Reference: ", Style::default().fg(Color::DarkGray)),
            Span::styled(reference.clone(), Style::default().fg(Color::Yellow)),
        ])
    });

    let mut hint = key_hint("Enter");
    hint.push(Span::raw(" close  "));
    if notice.reference.is_some() {
        hint.extend(key_hint(COPY_REFERENCE_KEY));
        hint.push(Span::raw(" copy reference"));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: &notice.title,
            title_color: Color::Green,
            border_color: Color::Green,
            message: &notice.message,
            detail,
            hint: Some(hint),
            max_width: 64,
        },
    );
}
