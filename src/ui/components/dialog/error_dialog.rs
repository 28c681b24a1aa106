//! Error dialog component

use super::base::{key_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, text::Span, Frame};

/// Render an error dialog overlay centered on the screen.
///
/// `pending` is the number of queued errors including this one.
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, pending: usize) {
    let title = if pending > 1 {
        format!("Error (1 of {pending})")
    } else {
        "Error".to_string()
    };

    let mut hint = vec![Span::raw("Press ")];
    hint.extend(key_hint("Enter"));
    hint.push(Span::raw(" or "));
    hint.extend(key_hint("Esc"));
    hint.push(Span::raw(" to dismiss"));

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
