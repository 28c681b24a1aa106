//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 20;

fn sidebar_glyph(view: View) -> &'static str {
    match view {
        View::Markets => "◈",
        View::Apply => "✎",
    }
}

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let brand = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(" SRED", Style::default().fg(Color::Cyan)),
            Span::styled(" EXCHANGE", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(
            " Canadian innovation",
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(0)];
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    frame.render_widget(brand, chunks[0]);

    for (idx, view) in View::ALL.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx + 2],
            sidebar_glyph(*view),
            view.label(),
            idx == app.state.sidebar_index,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Location indicator
    let location = match app.state.current_view {
        View::Markets => " ◈ ".to_string(),
        View::Apply => format!(" {}/6 ", app.state.wizard_form.position()),
    };
    spans.push(Span::styled(location, Style::default().fg(Color::Yellow)));

    // View-specific hints
    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::LightRed)));
    }

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    let form = &app.state.wizard_form;
    match app.state.current_view {
        View::Markets => "j/k:nav  h/l:category  s:sort  t:stats  a:apply  q:quit".to_string(),
        View::Apply if form.is_buttons_row_active() => {
            "←/→:button  Enter:press  Tab:fields  Esc:cancel".to_string()
        }
        View::Apply if form.position().is_last() => format!(
            "PgUp:prev  {}:submit  Esc:cancel",
            crate::platform::SUBMIT_SHORTCUT
        ),
        View::Apply => "Tab:next field  Space:toggle  ←/→:choose  PgDn:next  PgUp:prev  Esc:cancel"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;

    #[test]
    fn test_create_layout_reserves_sidebar_and_status_bar() {
        let (sidebar, main) = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(main.x, SIDEBAR_WIDTH);
        assert_eq!(main.height, 29);
    }

    #[test]
    fn test_hints_follow_view() {
        let mut app = App::new(&TuiConfig::default());
        assert!(get_view_hints(&app).contains("a:apply"));

        app.state.set_view(View::Apply);
        assert!(get_view_hints(&app).contains("PgDn:next"));

        app.state.wizard_form.prev_field();
        assert!(get_view_hints(&app).contains("Enter:press"));
    }
}
