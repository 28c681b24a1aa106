//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod markets;
mod widgets;

use crate::app::App;
use crate::state::View;
use components::{render_error_dialog, render_notice_dialog};
use ratatui::Frame;
use widgets::render_scrollable_list;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Markets => markets::draw(frame, main_area, app),
        View::Apply => forms::draw_wizard(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Overlays, errors on top
    if let Some(notice) = &app.state.notice {
        render_notice_dialog(frame, notice);
    }
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, app.state.pending_error_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::{test_support::valid_draft, FieldId, Notice};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    #[test]
    fn test_markets_view_renders() {
        let screen = render(&app(), 140, 40);
        assert!(screen.contains("Canadian Innovation"));
        assert!(screen.contains("Total Market Cap"));
        assert!(screen.contains("Neural Interface"));
        assert!(screen.contains("Sort: Trending"));
    }

    #[test]
    fn test_markets_view_without_stats() {
        let mut app = app();
        app.state.show_stats = false;
        let screen = render(&app, 140, 40);
        assert!(!screen.contains("Total Market Cap"));
    }

    #[test]
    fn test_every_wizard_step_renders() {
        let mut app = app();
        app.state.set_view(View::Apply);
        for (field, value) in valid_draft().iter() {
            app.state.wizard_form.set_value(field, value.clone());
        }

        for step in 1..=6 {
            let screen = render(&app, 120, 40);
            assert!(screen.contains(&format!("Step {step} of 6")), "step {step}");
            if step < 6 {
                app.state.wizard_form.go_next().expect("valid step");
            }
        }

        let screen = render(&app, 120, 40);
        assert!(screen.contains("Application Summary"));
        assert!(screen.contains("$750,000 CAD"));
        assert!(screen.contains("Submit for Approval"));
    }

    #[test]
    fn test_inline_errors_render() {
        let mut app = app();
        app.state.set_view(View::Apply);
        assert!(app.state.wizard_form.go_next().is_err());
        let screen = render(&app, 120, 40);
        assert!(screen.contains("Project title is required"));
    }

    #[test]
    fn test_top_revenue_bracket_shows_refund_note() {
        let mut app = app();
        app.state.set_view(View::Apply);
        for (field, value) in valid_draft().iter() {
            app.state.wizard_form.set_value(field, value.clone());
        }
        app.state
            .wizard_form
            .set_value(FieldId::CompanyRevenue, "over-250m".into());
        app.state.wizard_form.go_next().expect("valid step");
        app.state.wizard_form.go_next().expect("valid step");

        let screen = render(&app, 120, 40);
        assert!(screen.contains("Over $250M"));
        assert!(screen.contains("reduced refundable portions"));
    }

    #[test]
    fn test_dialogs_render_over_view() {
        let mut app = app();
        app.state.notice = Some(Notice {
            title: "Application Submitted!".to_string(),
            message: "Submitted for review.".to_string(),
            reference: Some("abc-123".to_string()),
        });
        let screen = render(&app, 120, 40);
        assert!(screen.contains("Application Submitted!"));
        assert!(screen.contains("abc-123"));

        app.push_error("Something failed");
        app.push_error("Another");
        let screen = render(&app, 120, 40);
        assert!(screen.contains("Error (1 of 2)"));
        assert!(screen.contains("Something failed"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app();
        render(&app, 30, 8);
        app.state.set_view(View::Apply);
        render(&app, 30, 8);
    }
}
