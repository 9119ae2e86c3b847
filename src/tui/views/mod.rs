// Views module - screen-level rendering
//
// One screen: title bar, edit and preview panes, optional logs panel,
// status bar. Modal and toast overlays are drawn last.

mod modal;

use super::app::App;
use super::components::{status_bar, title_bar};
use super::layout::PaneArrangement;
use super::traits::{Component, RenderContext};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the logs panel when shown
const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Theme background for the whole frame (Reset when disabled in config)
    let bg_block = Block::default().style(
        Style::default()
            .bg(app.theme.background)
            .fg(app.theme.foreground),
    );
    f.render_widget(bg_block, f.area());

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(6)];
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    render_panes(f, chunks[1], app);
    if app.show_logs {
        let ctx = RenderContext::new(&app.theme, app.focus, &app.editor);
        app.logs.render(f, chunks[2], &ctx);
    }
    status_bar::render(f, chunks[chunks.len() - 1], app);

    if let Some(modal_state) = app.modal {
        modal::render(f, &modal_state, app);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

/// Edit pane and preview pane, side by side or stacked
fn render_panes(f: &mut Frame, area: Rect, app: &mut App) {
    let arrangement = PaneArrangement::resolve(app.layout, area.width);
    let panes = Layout::default()
        .direction(arrangement.direction())
        .constraints(arrangement.constraints())
        .split(area);

    let ctx = RenderContext::new(&app.theme, app.focus, &app.editor);
    app.form.render(f, panes[0], &ctx);
    app.preview.render(f, panes[1], &ctx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LayoutMode};
    use crate::editor::Editor;
    use crate::logging::LogBuffer;
    use crate::recipe::Recipe;
    use crate::tui::modal::Modal;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(
            Editor::new(Recipe::sample()),
            &Config::default(),
            LogBuffer::new(),
        )
    }

    #[test]
    fn test_draw_full_screen() {
        let mut app = app();
        let text = render(&mut app, 160, 50);
        assert!(text.contains("Recipe Editor"));
        assert!(text.contains(" Edit "));
        assert!(text.contains(" Preview "));
        assert!(text.contains("ID: pot-roast"));
        assert!(text.contains("2 components · 5 ingredients · 3 steps · 1 note"));
        assert!(!text.contains("System Logs"));
    }

    #[test]
    fn test_draw_stacked_with_logs_and_help() {
        let mut app = app();
        app.layout = LayoutMode::Stacked;
        app.show_logs = true;
        app.modal = Some(Modal::help());
        let text = render(&mut app, 80, 60);
        assert!(text.contains("System Logs"));
        assert!(text.contains(" Help "));
        assert!(text.contains("Copy preview as text"));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let mut app = app();
        app.show_logs = true;
        app.show_toast("Component added");
        render(&mut app, 10, 5);
    }
}
