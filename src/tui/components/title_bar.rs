// Title bar component
//
// Renders the app title with the recipe being edited.

use crate::preview::UNTITLED;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let recipe = app.editor.recipe();
    let title = if recipe.title.is_empty() {
        UNTITLED
    } else {
        recipe.title.as_str()
    };

    let title_text = format!(" 🍲 Recipe Editor ──── {}", title);

    let paragraph = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(paragraph, area);
}
