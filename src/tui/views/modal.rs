// Modal overlay rendering
//
// Modals are drawn centered on top of the panes.

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.action);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Navigation", header_style)),
        kb("↑/↓, k/j", "Move cursor / scroll"),
        kb("PgUp/PgDn", "Page up / down"),
        kb("Home/End", "Jump to start / end"),
        kb("Tab", "Cycle pane focus"),
        Line::raw(""),
        Line::from(Span::styled("  Editing", header_style)),
        kb("Enter, i", "Edit field / run action"),
        kb("Enter, Esc", "Finish editing"),
        kb("a", "Add item here"),
        kb("d, Del", "Delete item here"),
        kb("c", "Add component"),
        kb("n", "Add note"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("y", "Copy preview as text"),
        kb("t", "Next theme"),
        kb("L", "Toggle logs panel"),
        kb("?", "Toggle this help"),
        kb("q, Ctrl+C", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name.clone(), key_style),
            Span::styled("  |  Layout: ", desc_style),
            Span::styled(app.layout.as_str(), key_style),
        ]),
    ]);

    let width = 44;
    let height = content.height() as u16 + 2;
    let area = centered_rect(width, height, f.area());

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
