//! Live preview pane
//!
//! Styles `Preview` lines by kind. The preview is taken from the editor on
//! every render, so it always reflects the last keystroke.

use super::scrollbar::render_scrollbar;
use crate::preview::PreviewLine;
use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable,
    ScrollableInteractive,
};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub struct PreviewPanel {
    scroll: ScrollState,
}

impl PreviewPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
        }
    }
}

impl Default for PreviewPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PreviewPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Preview
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(Style::default().fg(ctx.theme.pane_border(focused)))
            .title(" Preview ");
        let inner = block.inner(area);
        // Leave the last column for the scrollbar
        let text_width = inner.width.saturating_sub(1).max(1) as usize;

        let preview = ctx.editor.preview();
        let lines: Vec<Line> = preview
            .lines()
            .iter()
            .map(|line| styled_line(line, text_width, ctx.theme))
            .collect();

        let height: usize = preview
            .lines()
            .iter()
            .map(|line| wrapped_height(line, text_width))
            .sum();
        self.scroll.update_dimensions(height, inner.height as usize);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll.offset() as u16, 0));

        f.render_widget(paragraph, area);
        render_scrollbar(f, area, &self.scroll);
    }
}

impl Scrollable for PreviewPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for PreviewPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll  y:copy preview")
    }
}

fn styled_line(line: &PreviewLine, width: usize, theme: &Theme) -> Line<'static> {
    match line {
        PreviewLine::Title(title) => Line::from(Span::styled(
            title.clone(),
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )),
        PreviewLine::Id(_) => Line::from(Span::styled(
            line.text(),
            Style::default().fg(theme.muted),
        )),
        PreviewLine::Divider => Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(theme.border),
        )),
        PreviewLine::ComponentTitle(title) => Line::from(Span::styled(
            title.clone(),
            Style::default().fg(theme.label).add_modifier(Modifier::BOLD),
        )),
        PreviewLine::Heading(heading) => Line::from(Span::styled(
            heading.to_string(),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        PreviewLine::Bullet(text) => Line::from(vec![
            Span::styled("• ", Style::default().fg(theme.accent)),
            Span::styled(text.clone(), Style::default().fg(theme.foreground)),
        ]),
        PreviewLine::Step { number, text } => Line::from(vec![
            Span::styled(format!("{}. ", number), Style::default().fg(theme.accent)),
            Span::styled(text.clone(), Style::default().fg(theme.foreground)),
        ]),
        PreviewLine::Placeholder(hint) => Line::from(Span::styled(
            hint.to_string(),
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        )),
    }
}

/// Rows a line takes once wrapped to `width`
fn wrapped_height(line: &PreviewLine, width: usize) -> usize {
    match line {
        PreviewLine::Divider => 1,
        _ => line.text().width().div_ceil(width).max(1),
    }
}
