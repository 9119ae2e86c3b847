//! Logs panel component
//!
//! Shows entries captured by the `TuiLogLayer`. The panel holds a handle to
//! the shared `LogBuffer` and re-reads it on every render, following the
//! newest entry unless the user scrolled up.

use super::scrollbar::render_scrollbar;
use crate::logging::{LogBuffer, LogEntry, LogLevel};
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
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    buffer: LogBuffer,
    scroll: ScrollState,
}

impl LogsPanel {
    pub fn new(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            scroll: ScrollState::new(),
        }
    }
}

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let entries = self.buffer.get_all();
        let viewport = area.height.saturating_sub(2) as usize;
        self.scroll.update_dimensions(entries.len(), viewport);

        let start = self.scroll.offset();
        let items: Vec<ListItem> = entries
            .iter()
            .skip(start)
            .take(viewport)
            .map(|entry| ListItem::new(format_log_entry(entry)).style(log_style(entry, ctx.theme)))
            .collect();

        let title = if self.scroll.auto_follow {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(ctx.theme.border_type)
                .border_style(Style::default().fg(ctx.theme.pane_border(ctx.is_focused(self.id()))))
                .title(title),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll);
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll  End:follow")
    }
}

fn format_log_entry(entry: &LogEntry) -> String {
    match short_target(&entry.target) {
        Some(target) => format!(
            "[{}] {:5} {}: {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.level.as_str(),
            target,
            entry.message
        ),
        None => format!(
            "[{}] {:5} {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.level.as_str(),
            entry.message
        ),
    }
}

/// Module path relative to this crate; other crates keep their full target
fn short_target(target: &str) -> Option<&str> {
    match target.strip_prefix("recipe_editor") {
        Some("") => None,
        Some(rest) => rest.strip_prefix("::").or(Some(target)),
        None => Some(target),
    }
}

fn log_style(entry: &LogEntry, theme: &Theme) -> Style {
    let style = Style::default().fg(theme.log_level(entry.level));
    match entry.level {
        LogLevel::Error => style.add_modifier(Modifier::BOLD),
        _ => style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Editor;
    use chrono::Local;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_follows_newest_entries() {
        let buffer = LogBuffer::new();
        for i in 0..20 {
            buffer.add(LogEntry {
                timestamp: Local::now(),
                level: LogLevel::Debug,
                target: "recipe_editor".to_string(),
                message: format!("entry {}", i),
            });
        }

        let theme = Theme::default();
        let editor = Editor::default();
        let mut panel = LogsPanel::new(buffer);
        let mut terminal = Terminal::new(TestBackend::new(50, 7)).unwrap();
        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, ComponentId::Form, &editor);
                panel.render(f, f.area(), &ctx);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("entry 19"));
        assert!(text.contains("entry 15"));
        assert!(!text.contains("entry 14"));
        assert_eq!(panel.scroll_offset(), 15);
    }

    #[test]
    fn test_format_shows_module_target() {
        let entry = |target: &str| LogEntry {
            timestamp: Local::now(),
            level: LogLevel::Warn,
            target: target.to_string(),
            message: "clipboard unavailable".to_string(),
        };

        let line = format_log_entry(&entry("recipe_editor::tui::app"));
        assert!(line.ends_with("WARN  tui::app: clipboard unavailable"));

        let line = format_log_entry(&entry("arboard"));
        assert!(line.ends_with("WARN  arboard: clipboard unavailable"));

        let line = format_log_entry(&entry("recipe_editor"));
        assert!(line.ends_with("WARN  clipboard unavailable"));
    }
}
