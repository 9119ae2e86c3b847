//! Edit pane component
//!
//! Renders the document as a form (see `tui::form`) and owns the view state
//! of editing: the cursor row, the scroll position and, while a field is
//! being typed into, the text input. It never mutates the document; App
//! applies the edits through the Editor.

use super::scrollbar::render_scrollbar;
use crate::editor::{Command, Field};
use crate::theme::Theme;
use crate::tui::form::{self, Row};
use crate::tui::scroll::ScrollState;
use crate::tui::text_input::TextInput;
use crate::tui::traits::{Component, ComponentId, RenderContext, Scrollable};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A field currently being typed into
#[derive(Debug, Clone)]
pub struct EditSession {
    pub field: Field,
    pub input: TextInput,
}

pub struct FormPanel {
    scroll: ScrollState,
    /// Index into the current row list; always a selectable row after `clamp`
    cursor: usize,
    editing: Option<EditSession>,
}

impl FormPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
            // First row is the "Recipe" section title; start on the ID field
            cursor: 1,
            editing: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Row under the cursor
    pub fn selected_row(&self, rows: &[Row]) -> Option<Row> {
        rows.get(self.cursor).copied()
    }

    /// Put the cursor back on a selectable row after the rows changed
    pub fn clamp(&mut self, rows: &[Row]) {
        if let Some(index) = form::nearest_selectable(rows, self.cursor) {
            self.cursor = index;
        }
    }

    pub fn move_down(&mut self, rows: &[Row]) {
        if let Some(index) = form::next_selectable(rows, self.cursor) {
            self.cursor = index;
        }
    }

    pub fn move_up(&mut self, rows: &[Row]) {
        if let Some(index) = form::prev_selectable(rows, self.cursor) {
            self.cursor = index;
        }
    }

    pub fn move_first(&mut self, rows: &[Row]) {
        self.cursor = 0;
        self.clamp(rows);
    }

    pub fn move_last(&mut self, rows: &[Row]) {
        self.cursor = rows.len().saturating_sub(1);
        if let Some(index) = rows
            .iter()
            .rposition(|row| row.is_selectable())
        {
            self.cursor = index;
        }
    }

    /// Move by a viewport's worth of rows
    pub fn move_page(&mut self, rows: &[Row], down: bool) {
        let page = self.scroll.viewport().max(1);
        self.cursor = if down {
            self.cursor.saturating_add(page)
        } else {
            self.cursor.saturating_sub(page)
        };
        self.clamp(rows);
    }

    /// Move the cursor onto the row for `field`, if it exists
    pub fn select_field(&mut self, rows: &[Row], field: Field) -> bool {
        match form::position_of(rows, field) {
            Some(index) => {
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    /// Move the cursor onto a specific row, if it exists
    pub fn select_row(&mut self, rows: &[Row], row: Row) -> bool {
        match rows.iter().position(|r| *r == row) {
            Some(index) => {
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    pub fn begin_edit(&mut self, field: Field, text: &str) {
        self.editing = Some(EditSession {
            field,
            input: TextInput::new(text),
        });
    }

    pub fn end_edit(&mut self) -> Option<EditSession> {
        self.editing.take()
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditSession> {
        self.editing.as_mut()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn focus_hint(&self) -> &'static str {
        if self.is_editing() {
            "type to edit  ←→:move  Enter/Esc:done"
        } else {
            "↑↓:move  Enter:edit  a:add  d:delete  c:component  n:note"
        }
    }

    fn render_row(&self, row: Row, selected: bool, ctx: &RenderContext) -> Line<'static> {
        let theme = ctx.theme;
        let editor = ctx.editor;

        let mut line = match row {
            Row::Section(title) => Line::from(Span::styled(
                format!("▌ {}", title),
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            )),
            Row::ComponentHeader(c) => {
                let mut spans = vec![Span::styled(
                    format!("  Component {}", c + 1),
                    Style::default().fg(theme.label).add_modifier(Modifier::BOLD),
                )];
                if selected {
                    // The last component cannot be deleted
                    let style = if editor.can_delete_component() {
                        Style::default().fg(theme.danger)
                    } else {
                        Style::default()
                            .fg(theme.muted)
                            .add_modifier(Modifier::CROSSED_OUT)
                    };
                    spans.push(Span::styled("  d:delete", style));
                }
                Line::from(spans)
            }
            Row::SubHeading(title) => Line::from(Span::styled(
                format!("    {}", title),
                Style::default().fg(theme.muted).add_modifier(Modifier::BOLD),
            )),
            Row::Field(field) => self.render_field(field, selected, ctx),
            Row::Action(command) => Line::from(Span::styled(
                format!("{}+ {}", action_indent(command), form::action_label(command)),
                Style::default().fg(theme.action),
            )),
            Row::Hint(text) => Line::from(Span::styled(
                format!("      {}", text),
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::ITALIC),
            )),
        };

        if selected {
            line = if ctx.is_focused(ComponentId::Form) {
                line.style(Style::default().bg(theme.selection))
            } else {
                line.style(Style::default().add_modifier(Modifier::UNDERLINED))
            };
        }
        line
    }

    fn render_field(&self, field: Field, selected: bool, ctx: &RenderContext) -> Line<'static> {
        let theme = ctx.theme;
        let prefix = Span::styled(field_prefix(field), Style::default().fg(prefix_color(field, theme)));

        let editing = self
            .editing
            .as_ref()
            .filter(|session| session.field == field);
        let value = match editing {
            Some(session) => session.input.value(),
            None => ctx.editor.text(field),
        };

        let value_span = if value.is_empty() && editing.is_none() {
            Span::styled(
                field.placeholder().to_string(),
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::ITALIC),
            )
        } else if editing.is_some() {
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(theme.selection_fg)
                    .add_modifier(Modifier::BOLD),
            )
        } else if selected {
            Span::styled(value.to_string(), Style::default().fg(theme.selection_fg))
        } else {
            Span::styled(value.to_string(), Style::default().fg(theme.foreground))
        };

        Line::from(vec![prefix, value_span])
    }

    /// Line for the field being edited, shifted so the cursor stays visible.
    /// Returns the line and the cursor column relative to the row start.
    fn render_editing_line(
        &self,
        session: &EditSession,
        width: usize,
        ctx: &RenderContext,
    ) -> (Line<'static>, usize) {
        let prefix = field_prefix(session.field);
        let prefix_width = prefix.width();
        let available = width.saturating_sub(prefix_width + 1);
        let (visible, skipped) = scroll_to_cursor(
            session.input.value(),
            session.input.cursor_column(),
            available,
        );

        let line = Line::from(vec![
            Span::styled(
                prefix,
                Style::default().fg(prefix_color(session.field, ctx.theme)),
            ),
            Span::styled(
                visible.to_string(),
                Style::default()
                    .fg(ctx.theme.selection_fg)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .style(Style::default().bg(ctx.theme.selection));

        (line, prefix_width + session.input.cursor_column() - skipped)
    }
}

impl Default for FormPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FormPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Form
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let rows = form::rows(ctx.editor.recipe());
        self.clamp(&rows);

        let focused = ctx.is_focused(self.id());
        let title = if self.is_editing() {
            " Edit · typing "
        } else {
            " Edit "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(Style::default().fg(ctx.theme.pane_border(focused)))
            .title(title);
        let inner = block.inner(area);

        self.scroll
            .update_dimensions(rows.len(), inner.height as usize);
        self.scroll.ensure_visible(self.cursor);

        let start = self.scroll.offset();
        let end = (start + inner.height as usize).min(rows.len());
        let mut cursor_position = None;

        let lines: Vec<Line> = (start..end)
            .map(|index| {
                let selected = index == self.cursor;
                match (&self.editing, rows[index]) {
                    (Some(session), Row::Field(field)) if field == session.field => {
                        let (line, column) =
                            self.render_editing_line(session, inner.width as usize, ctx);
                        cursor_position = Some((column, index - start));
                        line
                    }
                    (_, row) => self.render_row(row, selected, ctx),
                }
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
        render_scrollbar(f, area, &self.scroll);

        if let (Some((column, row)), true) = (cursor_position, focused) {
            let x = (inner.x as usize + column).min(inner.right().saturating_sub(1) as usize);
            f.set_cursor_position(Position::new(x as u16, inner.y + row as u16));
        }
    }
}

impl Scrollable for FormPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ═══════════════════════════════════════════════════════════════════════════

/// Indentation and label in front of a field's value
fn field_prefix(field: Field) -> String {
    match field {
        Field::RecipeId => "  ID      ".to_string(),
        Field::RecipeTitle => "  Title   ".to_string(),
        Field::ComponentId(_) => "    ID      ".to_string(),
        Field::ComponentTitle(_) => "    Title   ".to_string(),
        Field::Ingredient(..) => "      • ".to_string(),
        Field::Step(_, s) => format!("      {}. ", s + 1),
        Field::Note(_) => "  • ".to_string(),
    }
}

fn prefix_color(field: Field, theme: &Theme) -> ratatui::style::Color {
    match field {
        Field::Ingredient(..) | Field::Step(..) | Field::Note(_) => theme.accent,
        _ => theme.label,
    }
}

fn action_indent(command: Command) -> &'static str {
    match command {
        Command::AddIngredient(_) | Command::AddStep(_) => "      ",
        _ => "  ",
    }
}

/// Skip leading chars of `value` until `cursor_col` fits in `available` columns.
/// Returns the visible tail and the width skipped.
fn scroll_to_cursor(value: &str, cursor_col: usize, available: usize) -> (&str, usize) {
    if available == 0 || cursor_col < available {
        return (value, 0);
    }
    let mut skipped = 0;
    for (i, c) in value.char_indices() {
        if cursor_col - skipped < available {
            return (&value[i..], skipped);
        }
        skipped += c.width().unwrap_or(0);
    }
    ("", skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Editor;
    use crate::recipe::Recipe;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_cursor_navigation_skips_headings() {
        let rows = form::rows(&Recipe::sample());
        let mut panel = FormPanel::new();
        assert_eq!(panel.selected_row(&rows), Some(Row::Field(Field::RecipeId)));

        panel.move_down(&rows);
        assert_eq!(panel.selected_row(&rows), Some(Row::Field(Field::RecipeTitle)));
        panel.move_down(&rows);
        assert_eq!(
            panel.selected_row(&rows),
            Some(Row::Action(Command::AddComponent))
        );
        panel.move_down(&rows);
        assert_eq!(panel.selected_row(&rows), Some(Row::ComponentHeader(0)));

        panel.move_last(&rows);
        assert_eq!(panel.selected_row(&rows), Some(Row::Field(Field::Note(0))));
        panel.move_down(&rows);
        assert_eq!(panel.selected_row(&rows), Some(Row::Field(Field::Note(0))));

        panel.move_first(&rows);
        assert_eq!(panel.selected_row(&rows), Some(Row::Field(Field::RecipeId)));
        panel.move_up(&rows);
        assert_eq!(panel.cursor(), 1);
    }

    #[test]
    fn test_clamp_after_rows_shrink() {
        let mut editor = Editor::new(Recipe::sample());
        let mut panel = FormPanel::new();
        let rows = form::rows(editor.recipe());
        panel.move_last(&rows);

        editor.delete_note(0);
        let rows = form::rows(editor.recipe());
        panel.clamp(&rows);
        assert!(rows[panel.cursor()].is_selectable());
        assert_eq!(panel.selected_row(&rows), Some(Row::Action(Command::AddNote)));
    }

    #[test]
    fn test_select_field() {
        let rows = form::rows(&Recipe::sample());
        let mut panel = FormPanel::new();
        assert!(panel.select_field(&rows, Field::Step(1, 1)));
        assert_eq!(panel.selected_row(&rows), Some(Row::Field(Field::Step(1, 1))));
        assert!(!panel.select_field(&rows, Field::Step(1, 9)));
    }

    #[test]
    fn test_scroll_to_cursor() {
        assert_eq!(scroll_to_cursor("hello", 5, 10), ("hello", 0));
        // The cursor cell after the last char stays inside the window
        assert_eq!(scroll_to_cursor("hello world", 11, 5), ("orld", 7));
        assert_eq!(scroll_to_cursor("hello world", 8, 5), ("o world", 4));
        assert_eq!(scroll_to_cursor("abc", 3, 0), ("abc", 0));
    }

    #[test]
    fn test_scroll_to_cursor_wide_chars() {
        // Each char is two columns wide
        assert_eq!(scroll_to_cursor("鍋料理です", 10, 5), ("です", 6));
        assert_eq!(scroll_to_cursor("鍋料理です", 4, 5), ("鍋料理です", 0));
        assert_eq!(scroll_to_cursor("鍋料理です", 6, 5), ("料理です", 2));
    }

    #[test]
    fn test_render_shows_fields_and_placeholders() {
        let mut editor = Editor::new(Recipe::sample());
        editor.add_step(0);

        let theme = Theme::default();
        let mut panel = FormPanel::new();
        let backend = TestBackend::new(70, 60);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, ComponentId::Form, &editor);
                panel.render(f, f.area(), &ctx);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("pot-roast"));
        assert!(text.contains("Mix the marinade ingredients."));
        assert!(text.contains("Component 2"));
        assert!(text.contains("Add ingredient"));
        assert!(text.contains(Field::Step(0, 1).placeholder()));
        assert!(text.contains("Tastes better the next day."));
    }

    #[test]
    fn test_render_while_editing_places_cursor() {
        let editor = Editor::new(Recipe::sample());
        let theme = Theme::default();
        let mut panel = FormPanel::new();
        panel.begin_edit(Field::RecipeId, editor.text(Field::RecipeId));

        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, ComponentId::Form, &editor);
                panel.render(f, f.area(), &ctx);
            })
            .unwrap();

        // Border + "  ID      " + "pot-roast"
        let position = terminal.get_cursor_position().unwrap();
        assert_eq!(position, Position::new(1 + 10 + 9, 2));
        assert!(buffer_text(&terminal).contains("typing"));
    }
}
