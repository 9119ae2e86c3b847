// TUI application state
//
// App owns the Editor (and through it the one recipe document) plus the
// view state of every panel. Key handlers in `tui::mod` call into App;
// App turns keys into editor operations and keeps the cursor sensible
// afterwards.

use super::clipboard;
use super::components::{FormPanel, LogsPanel, PreviewPanel, Toast};
use super::form::{self, Row};
use super::input::InputHandler;
use super::modal::Modal;
use super::text_input::InputChange;
use super::traits::{ComponentId, Handled, Interactive, Scrollable};
use crate::config::{Config, LayoutMode};
use crate::editor::{Command, Editor, Field};
use crate::logging::LogBuffer;
use crate::theme::{Theme, ThemeConfig};
use crossterm::event::{KeyCode, KeyEvent};

/// Main application state for the TUI
pub struct App {
    /// Controller owning the document
    pub editor: Editor,

    // ─── Panels ──────────────────────────────────────────────
    pub form: FormPanel,
    pub preview: PreviewPanel,
    pub logs: LogsPanel,

    /// Which panel receives navigation keys
    pub focus: ComponentId,

    // ─── Overlays ────────────────────────────────────────────
    pub modal: Option<Modal>,
    pub toast: Option<Toast>,

    // ─── Appearance ──────────────────────────────────────────
    pub theme: Theme,
    theme_config: ThemeConfig,
    pub layout: LayoutMode,
    pub show_logs: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Debounce for navigate-mode keys
    input_handler: InputHandler,
}

impl App {
    pub fn new(editor: Editor, config: &Config, log_buffer: LogBuffer) -> Self {
        Self {
            editor,
            form: FormPanel::new(),
            preview: PreviewPanel::new(),
            logs: LogsPanel::new(log_buffer),
            focus: ComponentId::Form,
            modal: None,
            toast: None,
            theme: Theme::from_config(config),
            theme_config: ThemeConfig {
                use_theme_background: config.use_theme_background,
            },
            layout: config.layout,
            show_logs: config.editor.show_logs,
            should_quit: false,
            input_handler: InputHandler::default(),
        }
    }

    /// Edit pane rows for the current document
    pub fn rows(&self) -> Vec<Row> {
        form::rows(self.editor.recipe())
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    // ─────────────────────────────────────────────────────────────
    // Input debounce
    // ─────────────────────────────────────────────────────────────

    /// Returns true if the key's action should trigger
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    pub fn set_tracks_release(&mut self, tracks_release: bool) {
        self.input_handler.set_tracks_release(tracks_release);
    }

    // ─────────────────────────────────────────────────────────────
    // Document commands
    // ─────────────────────────────────────────────────────────────

    /// Apply a structural command and move the cursor to follow it.
    ///
    /// New ingredients, steps and notes open straight into edit mode since
    /// an empty line is rarely what the user wants to keep.
    pub fn run_command(&mut self, command: Command) {
        if let Command::DeleteComponent(_) = command {
            if !self.editor.can_delete_component() {
                self.show_warning("A recipe needs at least one component");
                return;
            }
        }

        if !self.editor.apply(command) {
            return;
        }

        let rows = self.rows();
        let recipe = self.editor.recipe();
        let new_field = match command {
            Command::AddComponent => {
                let c = recipe.components.len() - 1;
                self.form.select_row(&rows, Row::ComponentHeader(c));
                None
            }
            Command::AddIngredient(c) => recipe.components.get(c).and_then(|component| {
                component
                    .ingredients
                    .len()
                    .checked_sub(1)
                    .map(|i| Field::Ingredient(c, i))
            }),
            Command::AddStep(c) => recipe.components.get(c).and_then(|component| {
                component
                    .steps
                    .len()
                    .checked_sub(1)
                    .map(|s| Field::Step(c, s))
            }),
            Command::AddNote => recipe.note_lines().len().checked_sub(1).map(Field::Note),
            _ => {
                self.form.clamp(&rows);
                None
            }
        };

        if let Some(field) = new_field {
            if self.form.select_field(&rows, field) {
                self.begin_edit(field);
            }
        }

        let message = match command {
            Command::AddComponent => format!(
                "Component {} added",
                self.editor.recipe().components.len()
            ),
            _ => capitalize(&command.describe()),
        };
        self.show_toast(message);
    }

    /// Add in the context of the selected row (`a`)
    pub fn add_in_context(&mut self) {
        let rows = self.rows();
        let command = self
            .form
            .selected_row(&rows)
            .map(|row| row.add_command())
            .unwrap_or(Command::AddComponent);
        self.run_command(command);
    }

    /// Delete whatever the selected row stands for (`d`)
    pub fn delete_selected(&mut self) {
        let rows = self.rows();
        match self.form.selected_row(&rows).and_then(|row| row.delete_command()) {
            Some(command) => self.run_command(command),
            None => self.show_warning("Nothing to delete here"),
        }
    }

    /// Edit the selected field or run the selected action (`Enter`, `i`)
    pub fn activate_selected(&mut self) {
        let rows = self.rows();
        match self.form.selected_row(&rows) {
            Some(Row::Field(field)) => self.begin_edit(field),
            Some(Row::Action(command)) => self.run_command(command),
            Some(Row::ComponentHeader(c)) => {
                let field = Field::ComponentTitle(c);
                if self.form.select_field(&rows, field) {
                    self.begin_edit(field);
                }
            }
            _ => {}
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Field editing
    // ─────────────────────────────────────────────────────────────

    pub fn begin_edit(&mut self, field: Field) {
        if !self.editor.has_field(field) {
            return;
        }
        self.focus = ComponentId::Form;
        self.form.begin_edit(field, self.editor.text(field));
    }

    pub fn finish_edit(&mut self) {
        if let Some(session) = self.form.end_edit() {
            tracing::debug!(
                "Finished editing {:?}: {:?}",
                session.field,
                self.editor.text(session.field)
            );
        }
    }

    /// Feed a key to the text input, writing the value through on change
    pub fn edit_key(&mut self, key: KeyEvent) -> Handled {
        let Some(session) = self.form.editing_mut() else {
            return Handled::No;
        };
        match session.input.handle_key(key) {
            InputChange::Edited => {
                self.editor.set_text(session.field, session.input.value());
                Handled::Yes
            }
            InputChange::Moved => Handled::Yes,
            InputChange::Ignored => Handled::No,
        }
    }

    /// Bracketed paste: only meaningful while a field is being edited
    pub fn paste(&mut self, text: &str) {
        if let Some(session) = self.form.editing_mut() {
            session.input.insert_str(text);
            self.editor.set_text(session.field, session.input.value());
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Focus and panel routing
    // ─────────────────────────────────────────────────────────────

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next_focus(self.show_logs);
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev_focus(self.show_logs);
    }

    /// Route a key to the focused panel
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focus {
            ComponentId::Form => self.handle_form_key(key),
            ComponentId::Preview => self.preview.handle_key(key),
            ComponentId::Logs => self.logs.handle_key(key),
        }
    }

    /// Navigate-mode keys of the edit pane
    fn handle_form_key(&mut self, key: KeyEvent) -> Handled {
        let rows = self.rows();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.form.move_up(&rows),
            KeyCode::Down | KeyCode::Char('j') => self.form.move_down(&rows),
            KeyCode::Home => self.form.move_first(&rows),
            KeyCode::End => self.form.move_last(&rows),
            KeyCode::PageUp => self.form.move_page(&rows, false),
            KeyCode::PageDown => self.form.move_page(&rows, true),
            KeyCode::Enter | KeyCode::Char('i') => self.activate_selected(),
            KeyCode::Char('a') => self.add_in_context(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    /// Mouse wheel scrolls the focused panel
    pub fn scroll_focused(&mut self, down: bool) {
        let rows = self.rows();
        match (self.focus, down) {
            (ComponentId::Form, true) => self.form.move_down(&rows),
            (ComponentId::Form, false) => self.form.move_up(&rows),
            (ComponentId::Preview, true) => self.preview.scroll_down(),
            (ComponentId::Preview, false) => self.preview.scroll_up(),
            (ComponentId::Logs, true) => self.logs.scroll_down(),
            (ComponentId::Logs, false) => self.logs.scroll_up(),
        }
    }

    /// Hint for the status bar
    pub fn focus_hint(&self) -> &'static str {
        match self.focus {
            ComponentId::Form => self.form.focus_hint(),
            ComponentId::Preview => self.preview.focus_hint().unwrap_or_default(),
            ComponentId::Logs => self.logs.focus_hint().unwrap_or_default(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Global actions
    // ─────────────────────────────────────────────────────────────

    /// Copy the plain-text preview to the system clipboard
    pub fn copy_preview(&mut self) {
        let text = self.editor.preview().to_plain_text();
        match clipboard::copy_to_clipboard(&text) {
            Ok(()) => self.show_toast("✓ Preview copied"),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_warning("✗ Failed to copy");
            }
        }
    }

    /// Switch to the next available theme
    pub fn cycle_theme(&mut self) {
        let themes = Theme::list_available();
        if themes.is_empty() {
            return;
        }
        let current = themes
            .iter()
            .position(|name| name.eq_ignore_ascii_case(&self.theme.name));
        let next = match current {
            Some(i) => &themes[(i + 1) % themes.len()],
            None => &themes[0],
        };
        self.theme = Theme::by_name_with_config(next, &self.theme_config);
        tracing::debug!("Theme switched to {}", self.theme.name);
        self.show_toast(format!("Theme: {}", self.theme.name));
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if !self.show_logs && self.focus == ComponentId::Logs {
            self.focus = ComponentId::Form;
        }
    }

    pub fn open_help(&mut self) {
        self.modal = Some(Modal::help());
    }

    // ─────────────────────────────────────────────────────────────
    // Toasts
    // ─────────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::warning(message));
    }

    /// Clear toast if expired (call after render)
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
