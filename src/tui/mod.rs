// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - The synchronous event loop (draw, poll, handle one input)
// - Layered key dispatch into the App

pub mod app;
pub mod clipboard;
pub mod components;
pub mod form;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod text_input;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::editor::{Command, Editor};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, MouseEvent, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the editor TUI until the user quits
///
/// Sets up the terminal, runs the event loop and restores the terminal
/// before returning, also when the loop failed.
pub fn run_tui(editor: Editor, config: &Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )
    .context("Failed to setup terminal")?;

    // Release events let held keys repeat without double-firing commands
    let tracks_release = matches!(supports_keyboard_enhancement(), Ok(true));
    if tracks_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .context("Failed to enable key release events")?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(editor, config, log_buffer);
    app.set_tracks_release(tracks_release);
    tracing::info!(
        "Editing {:?} with theme {} ({} layout)",
        app.editor.recipe().id,
        app.theme.name,
        app.layout.as_str()
    );

    let tick = Duration::from_millis(config.editor.tick_ms);
    let result = run_event_loop(&mut terminal, &mut app, tick);

    // Restore terminal
    if tracks_release {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
            .context("Failed to restore keyboard mode")?;
    }
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Draws, then waits up to one tick for input. Each input is handled to
/// completion before the next draw. Ticks with no input still redraw so
/// toasts expire on time.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        if event::poll(tick).context("Failed to poll terminal events")? {
            match event::read().context("Failed to read terminal event")? {
                Event::Key(key_event) => handle_key_event(app, key_event),
                Event::Mouse(mouse_event) => handle_mouse_event(app, mouse_event),
                Event::Paste(text) => app.paste(&text),
                _ => {}
            }
        }

        if app.should_quit {
            tracing::info!("Quitting editor");
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Edit mode → Global → Focused panel
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Always process Release events to keep InputHandler in sync
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }

    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.should_quit = true;
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Text input takes every keystroke, no debounce
    if app.is_editing() {
        handle_edit_input(app, key_event);
        return;
    }

    // Layers 3-4 are debounced (press vs. repeat)
    if !app.handle_key_press(key_event.code) {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    app.dispatch_to_focused(key_event);
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Quit => {
            app.modal = None;
            app.should_quit = true;
        }
    }

    true
}

/// Keys while a field is being edited
fn handle_edit_input(app: &mut App, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Enter | KeyCode::Esc => app.finish_edit(),
        _ => {
            app.edit_key(key_event);
        }
    }
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of the focused panel
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Char('y') => app.copy_preview(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('L') => app.toggle_logs(),
        KeyCode::Char('c') => {
            app.focus = traits::ComponentId::Form;
            app.run_command(Command::AddComponent);
        }
        KeyCode::Char('n') => app.run_command(Command::AddNote),
        _ => return false,
    }
    true
}

/// Mouse wheel scrolls the focused panel
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() || app.is_editing() {
        return;
    }
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.scroll_focused(false),
        MouseEventKind::ScrollDown => app.scroll_focused(true),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Field;
    use crate::recipe::Recipe;
    use crossterm::event::KeyEventState;

    fn app() -> App {
        let mut app = App::new(
            Editor::new(Recipe::sample()),
            &Config::default(),
            LogBuffer::new(),
        );
        app.set_tracks_release(true);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
        handle_key_event(
            app,
            KeyEvent {
                code,
                modifiers: KeyModifiers::NONE,
                kind: KeyEventKind::Release,
                state: KeyEventState::NONE,
            },
        );
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_edit_title_through_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.is_editing());

        // 'q' is text while editing, not quit
        type_text(&mut app, " (quick)");
        assert!(!app.should_quit);
        assert_eq!(app.editor.recipe().title, "Pot roast (quick)");

        press(&mut app, KeyCode::Esc);
        assert!(!app.is_editing());
        assert_eq!(app.editor.recipe().title, "Pot roast (quick)");
    }

    #[test]
    fn test_global_commands() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.editor.recipe().components.len(), 3);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.editor.recipe().note_lines().len(), 2);
        assert_eq!(
            app.form.editing().map(|session| session.field),
            Some(Field::Note(1))
        );
        type_text(&mut app, "Serve hot.");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.editor.recipe().note_lines()[1], "Serve hot.");

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_modal_absorbs_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.modal.is_some());

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.editor.recipe().components.len(), 2);

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_held_delete_fires_once() {
        let mut app = app();
        let rows = app.rows();
        assert!(app.form.select_field(&rows, Field::Ingredient(1, 0)));

        let d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        handle_key_event(&mut app, d);
        handle_key_event(
            &mut app,
            KeyEvent {
                kind: KeyEventKind::Repeat,
                ..d
            },
        );
        assert_eq!(
            app.editor.recipe().components[1].ingredients,
            ["Onion", "Carrots"]
        );
    }

    #[test]
    fn test_ctrl_c_quits_even_while_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.is_editing());
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
