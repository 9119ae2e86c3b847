//! Interactive trait for components that handle keyboard input

use super::{Component, Scrollable};
use crossterm::event::{KeyCode, KeyEvent};

/// Result of handling a key event
///
/// Tells the App whether the component consumed the event or whether it
/// should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (modal, edit mode, global keys: ?, q, Tab, y)
///    │
///    │ if not handled
///    ▼
/// Focused Component (via Interactive trait)
/// ```
pub trait Interactive: Component {
    /// Returns `Handled::Yes` if the component consumed the event
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Keybind hints shown in the status bar while focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}

/// Default key handling for components that are both Interactive and Scrollable
pub trait ScrollableInteractive: Interactive + Scrollable {
    /// Handles: Up, Down, k, j, Home, End, PageUp, PageDown
    fn handle_scroll_keys(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            _ => return Handled::No,
        }
        Handled::Yes
    }
}

impl<T: Interactive + Scrollable> ScrollableInteractive for T {}
