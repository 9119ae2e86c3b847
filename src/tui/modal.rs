// Modal system for TUI overlays
//
// Modals handle their own input and return actions. App just holds
// Option<Modal>; input routing acts on the returned ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    Close,
    /// Close the modal and quit the editor
    Quit,
}

/// Available modal types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => ModalAction::Close,
                KeyCode::Char('q') => ModalAction::Quit,
                _ => ModalAction::None,
            },
        }
    }
}
