//! Scrollable trait for components with scrollable content

use super::Component;
use crate::tui::scroll::ScrollState;

/// Trait for components with scrollable content
///
/// Components own their `ScrollState` and expose it here; the navigation
/// methods all delegate to it.
pub trait Scrollable: Component {
    fn scroll_state(&self) -> &ScrollState;

    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    // ─────────────────────────────────────────────────────────────
    // Navigation - default implementations delegate to ScrollState
    // ─────────────────────────────────────────────────────────────

    fn scroll_up(&mut self) {
        self.scroll_state_mut().scroll_up();
    }

    fn scroll_down(&mut self) {
        self.scroll_state_mut().scroll_down();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }

    /// Current scroll offset
    fn scroll_offset(&self) -> usize {
        self.scroll_state().offset()
    }
}
