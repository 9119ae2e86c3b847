//! Core component trait
//!
//! Every panel that can be rendered implements `Component`.

use crate::editor::Editor;
use crate::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Identifier for a focusable panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Edit pane (default focus)
    #[default]
    Form,
    /// Live preview pane
    Preview,
    /// System logs panel (only when shown)
    Logs,
}

impl ComponentId {
    /// Cycle to next focusable component (Tab behavior)
    pub fn next_focus(self, logs_visible: bool) -> Self {
        match self {
            Self::Form => Self::Preview,
            Self::Preview if logs_visible => Self::Logs,
            Self::Preview | Self::Logs => Self::Form,
        }
    }

    /// Cycle to previous focusable component (Shift+Tab behavior)
    pub fn prev_focus(self, logs_visible: bool) -> Self {
        match self {
            Self::Form if logs_visible => Self::Logs,
            Self::Form => Self::Preview,
            Self::Preview => Self::Form,
            Self::Logs => Self::Preview,
        }
    }

    /// Short name for the status bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::Form => "Edit",
            Self::Preview => "Preview",
            Self::Logs => "Logs",
        }
    }
}

/// Immutable context passed to components during rendering
///
/// Components read the document through `editor`; nothing here can
/// mutate it.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Document being edited
    pub editor: &'a Editor,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId, editor: &'a Editor) -> Self {
        Self {
            theme,
            focus,
            editor,
        }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }
}

/// Base trait for all panels
///
/// Rendering takes `&mut self` so panels can record the viewport size
/// they were given into their scroll state.
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_skips_hidden_logs() {
        assert_eq!(ComponentId::Form.next_focus(false), ComponentId::Preview);
        assert_eq!(ComponentId::Preview.next_focus(false), ComponentId::Form);
        assert_eq!(ComponentId::Form.prev_focus(false), ComponentId::Preview);
    }

    #[test]
    fn test_focus_cycle_with_logs() {
        let mut focus = ComponentId::Form;
        let mut seen = Vec::new();
        for _ in 0..3 {
            focus = focus.next_focus(true);
            seen.push(focus);
        }
        assert_eq!(
            seen,
            [ComponentId::Preview, ComponentId::Logs, ComponentId::Form]
        );
        assert_eq!(ComponentId::Form.prev_focus(true), ComponentId::Logs);
        assert_eq!(ComponentId::Logs.prev_focus(true), ComponentId::Preview);
    }
}
