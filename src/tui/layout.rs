use crate::config::LayoutMode;
use ratatui::layout::{Constraint, Direction};

/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100-139 cols: Full terminal
    Wide,
    /// 140+ cols: Ultrawide monitor
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }
}

/// How the edit and preview panes share the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneArrangement {
    /// Edit pane left, preview right
    SideBySide,
    /// Edit pane above preview
    Stacked,
}

impl PaneArrangement {
    /// Resolve the configured layout mode against the terminal width
    pub fn resolve(mode: LayoutMode, width: u16) -> Self {
        match mode {
            LayoutMode::Split => Self::SideBySide,
            LayoutMode::Stacked => Self::Stacked,
            LayoutMode::Auto if Breakpoint::from_width(width).at_least(Breakpoint::Wide) => {
                Self::SideBySide
            }
            LayoutMode::Auto => Self::Stacked,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Self::SideBySide => Direction::Horizontal,
            Self::Stacked => Direction::Vertical,
        }
    }

    /// Edit pane gets a little more room side by side; its rows are denser
    pub fn constraints(&self) -> [Constraint; 2] {
        match self {
            Self::SideBySide => [Constraint::Percentage(55), Constraint::Percentage(45)],
            Self::Stacked => [Constraint::Percentage(60), Constraint::Percentage(40)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(139), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(140), Breakpoint::UltraWide);
    }

    #[test]
    fn at_least_comparisons() {
        let wide = Breakpoint::Wide;
        assert!(wide.at_least(Breakpoint::Compact));
        assert!(wide.at_least(Breakpoint::Normal));
        assert!(wide.at_least(Breakpoint::Wide));
        assert!(!wide.at_least(Breakpoint::UltraWide));
    }

    #[test]
    fn arrangement_follows_mode_and_width() {
        assert_eq!(
            PaneArrangement::resolve(LayoutMode::Auto, 120),
            PaneArrangement::SideBySide
        );
        assert_eq!(
            PaneArrangement::resolve(LayoutMode::Auto, 80),
            PaneArrangement::Stacked
        );
        assert_eq!(
            PaneArrangement::resolve(LayoutMode::Split, 40),
            PaneArrangement::SideBySide
        );
        assert_eq!(
            PaneArrangement::resolve(LayoutMode::Stacked, 200),
            PaneArrangement::Stacked
        );
    }
}
