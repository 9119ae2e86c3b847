//! Editor window settings: pane layout, logs panel, redraw tick

use serde::Deserialize;

/// How the edit and preview panes share the screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Side by side on wide terminals, stacked on narrow ones
    #[default]
    Auto,
    /// Always side by side
    Split,
    /// Always edit pane above preview
    Stacked,
}

impl LayoutMode {
    /// Parse layout string from config or env (unknown values fall back to auto)
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "split" => Self::Split,
            "stacked" => Self::Stacked,
            _ => Self::Auto,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Split => "split",
            Self::Stacked => "stacked",
        }
    }
}

/// Editor settings
#[derive(Debug, Clone)]
pub struct EditorSettings {
    /// Show the system logs panel below the panes
    pub show_logs: bool,

    /// Redraw interval when idle (milliseconds); also bounds toast latency
    pub tick_ms: u64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            show_logs: false,
            tick_ms: 200,
        }
    }
}

/// Editor settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileEditorSettings {
    pub show_logs: Option<bool>,
    pub tick_ms: Option<u64>,
}

impl EditorSettings {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileEditorSettings>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            show_logs: file.show_logs.unwrap_or(defaults.show_logs),
            // A zero tick would spin the draw loop
            tick_ms: file.tick_ms.filter(|ms| *ms > 0).unwrap_or(defaults.tick_ms),
        }
    }
}
