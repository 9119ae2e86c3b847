//! Configuration for the recipe editor
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/recipe-editor/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod editor;
mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use editor::{EditorSettings, FileEditorSettings, LayoutMode};
pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name under ~/.config
pub const APP_DIR: &str = "recipe-editor";

/// Default theme name
pub const DEFAULT_THEME: &str = "Pantry Dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Pantry Dark", "Pantry Light", "Terminal", or a file in themes/
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Edit/preview pane arrangement
    pub layout: LayoutMode,

    /// Editor window settings
    pub editor: EditorSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            use_theme_background: true,
            layout: LayoutMode::default(),
            editor: EditorSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub layout: Option<String>,

    /// Optional [editor] section
    pub editor: Option<FileEditorSettings>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/recipe-editor/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// ~/.config/recipe-editor
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join(APP_DIR))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Read and parse a config file. A missing file means "all defaults".
    fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse_file_config(&contents)
                .with_context(|| format!("Invalid configuration file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Cannot read configuration file {}", path.display())),
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig> {
        toml::from_str(contents).context("Failed to parse TOML")
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge file settings with environment overrides
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = env("RECIPE_EDITOR_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        // Use theme background: file > default
        let use_theme_background = file.use_theme_background.unwrap_or(true);

        // Layout: env > file > default
        let layout = env("RECIPE_EDITOR_LAYOUT")
            .or(file.layout)
            .map(|s| LayoutMode::parse(&s))
            .unwrap_or_default();

        let editor = EditorSettings::from_file(file.editor);

        // Log directory: env > file > default
        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(dir) = env("RECIPE_EDITOR_LOG_DIR") {
            logging.file_dir = PathBuf::from(dir);
        }

        Self {
            theme,
            use_theme_background,
            layout,
            editor,
            logging,
        }
    }
}
