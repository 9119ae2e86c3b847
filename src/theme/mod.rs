// Theme system for the TUI
//
// - TomlTheme: on-disk format with explicit semantic color definitions
// - Theme: final resolved theme with all colors ready for use
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/recipe-editor/themes/*.toml
// 2. Bundled themes (compiled in)
// 3. Fallback to the default bundled theme

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use crate::config::{Config, DEFAULT_THEME};
use crate::logging::LogLevel;
use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::PathBuf;

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── UI Element Colors ───────────────────────────────────
    pub status_bar: Color,
    pub title: Color,
    pub border: Color,
    pub highlight: Color,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Secondary/Muted Text ────────────────────────────────
    pub muted: Color,

    // ─── Document Colors ─────────────────────────────────────
    pub heading: Color,
    pub label: Color,
    pub action: Color,
    pub danger: Color,
    pub warning: Color,
    pub accent: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,
}

impl Theme {
    /// Resolve the theme named in the config
    pub fn from_config(config: &Config) -> Self {
        Self::by_name_with_config(
            &config.theme,
            &ThemeConfig {
                use_theme_background: config.use_theme_background,
            },
        )
    }

    /// Load theme by name with custom configuration
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        if let Some(theme) = Self::load_external(name, config) {
            return theme;
        }
        if let Some(theme) = Self::load_bundled(name, config) {
            return theme;
        }

        tracing::warn!("Theme {:?} not found, using {}", name, DEFAULT_THEME);
        Self::load_bundled(DEFAULT_THEME, config).unwrap_or_else(|| Self::fallback(config))
    }

    /// Load from ~/.config/recipe-editor/themes/<name>.toml
    fn load_external(name: &str, config: &ThemeConfig) -> Option<Self> {
        let dir = Self::themes_dir()?;

        for candidate in [name.to_string(), name.replace(' ', "_")] {
            let path = dir.join(format!("{}.toml", candidate));
            let Ok(contents) = std::fs::read_to_string(&path) else {
                continue;
            };
            match TomlTheme::parse(&contents) {
                Ok(toml) => return Some(Self::from_toml(toml, config)),
                Err(e) => {
                    tracing::warn!("Ignoring theme file {}: {}", path.display(), e);
                }
            }
        }
        None
    }

    fn load_bundled(name: &str, config: &ThemeConfig) -> Option<Self> {
        bundled::BUNDLED_THEMES
            .iter()
            .find(|theme| {
                theme.name.eq_ignore_ascii_case(name)
                    || theme.name.replace(' ', "_").eq_ignore_ascii_case(name)
            })
            .and_then(|theme| TomlTheme::parse(theme.content).ok())
            .map(|toml| Self::from_toml(toml, config))
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        Config::config_dir().map(|p| p.join("themes"))
    }

    /// Create theme from native TOML format
    fn from_toml(toml: TomlTheme, config: &ThemeConfig) -> Self {
        let parse = TomlTheme::parse_color;

        let background = if config.use_theme_background {
            parse(&toml.ui.background)
        } else {
            Color::Reset
        };

        Self {
            name: toml.meta.name.clone(),

            status_bar: parse(&toml.ui.status_bar),
            title: parse(&toml.ui.title),
            border: parse(&toml.ui.border),
            highlight: parse(&toml.ui.border_focused),

            background,
            foreground: parse(&toml.ui.foreground),
            selection: parse(&toml.ui.selection_bg),
            selection_fg: parse(&toml.ui.selection_fg),
            muted: parse(&toml.ui.muted),

            heading: parse(&toml.content.heading),
            label: parse(&toml.content.label),
            action: parse(&toml.content.action),
            danger: parse(&toml.content.danger),
            warning: parse(&toml.content.warning),
            accent: parse(&toml.content.accent),

            border_type: TomlTheme::parse_border_type(toml.ui.border_type.as_deref()),
        }
    }

    /// Plain ANSI colors, used only if the bundled themes fail to parse
    fn fallback(config: &ThemeConfig) -> Self {
        Self {
            name: "Fallback".to_string(),
            status_bar: Color::DarkGray,
            title: Color::Yellow,
            border: Color::DarkGray,
            highlight: Color::Yellow,
            background: if config.use_theme_background {
                Color::Black
            } else {
                Color::Reset
            },
            foreground: Color::Reset,
            selection: Color::DarkGray,
            selection_fg: Color::White,
            muted: Color::DarkGray,
            heading: Color::LightYellow,
            label: Color::Green,
            action: Color::Cyan,
            danger: Color::Red,
            warning: Color::Yellow,
            accent: Color::Magenta,
            border_type: BorderType::Plain,
        }
    }

    /// Color for a log line of the given level
    pub fn log_level(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Error => self.danger,
            LogLevel::Warn => self.warning,
            LogLevel::Info => self.foreground,
            LogLevel::Debug | LogLevel::Trace => self.muted,
        }
    }

    /// Border color for a pane
    pub fn pane_border(&self, focused: bool) -> Color {
        if focused {
            self.highlight
        } else {
            self.border
        }
    }

    /// List all available themes (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes: Vec<String> = bundled::BUNDLED_THEMES
            .iter()
            .map(|theme| theme.name.to_string())
            .collect();

        if let Some(dir) = Self::themes_dir() {
            if let Ok(entries) = std::fs::read_dir(dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) = path.file_stem() {
                            let name = stem.to_string_lossy().replace('_', " ");
                            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&name)) {
                                themes.push(name);
                            }
                        }
                    }
                }
            }
        }

        themes
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name_with_config(DEFAULT_THEME, &ThemeConfig::default())
    }
}
