// TOML theme format parser
//
// Each theme explicitly defines all semantic colors - no automatic mapping
// from palette slots.
//
// Format version: 1

use ratatui::style::Color;
use ratatui::widgets::BorderType;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub ui: UiColors,
    pub content: ContentColors,
}

/// Theme metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    #[allow(dead_code)] // For future schema evolution
    pub version: u32,
}

/// Base UI chrome colors
#[derive(Debug, Clone, Deserialize)]
pub struct UiColors {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub border_focused: String,
    pub title: String,
    pub status_bar: String,
    pub selection_bg: String,
    pub selection_fg: String,
    pub muted: String,
    /// Optional border style: "plain", "rounded", "double", "thick" (default: plain)
    pub border_type: Option<String>,
}

/// Colors for the editor form and the preview
#[derive(Debug, Clone, Deserialize)]
pub struct ContentColors {
    /// Section headings, recipe title in the preview
    pub heading: String,
    /// Field labels and component titles
    pub label: String,
    /// "Add ..." action rows
    pub action: String,
    /// Delete affordances, error logs
    pub danger: String,
    /// Warnings, the edit cursor row
    pub warning: String,
    /// Bullets and step numbers
    pub accent: String,
}

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color string to ratatui Color
    /// Supports:
    /// - Hex format: #RRGGBB
    /// - ANSI format: ansi:0-15, ansi:fg, ansi:bg (for terminal-native colors)
    pub fn parse_color(value: &str) -> Color {
        if let Some(ansi) = value.strip_prefix("ansi:") {
            return match ansi {
                "0" => Color::Black,
                "1" => Color::Red,
                "2" => Color::Green,
                "3" => Color::Yellow,
                "4" => Color::Blue,
                "5" => Color::Magenta,
                "6" => Color::Cyan,
                "7" => Color::White,
                "8" => Color::DarkGray,
                "9" => Color::LightRed,
                "10" => Color::LightGreen,
                "11" => Color::LightYellow,
                "12" => Color::LightBlue,
                "13" => Color::LightMagenta,
                "14" => Color::LightCyan,
                "15" => Color::Gray,
                "fg" | "bg" => Color::Reset,
                _ => Color::White,
            };
        }

        let hex = value.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Color::White;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        Color::Rgb(r, g, b)
    }

    /// Parse a border style name (unknown names fall back to plain)
    pub fn parse_border_type(value: Option<&str>) -> BorderType {
        match value.map(str::to_lowercase).as_deref() {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(TomlTheme::parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(TomlTheme::parse_color("00ff00"), Color::Rgb(0, 255, 0));
        assert_eq!(TomlTheme::parse_color("ansi:4"), Color::Blue);
        assert_eq!(TomlTheme::parse_color("ansi:bg"), Color::Reset);
        assert_eq!(TomlTheme::parse_color("#12"), Color::White);
    }

    #[test]
    fn test_parse_border_type() {
        assert_eq!(TomlTheme::parse_border_type(Some("Rounded")), BorderType::Rounded);
        assert_eq!(TomlTheme::parse_border_type(Some("zigzag")), BorderType::Plain);
        assert_eq!(TomlTheme::parse_border_type(None), BorderType::Plain);
    }

    #[test]
    fn test_parse_theme() {
        let toml = r##"
[meta]
name = "Test Theme"
version = 1

[ui]
background = "#1e1e2e"
foreground = "#cdd6f4"
border = "#45475a"
border_focused = "#f5c2e7"
title = "#cdd6f4"
status_bar = "#cdd6f4"
selection_bg = "#45475a"
selection_fg = "#cdd6f4"
muted = "#6c7086"

[content]
heading = "#89b4fa"
label = "#cdd6f4"
action = "#a6e3a1"
danger = "#f38ba8"
warning = "#f9e2af"
accent = "#fab387"
"##;

        let theme = TomlTheme::parse(toml).unwrap();
        assert_eq!(theme.meta.name, "Test Theme");
        assert_eq!(theme.ui.background, "#1e1e2e");
        assert!(theme.ui.border_type.is_none());
        assert_eq!(theme.content.accent, "#fab387");
    }
}
