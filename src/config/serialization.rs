//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# recipe-editor configuration

# Theme: Pantry Dark, Pantry Light, Terminal
# Custom themes: ~/.config/recipe-editor/themes/<name>.toml
theme = "{theme}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Pane layout: auto, split, stacked
layout = "{layout}"

[editor]
# Show the system logs panel under the editor
show_logs = {show_logs}
# Idle redraw interval in milliseconds
tick_ms = {tick_ms}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the logs panel)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = escape(&self.theme),
            use_bg = self.use_theme_background,
            layout = self.layout.as_str(),
            show_logs = self.editor.show_logs,
            tick_ms = self.editor.tick_ms,
            log_level = escape(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = escape(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = escape(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a TOML basic string
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
