//! Configuration tests
//!
//! The template written by `to_toml()` is what new users see first, so it
//! must parse back into the same settings.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved.theme, config.theme);
    assert_eq!(resolved.layout, config.layout);
    assert_eq!(resolved.editor.tick_ms, config.editor.tick_ms);
    assert_eq!(resolved.logging.file_rotation, config.logging.file_rotation);
    assert_eq!(resolved.logging.file_dir, config.logging.file_dir);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.theme = "My \"Quoted\" Theme".to_string();
    config.use_theme_background = false;
    config.layout = LayoutMode::Stacked;
    config.editor.show_logs = true;
    config.editor.tick_ms = 50;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Never;
    config.logging.file_prefix = "kitchen".to_string();

    let file = Config::parse_file_config(&config.to_toml()).expect("custom config parses");
    let resolved = Config::resolve(file, no_env);

    assert_eq!(resolved.theme, "My \"Quoted\" Theme");
    assert!(!resolved.use_theme_background);
    assert_eq!(resolved.layout, LayoutMode::Stacked);
    assert!(resolved.editor.show_logs);
    assert_eq!(resolved.editor.tick_ms, 50);
    assert_eq!(resolved.logging.level, "debug");
    assert!(resolved.logging.file_enabled);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Never);
    assert_eq!(resolved.logging.file_prefix, "kitchen");
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let resolved = Config::resolve(Config::parse_file_config("").unwrap(), no_env);
    assert_eq!(resolved.theme, DEFAULT_THEME);
    assert!(resolved.use_theme_background);
    assert_eq!(resolved.layout, LayoutMode::Auto);
    assert!(!resolved.editor.show_logs);
    assert_eq!(resolved.logging.level, "info");
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
theme = "Pantry Light"
layout = "split"

[logging]
file_dir = "/tmp/from-file"
"#,
    )
    .unwrap();

    let env: HashMap<&str, &str> = [
        ("RECIPE_EDITOR_THEME", "Terminal"),
        ("RECIPE_EDITOR_LAYOUT", "stacked"),
        ("RECIPE_EDITOR_LOG_DIR", "/tmp/from-env"),
    ]
    .into_iter()
    .collect();

    let resolved = Config::resolve(file, |key| env.get(key).map(|v| v.to_string()));
    assert_eq!(resolved.theme, "Terminal");
    assert_eq!(resolved.layout, LayoutMode::Stacked);
    assert_eq!(resolved.logging.file_dir, PathBuf::from("/tmp/from-env"));
}

#[test]
fn test_file_overrides_defaults() {
    let file = Config::parse_file_config(
        r#"
theme = "Pantry Light"

[editor]
show_logs = true
"#,
    )
    .unwrap();
    let resolved = Config::resolve(file, no_env);
    assert_eq!(resolved.theme, "Pantry Light");
    assert!(resolved.editor.show_logs);
    assert_eq!(resolved.editor.tick_ms, EditorSettings::default().tick_ms);
}

// ─────────────────────────────────────────────────────────────────────────────
// Value parsing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_values_fall_back() {
    assert_eq!(LayoutMode::parse("diagonal"), LayoutMode::Auto);
    assert_eq!(LayoutMode::parse(" Split "), LayoutMode::Split);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
}

#[test]
fn test_zero_tick_is_ignored() {
    let file = Config::parse_file_config("[editor]\ntick_ms = 0\n").unwrap();
    let resolved = Config::resolve(file, no_env);
    assert_eq!(resolved.editor.tick_ms, 200);
}

#[test]
fn test_invalid_toml_is_an_error() {
    assert!(Config::parse_file_config("theme = ").is_err());
    assert!(Config::parse_file_config("use_theme_background = \"yes\"").is_err());
}

#[test]
fn test_missing_file_is_defaults() {
    let path = std::env::temp_dir().join("recipe-editor-test-does-not-exist.toml");
    let file = Config::load_file_config(&path).expect("missing file is not an error");
    assert!(file.theme.is_none());
}
