//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use skiff_common::{Action, ChannelRole};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_skiff_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, skiff_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[browser]
scripts = false
zoom_level = 1.5
cookie_policies = "@a"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(!config.browser.scripts);
    assert_eq!(config.browser.zoom_level, 1.5);
    assert_eq!(config.browser.cookie_policies, "@a");
    // Defaults preserved
    assert!(config.browser.load_images);
    assert!(config.browser.show_indicators);
    assert_eq!(config.keybinds.bindings.len(), 36);
}

#[test]
fn load_keybind_table_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[[keybinds.bindings]]
keys = "Ctrl+G"
action = { Prompt = { show = "CurrentUri", set = "Navigate" } }

[[keybinds.bindings]]
keys = "Escape"
action = "Stop"

[[keybinds.bindings]]
keys = "Ctrl+Shift+R"
action = { Reload = { bypass_cache = true } }
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    let actions: Vec<_> = config.keybinds.bindings.iter().map(|b| &b.action).collect();
    assert_eq!(
        actions,
        vec![
            &Action::Prompt {
                show: ChannelRole::CurrentUri,
                set: ChannelRole::Navigate,
            },
            &Action::Stop,
            &Action::Reload { bypass_cache: true },
        ]
    );
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, skiff_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_still_returns_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[browser]
zoom_level = 42.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.browser.zoom_level, 42.0);
}

#[test]
fn default_template_parses_to_defaults() {
    let config: crate::schema::SkiffConfig =
        toml::from_str(&template::default_config_toml()).unwrap();
    assert_eq!(config.browser.cookie_policies, "Aa@");
    assert_eq!(config.keybinds.bindings.len(), 36);
}

#[test]
fn create_default_config_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    create_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Skiff Configuration"));
    assert!(load_from_path(&path).is_ok());
}

#[test]
fn default_config_path_ends_with_skiff() {
    let path = default_config_path().unwrap();
    assert_eq!(path.file_name().unwrap(), "config.toml");
    assert!(path.parent().unwrap().ends_with("skiff"));
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[browser]\nzoom_level = 2.0\n").unwrap();

    create_default_config(&path).unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.browser.zoom_level, 2.0);
}
