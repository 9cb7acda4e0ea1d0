//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;
use skiff_common::Action;

#[test]
fn default_config_validates() {
    let config = SkiffConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_font_size_too_small() {
    let mut config = SkiffConfig::default();
    config.browser.default_font_size = 2;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("browser.default_font_size"));
}

#[test]
fn catches_zoom_level_out_of_range() {
    let mut config = SkiffConfig::default();
    config.browser.zoom_level = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("browser.zoom_level"));

    config.browser.zoom_level = 11.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("browser.zoom_level"));
}

#[test]
fn catches_unknown_cookie_policy() {
    let mut config = SkiffConfig::default();
    config.browser.cookie_policies = "A@x".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("unknown policy 'x'"));
}

#[test]
fn catches_empty_cookie_policies() {
    let mut config = SkiffConfig::default();
    config.browser.cookie_policies = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("must not be empty"));
}

#[test]
fn catches_empty_helper_template() {
    let mut config = SkiffConfig::default();
    config.helpers.prompt.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("helpers.prompt"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = SkiffConfig::default();
    config.browser.zoom_level = 50.0;
    config.browser.default_font_size = 100;
    config.keybinds.bindings.push(KeybindEntry::new("", Action::Stop));
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("browser.zoom_level"));
    assert!(err.contains("browser.default_font_size"));
    assert!(err.contains("has no key"));
}
