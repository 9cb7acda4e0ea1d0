//! Validation for the browser defaults and helper templates.

use crate::schema::SkiffConfig;

use super::helpers::{check_command, check_range};

/// Characters understood in `browser.cookie_policies`.
pub(crate) const COOKIE_POLICY_CHARS: &[char] = &['A', '@', 'a'];

/// Validate numeric browser constraints.
pub(crate) fn validate_browser(errors: &mut Vec<String>, config: &SkiffConfig) {
    let browser = &config.browser;
    check_range(errors, "browser.default_font_size", browser.default_font_size, 6..=72);
    check_range(errors, "browser.zoom_level", browser.zoom_level, 0.1..=10.0);
}

/// Validate the cookie policy rotation string.
pub(crate) fn validate_cookie_policies(errors: &mut Vec<String>, config: &SkiffConfig) {
    let policies = &config.browser.cookie_policies;
    if policies.is_empty() {
        errors.push("browser.cookie_policies must not be empty".into());
        return;
    }
    if let Some(bad) = policies.chars().find(|c| !COOKIE_POLICY_CHARS.contains(c)) {
        errors.push(format!(
            "browser.cookie_policies contains unknown policy '{bad}' (expected A, @ or a)"
        ));
    }
}

/// Validate that helper templates name a program.
pub(crate) fn validate_helpers(errors: &mut Vec<String>, config: &SkiffConfig) {
    check_command(errors, "helpers.prompt", &config.helpers.prompt);
    check_command(errors, "helpers.download", &config.helpers.download);
}
