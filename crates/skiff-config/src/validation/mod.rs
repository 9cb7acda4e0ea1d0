//! Full configuration validation.
//!
//! Validates numeric ranges, cookie policy characters, and keybind strings.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod browser;
mod helpers;

#[cfg(test)]
mod tests;

use crate::keybinds;
use crate::schema::SkiffConfig;
use skiff_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SkiffConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_keys_present(&config.keybinds) {
        errors.push(e.to_string());
    }

    browser::validate_browser(&mut errors, config);
    browser::validate_cookie_policies(&mut errors, config);
    browser::validate_helpers(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
