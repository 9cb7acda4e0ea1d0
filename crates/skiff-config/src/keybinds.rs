//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use skiff_common::ConfigError;
use std::collections::HashMap;

/// Returns all keybinds as `(keys, action label)` pairs, in table order.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &'static str)> {
    config
        .bindings
        .iter()
        .map(|b| (b.keys.as_str(), b.action.label()))
        .collect()
}

/// Key strings bound more than once.
///
/// Shared combinations are legal (every matching binding fires), so this is
/// only reported for diagnostics.
pub fn shared_combinations(config: &KeybindConfig) -> Vec<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for b in &config.bindings {
        *counts.entry(b.keys.as_str()).or_default() += 1;
    }
    let mut shared: Vec<&str> = counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(k, _)| k)
        .collect();
    shared.sort_unstable();
    shared
}

/// Validate that every binding names a key.
pub fn validate_keys_present(config: &KeybindConfig) -> Result<(), ConfigError> {
    for (i, b) in config.bindings.iter().enumerate() {
        let keys = b.keys.trim();
        if keys.is_empty() || keys.ends_with('+') {
            return Err(ConfigError::ValidationError(format!(
                "keybinds.bindings[{i}] ('{}') has no key",
                b.keys
            )));
        }
    }
    Ok(())
}
