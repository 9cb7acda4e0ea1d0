use skiff_common::Action;
use skiff_config::keybinds::shared_combinations;
use skiff_config::schema::KeybindConfig;
use tracing::{debug, warn};

use crate::keymap::parse_keybind;

use super::key_combo::KeyCombo;

/// Ordered modifier+key to [`Action`] table.
///
/// Built once at startup. Several entries may share a combination; a key
/// event fires every matching entry in table order.
#[derive(Debug, Default)]
pub struct KeyDispatchTable {
    bindings: Vec<(KeyCombo, Action)>,
}

impl KeyDispatchTable {
    /// Build the table from the config keybind section.
    ///
    /// Invalid keybind strings, and bindings using modifiers that are masked
    /// away before comparison, are logged as warnings and skipped. Kiosk mode
    /// builds an empty table.
    pub fn from_config(config: &KeybindConfig, kiosk: bool) -> Self {
        if kiosk {
            debug!("kiosk mode: keyboard shortcuts disabled");
            return Self::default();
        }

        let mut bindings = Vec::with_capacity(config.bindings.len());
        for entry in &config.bindings {
            let kb = match parse_keybind(&entry.keys) {
                Ok(kb) => kb,
                Err(e) => {
                    warn!(keys = %entry.keys, "invalid keybind: {e}");
                    continue;
                }
            };
            let combo = KeyCombo::from_keybind(&kb);
            if !combo.is_bindable() {
                warn!(keys = %kb, "keybind uses Alt or Super, which never match; skipped");
                continue;
            }
            bindings.push((combo, entry.action.clone()));
        }

        for keys in shared_combinations(config) {
            debug!(keys, "shared key combination, every binding fires");
        }
        debug!(count = bindings.len(), "key dispatch table built");
        Self { bindings }
    }

    /// All actions bound to a raw key event, in table order.
    pub fn dispatch(&self, raw_mods: u16, key: &str) -> Vec<&Action> {
        let combo = KeyCombo::from_event(raw_mods, key);
        self.bindings
            .iter()
            .filter(|(c, _)| *c == combo)
            .map(|(_, a)| a)
            .collect()
    }

    /// Whether at least one binding matches a raw key event.
    pub fn matches(&self, raw_mods: u16, key: &str) -> bool {
        let combo = KeyCombo::from_event(raw_mods, key);
        self.bindings.iter().any(|(c, _)| *c == combo)
    }

    pub fn bindings(&self) -> &[(KeyCombo, Action)] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
