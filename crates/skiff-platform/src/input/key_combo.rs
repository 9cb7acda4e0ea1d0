use crate::keymap::{normalize_key_name, KeyBind, Modifier};

/// Raw modifier bits as reported with a key event.
pub const MOD_SHIFT: u16 = 1 << 0;
pub const MOD_LOCK: u16 = 1 << 1;
pub const MOD_CTRL: u16 = 1 << 2;
pub const MOD_ALT: u16 = 1 << 3;
pub const MOD_NUMLOCK: u16 = 1 << 4;
pub const MOD_SUPER: u16 = 1 << 6;

/// Modifiers that take part in binding comparison. Everything else
/// (Alt, Super, Caps Lock, Num Lock) is masked away first.
pub const BINDING_MASK: u16 = MOD_CTRL | MOD_SHIFT;

/// A modifier mask plus normalized key name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub mods: u16,
    /// Normalized key name (e.g. "g", "Escape", "F11", "minus").
    pub key: String,
}

impl KeyCombo {
    /// Build from a parsed [`KeyBind`]. Modifiers outside [`BINDING_MASK`]
    /// are kept so the caller can reject bindings that could never fire.
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mut mods = 0u16;
        for m in &kb.modifiers {
            mods |= match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            };
        }
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from a raw key event: masks the modifiers and normalizes the key.
    pub fn from_event(raw_mods: u16, key: &str) -> Self {
        Self {
            mods: raw_mods & BINDING_MASK,
            key: normalize_key_name(key),
        }
    }

    /// Whether every modifier in this combo takes part in comparison.
    pub fn is_bindable(&self) -> bool {
        self.mods & !BINDING_MASK == 0
    }
}

/// Packs modifier booleans into raw modifier bits.
///
/// Use this to convert toolkit keyboard state before dispatch.
pub fn raw_mods(ctrl: bool, alt: bool, shift: bool, super_key: bool) -> u16 {
    let mut mods = 0u16;
    if ctrl {
        mods |= MOD_CTRL;
    }
    if alt {
        mods |= MOD_ALT;
    }
    if shift {
        mods |= MOD_SHIFT;
    }
    if super_key {
        mods |= MOD_SUPER;
    }
    mods
}
