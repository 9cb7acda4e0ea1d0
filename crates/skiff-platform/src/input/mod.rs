//! Key dispatch table: maps masked modifier+key events to [`Action`]s.
//!
//! [`Action`]: skiff_common::Action

mod key_combo;
mod table;

pub use key_combo::{
    raw_mods, KeyCombo, BINDING_MASK, MOD_ALT, MOD_CTRL, MOD_LOCK, MOD_NUMLOCK, MOD_SHIFT,
    MOD_SUPER,
};
pub use table::KeyDispatchTable;
