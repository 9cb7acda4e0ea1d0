//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};
use skiff_common::{Action, ChannelRole, ScrollAxis, ScrollStep, Setting};

/// One shortcut: a key string and the action it fires.
///
/// Format: "Modifier+Key" where Modifier is one of: Ctrl, Shift, Alt, Super.
/// Multiple modifiers: "Ctrl+Shift+R".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindEntry {
    pub keys: String,
    pub action: Action,
}

impl KeybindEntry {
    pub fn new(keys: impl Into<String>, action: Action) -> Self {
        Self {
            keys: keys.into(),
            action,
        }
    }
}

/// Keyboard shortcuts configuration.
///
/// Bindings are kept in order. Several bindings may share a key combination;
/// all of them fire, in list order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub bindings: Vec<KeybindEntry>,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        use Action::*;

        let vscroll = |step| Scroll {
            axis: ScrollAxis::Vertical,
            step,
        };
        let hscroll = |step| Scroll {
            axis: ScrollAxis::Horizontal,
            step,
        };

        let bindings = vec![
            KeybindEntry::new("Ctrl+Shift+R", Reload { bypass_cache: true }),
            KeybindEntry::new("Ctrl+R", Reload { bypass_cache: false }),
            KeybindEntry::new("Ctrl+Shift+P", Print),
            KeybindEntry::new("Ctrl+P", Paste),
            KeybindEntry::new("Ctrl+Y", Copy),
            KeybindEntry::new("Ctrl+Shift+J", Zoom(-1)),
            KeybindEntry::new("Ctrl+Shift+K", Zoom(1)),
            KeybindEntry::new("Ctrl+Shift+Q", Zoom(0)),
            KeybindEntry::new("Ctrl+Minus", Zoom(-1)),
            KeybindEntry::new("Ctrl+Plus", Zoom(1)),
            // `+` is shifted on most layouts: the key reads `=` or `+`
            // depending on whether the toolkit strips Shift.
            KeybindEntry::new("Ctrl+Shift+Equal", Zoom(1)),
            KeybindEntry::new("Ctrl+Shift+Plus", Zoom(1)),
            KeybindEntry::new("Ctrl+L", Navigate(1)),
            KeybindEntry::new("Ctrl+H", Navigate(-1)),
            KeybindEntry::new("Ctrl+J", vscroll(ScrollStep::Lines(1))),
            KeybindEntry::new("Ctrl+K", vscroll(ScrollStep::Lines(-1))),
            KeybindEntry::new("Ctrl+B", vscroll(ScrollStep::Pages(-1))),
            KeybindEntry::new("Ctrl+Space", vscroll(ScrollStep::Pages(1))),
            KeybindEntry::new("Ctrl+I", hscroll(ScrollStep::Lines(1))),
            KeybindEntry::new("Ctrl+U", hscroll(ScrollStep::Lines(-1))),
            KeybindEntry::new("F11", ToggleFullscreen),
            KeybindEntry::new("Escape", Stop),
            KeybindEntry::new("Ctrl+Shift+O", ToggleInspector),
            KeybindEntry::new(
                "Ctrl+G",
                Prompt {
                    show: ChannelRole::CurrentUri,
                    set: ChannelRole::Navigate,
                },
            ),
            KeybindEntry::new(
                "Ctrl+F",
                Prompt {
                    show: ChannelRole::Find,
                    set: ChannelRole::Find,
                },
            ),
            KeybindEntry::new(
                "Ctrl+Slash",
                Prompt {
                    show: ChannelRole::Find,
                    set: ChannelRole::Find,
                },
            ),
            KeybindEntry::new("Ctrl+N", Find { forward: true }),
            KeybindEntry::new("Ctrl+Shift+N", Find { forward: false }),
            KeybindEntry::new("Ctrl+Shift+C", ToggleSetting(Setting::CaretBrowsing)),
            KeybindEntry::new("Ctrl+Shift+I", ToggleSetting(Setting::AutoLoadImages)),
            KeybindEntry::new("Ctrl+Shift+S", ToggleSetting(Setting::Scripts)),
            KeybindEntry::new("Ctrl+Shift+V", ToggleSetting(Setting::Plugins)),
            KeybindEntry::new("Ctrl+Shift+A", ToggleCookiePolicy),
            KeybindEntry::new("Ctrl+Shift+M", ToggleStyle),
            KeybindEntry::new("Ctrl+Shift+B", ToggleScrollbars),
            KeybindEntry::new("Ctrl+Shift+G", ToggleGeolocation),
        ];

        Self { bindings }
    }
}
