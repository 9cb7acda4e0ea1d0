use serde::{Deserialize, Serialize};

use super::{ScrollAxis, ScrollStep, Setting};
use crate::channel::ChannelRole;

/// Every user-triggerable action in the browser.
///
/// Keybinds and helper replies resolve to an `Action`. Arguments live inside
/// the variant, so a binding can never pair an action with the wrong kind of
/// argument. The session dispatcher matches on this enum to drive a client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Navigation --
    Reload { bypass_cache: bool },
    Stop,
    /// Move through the back/forward list; negative goes back.
    Navigate(i32),

    // -- Clipboard --
    /// Load the clipboard contents as a URI.
    Paste,
    /// Copy the hovered link, or the current URI when nothing is hovered.
    Copy,

    // -- View --
    /// Zoom in (> 0), out (< 0) or back to the configured level (0).
    Zoom(i32),
    Scroll { axis: ScrollAxis, step: ScrollStep },
    ToggleFullscreen,
    ToggleInspector,
    Print,

    // -- Search --
    Find { forward: bool },

    // -- Helpers --
    /// Launch an arbitrary helper. `{winid}` in any argument is replaced with
    /// the target window's identifier.
    Spawn(Vec<String>),
    /// Launch the configured prompt helper: it shows the value of `show` and
    /// writes the user's answer into `set`.
    Prompt { show: ChannelRole, set: ChannelRole },

    // -- Toggles --
    ToggleSetting(Setting),
    ToggleCookiePolicy,
    ToggleStyle,
    ToggleScrollbars,
    ToggleGeolocation,

    // -- Window --
    NewWindow(Option<String>),
    CloseWindow,

    // -- Noop --
    None,
}
