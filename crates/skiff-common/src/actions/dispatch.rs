use super::{Action, ScrollAxis, ScrollStep, Setting};

impl Action {
    /// Human-readable label, used in logs and the keybind listing.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Reload { bypass_cache: true } => "Reload (bypass cache)",
            Action::Reload { bypass_cache: false } => "Reload",
            Action::Stop => "Stop Loading",
            Action::Navigate(n) if *n < 0 => "Back",
            Action::Navigate(_) => "Forward",
            Action::Paste => "Open Clipboard",
            Action::Copy => "Copy Location",
            Action::Zoom(n) if *n > 0 => "Zoom In",
            Action::Zoom(n) if *n < 0 => "Zoom Out",
            Action::Zoom(_) => "Reset Zoom",
            Action::Scroll {
                axis: ScrollAxis::Vertical,
                step: ScrollStep::Lines(_),
            } => "Scroll",
            Action::Scroll {
                axis: ScrollAxis::Vertical,
                step: ScrollStep::Pages(_),
            } => "Scroll Page",
            Action::Scroll {
                axis: ScrollAxis::Horizontal,
                ..
            } => "Scroll Sideways",
            Action::ToggleFullscreen => "Toggle Fullscreen",
            Action::ToggleInspector => "Toggle Inspector",
            Action::Print => "Print",
            Action::Find { forward: true } => "Find Next",
            Action::Find { forward: false } => "Find Previous",
            Action::Spawn(_) => "Run Helper",
            Action::Prompt { .. } => "Prompt",
            Action::ToggleSetting(Setting::CaretBrowsing) => "Toggle Caret Browsing",
            Action::ToggleSetting(Setting::AutoLoadImages) => "Toggle Images",
            Action::ToggleSetting(Setting::Scripts) => "Toggle Scripts",
            Action::ToggleSetting(Setting::Plugins) => "Toggle Plugins",
            Action::ToggleCookiePolicy => "Cycle Cookie Policy",
            Action::ToggleStyle => "Toggle User Style",
            Action::ToggleScrollbars => "Toggle Scrollbars",
            Action::ToggleGeolocation => "Toggle Geolocation",
            Action::NewWindow(_) => "New Window",
            Action::CloseWindow => "Close Window",
            Action::None => "None",
        }
    }

    /// One representative of every action kind, for listings and tests.
    pub fn bindable_actions() -> Vec<Action> {
        use crate::channel::ChannelRole;

        vec![
            Action::Reload { bypass_cache: false },
            Action::Reload { bypass_cache: true },
            Action::Stop,
            Action::Navigate(-1),
            Action::Navigate(1),
            Action::Paste,
            Action::Copy,
            Action::Zoom(1),
            Action::Zoom(-1),
            Action::Zoom(0),
            Action::Scroll {
                axis: ScrollAxis::Vertical,
                step: ScrollStep::Lines(1),
            },
            Action::ToggleFullscreen,
            Action::ToggleInspector,
            Action::Print,
            Action::Find { forward: true },
            Action::Find { forward: false },
            Action::Prompt {
                show: ChannelRole::CurrentUri,
                set: ChannelRole::Navigate,
            },
            Action::ToggleSetting(Setting::CaretBrowsing),
            Action::ToggleCookiePolicy,
            Action::ToggleStyle,
            Action::ToggleScrollbars,
            Action::ToggleGeolocation,
            Action::NewWindow(None),
            Action::CloseWindow,
        ]
    }
}
