//! Browser feature defaults: what every new window starts with.

use serde::{Deserialize, Serialize};

/// User agent sent when neither the config nor `SKIFF_USERAGENT` override it.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; U; Unix; en-US) AppleWebKit/537.15 ",
    "(KHTML, like Gecko) Chrome/24.0.1295.0 Safari/537.15 Skiff/",
    env!("CARGO_PKG_VERSION"),
);

/// Per-window feature defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub user_agent: String,
    /// Ignore all keyboard shortcuts and context menus.
    pub kiosk_mode: bool,
    /// Show the toggle/page indicators in the window title.
    pub show_indicators: bool,
    /// Zoom pages so a CSS pixel is 1/96 inch on the current screen.
    pub zoom_to_96dpi: bool,
    pub fullscreen: bool,
    /// Default font size in points (valid range: 6-72).
    pub default_font_size: u32,
    /// Initial zoom level (valid range: 0.1-10.0).
    pub zoom_level: f64,
    /// Cookie policy rotation. `A` accept all, `@` no third party,
    /// `a` accept nothing.
    pub cookie_policies: String,
    /// Refuse connections with untrusted certificates.
    pub strict_tls: bool,
    pub scrollbars: bool,
    pub spatial_browsing: bool,
    pub plugins: bool,
    pub scripts: bool,
    pub inspector: bool,
    pub load_images: bool,
    pub geolocation: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            kiosk_mode: false,
            show_indicators: true,
            zoom_to_96dpi: false,
            fullscreen: false,
            default_font_size: 12,
            zoom_level: 1.0,
            cookie_policies: "Aa@".into(),
            strict_tls: false,
            scrollbars: true,
            spatial_browsing: true,
            plugins: true,
            scripts: true,
            inspector: true,
            load_images: true,
            geolocation: true,
        }
    }
}

impl BrowserConfig {
    /// The user agent to send, honoring the `SKIFF_USERAGENT` override.
    pub fn effective_user_agent(&self) -> String {
        std::env::var("SKIFF_USERAGENT").unwrap_or_else(|_| self.user_agent.clone())
    }
}
