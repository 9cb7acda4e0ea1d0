//! Settings the session core reads, derived once from [`SkiffConfig`].

use std::path::PathBuf;

use skiff_config::SkiffConfig;

/// Immutable session settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub show_indicators: bool,
    /// Zoom level windows start at and reset to.
    pub zoom_level: f64,
    pub fullscreen: bool,
    pub cookie_policies: String,
    pub geolocation: bool,
    pub scrollbars: bool,
    pub user_agent: String,
    pub cookie_file: String,
    /// Stylesheet installed while a window's user style is on.
    pub style_file: Option<PathBuf>,
    /// Template for the prompt helper (`{show}`, `{set}`, `{winid}`).
    pub prompt_helper: Vec<String>,
    /// Template for the download helper (`{uri}`, `{referer}`,
    /// `{useragent}`, `{cookiefile}`).
    pub download_helper: Vec<String>,
    /// Command that starts a separate browser process; the target URI is
    /// appended after `--`.
    pub new_window_command: Vec<String>,
    /// Run the address prompt once on the first window.
    pub open_bar: bool,
}

impl SessionConfig {
    pub fn from_config(config: &SkiffConfig) -> Self {
        let style_file = if config.paths.style_file.is_empty() {
            None
        } else {
            Some(PathBuf::from(&config.paths.style_file))
        };
        Self {
            show_indicators: config.browser.show_indicators,
            zoom_level: config.browser.zoom_level,
            fullscreen: config.browser.fullscreen,
            cookie_policies: config.browser.cookie_policies.clone(),
            geolocation: config.browser.geolocation,
            scrollbars: config.browser.scrollbars,
            user_agent: config.browser.effective_user_agent(),
            cookie_file: config.paths.cookie_file.clone(),
            style_file,
            prompt_helper: config.helpers.prompt.clone(),
            download_helper: config.helpers.download.clone(),
            new_window_command: vec!["skiff".into()],
            open_bar: false,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_config(&SkiffConfig::default())
    }
}
