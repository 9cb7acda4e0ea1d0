use std::collections::HashMap;

use skiff_common::Setting;
use skiff_platform::KeyCombo;

/// Configuration for creating a new page view.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL; `about:blank` when absent.
    pub url: Option<String>,
    pub user_agent: Option<String>,
    /// Whether the inspector may be opened.
    pub devtools: bool,
    /// Initial engine settings.
    pub settings: HashMap<Setting, bool>,
    /// User script injected into every page.
    pub script: Option<String>,
    /// Whether requests go through a proxy (`http_proxy` set).
    pub proxy: bool,
    /// Base font size in pixels for pages that set none.
    pub default_font_size: Option<u32>,
    /// Key combinations the page forwards instead of handling.
    pub bound_keys: Vec<KeyCombo>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            user_agent: None,
            devtools: true,
            settings: HashMap::from([
                (Setting::CaretBrowsing, false),
                (Setting::AutoLoadImages, true),
                (Setting::Scripts, true),
                (Setting::Plugins, true),
            ]),
            script: None,
            proxy: false,
            default_font_size: None,
            bound_keys: Vec::new(),
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }
}
