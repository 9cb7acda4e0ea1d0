use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::PAGE_INIT_SCRIPT;
use crate::page::WebPage;
use crate::script;

use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a page view filling `bounds` of the given window.
    ///
    /// `window_id` tags every event the view reports.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window_id: u64,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebPage, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_clipboard(true)
            .with_focused(true)
            .with_initialization_script(PAGE_INIT_SCRIPT);

        if !config.bound_keys.is_empty() {
            builder =
                builder.with_initialization_script(&script::key_listener(&config.bound_keys));
        }
        if let Some(user_script) = &config.script {
            builder = builder.with_initialization_script(user_script);
        }
        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), window_id);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), window_id);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), window_id);
        builder = Self::attach_download_handler(builder, Arc::clone(&events), window_id);
        builder = Self::attach_new_window_handler(builder, Arc::clone(&events), window_id);

        let initial_url = config.url.as_deref().unwrap_or("about:blank");
        builder = builder.with_url(initial_url);

        let webview = builder.build_as_child(window)?;
        debug!(window = window_id, url = %initial_url, "webview created");

        Ok(WebPage::new(
            webview,
            window_id,
            events,
            config.settings,
            config.proxy,
            config.default_font_size,
        ))
    }
}
