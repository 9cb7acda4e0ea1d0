//! Window and webview creation.

use std::collections::HashMap;
use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use skiff_common::Setting;
use skiff_session::{PageView, WindowSurface};
use skiff_webview::WebViewConfig;

use super::core::SkiffApp;
use super::window::DesktopWindow;

// =============================================================================
// CONSTANTS
// =============================================================================

const DEFAULT_SIZE: LogicalSize<f64> = LogicalSize::new(800.0, 600.0);

// =============================================================================
// INITIALIZATION
// =============================================================================

impl SkiffApp {
    /// Create a window with its view, register it with the session and
    /// optionally load `uri`. Returns `false` if the window could not be built.
    pub(super) fn open_window(&mut self, event_loop: &ActiveEventLoop, uri: Option<String>) -> bool {
        let attrs = self.window_attributes();
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let surface = DesktopWindow::new(Arc::clone(&window));
        let id = surface.id();
        let page = match self
            .webviews
            .create(id, &*window, view_bounds(&window), self.webview_config())
        {
            Ok(page) => page,
            Err(e) => {
                tracing::error!(window = id, "Failed to create webview: {e}");
                return false;
            }
        };

        let handle = self.session.open(surface, page);
        self.windows.insert(window.id(), handle);

        if self.config.browser.zoom_to_96dpi {
            let scale = window.scale_factor();
            if let Some(client) = self.session.client_mut(handle) {
                if let Err(e) = client.view_mut().set_zoom_level(scale) {
                    tracing::warn!(window = id, "96 dpi zoom failed: {e}");
                }
            }
        }

        if self.options.show_xid {
            println!("{id}");
        }

        if let Some(uri) = uri {
            if let Err(e) = self.session.load_uri(handle, &uri) {
                tracing::warn!(window = id, "initial load failed: {e}");
            }
        }
        true
    }

    fn window_attributes(&self) -> WindowAttributes {
        let attrs = WindowAttributes::default()
            .with_title("skiff")
            .with_inner_size(DEFAULT_SIZE);

        #[cfg(all(unix, not(target_os = "macos")))]
        let attrs = match self.options.embed {
            Some(parent) => {
                use winit::platform::x11::WindowAttributesExtX11;
                match u32::try_from(parent) {
                    Ok(xid) => attrs.with_embed_parent_window(xid),
                    Err(_) => {
                        tracing::warn!(parent, "embed id out of range, ignoring");
                        attrs
                    }
                }
            }
            None => attrs,
        };

        attrs
    }

    fn webview_config(&self) -> WebViewConfig {
        let browser = &self.config.browser;
        WebViewConfig {
            url: None,
            user_agent: Some(self.session.config().user_agent.clone()),
            devtools: browser.inspector,
            settings: HashMap::from([
                (Setting::CaretBrowsing, false),
                (Setting::AutoLoadImages, browser.load_images),
                (Setting::Scripts, browser.scripts),
                (Setting::Plugins, browser.plugins),
            ]),
            script: self.options.script.clone(),
            proxy: std::env::var_os("http_proxy").is_some_and(|v| !v.is_empty()),
            default_font_size: Some(browser.default_font_size),
            bound_keys: self
                .session
                .keys()
                .bindings()
                .iter()
                .map(|(combo, _)| combo.clone())
                .collect(),
        }
    }
}

/// The whole client area of `window`.
pub(super) fn view_bounds(window: &Window) -> wry::Rect {
    let size = window.inner_size();
    wry::Rect {
        position: wry::dpi::PhysicalPosition::new(0, 0).into(),
        size: wry::dpi::PhysicalSize::new(size.width, size.height).into(),
    }
}
