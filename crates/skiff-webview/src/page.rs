//! [`PageView`] over a `wry::WebView`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use skiff_common::{Result, ScrollAxis, ScrollStep, Setting, SkiffError};
use skiff_session::{CookiePolicy, EngineEvent, PageView};
use tracing::debug;
use wry::WebView;

use crate::events::ViewEvent;
use crate::script;

fn engine_err(e: wry::Error) -> SkiffError {
    SkiffError::Engine(e.to_string())
}

/// One window's page.
///
/// wry exposes no runtime switches for scripts, images, plugins, caret
/// browsing or cookie policy; those are tracked here so the title reflects
/// them, and take effect for views created afterwards.
pub struct WebPage {
    webview: Option<WebView>,
    window: u64,
    events: Arc<Mutex<Vec<ViewEvent>>>,
    uri: Option<String>,
    zoom: f64,
    settings: HashMap<Setting, bool>,
    user_style: Option<String>,
    scrollbars: bool,
    cookie_policy: CookiePolicy,
    proxy: bool,
    font_size: Option<u32>,
}

impl WebPage {
    pub(crate) fn new(
        webview: WebView,
        window: u64,
        events: Arc<Mutex<Vec<ViewEvent>>>,
        settings: HashMap<Setting, bool>,
        proxy: bool,
        font_size: Option<u32>,
    ) -> Self {
        Self {
            webview: Some(webview),
            window,
            events,
            uri: None,
            zoom: 1.0,
            settings,
            user_style: None,
            scrollbars: true,
            cookie_policy: CookiePolicy::AcceptAll,
            proxy,
            font_size,
        }
    }

    fn view(&self) -> Result<&WebView> {
        self.webview
            .as_ref()
            .ok_or_else(|| SkiffError::Engine("view already closed".into()))
    }

    fn eval(&self, js: &str) -> Result<()> {
        self.view()?.evaluate_script(js).map_err(engine_err)
    }

    fn emit(&self, event: EngineEvent) {
        if let Ok(mut evts) = self.events.lock() {
            evts.push(ViewEvent::new(self.window, event));
        }
    }

    /// Record the URI of a committed navigation.
    pub fn note_committed(&mut self, uri: &str) {
        self.uri = Some(uri.to_string());
    }

    /// Re-install per-page state after a document finished loading.
    pub fn reapply_page_state(&self) -> Result<()> {
        if let Some(px) = self.font_size {
            self.eval(&script::default_font_size(px))?;
        }
        if self.user_style.is_some() {
            self.eval(&script::user_style(self.user_style.as_deref()))?;
        }
        if !self.scrollbars {
            self.eval(&script::scrollbars(false))?;
        }
        Ok(())
    }

    /// Resize the view to fill its window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<()> {
        self.view()?.set_bounds(bounds).map_err(engine_err)
    }

    pub fn focus(&self) -> Result<()> {
        self.view()?.focus().map_err(engine_err)
    }

    pub fn cookie_policy(&self) -> CookiePolicy {
        self.cookie_policy
    }
}

impl PageView for WebPage {
    fn load_uri(&mut self, uri: &str) -> Result<()> {
        self.view()?.load_url(uri).map_err(engine_err)
    }

    fn uri(&self) -> Option<String> {
        self.uri.clone()
    }

    fn reload(&mut self, bypass_cache: bool) -> Result<()> {
        debug!(window = self.window, bypass_cache, "reload");
        self.eval(script::RELOAD)
    }

    fn stop_loading(&mut self) -> Result<()> {
        self.eval(script::STOP)
    }

    fn zoom_level(&self) -> f64 {
        self.zoom
    }

    fn set_zoom_level(&mut self, level: f64) -> Result<()> {
        self.view()?.zoom(level).map_err(engine_err)?;
        self.zoom = level;
        Ok(())
    }

    fn search(&mut self, needle: &str, forward: bool) -> Result<()> {
        self.eval(&script::find(needle, forward))
    }

    fn go_back_or_forward(&mut self, steps: i32) -> Result<()> {
        self.eval(&script::history_go(steps))
    }

    fn scroll(&mut self, axis: ScrollAxis, step: ScrollStep) -> Result<()> {
        self.eval(&script::scroll(axis, step))
    }

    fn setting(&self, setting: Setting) -> bool {
        self.settings.get(&setting).copied().unwrap_or(false)
    }

    fn set_setting(&mut self, setting: Setting, enabled: bool) -> Result<()> {
        debug!(window = self.window, ?setting, enabled, "setting tracked");
        self.settings.insert(setting, enabled);
        Ok(())
    }

    fn set_user_style(&mut self, css: Option<&str>) -> Result<()> {
        self.user_style = css.map(str::to_string);
        self.eval(&script::user_style(css))
    }

    fn set_scrollbars(&mut self, visible: bool) -> Result<()> {
        self.scrollbars = visible;
        self.eval(&script::scrollbars(visible))
    }

    fn set_cookie_policy(&mut self, policy: CookiePolicy) -> Result<()> {
        self.cookie_policy = policy;
        Ok(())
    }

    fn uses_proxy(&self) -> bool {
        self.proxy
    }

    fn answer_geolocation(&mut self, allow: bool) -> Result<()> {
        self.eval(&script::geolocation_answer(allow))
    }

    fn show_inspector(&mut self) -> Result<()> {
        self.view()?.open_devtools();
        self.emit(EngineEvent::InspectorAttached);
        Ok(())
    }

    fn close_inspector(&mut self) -> Result<()> {
        self.view()?.close_devtools();
        self.emit(EngineEvent::InspectorClosed);
        Ok(())
    }

    fn print(&mut self) -> Result<()> {
        self.view()?.print().map_err(engine_err)
    }

    fn close(&mut self) {
        if self.webview.take().is_some() {
            debug!(window = self.window, "webview destroyed");
        }
    }
}
