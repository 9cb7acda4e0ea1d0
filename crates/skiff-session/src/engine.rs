//! Capability surface of the external collaborators: the page view and
//! the window that hosts it.

use skiff_common::{Result, ScrollAxis, ScrollStep, Setting};

use crate::status::CookiePolicy;

/// One embedded page-rendering view.
///
/// Mutating calls return engine errors; the session logs them and carries on.
pub trait PageView {
    fn load_uri(&mut self, uri: &str) -> Result<()>;

    /// The committed URI, if any page has been committed yet.
    fn uri(&self) -> Option<String>;

    fn reload(&mut self, bypass_cache: bool) -> Result<()>;

    fn stop_loading(&mut self) -> Result<()>;

    fn zoom_level(&self) -> f64;

    fn set_zoom_level(&mut self, level: f64) -> Result<()>;

    /// Case-insensitive, wrapping text search.
    fn search(&mut self, needle: &str, forward: bool) -> Result<()>;

    /// Move `steps` entries through the back/forward list. Out of range is a no-op.
    fn go_back_or_forward(&mut self, steps: i32) -> Result<()>;

    fn scroll(&mut self, axis: ScrollAxis, step: ScrollStep) -> Result<()>;

    fn setting(&self, setting: Setting) -> bool;

    fn set_setting(&mut self, setting: Setting, enabled: bool) -> Result<()>;

    /// Install (`Some`) or remove (`None`) the user stylesheet.
    fn set_user_style(&mut self, css: Option<&str>) -> Result<()>;

    fn set_scrollbars(&mut self, visible: bool) -> Result<()>;

    fn set_cookie_policy(&mut self, policy: CookiePolicy) -> Result<()>;

    /// Whether requests go through a proxy.
    fn uses_proxy(&self) -> bool;

    /// Grant or deny the page's pending location requests.
    fn answer_geolocation(&mut self, allow: bool) -> Result<()>;

    fn show_inspector(&mut self) -> Result<()>;

    fn close_inspector(&mut self) -> Result<()>;

    fn print(&mut self) -> Result<()>;

    /// Tear the view down. Called once, right before the window is destroyed.
    fn close(&mut self);
}

/// The top-level window hosting one view.
pub trait WindowSurface {
    /// Stable id, used to name the window's control channels.
    fn id(&self) -> u64;

    fn set_title(&mut self, title: &str);

    fn set_fullscreen(&mut self, fullscreen: bool);

    fn destroy(&mut self);
}
