//! In-memory collaborators for driving the session core in tests.
//!
//! Every fake shares its state through `Rc<RefCell<_>>`, so a test can keep
//! a clone and inspect it after the original has been moved into a session.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use skiff_common::{ChannelRole, PlatformError, Result, ScrollAxis, ScrollStep, Setting, SkiffError};
use skiff_platform::ChannelStore;

use crate::engine::{PageView, WindowSurface};
use crate::services::{Launcher, Selection};
use crate::status::CookiePolicy;

type Log = Rc<RefCell<Vec<String>>>;

#[derive(Debug)]
pub struct FakeViewState {
    pub uri: Option<String>,
    pub zoom: f64,
    pub settings: HashMap<Setting, bool>,
    pub user_style: Option<String>,
    pub scrollbars: bool,
    pub cookie_policy: Option<CookiePolicy>,
    pub proxy: bool,
    /// Make every mutating call fail.
    pub broken: bool,
}

impl Default for FakeViewState {
    fn default() -> Self {
        let settings = HashMap::from([
            (Setting::CaretBrowsing, false),
            (Setting::AutoLoadImages, true),
            (Setting::Scripts, true),
            (Setting::Plugins, true),
        ]);
        Self {
            uri: None,
            zoom: 1.0,
            settings,
            user_style: None,
            scrollbars: true,
            cookie_policy: None,
            proxy: false,
            broken: false,
        }
    }
}

/// Records every call as a short string in `log`.
#[derive(Debug, Clone, Default)]
pub struct FakeView {
    pub log: Log,
    pub state: Rc<RefCell<FakeViewState>>,
}

impl FakeView {
    pub fn calls(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.log.borrow_mut().push(call);
        if self.state.borrow().broken {
            return Err(SkiffError::Engine("view is broken".into()));
        }
        Ok(())
    }
}

impl PageView for FakeView {
    fn load_uri(&mut self, uri: &str) -> Result<()> {
        self.record(format!("load {uri}"))
    }

    fn uri(&self) -> Option<String> {
        self.state.borrow().uri.clone()
    }

    fn reload(&mut self, bypass_cache: bool) -> Result<()> {
        self.record(if bypass_cache { "reload bypass" } else { "reload" }.into())
    }

    fn stop_loading(&mut self) -> Result<()> {
        self.record("stop".into())
    }

    fn zoom_level(&self) -> f64 {
        self.state.borrow().zoom
    }

    fn set_zoom_level(&mut self, level: f64) -> Result<()> {
        self.state.borrow_mut().zoom = level;
        self.record(format!("zoom {level:.1}"))
    }

    fn search(&mut self, needle: &str, forward: bool) -> Result<()> {
        let dir = if forward { "forward" } else { "backward" };
        self.record(format!("search {needle} {dir}"))
    }

    fn go_back_or_forward(&mut self, steps: i32) -> Result<()> {
        self.record(format!("history {steps}"))
    }

    fn scroll(&mut self, axis: ScrollAxis, step: ScrollStep) -> Result<()> {
        self.record(format!("scroll {axis:?} {step:?}"))
    }

    fn setting(&self, setting: Setting) -> bool {
        self.state
            .borrow()
            .settings
            .get(&setting)
            .copied()
            .unwrap_or(false)
    }

    fn set_setting(&mut self, setting: Setting, enabled: bool) -> Result<()> {
        self.state.borrow_mut().settings.insert(setting, enabled);
        self.record(format!("setting {setting:?} {enabled}"))
    }

    fn set_user_style(&mut self, css: Option<&str>) -> Result<()> {
        self.state.borrow_mut().user_style = css.map(str::to_string);
        self.record(format!("style {}", if css.is_some() { "on" } else { "off" }))
    }

    fn set_scrollbars(&mut self, visible: bool) -> Result<()> {
        self.state.borrow_mut().scrollbars = visible;
        self.record(format!("scrollbars {visible}"))
    }

    fn set_cookie_policy(&mut self, policy: CookiePolicy) -> Result<()> {
        self.state.borrow_mut().cookie_policy = Some(policy);
        self.record(format!("cookies {}", policy.as_char()))
    }

    fn uses_proxy(&self) -> bool {
        self.state.borrow().proxy
    }

    fn answer_geolocation(&mut self, allow: bool) -> Result<()> {
        self.record(format!("geolocation {allow}"))
    }

    fn show_inspector(&mut self) -> Result<()> {
        self.record("inspector show".into())
    }

    fn close_inspector(&mut self) -> Result<()> {
        self.record("inspector close".into())
    }

    fn print(&mut self) -> Result<()> {
        self.record("print".into())
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("close".into());
    }
}

#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub id: u64,
    pub log: Log,
    pub titles: Rc<RefCell<Vec<String>>>,
}

impl FakeWindow {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            log: Log::default(),
            titles: Rc::default(),
        }
    }

    pub fn last_title(&self) -> Option<String> {
        self.titles.borrow().last().cloned()
    }
}

impl WindowSurface for FakeWindow {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_title(&mut self, title: &str) {
        self.titles.borrow_mut().push(title.to_string());
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.log.borrow_mut().push(format!("fullscreen {fullscreen}"));
    }

    fn destroy(&mut self) {
        self.log.borrow_mut().push("destroy".into());
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryChannelStore {
    pub values: Rc<RefCell<HashMap<(u64, ChannelRole), String>>>,
    pub registered: Rc<RefCell<Vec<u64>>>,
}

impl MemoryChannelStore {
    pub fn value(&self, window: u64, role: ChannelRole) -> Option<String> {
        self.values.borrow().get(&(window, role)).cloned()
    }

    /// Write as an external helper would.
    pub fn put(&self, window: u64, role: ChannelRole, value: &str) {
        self.values
            .borrow_mut()
            .insert((window, role), value.to_string());
    }
}

impl ChannelStore for MemoryChannelStore {
    fn register(&mut self, window: u64) -> std::result::Result<(), PlatformError> {
        self.registered.borrow_mut().push(window);
        Ok(())
    }

    fn unregister(&mut self, window: u64) {
        self.registered.borrow_mut().retain(|w| *w != window);
        self.values.borrow_mut().retain(|(w, _), _| *w != window);
    }

    fn write(
        &mut self,
        window: u64,
        role: ChannelRole,
        value: &str,
    ) -> std::result::Result<(), PlatformError> {
        self.put(window, role, value);
        Ok(())
    }

    fn read(
        &self,
        window: u64,
        role: ChannelRole,
    ) -> std::result::Result<Option<String>, PlatformError> {
        Ok(self.value(window, role))
    }
}

/// Records launched command lines instead of running them.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    pub launched: Rc<RefCell<Vec<Vec<String>>>>,
    pub fail: bool,
}

impl Launcher for RecordingLauncher {
    fn launch(&self, argv: &[String]) -> std::result::Result<(), PlatformError> {
        if self.fail {
            return Err(PlatformError::SpawnFailed(argv.join(" ")));
        }
        self.launched.borrow_mut().push(argv.to_vec());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeSelection {
    pub text: Rc<RefCell<Option<String>>>,
}

impl Selection for FakeSelection {
    fn get_text(&mut self) -> std::result::Result<String, PlatformError> {
        self.text
            .borrow()
            .clone()
            .ok_or_else(|| PlatformError::ClipboardError("selection empty".into()))
    }

    fn set_text(&mut self, text: &str) -> std::result::Result<(), PlatformError> {
        *self.text.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
