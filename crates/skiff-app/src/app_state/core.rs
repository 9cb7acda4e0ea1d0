//! SkiffApp struct definition and constructor.

use std::collections::HashMap;
use std::time::Instant;

use winit::window::WindowId;

use skiff_config::SkiffConfig;
use skiff_session::{ClientHandle, Session};
use skiff_webview::{WebPage, WebViewManager};

use super::window::DesktopWindow;

/// Startup choices that are not part of the config file.
#[derive(Debug, Default)]
pub struct LaunchOptions {
    /// Page for the first window.
    pub uri: Option<String>,
    /// X window to embed every window into.
    pub embed: Option<u64>,
    /// Print each window id on stdout.
    pub show_xid: bool,
    /// Contents of the user script, if one was readable.
    pub script: Option<String>,
}

pub struct SkiffApp {
    pub(super) config: SkiffConfig,
    pub(super) options: LaunchOptions,
    pub(super) session: Session<DesktopWindow, WebPage>,
    pub(super) webviews: WebViewManager,
    pub(super) windows: HashMap<WindowId, ClientHandle>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) started: bool,
    /// Set when a window could not be created.
    pub(super) failed: bool,
    pub(super) last_poll: Instant,
}

impl SkiffApp {
    pub fn new(
        config: SkiffConfig,
        options: LaunchOptions,
        session: Session<DesktopWindow, WebPage>,
    ) -> Self {
        Self {
            config,
            options,
            session,
            webviews: WebViewManager::new(),
            windows: HashMap::new(),
            modifiers: winit::keyboard::ModifiersState::empty(),
            started: false,
            failed: false,
            last_poll: Instant::now(),
        }
    }

    /// Whether a window could not be created.
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub(super) fn handle_for(&self, id: WindowId) -> Option<ClientHandle> {
        self.windows.get(&id).copied()
    }

    /// Forget windows whose clients the session has closed.
    pub(super) fn prune_windows(&mut self) {
        let session = &self.session;
        self.windows
            .retain(|_, handle| session.client(*handle).is_some());
    }
}
