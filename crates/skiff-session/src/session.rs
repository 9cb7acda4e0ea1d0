//! The session: every open window plus the process-wide state they share.

use skiff_common::ChannelRole;
use skiff_platform::{ChannelIds, ChannelStore, ChannelWatcher, KeyDispatchTable};
use tracing::{debug, info, warn};

use crate::client::{Client, ClientHandle};
use crate::config::SessionConfig;
use crate::engine::{PageView, WindowSurface};
use crate::history::HistoryLog;
use crate::registry::{ClientRegistry, CloseOutcome};
use crate::services::{Launcher, Selection};
use crate::status::{compose_title, CookiePolicyRotation, PageState, TitleParts, ToggleState};

/// Owns the client registry and the services every window uses.
///
/// All methods run on the event-loop thread.
pub struct Session<W: WindowSurface, V: PageView> {
    pub(crate) config: SessionConfig,
    pub(crate) keys: KeyDispatchTable,
    pub(crate) ids: ChannelIds,
    pub(crate) registry: ClientRegistry<W, V>,
    pub(crate) channels: Box<dyn ChannelStore>,
    pub(crate) watcher: Option<ChannelWatcher>,
    pub(crate) launcher: Box<dyn Launcher>,
    pub(crate) selection: Option<Box<dyn Selection>>,
    pub(crate) history: Option<HistoryLog>,
    pub(crate) cookies: CookiePolicyRotation,
    pub(crate) geolocation: bool,
    pub(crate) open_bar: bool,
    pub(crate) window_requests: Vec<Option<String>>,
}

impl<W: WindowSurface, V: PageView> Session<W, V> {
    pub fn new(
        config: SessionConfig,
        keys: KeyDispatchTable,
        channels: Box<dyn ChannelStore>,
        launcher: Box<dyn Launcher>,
    ) -> Self {
        let cookies = CookiePolicyRotation::new(&config.cookie_policies);
        let geolocation = config.geolocation;
        let open_bar = config.open_bar;
        Self {
            config,
            keys,
            ids: ChannelIds::resolve(),
            registry: ClientRegistry::new(),
            channels,
            watcher: None,
            launcher,
            selection: None,
            history: None,
            cookies,
            geolocation,
            open_bar,
            window_requests: Vec::new(),
        }
    }

    pub fn with_watcher(mut self, watcher: ChannelWatcher) -> Self {
        self.watcher = Some(watcher);
        self
    }

    pub fn with_selection(mut self, selection: Box<dyn Selection>) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_history(mut self, history: HistoryLog) -> Self {
        self.history = Some(history);
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn keys(&self) -> &KeyDispatchTable {
        &self.keys
    }

    pub fn registry(&self) -> &ClientRegistry<W, V> {
        &self.registry
    }

    pub fn client(&self, handle: ClientHandle) -> Option<&Client<W, V>> {
        self.registry.get(handle)
    }

    pub fn client_mut(&mut self, handle: ClientHandle) -> Option<&mut Client<W, V>> {
        self.registry.get_mut(handle)
    }

    pub fn shutdown_signalled(&self) -> bool {
        self.registry.shutdown_signalled()
    }

    /// Whether geolocation requests are currently granted.
    pub fn geolocation_allowed(&self) -> bool {
        self.geolocation
    }

    /// Windows pages asked for since the last call, with their target URIs.
    pub fn take_window_requests(&mut self) -> Vec<Option<String>> {
        std::mem::take(&mut self.window_requests)
    }

    // =========================================================================
    // OPEN / CLOSE
    // =========================================================================

    /// Register a freshly created window and view as a new client.
    ///
    /// Applies the configured startup state, creates the window's control
    /// channels (find empty, current URI `about:blank`) and titles it.
    pub fn open(&mut self, window: W, view: V) -> ClientHandle {
        let mut client = Client::new(window, view);
        let id = client.id();
        self.apply_startup_state(&mut client);

        if let Err(e) = self.channels.register(id) {
            warn!(window = id, "channel setup failed: {e}");
        }
        for (role, value) in [(ChannelRole::Find, ""), (ChannelRole::CurrentUri, "about:blank")] {
            if let Err(e) = self.channels.write(id, role, value) {
                warn!(window = id, %role, "channel write failed: {e}");
            }
        }
        if let Some(watcher) = self.watcher.as_mut() {
            if let Err(e) = watcher.watch(id) {
                warn!(window = id, "{e}");
            }
        }

        let handle = self.registry.insert(client);
        info!(window = id, open = self.registry.len(), "window opened");

        if std::mem::take(&mut self.open_bar) {
            self.prompt(handle, ChannelRole::CurrentUri, ChannelRole::Navigate);
        }
        self.refresh_title(handle);
        handle
    }

    fn apply_startup_state(&self, client: &mut Client<W, V>) {
        let id = client.id();
        let view = &mut client.view;

        if (self.config.zoom_level - 1.0).abs() > f64::EPSILON {
            if let Err(e) = view.set_zoom_level(self.config.zoom_level) {
                warn!(window = id, "initial zoom failed: {e}");
            }
        }
        if let Err(e) = view.set_cookie_policy(self.cookies.current()) {
            warn!(window = id, "initial cookie policy failed: {e}");
        }
        if !self.config.scrollbars {
            if let Err(e) = view.set_scrollbars(false) {
                warn!(window = id, "hiding scrollbars failed: {e}");
            }
        }
        client.scrollbars = self.config.scrollbars;

        if let Some(css) = self.read_style() {
            if let Err(e) = view.set_user_style(Some(&css)) {
                warn!(window = id, "user style failed: {e}");
            }
        }
        client.user_style = true;

        if self.config.fullscreen {
            client.window.set_fullscreen(true);
            client.fullscreen = true;
        }
    }

    /// Close one client. Stale handles are ignored.
    pub fn close(&mut self, handle: ClientHandle) -> CloseOutcome {
        let Some(id) = self.registry.get(handle).map(|c| c.id()) else {
            return CloseOutcome::AlreadyClosed;
        };
        let outcome = self.registry.close(handle);
        if let Some(watcher) = self.watcher.as_mut() {
            watcher.unwatch(id);
        }
        self.channels.unregister(id);
        outcome
    }

    /// Close every client (shutdown path).
    pub fn close_all(&mut self) {
        for handle in self.registry.handles() {
            self.close(handle);
        }
    }

    // =========================================================================
    // TITLE
    // =========================================================================

    pub(crate) fn toggle_state(&self, client: &Client<W, V>) -> ToggleState {
        use skiff_common::Setting;
        ToggleState {
            cookie: self.cookies.current(),
            caret_browsing: client.view.setting(Setting::CaretBrowsing),
            geolocation: self.geolocation,
            load_images: client.view.setting(Setting::AutoLoadImages),
            scripts: client.view.setting(Setting::Scripts),
            plugins: client.view.setting(Setting::Plugins),
            user_style: client.user_style,
        }
    }

    /// The title a client should currently show.
    pub fn title_for(&self, handle: ClientHandle) -> Option<String> {
        let client = self.registry.get(handle)?;
        let toggles = self.toggle_state(client);
        let page = PageState::new(&client.uri(), client.tls_failed, client.view.uses_proxy());
        let parts = TitleParts {
            toggles: &toggles,
            page: &page,
            hovered_link: client.hovered_link(),
            progress: client.progress,
            title: client.title(),
        };
        Some(compose_title(self.config.show_indicators, &parts))
    }

    /// Recompute and apply a client's title.
    pub fn refresh_title(&mut self, handle: ClientHandle) {
        let Some(title) = self.title_for(handle) else {
            return;
        };
        if let Some(client) = self.registry.get_mut(handle) {
            client.window.set_title(&title);
        }
    }

    pub(crate) fn refresh_all_titles(&mut self) {
        for handle in self.registry.handles() {
            self.refresh_title(handle);
        }
    }

    pub(crate) fn read_style(&self) -> Option<String> {
        let path = self.config.style_file.as_ref()?;
        match std::fs::read_to_string(path) {
            Ok(css) => Some(css),
            Err(e) => {
                debug!("no user style at {}: {e}", path.display());
                None
            }
        }
    }
}
