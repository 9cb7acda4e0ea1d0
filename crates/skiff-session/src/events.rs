//! Notifications from the page engine.

use tracing::{debug, info, warn};

use crate::client::ClientHandle;
use crate::engine::{PageView, WindowSurface};
use crate::session::Session;
use skiff_common::ChannelRole;
use skiff_platform::expand_argv;

/// What the engine reports about one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// `None` when the page has no title; the previous one is kept.
    TitleChanged(Option<String>),
    HoverChanged(Option<String>),
    /// A navigation committed. `tls_ok` is `None` when no TLS info exists.
    LoadCommitted { uri: String, tls_ok: Option<bool> },
    LoadFinished,
    /// Estimated load progress, 0..=100.
    ProgressChanged(u8),
    InspectorAttached,
    InspectorClosed,
    /// A context menu opened; `image` is the image under the pointer.
    ContextMenu { image: Option<String> },
    /// The page asked to copy the hovered link or the context-menu image.
    ContextCopy(CopyTarget),
    /// A key press the page forwarded instead of handling it.
    KeyPressed { mods: u16, key: String },
    /// The page asked for the user's location.
    GeolocationRequested,
    /// A response the engine cannot show.
    DownloadRequested { uri: String },
    /// The page asked for a window of its own.
    NewWindowRequested(Option<String>),
    CloseRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    LinkLocation,
    ImageAddress,
}

impl<W: WindowSurface, V: PageView> Session<W, V> {
    pub fn handle_engine_event(&mut self, handle: ClientHandle, event: EngineEvent) {
        let Some(id) = self.registry.get(handle).map(|c| c.id()) else {
            return;
        };

        match event {
            EngineEvent::TitleChanged(Some(title)) => {
                if let Some(c) = self.registry.get_mut(handle) {
                    c.title = Some(title);
                }
            }
            EngineEvent::TitleChanged(None) => return,
            EngineEvent::HoverChanged(link) => {
                if let Some(c) = self.registry.get_mut(handle) {
                    c.hovered_link = link;
                }
            }
            EngineEvent::LoadCommitted { uri, tls_ok } => {
                if let Some(c) = self.registry.get_mut(handle) {
                    if let Some(ok) = tls_ok {
                        c.tls_failed = !ok;
                    }
                }
                if let Err(e) = self.channels.write(id, ChannelRole::CurrentUri, &uri) {
                    warn!(window = id, "channel write failed: {e}");
                }
                if let Some(history) = &self.history {
                    if let Err(e) = history.append(&uri) {
                        warn!(window = id, "history: {e}");
                    }
                }
                debug!(window = id, uri = %uri, "load committed");
            }
            EngineEvent::LoadFinished => {
                if let Some(c) = self.registry.get_mut(handle) {
                    c.progress = 100;
                }
            }
            EngineEvent::ProgressChanged(p) => {
                if let Some(c) = self.registry.get_mut(handle) {
                    c.progress = p.min(100);
                }
            }
            EngineEvent::InspectorAttached => {
                if let Some(c) = self.registry.get_mut(handle) {
                    c.inspecting = true;
                }
                return;
            }
            EngineEvent::InspectorClosed => {
                if let Some(c) = self.registry.get_mut(handle) {
                    c.inspecting = false;
                }
                return;
            }
            EngineEvent::ContextMenu { image } => {
                if let (Some(c), Some(image)) = (self.registry.get_mut(handle), image) {
                    c.context_image = Some(image);
                }
                return;
            }
            EngineEvent::ContextCopy(target) => {
                self.copy_from_context(handle, target);
                return;
            }
            EngineEvent::KeyPressed { mods, key } => {
                self.handle_key(handle, mods, &key);
                return;
            }
            EngineEvent::GeolocationRequested => {
                let allow = self.decide_geolocation(handle);
                if let Some(c) = self.registry.get_mut(handle) {
                    if let Err(e) = c.view.answer_geolocation(allow) {
                        warn!(window = id, "geolocation answer: {e}");
                    }
                }
                return;
            }
            EngineEvent::DownloadRequested { uri } => {
                self.download(handle, &uri);
                return;
            }
            EngineEvent::NewWindowRequested(uri) => {
                debug!(window = id, uri = ?uri, "page requested a window");
                self.window_requests.push(uri);
                return;
            }
            EngineEvent::CloseRequested => {
                self.close(handle);
                return;
            }
        }
        self.refresh_title(handle);
    }

    fn decide_geolocation(&self, handle: ClientHandle) -> bool {
        let allow = self.geolocation;
        if let Some(client) = self.registry.get(handle) {
            info!(window = client.id(), allow, "geolocation request");
        }
        allow
    }

    fn copy_from_context(&mut self, handle: ClientHandle, target: CopyTarget) {
        let Some(client) = self.registry.get(handle) else {
            return;
        };
        let text = match target {
            CopyTarget::LinkLocation => client.hovered_link(),
            CopyTarget::ImageAddress => client.context_image(),
        }
        .map(str::to_string);

        let (Some(text), Some(selection)) = (text, self.selection.as_mut()) else {
            return;
        };
        if let Err(e) = selection.set_text(&text) {
            warn!("copy: {e}");
        }
    }

    fn download(&mut self, handle: ClientHandle, uri: &str) {
        let Some(client) = self.registry.get(handle) else {
            return;
        };
        let id = client.id();
        let referer = client.uri();
        let argv = expand_argv(
            &self.config.download_helper,
            &[
                ("uri", uri),
                ("referer", referer.as_str()),
                ("useragent", self.config.user_agent.as_str()),
                ("cookiefile", self.config.cookie_file.as_str()),
                ("winid", id.to_string().as_str()),
            ],
        );
        info!(window = id, uri = %uri, "download");
        if let Err(e) = self.launcher.launch(&argv) {
            warn!(window = id, "download helper: {e}");
        }
    }
}
