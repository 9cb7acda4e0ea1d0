//! One open window and its page view.

use crate::engine::{PageView, WindowSurface};

/// Generation-tagged index of a client in the registry.
///
/// A handle stays valid until its client is closed; after that it never
/// resolves again, even if the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientHandle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

/// Per-window state.
pub struct Client<W, V> {
    pub(crate) window: W,
    pub(crate) view: V,
    pub(crate) title: Option<String>,
    pub(crate) hovered_link: Option<String>,
    /// Image under the last context-menu click.
    pub(crate) context_image: Option<String>,
    pub(crate) progress: u8,
    pub(crate) zoomed: bool,
    pub(crate) fullscreen: bool,
    pub(crate) inspecting: bool,
    pub(crate) tls_failed: bool,
    pub(crate) user_style: bool,
    pub(crate) scrollbars: bool,
}

impl<W: WindowSurface, V: PageView> Client<W, V> {
    pub fn new(window: W, view: V) -> Self {
        Self {
            window,
            view,
            title: None,
            hovered_link: None,
            context_image: None,
            progress: 100,
            zoomed: false,
            fullscreen: false,
            inspecting: false,
            tls_failed: false,
            user_style: false,
            scrollbars: true,
        }
    }

    /// Window id; names the client's control channels.
    pub fn id(&self) -> u64 {
        self.window.id()
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The view's URI, `about:blank` before the first commit.
    pub fn uri(&self) -> String {
        self.view.uri().unwrap_or_else(|| "about:blank".into())
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn hovered_link(&self) -> Option<&str> {
        self.hovered_link.as_deref()
    }

    pub fn context_image(&self) -> Option<&str> {
        self.context_image.as_deref()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_inspecting(&self) -> bool {
        self.inspecting
    }

    pub fn tls_failed(&self) -> bool {
        self.tls_failed
    }

    pub fn user_style(&self) -> bool {
        self.user_style
    }

    pub fn scrollbars(&self) -> bool {
        self.scrollbars
    }
}
