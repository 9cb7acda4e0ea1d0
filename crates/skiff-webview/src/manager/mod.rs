//! Page view creation.
//!
//! `WebViewManager` builds one `wry::WebView` per window and collects the
//! engine events of all of them for the event loop to drain.

use std::sync::{Arc, Mutex};

use crate::events::ViewEvent;

pub mod handlers;
mod lifecycle;
mod types;

pub use types::WebViewConfig;

pub struct WebViewManager {
    /// Event sink. wry handlers push here; the event loop drains it.
    pub(crate) events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events, in arrival order.
    pub fn drain_events(&self) -> Vec<ViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
