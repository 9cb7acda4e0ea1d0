//! IPC between the page script and Rust.
//!
//! The page posts `{"kind": ..., "payload": ...}` through
//! `window.ipc.postMessage`; the handler turns each message into an
//! [`EngineEvent`] for the session.

use serde::{Deserialize, Serialize};
use skiff_platform::raw_mods;
use skiff_session::{CopyTarget, EngineEvent};

/// A message posted by [`PAGE_INIT_SCRIPT`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse a raw `postMessage` body.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// The engine event this message reports, if it is one we know.
    pub fn into_engine_event(self) -> Option<EngineEvent> {
        match self.kind.as_str() {
            "hover" => Some(EngineEvent::HoverChanged(non_empty(&self.payload))),
            "context" => Some(EngineEvent::ContextMenu {
                image: non_empty(&self.payload["image"]),
            }),
            "close" => Some(EngineEvent::CloseRequested),
            "copy" => match self.payload.as_str() {
                Some("link") => Some(EngineEvent::ContextCopy(CopyTarget::LinkLocation)),
                Some("image") => Some(EngineEvent::ContextCopy(CopyTarget::ImageAddress)),
                _ => None,
            },
            "geolocation" => Some(EngineEvent::GeolocationRequested),
            "key" => {
                let key = non_empty(&self.payload["key"])?;
                let flag = |name: &str| self.payload[name].as_bool().unwrap_or(false);
                Some(EngineEvent::KeyPressed {
                    mods: raw_mods(flag("ctrl"), flag("alt"), flag("shift"), flag("meta")),
                    key,
                })
            }
            _ => None,
        }
    }
}

fn non_empty(value: &serde_json::Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Injected into every page before its own scripts run.
///
/// Reports the link under the pointer, the image under a context-menu
/// click and `window.close()` calls. A copy with nothing selected copies the
/// hovered link, or else the last context-menu image. Geolocation requests
/// wait for the session's answer (see [`crate::script::geolocation_answer`]).
pub const PAGE_INIT_SCRIPT: &str = r#"
(function() {
    function post(kind, payload) {
        window.ipc.postMessage(JSON.stringify({ kind: kind, payload: payload }));
    }
    var hovered = null;
    var contextImage = null;
    document.addEventListener('mouseover', function(e) {
        var a = e.target.closest ? e.target.closest('a[href]') : null;
        var href = a ? a.href : null;
        if (href !== hovered) {
            hovered = href;
            post('hover', href);
        }
    }, true);
    document.addEventListener('contextmenu', function(e) {
        var img = e.target.closest ? e.target.closest('img[src]') : null;
        contextImage = img ? img.src : null;
        post('context', { image: contextImage });
    }, true);
    document.addEventListener('copy', function(e) {
        if (String(window.getSelection()) !== '') return;
        if (hovered) {
            e.preventDefault();
            post('copy', 'link');
        } else if (contextImage) {
            e.preventDefault();
            post('copy', 'image');
        }
    }, true);
    window.close = function() { post('close', null); };

    var geo = navigator.geolocation;
    if (geo) {
        var pending = [];
        var getPosition = geo.getCurrentPosition.bind(geo);
        var watchPosition = geo.watchPosition.bind(geo);
        function ask(run, fail) {
            pending.push({ run: run, fail: fail });
            post('geolocation', null);
        }
        geo.getCurrentPosition = function(ok, err, opts) {
            ask(function() { getPosition(ok, err, opts); }, err);
        };
        geo.watchPosition = function(ok, err, opts) {
            ask(function() { watchPosition(ok, err, opts); }, err);
            return 0;
        };
        window.__skiffGeolocation = function(allow) {
            var waiting = pending;
            pending = [];
            waiting.forEach(function(r) {
                if (allow) {
                    r.run();
                } else if (r.fail) {
                    r.fail({ code: 1, message: 'User denied Geolocation' });
                }
            });
        };
    }
})();
"#;
