use std::sync::{Arc, Mutex};

use skiff_session::EngineEvent;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{page_load_events, title_event, ViewEvent};
use crate::ipc::IpcMessage;

use super::WebViewManager;

type Sink = Arc<Mutex<Vec<ViewEvent>>>;

pub(crate) fn push(events: &Sink, window: u64, event: EngineEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(ViewEvent::new(window, event));
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Sink,
        window: u64,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body();
            let Some(msg) = IpcMessage::from_json(body) else {
                warn!(window, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            };
            let kind = msg.kind.clone();
            match msg.into_engine_event() {
                Some(event) => push(&events, window, event),
                None => debug!(window, kind = %kind, "IPC message ignored"),
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Sink,
        window: u64,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |state, url| {
            debug!(window, url = %url, "page load");
            for event in page_load_events(state, url) {
                push(&events, window, event);
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Sink,
        window: u64,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            push(&events, window, title_event(title));
        })
    }

    /// Downloads go to the download helper; the engine's own is cancelled.
    pub(super) fn attach_download_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Sink,
        window: u64,
    ) -> WebViewBuilder<'a> {
        builder.with_download_started_handler(move |uri, _destination| {
            push(&events, window, EngineEvent::DownloadRequested { uri });
            false
        })
    }

    /// Pages asking for a window get one from the session instead.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Sink,
        window: u64,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |uri| {
            let target = (!uri.is_empty() && uri != "about:blank").then_some(uri);
            push(&events, window, EngineEvent::NewWindowRequested(target));
            false
        })
    }
}
