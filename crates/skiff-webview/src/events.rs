//! Engine events tagged with the window they came from.

use skiff_session::EngineEvent;

/// An [`EngineEvent`] from the view hosted in window `window`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEvent {
    pub window: u64,
    pub event: EngineEvent,
}

impl ViewEvent {
    pub fn new(window: u64, event: EngineEvent) -> Self {
        Self { window, event }
    }
}

/// Map a wry page-load notification to engine events.
///
/// wry reports no TLS details or intermediate progress; a started load
/// commits the URI at 0%, a finished one completes it.
pub fn page_load_events(state: wry::PageLoadEvent, url: String) -> Vec<EngineEvent> {
    match state {
        wry::PageLoadEvent::Started => vec![
            EngineEvent::LoadCommitted {
                uri: url,
                tls_ok: None,
            },
            EngineEvent::ProgressChanged(0),
        ],
        wry::PageLoadEvent::Finished => vec![EngineEvent::LoadFinished],
    }
}

/// An empty document title means the page has none.
pub fn title_event(title: String) -> EngineEvent {
    if title.is_empty() {
        EngineEvent::TitleChanged(None)
    } else {
        EngineEvent::TitleChanged(Some(title))
    }
}
