//! Draining of off-thread events: webview handlers and control channels.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use skiff_session::EngineEvent;

use super::core::SkiffApp;
use super::types::POLL_INTERVAL;

impl SkiffApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        pump_toolkit();

        let now = Instant::now();
        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll(event_loop);
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    pub(super) fn poll(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_webview_events();
        self.session.poll_channels();
        self.open_requested_windows(event_loop);
        self.after_session_change(event_loop);
    }

    fn poll_webview_events(&mut self) {
        for ev in self.webviews.drain_events() {
            let Some(handle) = self.session.registry().find_by_window(ev.window) else {
                continue;
            };

            if let Some(client) = self.session.client_mut(handle) {
                match &ev.event {
                    EngineEvent::LoadCommitted { uri, .. } => client.view_mut().note_committed(uri),
                    EngineEvent::LoadFinished => {
                        if let Err(e) = client.view().reapply_page_state() {
                            tracing::debug!(window = ev.window, "page state: {e}");
                        }
                    }
                    _ => {}
                }
            }

            self.session.handle_engine_event(handle, ev.event);
        }
    }

    fn open_requested_windows(&mut self, event_loop: &ActiveEventLoop) {
        for uri in self.session.take_window_requests() {
            if !self.open_window(event_loop, uri) {
                self.failed = true;
                event_loop.exit();
                return;
            }
        }
    }
}

/// Run pending GTK work; wry's Linux backend lives on the GTK main loop.
#[cfg(target_os = "linux")]
fn pump_toolkit() {
    while gtk::events_pending() {
        gtk::main_iteration_do(false);
    }
}

#[cfg(not(target_os = "linux"))]
fn pump_toolkit() {}
