//! Read path of the control channels: values written by helpers.

use skiff_common::ChannelRole;
use skiff_platform::{ChannelEvent, Transition};
use tracing::{debug, trace, warn};

use crate::engine::{PageView, WindowSurface};
use crate::session::Session;

impl<W: WindowSurface, V: PageView> Session<W, V> {
    /// Drain the channel watcher, if any, and act on what it saw.
    pub fn poll_channels(&mut self) {
        let events = match self.watcher.as_ref() {
            Some(watcher) => watcher.drain(),
            None => return,
        };
        self.handle_channel_events(events);
    }

    /// Act on channel changes, in order.
    ///
    /// A new find value runs a forward search; a new navigation value is
    /// loaded. Everything else is ignored.
    pub fn handle_channel_events(&mut self, events: Vec<ChannelEvent>) {
        for event in events {
            if event.transition != Transition::NewValue {
                trace!(window = event.window, role = %event.role, "channel transition ignored");
                continue;
            }
            let Some(handle) = self.registry.find_by_window(event.window) else {
                debug!(window = event.window, "channel event for unknown window");
                continue;
            };

            match event.role {
                ChannelRole::Find => {
                    if let Err(e) = self.find(handle, true) {
                        warn!(window = event.window, "find: {e}");
                    }
                }
                ChannelRole::Navigate => {
                    let value = match self.channels.read(event.window, ChannelRole::Navigate) {
                        Ok(v) => v.unwrap_or_default(),
                        Err(e) => {
                            warn!(window = event.window, "{e}");
                            continue;
                        }
                    };
                    if let Err(e) = self.load_uri(handle, &value) {
                        warn!(window = event.window, "navigate: {e}");
                    }
                }
                ChannelRole::CurrentUri => {}
            }
        }
    }
}
