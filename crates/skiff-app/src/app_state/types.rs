use std::time::Duration;

/// How often the loop wakes to pump the toolkit and drain queued events.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Sent through the event loop proxy by off-thread producers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEvent {
    /// A channel watcher queued an event.
    ChannelActivity,
}
