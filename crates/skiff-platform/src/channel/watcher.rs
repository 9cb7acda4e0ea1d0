use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use skiff_common::{ChannelRole, PlatformError};
use tracing::{debug, error, trace};

use super::ids::ChannelIds;

/// What a filesystem event means for a channel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    NewValue,
    Deleted,
    Other,
}

/// A change to one window's channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelEvent {
    pub window: u64,
    pub role: ChannelRole,
    pub transition: Transition,
}

/// Classifies a `notify` event kind.
pub fn classify(kind: &EventKind) -> Transition {
    match kind {
        EventKind::Create(_) => Transition::NewValue,
        EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any) => Transition::NewValue,
        EventKind::Modify(ModifyKind::Name(RenameMode::To | RenameMode::Both)) => {
            Transition::NewValue
        }
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => Transition::Deleted,
        EventKind::Remove(_) => Transition::Deleted,
        _ => Transition::Other,
    }
}

/// Maps a changed path back to the window and role it belongs to.
///
/// Paths look like `<root>/<window-id>/<IDENTIFIER>`; anything else
/// (temp files, foreign files) yields `None`.
pub fn locate(root: &Path, ids: &ChannelIds, path: &Path) -> Option<(u64, ChannelRole)> {
    let rel = path.strip_prefix(root).ok()?;
    let mut parts = rel.components();
    let window = parts.next()?.as_os_str().to_str()?.parse().ok()?;
    let name = parts.next()?.as_os_str().to_str()?;
    if parts.next().is_some() {
        return None;
    }
    Some((window, ids.role_of(name)?))
}

/// Translates one `notify` event into channel events.
pub fn translate(root: &Path, ids: &ChannelIds, event: &Event) -> Vec<ChannelEvent> {
    let transition = classify(&event.kind);
    if transition == Transition::Other {
        return Vec::new();
    }
    // A rename carrying both ends lists the destination last.
    let paths: &[PathBuf] = match event.kind {
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
            event.paths.last().map(std::slice::from_ref).unwrap_or(&[])
        }
        _ => &event.paths,
    };
    paths
        .iter()
        .filter_map(|p| locate(root, ids, p))
        .map(|(window, role)| ChannelEvent {
            window,
            role,
            transition,
        })
        .collect()
}

/// Watches every registered window's channel directory.
///
/// Events are produced on the `notify` thread and queued; the owner drains
/// them from its own loop with [`ChannelWatcher::drain`].
pub struct ChannelWatcher {
    root: PathBuf,
    watcher: RecommendedWatcher,
    rx: Receiver<ChannelEvent>,
}

impl ChannelWatcher {
    /// Create a watcher for channels under `root`.
    ///
    /// `wake` runs on the watcher thread after each queued event so an idle
    /// event loop can be woken.
    pub fn new<F>(root: impl Into<PathBuf>, ids: ChannelIds, wake: F) -> Result<Self, PlatformError>
    where
        F: Fn() + Send + 'static,
    {
        let root = root.into();
        let (tx, rx): (Sender<ChannelEvent>, Receiver<ChannelEvent>) = mpsc::channel();

        let cb_root = root.clone();
        let watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    for ev in translate(&cb_root, &ids, &event) {
                        trace!(window = ev.window, role = %ev.role, "channel event");
                        if tx.send(ev).is_err() {
                            return;
                        }
                        wake();
                    }
                }
                Err(e) => {
                    error!("channel watcher error: {e}");
                }
            },
            notify::Config::default(),
        )
        .map_err(|e| PlatformError::WatchError(format!("failed to create watcher: {e}")))?;

        Ok(Self { root, watcher, rx })
    }

    /// Start watching a window's channel directory.
    pub fn watch(&mut self, window: u64) -> Result<(), PlatformError> {
        let dir = self.root.join(window.to_string());
        self.watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| PlatformError::WatchError(format!("failed to watch {}: {e}", dir.display())))?;
        debug!(window, "watching channel directory");
        Ok(())
    }

    /// Stop watching a window's channel directory.
    pub fn unwatch(&mut self, window: u64) {
        let dir = self.root.join(window.to_string());
        if let Err(e) = self.watcher.unwatch(&dir) {
            debug!(window, "unwatch {}: {e}", dir.display());
        }
    }

    /// Take every queued event, dropping repeats within the batch.
    pub fn drain(&self) -> Vec<ChannelEvent> {
        coalesce(self.rx.try_iter())
    }
}

/// Keeps the first occurrence of each distinct event, in arrival order.
pub fn coalesce(events: impl IntoIterator<Item = ChannelEvent>) -> Vec<ChannelEvent> {
    let mut out: Vec<ChannelEvent> = Vec::new();
    for ev in events {
        if !out.contains(&ev) {
            out.push(ev);
        }
    }
    out
}
