use std::process::Child;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Owns spawned children until they exit.
///
/// Runs on its own thread. Finished children are collected with `try_wait`
/// so none linger as zombies; the loop ends once the spawner is gone and
/// every child has been collected.
pub(super) fn run(rx: Receiver<Child>, pending: Arc<AtomicUsize>) {
    let mut children: Vec<Child> = Vec::new();
    let mut open = true;

    while open || !children.is_empty() {
        match rx.recv_timeout(POLL_INTERVAL) {
            Ok(child) => children.push(child),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                if open {
                    debug!(remaining = children.len(), "spawner dropped");
                }
                open = false;
                if !children.is_empty() {
                    std::thread::sleep(POLL_INTERVAL);
                }
            }
        }
        children.extend(rx.try_iter());

        children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                debug!(pid = child.id(), %status, "helper exited");
                pending.fetch_sub(1, Ordering::SeqCst);
                false
            }
            Ok(None) => true,
            Err(e) => {
                warn!(pid = child.id(), "failed to poll helper: {e}");
                pending.fetch_sub(1, Ordering::SeqCst);
                false
            }
        });
    }
}

/// Collect one child on a thread of its own.
pub(super) fn wait_detached(mut child: Child, pending: Arc<AtomicUsize>) {
    let spawned = std::thread::Builder::new()
        .name("skiff-wait".into())
        .spawn(move || {
            let pid = child.id();
            match child.wait() {
                Ok(status) => debug!(pid, %status, "helper exited"),
                Err(e) => warn!(pid, "failed to wait for helper: {e}"),
            }
            pending.fetch_sub(1, Ordering::SeqCst);
        });
    if let Err(e) = spawned {
        warn!("could not start wait thread: {e}");
    }
}
