//! Detached helper processes.
//!
//! Helpers run in their own session so they survive the window that
//! launched them. A dedicated reaper thread collects them when they exit.

mod argv;
mod reaper;

pub use argv::expand_argv;

use std::os::unix::process::CommandExt;
use std::process::{Child, Command};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;

use skiff_common::PlatformError;
use tracing::{debug, error, warn};

/// Launches helper processes without blocking the caller.
pub struct ProcessSpawner {
    tx: Sender<Child>,
    pending: Arc<AtomicUsize>,
    env: Vec<(String, String)>,
}

impl ProcessSpawner {
    /// Start the spawner and its reaper thread.
    pub fn new() -> Result<Self, PlatformError> {
        let (tx, rx) = mpsc::channel();
        let pending = Arc::new(AtomicUsize::new(0));
        let reaper_pending = Arc::clone(&pending);
        std::thread::Builder::new()
            .name("skiff-reaper".into())
            .spawn(move || reaper::run(rx, reaper_pending))
            .map_err(|e| PlatformError::SpawnFailed(format!("reaper thread: {e}")))?;
        Ok(Self {
            tx,
            pending,
            env: Vec::new(),
        })
    }

    /// Add an environment variable passed to every helper.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Launch `argv[0]` with the remaining arguments. Returns the child pid.
    ///
    /// The child inherits stdio, starts a new session and does not inherit
    /// the caller's other descriptors. Failures are logged and returned.
    pub fn spawn(&self, argv: &[String]) -> Result<u32, PlatformError> {
        let Some((program, args)) = argv.split_first() else {
            error!("spawn requested with an empty command");
            return Err(PlatformError::SpawnFailed("empty command".into()));
        };

        let mut cmd = Command::new(program);
        cmd.args(args);
        for (k, v) in &self.env {
            cmd.env(k, v);
        }
        // SAFETY: setsid is async-signal-safe and touches no parent state.
        unsafe {
            cmd.pre_exec(|| {
                nix::unistd::setsid()
                    .map(|_| ())
                    .map_err(std::io::Error::from)
            });
        }

        let child = cmd.spawn().map_err(|e| {
            error!(program = %program, "execvp {program} failed: {e}");
            PlatformError::SpawnFailed(format!("{program}: {e}"))
        })?;

        let pid = child.id();
        debug!(pid, program = %program, "helper spawned");
        self.pending.fetch_add(1, Ordering::SeqCst);
        if let Err(mpsc::SendError(child)) = self.tx.send(child) {
            warn!(pid, "reaper gone; waiting on a detached thread");
            reaper::wait_detached(child, Arc::clone(&self.pending));
        }
        Ok(pid)
    }

    /// Children spawned and not yet collected.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }
}
