use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use skiff_common::{ChannelRole, PlatformError};
use tracing::debug;

use super::ids::ChannelIds;
use super::value::read_bounded;
use crate::paths::create_private_dir;

/// Per-window text slots shared with external helpers.
pub trait ChannelStore {
    /// Prepares storage for a new window.
    fn register(&mut self, window: u64) -> Result<(), PlatformError>;

    /// Drops all values of a window.
    fn unregister(&mut self, window: u64);

    fn write(&mut self, window: u64, role: ChannelRole, value: &str) -> Result<(), PlatformError>;

    /// Bounded read of a value; `None` when the slot has never been written.
    fn read(&self, window: u64, role: ChannelRole) -> Result<Option<String>, PlatformError>;
}

/// Channel store keeping each value in its own file:
/// `<root>/<window-id>/<IDENTIFIER>`.
#[derive(Debug, Clone)]
pub struct FileChannelStore {
    root: PathBuf,
    ids: ChannelIds,
}

impl FileChannelStore {
    pub fn new(root: impl Into<PathBuf>, ids: ChannelIds) -> Self {
        Self {
            root: root.into(),
            ids,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ids(&self) -> &ChannelIds {
        &self.ids
    }

    pub fn window_dir(&self, window: u64) -> PathBuf {
        self.root.join(window.to_string())
    }

    pub fn value_path(&self, window: u64, role: ChannelRole) -> PathBuf {
        self.window_dir(window).join(self.ids.get(role))
    }
}

impl ChannelStore for FileChannelStore {
    fn register(&mut self, window: u64) -> Result<(), PlatformError> {
        create_private_dir(&self.window_dir(window))
            .map_err(|e| PlatformError::ChannelError(e.to_string()))
    }

    fn unregister(&mut self, window: u64) {
        let dir = self.window_dir(window);
        if let Err(e) = fs::remove_dir_all(&dir) {
            if e.kind() != ErrorKind::NotFound {
                debug!(window, "could not remove {}: {e}", dir.display());
            }
        }
    }

    fn write(&mut self, window: u64, role: ChannelRole, value: &str) -> Result<(), PlatformError> {
        let target = self.value_path(window, role);
        let tmp = self
            .window_dir(window)
            .join(format!(".{}.tmp", self.ids.get(role)));

        fs::write(&tmp, value).map_err(|e| {
            PlatformError::ChannelError(format!("write {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &target).map_err(|e| {
            PlatformError::ChannelError(format!("rename to {}: {e}", target.display()))
        })?;
        Ok(())
    }

    fn read(&self, window: u64, role: ChannelRole) -> Result<Option<String>, PlatformError> {
        let path = self.value_path(window, role);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PlatformError::ChannelError(format!(
                    "open {}: {e}",
                    path.display()
                )))
            }
        };
        read_bounded(file)
            .map(Some)
            .map_err(|e| PlatformError::ChannelError(format!("read {}: {e}", path.display())))
    }
}
