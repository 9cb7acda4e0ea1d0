use std::fs::{self, DirBuilder, OpenOptions};
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};

use skiff_common::PlatformError;

use super::resolve::{absolutize, channel_root, config_dir, expand_home, process_channel_root};

const DIR_MODE: u32 = 0o700;
const FILE_MODE: u32 = 0o600;

/// Creates the Skiff config and channel directories if they do not exist.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    create_private_dir(&config_dir()?)?;
    create_private_dir(&channel_root())?;
    create_private_dir(&process_channel_root())?;
    Ok(())
}

/// Resolves a user-supplied file path and makes sure the file exists.
///
/// Expands `~`, makes the path absolute, creates missing parent directories
/// with mode `0700`, creates the file if needed and sets its mode to `0600`.
pub fn build_path(path: &str) -> Result<PathBuf, PlatformError> {
    let path = absolutize(&expand_home(path)?)?;

    if let Some(parent) = path.parent() {
        create_private_dir(parent)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .mode(FILE_MODE)
        .open(&path)
        .map_err(|e| PlatformError::PathError(format!("could not open {}: {e}", path.display())))?;

    fs::set_permissions(&path, fs::Permissions::from_mode(FILE_MODE)).map_err(|e| {
        PlatformError::PathError(format!("could not chmod {}: {e}", path.display()))
    })?;

    Ok(path)
}

pub(crate) fn create_private_dir(dir: &Path) -> Result<(), PlatformError> {
    DirBuilder::new()
        .recursive(true)
        .mode(DIR_MODE)
        .create(dir)
        .map_err(|e| PlatformError::PathError(format!("could not create {}: {e}", dir.display())))
}
