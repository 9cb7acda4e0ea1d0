use std::path::{Path, PathBuf};

use skiff_common::PlatformError;

pub(super) const APP_NAME: &str = "skiff";

/// Returns the platform-specific configuration directory for Skiff.
///
/// - Linux: `$XDG_CONFIG_HOME/skiff` (defaults to `~/.config/skiff`)
/// - macOS: `~/Library/Application Support/skiff`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the directory holding the per-window control channels.
///
/// `$XDG_RUNTIME_DIR/skiff` when a runtime directory exists, otherwise
/// `skiff-<uid>` under the system temp directory.
pub fn channel_root() -> PathBuf {
    match dirs::runtime_dir() {
        Some(dir) => dir.join(APP_NAME),
        None => std::env::temp_dir().join(format!("{APP_NAME}-{}", nix::unistd::getuid())),
    }
}

/// Channel directory of this process: `<channel_root>/<pid>`.
///
/// Window ids are only unique within one process, so every skiff process
/// keeps its windows under its own directory.
pub fn process_channel_root() -> PathBuf {
    channel_root().join(std::process::id().to_string())
}

/// Expands a leading `~` or `~/` to the home directory.
///
/// Paths without a leading tilde are returned unchanged.
pub fn expand_home(path: &str) -> Result<PathBuf, PlatformError> {
    if path == "~" || path.starts_with("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| PlatformError::PathError("could not determine home directory".into()))?;
        let rest = path.trim_start_matches('~').trim_start_matches('/');
        return Ok(if rest.is_empty() { home } else { home.join(rest) });
    }
    Ok(PathBuf::from(path))
}

/// Makes `path` absolute against the current working directory.
pub fn absolutize(path: &Path) -> Result<PathBuf, PlatformError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| PlatformError::PathError(format!("could not read working directory: {e}")))?;
    Ok(cwd.join(path))
}
