//! On-disk artifact locations.

use serde::{Deserialize, Serialize};

/// File locations. A leading `~` expands to the home directory; relative
/// paths resolve against the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub cookie_file: String,
    /// Append-only log of committed navigations (`h: <uri>` per line).
    pub history_file: String,
    /// Optional user stylesheet injected into every page.
    pub style_file: String,
    /// Optional user script injected into every page.
    pub script_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            cookie_file: default_in_config_dir("cookies.txt"),
            history_file: default_in_config_dir("history.txt"),
            style_file: default_in_config_dir("style.css"),
            script_file: default_in_config_dir("script.js"),
        }
    }
}

fn default_in_config_dir(file: &str) -> String {
    match dirs::config_dir() {
        Some(dir) => dir.join("skiff").join(file).display().to_string(),
        None => format!("~/.skiff/{file}"),
    }
}
