//! Configuration schema types for Skiff.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the built-in browser defaults.

mod browser;
mod helpers;
mod keybind_config;
mod paths;
mod system;

pub use browser::*;
pub use helpers::*;
pub use keybind_config::*;
pub use paths::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Skiff.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SkiffConfig {
    pub browser: BrowserConfig,
    pub paths: PathsConfig,
    pub helpers: HelpersConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}
