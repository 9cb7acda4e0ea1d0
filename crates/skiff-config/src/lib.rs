//! Skiff configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use the built-in browser defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use skiff_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("zoom: {}", config.browser.zoom_level);
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::SkiffConfig;

use skiff_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<SkiffConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<SkiffConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
