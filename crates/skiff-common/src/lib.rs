pub mod actions;
pub mod channel;
pub mod errors;

pub use actions::{Action, ScrollAxis, ScrollStep, Setting};
pub use channel::ChannelRole;
pub use errors::{ConfigError, PlatformError, SkiffError};

pub type Result<T> = std::result::Result<T, SkiffError>;
