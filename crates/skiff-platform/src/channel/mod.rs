//! Cross-process control channels.
//!
//! Each window owns three text slots (find needle, navigation target,
//! current URI) stored as files that external helpers can read and write.
//! The watcher turns filesystem changes into [`ChannelEvent`]s.

mod ids;
mod store;
mod value;
mod watcher;


pub use ids::ChannelIds;
pub use store::{ChannelStore, FileChannelStore};
pub use value::{clean_value, read_bounded, MAX_CHANNEL_BYTES};
pub use watcher::{classify, coalesce, locate, translate, ChannelEvent, ChannelWatcher, Transition};

/// Environment variable handing the channel root to helpers.
pub const CHANNEL_DIR_ENV: &str = "SKIFF_CHANNEL_DIR";
