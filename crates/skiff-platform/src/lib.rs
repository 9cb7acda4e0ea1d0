pub mod channel;
pub mod clipboard;
pub mod input;
pub mod keymap;
pub mod paths;
pub mod spawn;

pub use channel::{
    ChannelEvent, ChannelIds, ChannelStore, ChannelWatcher, FileChannelStore, Transition,
    CHANNEL_DIR_ENV, MAX_CHANNEL_BYTES,
};
pub use clipboard::Clipboard;
pub use input::{raw_mods, KeyCombo, KeyDispatchTable};
pub use keymap::{normalize_key_name, parse_keybind, KeyBind, Modifier};
pub use paths::{
    build_path, channel_root, config_dir, ensure_dirs, expand_home, process_channel_root,
};
pub use spawn::{expand_argv, ProcessSpawner};
