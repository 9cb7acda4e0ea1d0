//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop, and connects winit windows and wry views to the session core.

mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod types;
mod window;

pub use core::{LaunchOptions, SkiffApp};
pub use types::UserEvent;
pub use window::DesktopWindow;
