//! Session core of the Skiff browser.
//!
//! Owns the open windows, runs key-bound actions against them, reacts to
//! control-channel writes from helper processes and keeps every window's
//! status title current. The page engine and the window system are reached
//! only through the [`PageView`] and [`WindowSurface`] traits.

pub mod client;
pub mod config;
pub mod control;
pub mod dispatch;
pub mod engine;
pub mod events;
pub mod history;
pub mod registry;
pub mod services;
pub mod session;
pub mod status;
pub mod uri;

#[cfg(test)]
pub(crate) mod test_support;


pub use client::{Client, ClientHandle};
pub use config::SessionConfig;
pub use engine::{PageView, WindowSurface};
pub use events::{CopyTarget, EngineEvent};
pub use history::HistoryLog;
pub use registry::{ClientRegistry, CloseOutcome};
pub use services::{Launcher, Selection};
pub use session::Session;
pub use status::{CookiePolicy, CookiePolicyRotation, PageState, ToggleState};
pub use uri::resolve_target;
