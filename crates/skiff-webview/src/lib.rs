//! `wry` adapter for the session core.
//!
//! Provides:
//! - [`WebPage`], a [`PageView`](skiff_session::PageView) over one `wry::WebView`
//! - [`WebViewManager`], which builds views and collects their engine events
//! - The page-side scripts that report hover, context menus, copies,
//!   geolocation requests and bound key presses over IPC

pub mod events;
pub mod ipc;
pub mod manager;
pub mod page;
pub mod script;

pub use events::ViewEvent;
pub use ipc::{IpcMessage, PAGE_INIT_SCRIPT};
pub use manager::{WebViewConfig, WebViewManager};
pub use page::WebPage;
