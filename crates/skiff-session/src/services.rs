//! Process-wide services the session calls into.

use skiff_common::PlatformError;
use skiff_platform::{Clipboard, ProcessSpawner};

/// Starts detached helper processes.
pub trait Launcher {
    fn launch(&self, argv: &[String]) -> Result<(), PlatformError>;
}

impl Launcher for ProcessSpawner {
    fn launch(&self, argv: &[String]) -> Result<(), PlatformError> {
        self.spawn(argv).map(|_| ())
    }
}

/// Text selection shared with other applications.
pub trait Selection {
    fn get_text(&mut self) -> Result<String, PlatformError>;
    fn set_text(&mut self, text: &str) -> Result<(), PlatformError>;
}

impl Selection for Clipboard {
    fn get_text(&mut self) -> Result<String, PlatformError> {
        Clipboard::get_text(self)
    }

    fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        Clipboard::set_text(self, text)
    }
}
