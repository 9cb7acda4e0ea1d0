//! [`WindowSurface`] over a winit window.

use std::sync::Arc;

use skiff_session::WindowSurface;
use winit::window::{Fullscreen, Window};

pub struct DesktopWindow {
    window: Arc<Window>,
    id: u64,
}

impl DesktopWindow {
    pub fn new(window: Arc<Window>) -> Self {
        let id = u64::from(window.id());
        Self { window, id }
    }

    pub fn inner(&self) -> &Window {
        &self.window
    }
}

impl WindowSurface for DesktopWindow {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.window
            .set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));
    }

    fn destroy(&mut self) {
        self.window.set_visible(false);
    }
}
