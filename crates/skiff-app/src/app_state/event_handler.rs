//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::platform::modifier_supplement::KeyEventExtModifierSupplement;
use winit::window::WindowId;

use skiff_platform::raw_mods;
use skiff_session::ClientHandle;

use super::core::SkiffApp;
use super::init::view_bounds;
use super::types::UserEvent;

impl ApplicationHandler<UserEvent> for SkiffApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;

        let uri = self.options.uri.take();
        if !self.open_window(event_loop, uri) {
            self.failed = true;
            event_loop.exit();
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::ChannelActivity => self.poll(event_loop),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(handle) = self.handle_for(window_id) else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                tracing::debug!("Window close requested");
                self.session.close(handle);
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_view_bounds(handle);
                }
            }

            WindowEvent::Focused(true) => {
                if let Some(client) = self.session.client(handle) {
                    if let Err(e) = client.view().focus() {
                        tracing::debug!("focus: {e}");
                    }
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(handle, event);
            }

            _ => {}
        }

        self.after_session_change(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_and_schedule(event_loop);
    }
}

impl SkiffApp {
    /// Run every binding matching a key press.
    fn handle_keyboard_input(&mut self, handle: ClientHandle, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }

        let key_name = match event.key_without_modifiers() {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };

        let mods = raw_mods(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
        );
        if !self.session.handle_key(handle, mods, &key_name) {
            tracing::trace!(key = %key_name, mods, "unbound key");
        }
    }

    fn sync_view_bounds(&self, handle: ClientHandle) {
        let Some(client) = self.session.client(handle) else {
            return;
        };
        let bounds = view_bounds(client.window().inner());
        if let Err(e) = client.view().set_bounds(bounds) {
            tracing::warn!(window = client.id(), "resize failed: {e}");
        }
    }

    /// Drop closed windows and stop once the last one is gone.
    pub(super) fn after_session_change(&mut self, event_loop: &ActiveEventLoop) {
        self.prune_windows();
        if self.session.shutdown_signalled() {
            event_loop.exit();
        }
    }
}
