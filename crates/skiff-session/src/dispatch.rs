//! Action execution: runs bound [`Action`]s against one client.

use skiff_common::{Action, ChannelRole, Result, SkiffError};
use skiff_platform::expand_argv;
use tracing::{debug, info, warn};

use crate::client::{Client, ClientHandle};
use crate::engine::{PageView, WindowSurface};
use crate::session::Session;
use crate::uri::resolve_target;

const ZOOM_STEP: f64 = 0.1;

impl<W: WindowSurface, V: PageView> Session<W, V> {
    /// Run every action bound to a key event. Returns whether any matched.
    pub fn handle_key(&mut self, handle: ClientHandle, raw_mods: u16, key: &str) -> bool {
        let actions: Vec<Action> = self
            .keys
            .dispatch(raw_mods, key)
            .into_iter()
            .cloned()
            .collect();
        for action in &actions {
            self.execute(handle, action);
        }
        !actions.is_empty()
    }

    /// Run one action. Failures are logged; the session carries on.
    pub fn execute(&mut self, handle: ClientHandle, action: &Action) {
        let Some(id) = self.registry.get(handle).map(|c| c.id()) else {
            debug!(action = action.label(), "action for closed window ignored");
            return;
        };
        debug!(window = id, action = action.label(), "dispatch");

        if let Err(e) = self.run_action(handle, action) {
            warn!(window = id, action = action.label(), "{e}");
        }
        self.refresh_title(handle);
    }

    fn run_action(&mut self, handle: ClientHandle, action: &Action) -> Result<()> {
        match action {
            Action::Reload { bypass_cache } => self.view_mut(handle)?.reload(*bypass_cache),
            Action::Stop => self.view_mut(handle)?.stop_loading(),
            Action::Navigate(steps) => self.view_mut(handle)?.go_back_or_forward(*steps),
            Action::Scroll { axis, step } => self.view_mut(handle)?.scroll(*axis, *step),
            Action::Print => self.view_mut(handle)?.print(),
            Action::Paste => {
                let selection = self
                    .selection
                    .as_mut()
                    .ok_or_else(|| SkiffError::Other("no selection available".into()))?;
                let text = selection.get_text()?;
                self.load_uri(handle, &text)
            }
            Action::Copy => {
                let text = {
                    let client = self.client_ref(handle)?;
                    client
                        .hovered_link()
                        .map(str::to_string)
                        .unwrap_or_else(|| client.uri())
                };
                let selection = self
                    .selection
                    .as_mut()
                    .ok_or_else(|| SkiffError::Other("no selection available".into()))?;
                selection.set_text(&text)?;
                Ok(())
            }
            Action::Zoom(dir) => self.zoom(handle, *dir),
            Action::ToggleFullscreen => {
                let client = self.client_mut_ref(handle)?;
                client.fullscreen = !client.fullscreen;
                let on = client.fullscreen;
                client.window.set_fullscreen(on);
                Ok(())
            }
            Action::ToggleInspector => {
                let client = self.client_mut_ref(handle)?;
                if client.inspecting {
                    client.view.close_inspector()
                } else {
                    client.view.show_inspector()
                }
            }
            Action::Find { forward } => self.find(handle, *forward),
            Action::Spawn(template) => {
                let id = self.client_ref(handle)?.id().to_string();
                let argv = expand_argv(template, &[("winid", id.as_str())]);
                self.launcher.launch(&argv)?;
                Ok(())
            }
            Action::Prompt { show, set } => {
                self.prompt(handle, *show, *set);
                Ok(())
            }
            Action::ToggleSetting(setting) => {
                let view = self.view_mut(handle)?;
                let enabled = view.setting(*setting);
                view.set_setting(*setting, !enabled)?;
                view.reload(false)
            }
            Action::ToggleCookiePolicy => {
                let policy = self.cookies.advance();
                info!(policy = %policy.as_char(), "cookie policy changed");
                for h in self.registry.handles() {
                    if let Some(client) = self.registry.get_mut(h) {
                        if let Err(e) = client.view.set_cookie_policy(policy) {
                            warn!(window = client.id(), "cookie policy: {e}");
                        }
                    }
                }
                self.refresh_all_titles();
                Ok(())
            }
            Action::ToggleStyle => {
                let css = self.read_style();
                let client = self.client_mut_ref(handle)?;
                if client.user_style {
                    client.user_style = false;
                    client.view.set_user_style(None)
                } else {
                    client.user_style = true;
                    match css {
                        Some(css) => client.view.set_user_style(Some(&css)),
                        None => Ok(()),
                    }
                }
            }
            Action::ToggleScrollbars => {
                let client = self.client_mut_ref(handle)?;
                client.scrollbars = !client.scrollbars;
                let visible = client.scrollbars;
                client.view.set_scrollbars(visible)
            }
            Action::ToggleGeolocation => {
                self.geolocation = !self.geolocation;
                self.refresh_all_titles();
                self.view_mut(handle)?.reload(false)
            }
            Action::NewWindow(uri) => {
                let target = match uri {
                    Some(uri) => Some(uri.clone()),
                    None => self.client_ref(handle)?.hovered_link().map(str::to_string),
                };
                self.spawn_browser(target.as_deref())
            }
            Action::CloseWindow => {
                self.close(handle);
                Ok(())
            }
            Action::None => Ok(()),
        }
    }

    fn zoom(&mut self, handle: ClientHandle, dir: i32) -> Result<()> {
        let reset_level = self.config.zoom_level;
        let client = self.client_mut_ref(handle)?;
        let current = client.view.zoom_level();
        match dir.signum() {
            -1 => {
                client.zoomed = true;
                client.view.set_zoom_level(current - ZOOM_STEP)
            }
            1 => {
                client.zoomed = true;
                client.view.set_zoom_level(current + ZOOM_STEP)
            }
            _ => {
                client.zoomed = false;
                client.view.set_zoom_level(reset_level)
            }
        }
    }

    /// Search for the find channel's value.
    pub(crate) fn find(&mut self, handle: ClientHandle, forward: bool) -> Result<()> {
        let id = self.client_ref(handle)?.id();
        let needle = self
            .channels
            .read(id, ChannelRole::Find)?
            .unwrap_or_default();
        if needle.is_empty() {
            return Ok(());
        }
        self.view_mut(handle)?.search(&needle, forward)
    }

    /// Resolve `raw` and show it in the client.
    ///
    /// Loading the URI already shown reloads it instead.
    pub fn load_uri(&mut self, handle: ClientHandle, raw: &str) -> Result<()> {
        let Some(target) = resolve_target(raw) else {
            return Ok(());
        };
        let id = self.client_ref(handle)?.id();

        if let Err(e) = self.channels.write(id, ChannelRole::CurrentUri, raw) {
            warn!(window = id, "channel write failed: {e}");
        }

        let client = self.client_mut_ref(handle)?;
        if target == client.uri() {
            debug!(window = id, uri = %target, "already shown, reloading");
            return client.view.reload(false);
        }

        info!(window = id, uri = %target, "navigate");
        client.view.load_uri(&target)?;
        client.progress = 0;
        client.title = Some(target);
        self.refresh_title(handle);
        Ok(())
    }

    /// Start the prompt helper reading `show` and writing `set`.
    pub(crate) fn prompt(&mut self, handle: ClientHandle, show: ChannelRole, set: ChannelRole) {
        let Some(id) = self.registry.get(handle).map(|c| c.id()) else {
            return;
        };
        let winid = id.to_string();
        let argv = expand_argv(
            &self.config.prompt_helper,
            &[
                ("show", self.ids.get(show)),
                ("set", self.ids.get(set)),
                ("winid", winid.as_str()),
            ],
        );
        if let Err(e) = self.launcher.launch(&argv) {
            warn!(window = id, "prompt helper: {e}");
        }
    }

    /// Start a separate browser process, optionally on `uri`.
    pub(crate) fn spawn_browser(&self, uri: Option<&str>) -> Result<()> {
        let mut argv = self.config.new_window_command.clone();
        if let Some(uri) = uri {
            argv.push("--".into());
            argv.push(uri.into());
        }
        self.launcher.launch(&argv)?;
        Ok(())
    }

    fn client_ref(&self, handle: ClientHandle) -> Result<&Client<W, V>> {
        self.registry
            .get(handle)
            .ok_or_else(|| SkiffError::Window("window already closed".into()))
    }

    fn client_mut_ref(&mut self, handle: ClientHandle) -> Result<&mut Client<W, V>> {
        self.registry
            .get_mut(handle)
            .ok_or_else(|| SkiffError::Window("window already closed".into()))
    }

    fn view_mut(&mut self, handle: ClientHandle) -> Result<&mut V> {
        Ok(&mut self.client_mut_ref(handle)?.view)
    }
}
