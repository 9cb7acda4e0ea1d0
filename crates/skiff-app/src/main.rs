mod app_state;
mod cli;
mod logging;

use std::process::ExitCode;

use winit::event_loop::EventLoop;

use skiff_config::SkiffConfig;
use skiff_platform::{
    build_path, process_channel_root, ChannelIds, ChannelWatcher, Clipboard, FileChannelStore,
    KeyDispatchTable, ProcessSpawner, CHANNEL_DIR_ENV,
};
use skiff_session::{HistoryLog, Session, SessionConfig};

use app_state::{LaunchOptions, SkiffApp, UserEvent};

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        eprintln!("\n--- skiff crashed ---");
        default_hook(info);
    }));
}

/// Resolve a configured file, creating it private if missing.
fn private_file(kind: &str, path: &str) -> Option<std::path::PathBuf> {
    if path.is_empty() {
        return None;
    }
    match build_path(path) {
        Ok(p) => Some(p),
        Err(e) => {
            tracing::warn!("{kind} file unavailable: {e}");
            None
        }
    }
}

fn main() -> ExitCode {
    install_panic_hook();

    let args = cli::parse();

    // Logging needs the config's level, so config errors are reported after.
    let loaded = match &args.config {
        Some(path) => skiff_config::load_config_from(path),
        None => skiff_config::load_config(),
    };
    let (mut config, load_error) = match loaded {
        Ok(c) => (c, None),
        Err(e) => (SkiffConfig::default(), Some(e)),
    };

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_directive().to_string());
    logging::init(&directive);

    tracing::info!("skiff v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    args.apply(&mut config);

    if let Err(e) = skiff_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    #[cfg(target_os = "linux")]
    if let Err(e) = gtk::init() {
        tracing::error!("GTK initialization failed: {e}");
        return ExitCode::FAILURE;
    }

    let cookie_file = private_file("cookie", &config.paths.cookie_file);
    let history_file = private_file("history", &config.paths.history_file);
    let style_file = private_file("style", &config.paths.style_file);
    let script = private_file("script", &config.paths.script_file)
        .and_then(|p| std::fs::read_to_string(p).ok())
        .filter(|s| !s.trim().is_empty());

    let mut session_config = SessionConfig::from_config(&config);
    if let Some(p) = &cookie_file {
        session_config.cookie_file = p.display().to_string();
    }
    session_config.style_file = style_file;
    session_config.open_bar = args.open_bar;
    let program = std::env::current_exe()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "skiff".into());
    session_config.new_window_command = std::iter::once(program)
        .chain(args.child_flags(&config))
        .collect();

    let keys = KeyDispatchTable::from_config(&config.keybinds, config.browser.kiosk_mode);
    tracing::info!("Key table loaded ({} bindings)", keys.len());

    let event_loop = match EventLoop::<UserEvent>::with_user_event().build() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };

    let root = process_channel_root();
    let ids = ChannelIds::resolve();
    let spawner = match ProcessSpawner::new() {
        Ok(s) => s.with_env(CHANNEL_DIR_ENV, root.display().to_string()),
        Err(e) => {
            tracing::error!("Failed to start process spawner: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(
        session_config,
        keys,
        Box::new(FileChannelStore::new(&root, ids.clone())),
        Box::new(spawner),
    );

    let proxy = event_loop.create_proxy();
    match ChannelWatcher::new(&root, ids, move || {
        let _ = proxy.send_event(UserEvent::ChannelActivity);
    }) {
        Ok(watcher) => session = session.with_watcher(watcher),
        Err(e) => tracing::warn!("Control channels disabled: {e}"),
    }
    match Clipboard::new() {
        Ok(clipboard) => session = session.with_selection(Box::new(clipboard)),
        Err(e) => tracing::warn!("Clipboard unavailable: {e}"),
    }
    if let Some(path) = history_file {
        session = session.with_history(HistoryLog::new(path));
    }

    let options = LaunchOptions {
        uri: args.uri.clone(),
        embed: args.embed,
        show_xid: args.show_xid,
        script,
    };
    let mut app = SkiffApp::new(config, options, session);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    app.shutdown();
    if let Err(e) = std::fs::remove_dir(&root) {
        tracing::debug!("could not remove {}: {e}", root.display());
    }

    if app.failed() {
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
