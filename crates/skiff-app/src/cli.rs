use std::path::PathBuf;

use clap::Parser;
use skiff_config::SkiffConfig;

/// Skiff: a minimal web browser driven by keys and helper scripts.
#[derive(Parser, Debug, Default)]
#[command(name = "skiff", version, about)]
pub struct Args {
    /// Cookie policy rotation (`A` accept all, `@` no third party, `a` none).
    #[arg(short = 'a', long)]
    pub cookie_policies: Option<String>,

    #[arg(short = 'b', long, overrides_with = "scrollbars")]
    pub no_scrollbars: bool,
    #[arg(short = 'B', long, overrides_with = "no_scrollbars")]
    pub scrollbars: bool,

    #[arg(short = 'c', long)]
    pub cookie_file: Option<String>,

    /// Embed into the X window with this id.
    #[arg(short = 'e', long, value_parser = parse_window_id)]
    pub embed: Option<u64>,

    #[arg(short = 'f', long, overrides_with = "no_fullscreen")]
    pub fullscreen: bool,
    #[arg(short = 'F', long, overrides_with = "fullscreen")]
    pub no_fullscreen: bool,

    #[arg(short = 'g', long, overrides_with = "geolocation")]
    pub no_geolocation: bool,
    #[arg(short = 'G', long, overrides_with = "no_geolocation")]
    pub geolocation: bool,

    #[arg(short = 'i', long, overrides_with = "images")]
    pub no_images: bool,
    #[arg(short = 'I', long, overrides_with = "no_images")]
    pub images: bool,

    /// Ignore keyboard shortcuts.
    #[arg(short = 'k', long, overrides_with = "no_kiosk")]
    pub kiosk: bool,
    #[arg(short = 'K', long, overrides_with = "kiosk")]
    pub no_kiosk: bool,

    #[arg(short = 'n', long, overrides_with = "inspector")]
    pub no_inspector: bool,
    #[arg(short = 'N', long, overrides_with = "no_inspector")]
    pub inspector: bool,

    /// Open the address prompt on startup.
    #[arg(short = 'o', long)]
    pub open_bar: bool,

    #[arg(short = 'p', long, overrides_with = "plugins")]
    pub no_plugins: bool,
    #[arg(short = 'P', long, overrides_with = "no_plugins")]
    pub plugins: bool,

    /// User script injected into every page.
    #[arg(short = 'r', long)]
    pub script_file: Option<String>,

    #[arg(short = 's', long, overrides_with = "scripts")]
    pub no_scripts: bool,
    #[arg(short = 'S', long, overrides_with = "no_scripts")]
    pub scripts: bool,

    /// User stylesheet.
    #[arg(short = 't', long)]
    pub style_file: Option<String>,

    #[arg(short = 'u', long)]
    pub user_agent: Option<String>,

    /// Print the window id on stdout.
    #[arg(short = 'x', long)]
    pub show_xid: bool,

    #[arg(short = 'z', long)]
    pub zoom: Option<f64>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. `skiff=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Page to open.
    pub uri: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Accepts decimal or `0x`-prefixed hexadecimal ids.
fn parse_window_id(raw: &str) -> Result<u64, String> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => raw.parse(),
    };
    parsed.map_err(|e| format!("invalid window id '{raw}': {e}"))
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Args {
    /// Override loaded config values with the flags given.
    pub fn apply(&self, config: &mut SkiffConfig) {
        let browser = &mut config.browser;
        if let Some(p) = &self.cookie_policies {
            browser.cookie_policies = p.clone();
        }
        if let Some(v) = toggle(self.scrollbars, self.no_scrollbars) {
            browser.scrollbars = v;
        }
        if let Some(v) = toggle(self.fullscreen, self.no_fullscreen) {
            browser.fullscreen = v;
        }
        if let Some(v) = toggle(self.geolocation, self.no_geolocation) {
            browser.geolocation = v;
        }
        if let Some(v) = toggle(self.images, self.no_images) {
            browser.load_images = v;
        }
        if let Some(v) = toggle(self.kiosk, self.no_kiosk) {
            browser.kiosk_mode = v;
        }
        if let Some(v) = toggle(self.inspector, self.no_inspector) {
            browser.inspector = v;
        }
        if let Some(v) = toggle(self.plugins, self.no_plugins) {
            browser.plugins = v;
        }
        if let Some(v) = toggle(self.scripts, self.no_scripts) {
            browser.scripts = v;
        }
        if let Some(ua) = &self.user_agent {
            browser.user_agent = ua.clone();
        }
        if let Some(z) = self.zoom {
            browser.zoom_level = z;
        }

        let paths = &mut config.paths;
        if let Some(f) = &self.cookie_file {
            paths.cookie_file = f.clone();
        }
        if let Some(f) = &self.script_file {
            paths.script_file = f.clone();
        }
        if let Some(f) = &self.style_file {
            paths.style_file = f.clone();
        }
    }

    /// Flags that start another process with the same effective settings.
    pub fn child_flags(&self, config: &SkiffConfig) -> Vec<String> {
        let b = &config.browser;
        let p = &config.paths;
        let pick = |on: bool, yes: &str, no: &str| (if on { yes } else { no }).to_string();

        let mut flags = vec![
            "-a".to_string(),
            b.cookie_policies.clone(),
            pick(b.scrollbars, "-B", "-b"),
            "-c".into(),
            p.cookie_file.clone(),
            pick(b.geolocation, "-G", "-g"),
            pick(b.load_images, "-I", "-i"),
            pick(b.kiosk_mode, "-k", "-K"),
            pick(b.inspector, "-N", "-n"),
            pick(b.plugins, "-P", "-p"),
            "-r".into(),
            p.script_file.clone(),
            pick(b.scripts, "-S", "-s"),
            "-t".into(),
            p.style_file.clone(),
            "-z".into(),
            b.zoom_level.to_string(),
        ];
        if let Some(ua) = &self.user_agent {
            flags.extend(["-u".to_string(), ua.clone()]);
        }
        if let Some(id) = self.embed {
            flags.extend(["-e".to_string(), id.to_string()]);
        }
        if self.show_xid {
            flags.push("-x".into());
        }
        if let Some(path) = &self.config {
            flags.extend(["--config".to_string(), path.display().to_string()]);
        }
        if let Some(level) = &self.log_level {
            flags.extend(["--log-level".to_string(), level.clone()]);
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("skiff").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_change_nothing() {
        let mut config = SkiffConfig::default();
        args(&[]).apply(&mut config);
        assert_eq!(config.browser.scrollbars, SkiffConfig::default().browser.scrollbars);
        assert_eq!(config.browser.cookie_policies, "Aa@");
    }

    #[test]
    fn last_of_a_flag_pair_wins() {
        let mut config = SkiffConfig::default();
        args(&["-s", "-S", "-I", "-i"]).apply(&mut config);
        assert!(config.browser.scripts);
        assert!(!config.browser.load_images);
    }

    #[test]
    fn applies_values_and_uri() {
        let a = args(&["-a", "@", "-z", "1.5", "-k", "-t", "/tmp/s.css", "example.org"]);
        let mut config = SkiffConfig::default();
        a.apply(&mut config);
        assert_eq!(config.browser.cookie_policies, "@");
        assert_eq!(config.browser.zoom_level, 1.5);
        assert!(config.browser.kiosk_mode);
        assert_eq!(config.paths.style_file, "/tmp/s.css");
        assert_eq!(a.uri.as_deref(), Some("example.org"));
    }

    #[test]
    fn window_id_accepts_hex() {
        assert_eq!(args(&["-e", "0x1a"]).embed, Some(26));
        assert_eq!(args(&["-e", "42"]).embed, Some(42));
        assert!(Args::try_parse_from(["skiff", "-e", "xyz"]).is_err());
    }

    #[test]
    fn child_flags_reproduce_settings() {
        let parent = args(&["-b", "-g", "-p", "-a", "a", "-z", "2", "-x", "-e", "7"]);
        let mut config = SkiffConfig::default();
        parent.apply(&mut config);

        let flags = parent.child_flags(&config);
        let child = Args::try_parse_from(std::iter::once("skiff".to_string()).chain(flags)).unwrap();
        let mut child_config = SkiffConfig::default();
        child.apply(&mut child_config);

        assert!(!child_config.browser.scrollbars);
        assert!(!child_config.browser.geolocation);
        assert!(!child_config.browser.plugins);
        assert_eq!(child_config.browser.cookie_policies, "a");
        assert_eq!(child_config.browser.zoom_level, 2.0);
        assert!(child.show_xid);
        assert_eq!(child.embed, Some(7));
        assert_eq!(child.uri, None);
    }
}
