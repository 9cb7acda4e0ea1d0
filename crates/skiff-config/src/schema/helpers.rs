//! External helper command templates.
//!
//! Placeholders are substituted at launch time:
//! `{winid}`, `{show}`, `{set}` for the prompt helper and
//! `{uri}`, `{referer}`, `{useragent}`, `{cookiefile}` for downloads.
//! Helpers also inherit `SKIFF_CHANNEL_DIR`, the root of the per-window
//! channel directories.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpersConfig {
    /// Shows the `{show}` channel's value in a picker and writes the choice
    /// into the `{set}` channel of window `{winid}`.
    pub prompt: Vec<String>,
    /// Fetches `{uri}` for responses the engine cannot display.
    pub download: Vec<String>,
}

impl Default for HelpersConfig {
    fn default() -> Self {
        Self {
            prompt: vec![
                "/bin/sh".into(),
                "-c".into(),
                concat!(
                    "dir=\"$SKIFF_CHANNEL_DIR/$2\"; ",
                    "prop=\"$(cat \"$dir/$0\" 2>/dev/null | dmenu)\" && ",
                    "printf '%s' \"$prop\" > \"$dir/.$1.tmp\" && ",
                    "mv \"$dir/.$1.tmp\" \"$dir/$1\""
                )
                .into(),
                "{show}".into(),
                "{set}".into(),
                "{winid}".into(),
            ],
            download: vec![
                "/bin/sh".into(),
                "-c".into(),
                concat!(
                    "st -e /bin/sh -c \"curl -L -J -O --user-agent '$1'",
                    " --referer '$2' -b $3 -c $3 '$0'; sleep 5\""
                )
                .into(),
                "{uri}".into(),
                "{useragent}".into(),
                "{referer}".into(),
                "{cookiefile}".into(),
            ],
        }
    }
}
