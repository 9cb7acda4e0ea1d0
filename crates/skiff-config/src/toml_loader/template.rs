//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Skiff Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[browser]
# user_agent = "Mozilla/5.0 (X11; U; Unix; en-US) ..."   # SKIFF_USERAGENT wins
# kiosk_mode = false
# show_indicators = true
# zoom_to_96dpi = false
# fullscreen = false
# default_font_size = 12     # 6-72
# zoom_level = 1.0           # 0.1-10.0
# cookie_policies = "Aa@"    # A: accept all, a: accept nothing, @: no third party
# strict_tls = false
# scrollbars = true
# spatial_browsing = true
# plugins = true
# scripts = true
# inspector = true
# load_images = true
# geolocation = true

[paths]
# cookie_file = "~/.config/skiff/cookies.txt"
# history_file = "~/.config/skiff/history.txt"
# style_file = "~/.config/skiff/style.css"
# script_file = "~/.config/skiff/script.js"

[helpers]
# Placeholders: {winid} {show} {set} for prompts,
# {uri} {referer} {useragent} {cookiefile} for downloads.
# prompt = ["/bin/sh", "-c", "...", "{show}", "{set}", "{winid}"]
# download = ["/bin/sh", "-c", "...", "{uri}", "{useragent}", "{referer}", "{cookiefile}"]

[logging]
# level = "INFO"             # TRACE, DEBUG, INFO, WARNING, ERROR

# Keybinds replace the whole default table when present.
# Several bindings may share keys; all of them fire in order.
#
# [[keybinds.bindings]]
# keys = "Ctrl+Shift+R"
# action = { Reload = { bypass_cache = true } }
#
# [[keybinds.bindings]]
# keys = "Ctrl+G"
# action = { Prompt = { show = "CurrentUri", set = "Navigate" } }
#
# [[keybinds.bindings]]
# keys = "Escape"
# action = "Stop"
"##
    .to_string()
}
