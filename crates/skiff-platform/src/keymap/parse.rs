use skiff_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parses a human-readable keybind string like `"Ctrl+G"`, `"Ctrl+Shift+R"`
/// or `"Ctrl+Minus"` into a [`KeyBind`].
///
/// Modifier aliases:
/// - `"Control"` / `"Ctrl"` -> `Ctrl`
/// - `"Alt"` / `"Option"` -> `Alt`
/// - `"Win"` / `"Super"` / `"Meta"` / `"Cmd"` -> `Super`
/// - `"Shift"` -> `Shift`
///
/// The last token becomes the key and is passed through
/// [`normalize_key_name`].
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(|t| t.trim()).collect();

    let Some((last, mods)) = tokens.split_last() else {
        return Err(PlatformError::NotSupported("empty keybind string".into()));
    };
    if last.is_empty() {
        return Err(PlatformError::NotSupported(format!(
            "keybind '{s}' has no key component"
        )));
    }

    let mut modifiers = Vec::new();
    for token in mods {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::NotSupported(format!("unrecognized modifier: {token}"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(last),
    })
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "super" | "win" | "meta" | "cmd" | "command" => Some(Modifier::Super),
        _ => None,
    }
}

/// Reduces a key name to the form bindings are compared in.
///
/// Used for both config strings and key events, so `"R"`, `"r"` and `"KeyR"`
/// style inputs meet on the same base lower-case name. Printable keys become
/// their lower-case character or a symbolic name (`"-"` and `"Minus"` both
/// become `"minus"`); named keys keep a canonical spelling (`"Escape"`,
/// `"F11"`, `"Up"`).
pub fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" | "." => "period".into(),
        "comma" | "," => "comma".into(),
        "slash" | "/" => "slash".into(),
        "backslash" | "\\" => "backslash".into(),
        "minus" | "-" => "minus".into(),
        "plus" | "+" => "plus".into(),
        "equal" | "=" => "equal".into(),
        "semicolon" | ";" => "semicolon".into(),
        "apostrophe" | "'" => "apostrophe".into(),
        "space" | " " => "space".into(),
        "enter" | "return" => "Return".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "BackSpace".into(),
        "delete" | "del" => "Delete".into(),
        "insert" => "Insert".into(),
        "up" | "arrowup" => "Up".into(),
        "down" | "arrowdown" => "Down".into(),
        "left" | "arrowleft" => "Left".into(),
        "right" | "arrowright" => "Right".into(),
        "home" => "Home".into(),
        "end" => "End".into(),
        "pageup" => "PageUp".into(),
        "pagedown" => "PageDown".into(),
        _ if is_function_key(&lower) => lower.to_uppercase(),
        _ if lower.chars().count() == 1 => lower,
        _ => {
            let mut chars = lower.chars();
            match chars.next() {
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    format!("{upper}{}", chars.as_str())
                }
                None => lower,
            }
        }
    }
}

fn is_function_key(lower: &str) -> bool {
    lower
        .strip_prefix('f')
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}
