//! Scripts evaluated in a page to act on it.
//!
//! Every string reaching a script is JSON-encoded so it cannot break out of
//! its literal.

use skiff_common::{ScrollAxis, ScrollStep};
use skiff_platform::{KeyCombo, MOD_CTRL, MOD_SHIFT};

const USER_STYLE_ID: &str = "skiff-user-style";
const SCROLLBAR_STYLE_ID: &str = "skiff-scrollbars";
const FONT_STYLE_ID: &str = "skiff-font-size";
const HIDE_SCROLLBARS_CSS: &str = "::-webkit-scrollbar { display: none !important; }";

/// Pixels per scroll line.
const LINE_STEP: i32 = 40;

fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Install or replace (`Some`) or remove (`None`) a `<style>` element.
fn style_element(id: &str, css: Option<&str>) -> String {
    let id = quote(id);
    match css {
        Some(css) => format!(
            "(function(){{var s=document.getElementById({id});\
             if(!s){{s=document.createElement('style');s.id={id};\
             (document.head||document.documentElement).appendChild(s);}}\
             s.textContent={css};}})();",
            css = quote(css)
        ),
        None => format!(
            "(function(){{var s=document.getElementById({id});if(s)s.remove();}})();"
        ),
    }
}

pub fn user_style(css: Option<&str>) -> String {
    style_element(USER_STYLE_ID, css)
}

pub fn scrollbars(visible: bool) -> String {
    style_element(
        SCROLLBAR_STYLE_ID,
        (!visible).then_some(HIDE_SCROLLBARS_CSS),
    )
}

/// Base font size for pages that set none; any page rule wins.
pub fn default_font_size(px: u32) -> String {
    style_element(
        FONT_STYLE_ID,
        Some(&format!(":where(html) {{ font-size: {px}px; }}")),
    )
}

/// `C`/`S` prefix plus normalized key, the form the key listener compares.
pub fn key_token(combo: &KeyCombo) -> String {
    let ctrl = if combo.mods & MOD_CTRL != 0 { "C" } else { "" };
    let shift = if combo.mods & MOD_SHIFT != 0 { "S" } else { "" };
    format!("{ctrl}{shift}:{}", combo.key)
}

/// Forward bound key presses from the page.
///
/// A focused page swallows keyboard input before the window sees it, so
/// presses matching `bound` are cancelled in the page and posted as `key`
/// messages instead.
pub fn key_listener(bound: &[KeyCombo]) -> String {
    let tokens: Vec<String> = bound.iter().map(key_token).collect();
    let tokens = serde_json::to_string(&tokens).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"(function() {{
    var bound = new Set({tokens});
    var names = {{
        ' ': 'space', '+': 'plus', '-': 'minus', '=': 'equal', '/': 'slash',
        '\\': 'backslash', '.': 'period', ',': 'comma', ';': 'semicolon',
        "'": 'apostrophe', 'Enter': 'Return', 'Backspace': 'BackSpace',
        'ArrowUp': 'Up', 'ArrowDown': 'Down', 'ArrowLeft': 'Left', 'ArrowRight': 'Right'
    }};
    function keyName(k) {{
        if (names[k]) return names[k];
        return k.length === 1 ? k.toLowerCase() : k;
    }}
    document.addEventListener('keydown', function(e) {{
        var key = keyName(e.key);
        var token = (e.ctrlKey ? 'C' : '') + (e.shiftKey ? 'S' : '') + ':' + key;
        if (!bound.has(token)) return;
        e.preventDefault();
        e.stopPropagation();
        window.ipc.postMessage(JSON.stringify({{ kind: 'key', payload: {{
            ctrl: e.ctrlKey, shift: e.shiftKey, alt: e.altKey, meta: e.metaKey, key: key
        }} }}));
    }}, true);
}})();
"#
    )
}

/// Release geolocation requests held by the page script.
pub fn geolocation_answer(allow: bool) -> String {
    format!("window.__skiffGeolocation && window.__skiffGeolocation({allow});")
}

/// Case-insensitive, wrapping search.
pub fn find(needle: &str, forward: bool) -> String {
    format!(
        "window.find({}, false, {}, true);",
        quote(needle),
        !forward
    )
}

pub fn history_go(steps: i32) -> String {
    format!("history.go({steps});")
}

pub fn scroll(axis: ScrollAxis, step: ScrollStep) -> String {
    let delta = match (axis, step) {
        (_, ScrollStep::Lines(n)) => format!("{}", n * LINE_STEP),
        (ScrollAxis::Vertical, ScrollStep::Pages(n)) => format!("{n} * window.innerHeight"),
        (ScrollAxis::Horizontal, ScrollStep::Pages(n)) => format!("{n} * window.innerWidth"),
    };
    match axis {
        ScrollAxis::Vertical => format!("window.scrollBy(0, {delta});"),
        ScrollAxis::Horizontal => format!("window.scrollBy({delta}, 0);"),
    }
}

pub const RELOAD: &str = "location.reload();";
pub const STOP: &str = "window.stop();";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_escapes_needle() {
        assert_eq!(
            find("a\"b", true),
            r#"window.find("a\"b", false, false, true);"#
        );
        assert_eq!(
            find("x", false),
            r#"window.find("x", false, true, true);"#
        );
    }

    #[test]
    fn style_install_and_remove() {
        let on = user_style(Some("body{color:red}"));
        assert!(on.contains(r#"s.textContent="body{color:red}""#));
        assert!(on.contains(r#""skiff-user-style""#));

        let off = user_style(None);
        assert!(off.contains("s.remove()"));
        assert!(!off.contains("textContent"));
    }

    #[test]
    fn hidden_scrollbars_install_rule() {
        assert!(scrollbars(false).contains("::-webkit-scrollbar"));
        assert!(scrollbars(true).contains("s.remove()"));
    }

    #[test]
    fn scroll_steps() {
        assert_eq!(
            scroll(ScrollAxis::Vertical, ScrollStep::Lines(-1)),
            "window.scrollBy(0, -40);"
        );
        assert_eq!(
            scroll(ScrollAxis::Horizontal, ScrollStep::Pages(1)),
            "window.scrollBy(1 * window.innerWidth, 0);"
        );
    }

    #[test]
    fn font_size_rule_has_no_specificity() {
        let js = default_font_size(14);
        assert!(js.contains(":where(html) { font-size: 14px; }"));
        assert!(js.contains(r#""skiff-font-size""#));
    }

    #[test]
    fn key_tokens_carry_ctrl_and_shift() {
        let combo = |mods, key: &str| KeyCombo {
            mods,
            key: key.to_string(),
        };
        assert_eq!(key_token(&combo(MOD_CTRL, "r")), "C:r");
        assert_eq!(key_token(&combo(MOD_CTRL | MOD_SHIFT, "equal")), "CS:equal");
        assert_eq!(key_token(&combo(0, "F11")), ":F11");
    }

    #[test]
    fn key_listener_embeds_bound_set() {
        let js = key_listener(&[
            KeyCombo {
                mods: MOD_CTRL,
                key: "g".into(),
            },
            KeyCombo {
                mods: 0,
                key: "Escape".into(),
            },
        ]);
        assert!(js.contains(r#"new Set(["C:g",":Escape"])"#));
        assert!(js.contains("e.preventDefault()"));
        assert!(js.contains("kind: 'key'"));
    }

    #[test]
    fn geolocation_answer_passes_decision() {
        assert!(geolocation_answer(true).ends_with("__skiffGeolocation(true);"));
        assert!(geolocation_answer(false).ends_with("__skiffGeolocation(false);"));
    }

    #[test]
    fn history_steps() {
        assert_eq!(history_go(-2), "history.go(-2);");
    }
}
