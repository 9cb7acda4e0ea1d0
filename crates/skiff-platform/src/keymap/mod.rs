mod parse;
mod types;

pub use parse::{normalize_key_name, parse_keybind};
pub use types::{KeyBind, Modifier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_keybind() {
        let kb = parse_keybind("Ctrl+G").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(kb.key, "g");
    }

    #[test]
    fn parse_multi_modifier_keybind() {
        let kb = parse_keybind("Ctrl+Shift+R").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(kb.key, "r");
    }

    #[test]
    fn parse_option_becomes_alt() {
        let kb = parse_keybind("Option+Period").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Alt]);
        assert_eq!(kb.key, "period");
    }

    #[test]
    fn parse_cmd_is_super() {
        let kb = parse_keybind("Cmd+Q").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Super]);
        assert_eq!(kb.key, "q");
    }

    #[test]
    fn parse_single_key() {
        let kb = parse_keybind("F11").unwrap();
        assert!(kb.modifiers.is_empty());
        assert_eq!(kb.key, "F11");

        let kb = parse_keybind("Escape").unwrap();
        assert_eq!(kb.key, "Escape");
    }

    #[test]
    fn parse_key_normalization() {
        assert_eq!(parse_keybind("Ctrl+Enter").unwrap().key, "Return");
        assert_eq!(parse_keybind("Ctrl+Return").unwrap().key, "Return");
        assert_eq!(parse_keybind("Ctrl+Esc").unwrap().key, "Escape");
        assert_eq!(parse_keybind("Ctrl+Space").unwrap().key, "space");
        assert_eq!(parse_keybind("Ctrl+Minus").unwrap().key, "minus");
        assert_eq!(parse_keybind("Ctrl+Plus").unwrap().key, "plus");
        assert_eq!(parse_keybind("Ctrl+Slash").unwrap().key, "slash");
    }

    #[test]
    fn parse_empty_string_fails() {
        assert!(parse_keybind("").is_err());
        assert!(parse_keybind("Ctrl+").is_err());
    }

    #[test]
    fn parse_unknown_modifier_fails() {
        let err = parse_keybind("Hyper+X").unwrap_err().to_string();
        assert!(err.contains("Hyper"));
    }

    #[test]
    fn parse_duplicate_modifiers_deduplicated() {
        let kb = parse_keybind("Ctrl+Ctrl+A").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(kb.key, "a");
    }

    #[test]
    fn normalize_event_names_match_config_names() {
        assert_eq!(normalize_key_name("R"), normalize_key_name("r"));
        assert_eq!(normalize_key_name("-"), normalize_key_name("Minus"));
        assert_eq!(normalize_key_name(" "), normalize_key_name("Space"));
        assert_eq!(normalize_key_name("ArrowUp"), "Up");
        assert_eq!(normalize_key_name("f5"), "F5");
        assert_eq!(normalize_key_name("Fn"), "Fn");
    }

    #[test]
    fn keybind_displays_canonical_form() {
        let kb = parse_keybind("control+shift+T").unwrap();
        assert_eq!(kb.to_string(), "Ctrl+Shift+t");
        let kb = parse_keybind("cmd+-").unwrap();
        assert_eq!(kb.to_string(), "Super+minus");
    }
}
