//! Navigation target resolution.

use std::path::Path;

/// Turn user input into a loadable URI.
///
/// Empty input yields `None`. An existing local path becomes a `file://`
/// URI of its canonical absolute path. Input without a scheme separator
/// gets `http://` prepended; anything else is used verbatim.
pub fn resolve_target(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    let path = Path::new(raw);
    if path.exists() {
        if let Ok(abs) = path.canonicalize() {
            return Some(format!("file://{}", abs.display()));
        }
    }

    if raw.contains("://") {
        Some(raw.to_string())
    } else {
        Some(format!("http://{raw}"))
    }
}
