//! Control channel roles shared by the keybinds, the channel store, and the
//! session core.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three per-window text slots external helpers read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelRole {
    /// Search needle; a new value runs a forward search.
    Find,
    /// Navigation target; a new value loads it.
    Navigate,
    /// Mirror of the window's current URI, written by the host.
    CurrentUri,
}

impl ChannelRole {
    pub const ALL: [ChannelRole; 3] = [
        ChannelRole::Find,
        ChannelRole::Navigate,
        ChannelRole::CurrentUri,
    ];

    /// Wire identifier for this role.
    pub fn identifier(self) -> &'static str {
        match self {
            ChannelRole::Find => "_SKIFF_FIND",
            ChannelRole::Navigate => "_SKIFF_GO",
            ChannelRole::CurrentUri => "_SKIFF_URI",
        }
    }

    /// Reverse of [`identifier`](Self::identifier).
    pub fn from_identifier(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.identifier() == name)
    }
}

impl fmt::Display for ChannelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_distinct() {
        let ids: Vec<_> = ChannelRole::ALL.iter().map(|r| r.identifier()).collect();
        assert_eq!(ids, vec!["_SKIFF_FIND", "_SKIFF_GO", "_SKIFF_URI"]);
    }

    #[test]
    fn from_identifier_roundtrip() {
        for role in ChannelRole::ALL {
            assert_eq!(ChannelRole::from_identifier(role.identifier()), Some(role));
        }
        assert_eq!(ChannelRole::from_identifier("_SKIFF_NOPE"), None);
    }
}
