use skiff_common::ChannelRole;

/// Process-wide channel identifiers, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelIds {
    find: String,
    navigate: String,
    current_uri: String,
}

impl ChannelIds {
    pub fn resolve() -> Self {
        Self {
            find: ChannelRole::Find.identifier().to_string(),
            navigate: ChannelRole::Navigate.identifier().to_string(),
            current_uri: ChannelRole::CurrentUri.identifier().to_string(),
        }
    }

    pub fn get(&self, role: ChannelRole) -> &str {
        match role {
            ChannelRole::Find => &self.find,
            ChannelRole::Navigate => &self.navigate,
            ChannelRole::CurrentUri => &self.current_uri,
        }
    }

    /// Role for a channel file name, if it names one.
    pub fn role_of(&self, name: &str) -> Option<ChannelRole> {
        ChannelRole::ALL
            .into_iter()
            .find(|role| self.get(*role) == name)
    }
}

impl Default for ChannelIds {
    fn default() -> Self {
        Self::resolve()
    }
}
