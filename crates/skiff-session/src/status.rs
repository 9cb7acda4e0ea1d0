//! Compact status strings shown in each window title.
//!
//! The toggle string reports feature switches, the page string reports
//! transport security and proxy use:
//!
//! ```text
//! [42%] A@cgISVm:T- | Example Domain
//! ```

/// Cookie acceptance policy, keyed by a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CookiePolicy {
    /// `A`
    AcceptAll,
    /// `@`
    NoThirdParty,
    /// `a`
    AcceptNone,
}

impl CookiePolicy {
    /// Unknown characters fall back to accept-all.
    pub fn from_char(c: char) -> Self {
        match c {
            'a' => CookiePolicy::AcceptNone,
            '@' => CookiePolicy::NoThirdParty,
            _ => CookiePolicy::AcceptAll,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            CookiePolicy::AcceptAll => 'A',
            CookiePolicy::NoThirdParty => '@',
            CookiePolicy::AcceptNone => 'a',
        }
    }
}

/// Process-wide position in the configured cookie policy sequence.
#[derive(Debug, Clone)]
pub struct CookiePolicyRotation {
    policies: Vec<char>,
    index: usize,
}

impl CookiePolicyRotation {
    /// An empty sequence behaves like `"A"`.
    pub fn new(sequence: &str) -> Self {
        let mut policies: Vec<char> = sequence.chars().collect();
        if policies.is_empty() {
            policies.push('A');
        }
        Self { policies, index: 0 }
    }

    pub fn current(&self) -> CookiePolicy {
        CookiePolicy::from_char(self.policies[self.index])
    }

    /// Step to the next policy, wrapping after the last one.
    pub fn advance(&mut self) -> CookiePolicy {
        self.index = (self.index + 1) % self.policies.len();
        self.current()
    }

    /// The configured sequence, as given.
    pub fn sequence(&self) -> String {
        self.policies.iter().collect()
    }
}

/// Feature switches of one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    pub cookie: CookiePolicy,
    pub caret_browsing: bool,
    pub geolocation: bool,
    pub load_images: bool,
    pub scripts: bool,
    pub plugins: bool,
    pub user_style: bool,
}

impl ToggleState {
    pub fn encode(&self) -> String {
        let flag = |on: bool, c: char| if on { c.to_ascii_uppercase() } else { c };
        [
            self.cookie.as_char(),
            flag(self.caret_browsing, 'c'),
            flag(self.geolocation, 'g'),
            flag(self.load_images, 'i'),
            flag(self.scripts, 's'),
            flag(self.plugins, 'v'),
            flag(self.user_style, 'm'),
        ]
        .iter()
        .collect()
    }
}

/// Transport state of the page shown in one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub secure: bool,
    pub tls_failed: bool,
    pub proxy: bool,
}

impl PageState {
    pub fn new(uri: &str, tls_failed: bool, proxy: bool) -> Self {
        Self {
            secure: uri.starts_with("https://"),
            tls_failed,
            proxy,
        }
    }

    pub fn encode(&self) -> String {
        let transport = match (self.secure, self.tls_failed) {
            (false, _) => '-',
            (true, false) => 'T',
            (true, true) => 'U',
        };
        let proxy = if self.proxy { 'P' } else { '-' };
        [transport, proxy].iter().collect()
    }
}

/// Everything the title is assembled from.
#[derive(Debug, Clone, Copy)]
pub struct TitleParts<'a> {
    pub toggles: &'a ToggleState,
    pub page: &'a PageState,
    pub hovered_link: Option<&'a str>,
    pub progress: u8,
    pub title: Option<&'a str>,
}

/// Assemble the window title.
///
/// With indicators on, a hovered link replaces the page title and a load in
/// progress is prefixed with its percentage. With indicators off the page
/// title is shown as is.
pub fn compose_title(show_indicators: bool, parts: &TitleParts<'_>) -> String {
    if !show_indicators {
        return parts.title.unwrap_or_default().to_string();
    }

    let t = parts.toggles.encode();
    let p = parts.page.encode();
    if let Some(link) = parts.hovered_link {
        format!("{t}:{p} | {link}")
    } else if parts.progress < 100 {
        format!(
            "[{}%] {t}:{p} | {}",
            parts.progress,
            parts.title.unwrap_or_default()
        )
    } else {
        format!("{t}:{p} | {}", parts.title.unwrap_or_default())
    }
}

// =============================================================================
// TESTS
// =============================================================================
