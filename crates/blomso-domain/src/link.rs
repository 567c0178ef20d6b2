//! External product links
//!
//! Internal redirect routes (`/demo`, `/feedback`, `/roadmap`) point at these
//! so destinations can change without touching every reference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of an external link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKey {
    /// Live product demo
    Demo,

    /// Feature request board
    Feedback,

    /// Public roadmap
    Roadmap,
}

impl LinkKey {
    /// Every key, in navigation order
    pub const ALL: [LinkKey; 3] = [LinkKey::Demo, LinkKey::Feedback, LinkKey::Roadmap];

    /// Get the key as a string (also the redirect path segment)
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKey::Demo => "demo",
            LinkKey::Feedback => "feedback",
            LinkKey::Roadmap => "roadmap",
        }
    }
}

impl fmt::Display for LinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A link to an external product destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    /// Destination URL
    pub href: String,

    /// Short navigation label
    pub label: String,

    /// One-line description
    pub description: String,
}

/// The full set of external links, one per key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLinks {
    /// Live product demo
    pub demo: ExternalLink,

    /// Feature request board
    pub feedback: ExternalLink,

    /// Public roadmap
    pub roadmap: ExternalLink,
}

impl ExternalLinks {
    /// Look up the link for a key
    pub fn get(&self, key: LinkKey) -> &ExternalLink {
        match key {
            LinkKey::Demo => &self.demo,
            LinkKey::Feedback => &self.feedback,
            LinkKey::Roadmap => &self.roadmap,
        }
    }

    /// Iterate links in navigation order
    pub fn iter(&self) -> impl Iterator<Item = (LinkKey, &ExternalLink)> {
        LinkKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}
