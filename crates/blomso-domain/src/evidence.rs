//! Evidence tiers - how strongly a claim's source is attested

use serde::{Deserialize, Serialize};
use std::fmt;

/// Evidence tier of a claim
///
/// Tiers decide which pages may render a claim:
/// - External: a third party published it
/// - Self: the company asserts it on its own properties
/// - Internal: derived from private operational data
/// - Unverified: not yet checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceTier {
    /// Independently published by a third party
    External,

    /// Published by the company on its own properties
    #[serde(rename = "self")]
    SelfPublished,

    /// Derived from private operational data
    Internal,

    /// Not yet checked
    Unverified,
}

impl EvidenceTier {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceTier::External => "external",
            EvidenceTier::SelfPublished => "self",
            EvidenceTier::Internal => "internal",
            EvidenceTier::Unverified => "unverified",
        }
    }

    /// Parse a tier from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "external" => Some(EvidenceTier::External),
            "self" => Some(EvidenceTier::SelfPublished),
            "internal" => Some(EvidenceTier::Internal),
            "unverified" => Some(EvidenceTier::Unverified),
            _ => None,
        }
    }

    /// Whether the tier is published somewhere a reader can follow
    pub fn is_public(&self) -> bool {
        matches!(self, EvidenceTier::External | EvidenceTier::SelfPublished)
    }
}

impl std::str::FromStr for EvidenceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid evidence tier: {}", s))
    }
}

impl fmt::Display for EvidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parse() {
        assert_eq!(EvidenceTier::parse("self"), Some(EvidenceTier::SelfPublished));
        assert_eq!(EvidenceTier::parse("External"), Some(EvidenceTier::External));
        assert_eq!("internal".parse::<EvidenceTier>(), Ok(EvidenceTier::Internal));
        assert!(EvidenceTier::parse("selfpublished").is_none());
    }

    #[test]
    fn test_public_tiers() {
        assert!(EvidenceTier::External.is_public());
        assert!(EvidenceTier::SelfPublished.is_public());
        assert!(!EvidenceTier::Internal.is_public());
        assert!(!EvidenceTier::Unverified.is_public());
    }

    #[test]
    fn test_self_tier_wire_name() {
        let json = serde_json::to_string(&EvidenceTier::SelfPublished).unwrap();
        assert_eq!(json, "\"self\"");

        let parsed: EvidenceTier = serde_json::from_str("\"self\"").unwrap();
        assert_eq!(parsed, EvidenceTier::SelfPublished);
    }
}
