//! Claim registry and eligibility filters
//!
//! The filters are the single enforcement point for the site-wide rule:
//! no unverified or underdocumented claim may reach a rendering surface.
//! Claims that fail a filter simply do not appear; nothing is logged.

use blomso_domain::{Claim, ClaimCategory};

/// Read-only, insertion-ordered collection of claims
///
/// Display position is meaningful, so every query preserves catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimRegistry {
    claims: Vec<Claim>,
}

impl ClaimRegistry {
    /// Create a registry over the given claims
    ///
    /// No validation happens here; see [`crate::audit`] for the catalog checks.
    pub fn new(claims: Vec<Claim>) -> Self {
        Self { claims }
    }

    /// Every claim, verified or not
    pub fn all(&self) -> &[Claim] {
        &self.claims
    }

    /// Number of claims in the catalog
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// True when the catalog holds no claims
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// All verified claims, optionally narrowed to one category
    pub fn verified_claims(&self, category: Option<ClaimCategory>) -> Vec<&Claim> {
        self.claims
            .iter()
            .filter(|c| c.verified && c.in_category(category))
            .collect()
    }

    /// Single claim by id, only if it is also verified
    ///
    /// An unverified claim is indistinguishable from a missing one.
    pub fn verified_claim_by_id(&self, id: &str) -> Option<&Claim> {
        self.claims.iter().find(|c| c.id == id && c.verified)
    }

    /// Claims eligible for the traction page and the homepage metrics strip
    ///
    /// Requirement: verified AND (external OR self OR internal with a source label).
    pub fn traction_claims(&self, category: Option<ClaimCategory>) -> Vec<&Claim> {
        self.claims
            .iter()
            .filter(|c| c.is_traction_eligible() && c.in_category(category))
            .collect()
    }
}

impl From<Vec<Claim>> for ClaimRegistry {
    fn from(claims: Vec<Claim>) -> Self {
        Self::new(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blomso_domain::EvidenceTier;

    fn claim(id: &str, category: ClaimCategory, tier: EvidenceTier, verified: bool) -> Claim {
        Claim::new(id, category, id, tier).verified(verified)
    }

    fn ids(claims: &[&Claim]) -> Vec<String> {
        claims.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_traction_example_catalog() {
        let registry = ClaimRegistry::new(vec![
            claim("a", ClaimCategory::Metric, EvidenceTier::External, true),
            claim("b", ClaimCategory::Metric, EvidenceTier::External, false),
            claim("c", ClaimCategory::Metric, EvidenceTier::Internal, true),
        ]);

        assert_eq!(ids(&registry.traction_claims(None)), vec!["a"]);
    }

    #[test]
    fn test_verified_claims_preserve_order() {
        let registry = ClaimRegistry::new(vec![
            claim("z", ClaimCategory::Capability, EvidenceTier::SelfPublished, true),
            claim("y", ClaimCategory::Metric, EvidenceTier::Internal, false),
            claim("x", ClaimCategory::Capability, EvidenceTier::SelfPublished, true),
            claim("w", ClaimCategory::Milestone, EvidenceTier::SelfPublished, true),
        ]);

        assert_eq!(ids(&registry.verified_claims(None)), vec!["z", "x", "w"]);
        assert_eq!(
            ids(&registry.verified_claims(Some(ClaimCategory::Capability))),
            vec!["z", "x"]
        );
        assert!(registry.verified_claims(Some(ClaimCategory::Award)).is_empty());
    }

    #[test]
    fn test_by_id_requires_verification() {
        let registry = ClaimRegistry::new(vec![
            claim("shown", ClaimCategory::Press, EvidenceTier::External, true),
            claim("hidden", ClaimCategory::Press, EvidenceTier::External, false),
        ]);

        assert_eq!(registry.verified_claim_by_id("shown").map(|c| c.id.as_str()), Some("shown"));
        assert_eq!(registry.verified_claim_by_id("hidden"), None);
        assert_eq!(registry.verified_claim_by_id("missing"), None);
    }

    #[test]
    fn test_traction_internal_label_gate() {
        let registry = ClaimRegistry::new(vec![
            claim("bare", ClaimCategory::Metric, EvidenceTier::Internal, true),
            claim("empty", ClaimCategory::Metric, EvidenceTier::Internal, true)
                .with_source_label(""),
            claim("labelled", ClaimCategory::Metric, EvidenceTier::Internal, true)
                .with_source_label("CRM export"),
            claim("self", ClaimCategory::Capability, EvidenceTier::SelfPublished, true),
        ]);

        assert_eq!(ids(&registry.traction_claims(None)), vec!["labelled", "self"]);
        assert_eq!(
            ids(&registry.traction_claims(Some(ClaimCategory::Metric))),
            vec!["labelled"]
        );
    }

    #[test]
    fn test_traction_excludes_unverified_tier() {
        let registry = ClaimRegistry::new(vec![claim(
            "odd",
            ClaimCategory::Metric,
            EvidenceTier::Unverified,
            true,
        )
        .with_source("https://example.com", Some("label"))]);

        assert_eq!(registry.verified_claims(None).len(), 1);
        assert!(registry.traction_claims(None).is_empty());
    }

    #[test]
    fn test_empty_registry() {
        let registry = ClaimRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.verified_claims(None).is_empty());
        assert!(registry.traction_claims(None).is_empty());
    }
}
