//! Content catalog loading
//!
//! The catalog is process-wide configuration: parsed once at startup,
//! shared behind an `Arc`, and never mutated.

use crate::audit::{audit, CatalogIssue};
use crate::{CatalogError, ClaimRegistry};
use blomso_domain::{Claim, ExternalLinks, Supporter, SupporterBand};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// The canonical catalog shipped with the site
const BUILTIN_CATALOG: &str = include_str!("../content/catalog.toml");

/// On-disk shape of the catalog
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    claims: Vec<Claim>,
    #[serde(default)]
    supporters: Vec<Supporter>,
    links: ExternalLinks,
}

/// Claims, supporters and external links, loaded once
#[derive(Debug, Clone)]
pub struct Catalog {
    registry: ClaimRegistry,
    supporters: Vec<Supporter>,
    links: ExternalLinks,
}

impl Catalog {
    /// Assemble a catalog from parts
    pub fn new(claims: Vec<Claim>, supporters: Vec<Supporter>, links: ExternalLinks) -> Self {
        Self {
            registry: ClaimRegistry::new(claims),
            supporters,
            links,
        }
    }

    /// Parse the catalog embedded in the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;
        debug!(
            claims = file.claims.len(),
            supporters = file.supporters.len(),
            "Parsed content catalog"
        );
        Ok(Self::new(file.claims, file.supporters, file.links))
    }

    /// Load a catalog from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Audit the catalog, logging warnings and rejecting blocking issues
    ///
    /// Used at startup so a hand-edited catalog cannot publish an unsourced claim.
    pub fn into_checked(self) -> Result<Self, CatalogError> {
        let (blocking, warnings): (Vec<CatalogIssue>, Vec<CatalogIssue>) =
            audit(&self).into_iter().partition(CatalogIssue::is_blocking);

        for issue in &warnings {
            warn!("Catalog: {}", issue);
        }

        if !blocking.is_empty() {
            return Err(CatalogError::Invalid(blocking));
        }

        Ok(self)
    }

    /// The claim registry
    pub fn registry(&self) -> &ClaimRegistry {
        &self.registry
    }

    /// All supporters, in catalog order
    pub fn supporters(&self) -> &[Supporter] {
        &self.supporters
    }

    /// Supporters in one display band, in catalog order
    pub fn supporters_in(&self, band: SupporterBand) -> Vec<&Supporter> {
        self.supporters.iter().filter(|s| s.band == band).collect()
    }

    /// External product links
    pub fn links(&self) -> &ExternalLinks {
        &self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blomso_domain::{ClaimCategory, LinkKey};

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.registry().len(), 16);
        assert_eq!(catalog.supporters().len(), 7);
        assert_eq!(catalog.links().get(LinkKey::Demo).label, "Demo");
    }

    #[test]
    fn test_builtin_catalog_passes_strict_audit() {
        let catalog = Catalog::builtin().unwrap().into_checked();
        assert!(catalog.is_ok(), "{:?}", catalog.err());
    }

    #[test]
    fn test_builtin_seed_round_is_hidden() {
        let catalog = Catalog::builtin().unwrap();
        let registry = catalog.registry();

        assert!(registry.all().iter().any(|c| c.id == "seed-round"));
        assert!(registry.verified_claim_by_id("seed-round").is_none());
        assert!(registry.verified_claim_by_id("founded").is_some());
    }

    #[test]
    fn test_builtin_metric_values() {
        let catalog = Catalog::builtin().unwrap();
        let metrics = catalog.registry().traction_claims(Some(ClaimCategory::Metric));

        let ids: Vec<&str> = metrics.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["operators-onboarded", "data-points-collected", "avg-reporting-time-reduction"]
        );
        assert_eq!(metrics[1].value, Some(140_000.0));
    }

    #[test]
    fn test_supporters_in_band() {
        let catalog = Catalog::builtin().unwrap();
        let partners: Vec<&str> = catalog
            .supporters_in(SupporterBand::Partners)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(partners, vec!["bayer", "brookside-laboratories"]);
        assert_eq!(catalog.supporters_in(SupporterBand::Ecosystem).len(), 1);
    }

    #[test]
    fn test_strict_load_rejects_unsourced_claim() {
        let toml = r#"
            [[claims]]
            id = "unsourced"
            category = "metric"
            headline = "Unsourced"
            evidenceTier = "external"
            verified = true

            [links.demo]
            href = "https://example.com/demo"
            label = "Demo"
            description = "d"

            [links.feedback]
            href = "https://example.com/feedback"
            label = "Feedback"
            description = "f"

            [links.roadmap]
            href = "https://example.com/roadmap"
            label = "Roadmap"
            description = "r"
        "#;

        let catalog = Catalog::from_toml_str(toml).unwrap();
        match catalog.into_checked() {
            Err(CatalogError::Invalid(issues)) => {
                assert_eq!(
                    issues,
                    vec![CatalogIssue::VerifiedWithoutSource { id: "unsourced".to_string() }]
                );
            }
            other => panic!("expected Invalid, got {:?}", other.map(|c| c.registry().len())),
        }
    }

    #[test]
    fn test_unknown_tier_is_parse_error() {
        let toml = r#"
            [[claims]]
            id = "x"
            category = "metric"
            headline = "X"
            evidenceTier = "rumour"
            verified = false
        "#;
        assert!(matches!(
            Catalog::from_toml_str(toml),
            Err(CatalogError::TomlParse(_))
        ));
    }
}
