//! Catalog audit
//!
//! Content is edited by hand, so the invariants written next to the data
//! ("verified requires a source URL", unique ids) are checked here rather
//! than trusted. The server refuses to start on error-severity issues.

use crate::Catalog;
use blomso_domain::{Claim, EvidenceTier};
use std::collections::HashSet;
use std::fmt;

/// How serious an issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Worth fixing; the claim is simply filtered out of some pages
    Warning,

    /// Blocks strict loading
    Error,
}

/// A problem found in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// Two claims share an id
    DuplicateClaimId(String),

    /// Two supporters share an id
    DuplicateSupporterId(String),

    /// Claim is verified but has no source URL
    VerifiedWithoutSource {
        /// Claim id
        id: String,
    },

    /// Claim is verified while its evidence tier says it was never checked
    VerifiedUnverifiedTier {
        /// Claim id
        id: String,
    },

    /// Internal-tier claim is verified but has no source label, so it
    /// never reaches traction pages
    InternalWithoutLabel {
        /// Claim id
        id: String,
    },
}

impl CatalogIssue {
    /// Severity of this issue
    pub fn severity(&self) -> Severity {
        match self {
            CatalogIssue::InternalWithoutLabel { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// True for issues that block strict loading
    pub fn is_blocking(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateClaimId(id) => write!(f, "duplicate claim id '{}'", id),
            CatalogIssue::DuplicateSupporterId(id) => {
                write!(f, "duplicate supporter id '{}'", id)
            }
            CatalogIssue::VerifiedWithoutSource { id } => {
                write!(f, "claim '{}' is verified but has no sourceUrl", id)
            }
            CatalogIssue::VerifiedUnverifiedTier { id } => {
                write!(f, "claim '{}' is verified but its evidence tier is 'unverified'", id)
            }
            CatalogIssue::InternalWithoutLabel { id } => write!(
                f,
                "claim '{}' is internal-tier without a sourceLabel and is hidden from traction pages",
                id
            ),
        }
    }
}

/// Check every claim and supporter, returning issues in catalog order
pub fn audit(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = audit_claims(catalog.registry().all());

    let mut seen = HashSet::new();
    for supporter in catalog.supporters() {
        if !seen.insert(supporter.id.as_str()) {
            issues.push(CatalogIssue::DuplicateSupporterId(supporter.id.clone()));
        }
    }

    issues
}

/// Check a list of claims on its own
pub fn audit_claims(claims: &[Claim]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for claim in claims {
        if !seen.insert(claim.id.as_str()) {
            issues.push(CatalogIssue::DuplicateClaimId(claim.id.clone()));
        }

        if !claim.verified {
            continue;
        }

        if !claim.has_source_url() {
            issues.push(CatalogIssue::VerifiedWithoutSource {
                id: claim.id.clone(),
            });
        }

        match claim.evidence_tier {
            EvidenceTier::Unverified => issues.push(CatalogIssue::VerifiedUnverifiedTier {
                id: claim.id.clone(),
            }),
            EvidenceTier::Internal if !claim.has_source_label() => {
                issues.push(CatalogIssue::InternalWithoutLabel {
                    id: claim.id.clone(),
                })
            }
            _ => {}
        }
    }

    issues
}
