//! Page views - the claims and supporters each page may render

use crate::Catalog;
use blomso_domain::{Claim, ClaimCategory, ExternalLinks, Supporter, SupporterBand};
use serde::Serialize;

/// Supporters of one display band
#[derive(Debug, Clone, Serialize)]
pub struct SupporterGroup<'a> {
    /// Band key
    pub band: SupporterBand,
    /// Column heading
    pub label: &'static str,
    /// Supporters in catalog order
    pub supporters: Vec<&'a Supporter>,
}

/// Homepage: metrics strip, capability grid, trust band and product links
#[derive(Debug, Clone, Serialize)]
pub struct HomePage<'a> {
    /// Traction-eligible metrics
    pub metrics: Vec<&'a Claim>,
    /// Verified capabilities
    pub capabilities: Vec<&'a Claim>,
    /// Trust band
    pub supporters: Vec<SupporterGroup<'a>>,
    /// Demo, feedback and roadmap links
    pub links: &'a ExternalLinks,
}

/// Platform page: capability descriptions only need to be verified
#[derive(Debug, Clone, Serialize)]
pub struct PlatformPage<'a> {
    /// Verified capabilities
    pub capabilities: Vec<&'a Claim>,
}

/// Traction page: quantitative proof under the stricter policy
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TractionPage<'a> {
    /// Traction-eligible metrics
    pub metrics: Vec<&'a Claim>,
    /// Traction-eligible milestones
    pub milestones: Vec<&'a Claim>,
    /// Traction-eligible press
    pub press: Vec<&'a Claim>,
    /// False when the page should show its "proof coming soon" state
    pub has_proof: bool,
    /// Trust band
    pub supporters: Vec<SupporterGroup<'a>>,
}

impl Catalog {
    /// Supporters grouped by band, in display order; empty bands are omitted
    pub fn supporter_groups(&self) -> Vec<SupporterGroup<'_>> {
        SupporterBand::ALL
            .into_iter()
            .map(|band| SupporterGroup {
                band,
                label: band.label(),
                supporters: self.supporters_in(band),
            })
            .filter(|group| !group.supporters.is_empty())
            .collect()
    }

    /// Content for the homepage
    pub fn home_page(&self) -> HomePage<'_> {
        let registry = self.registry();
        HomePage {
            metrics: registry.traction_claims(Some(ClaimCategory::Metric)),
            capabilities: registry.verified_claims(Some(ClaimCategory::Capability)),
            supporters: self.supporter_groups(),
            links: self.links(),
        }
    }

    /// Content for the platform page
    pub fn platform_page(&self) -> PlatformPage<'_> {
        PlatformPage {
            capabilities: self
                .registry()
                .verified_claims(Some(ClaimCategory::Capability)),
        }
    }

    /// Content for the traction page
    pub fn traction_page(&self) -> TractionPage<'_> {
        let registry = self.registry();
        let metrics = registry.traction_claims(Some(ClaimCategory::Metric));
        let milestones = registry.traction_claims(Some(ClaimCategory::Milestone));
        let press = registry.traction_claims(Some(ClaimCategory::Press));
        let has_proof = !(metrics.is_empty() && milestones.is_empty() && press.is_empty());

        TractionPage {
            metrics,
            milestones,
            press,
            has_proof,
            supporters: self.supporter_groups(),
        }
    }
}
