//! Claim module - the unit of public proof on the site

use crate::{EvidenceTier, Relationship};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Category of a claim
///
/// A closed tag set. Pages select claims by category (metrics strip,
/// capability grid, milestone timeline).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimCategory {
    /// Quantitative operating metric
    Metric,

    /// Named customer
    Customer,

    /// Press coverage
    Press,

    /// Dated company milestone
    Milestone,

    /// Product capability
    Capability,

    /// Accelerator, program or partner association
    Program,

    /// Award or recognition
    Award,
}

impl ClaimCategory {
    /// Every category, in declaration order
    pub const ALL: [ClaimCategory; 7] = [
        ClaimCategory::Metric,
        ClaimCategory::Customer,
        ClaimCategory::Press,
        ClaimCategory::Milestone,
        ClaimCategory::Capability,
        ClaimCategory::Program,
        ClaimCategory::Award,
    ];

    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimCategory::Metric => "metric",
            ClaimCategory::Customer => "customer",
            ClaimCategory::Press => "press",
            ClaimCategory::Milestone => "milestone",
            ClaimCategory::Capability => "capability",
            ClaimCategory::Program => "program",
            ClaimCategory::Award => "award",
        }
    }

    /// Parse a category from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "metric" => Some(ClaimCategory::Metric),
            "customer" => Some(ClaimCategory::Customer),
            "press" => Some(ClaimCategory::Press),
            "milestone" => Some(ClaimCategory::Milestone),
            "capability" => Some(ClaimCategory::Capability),
            "program" => Some(ClaimCategory::Program),
            "award" => Some(ClaimCategory::Award),
            _ => None,
        }
    }
}

impl std::str::FromStr for ClaimCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid claim category: {}", s))
    }
}

impl fmt::Display for ClaimCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claim - a single assertable fact about the company
///
/// No claim may reach a public page unless it is `verified`. Claims are
/// authored by hand in the content catalog and never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Unique, stable identifier (e.g. "operators-onboarded")
    pub id: String,

    /// Category tag
    pub category: ClaimCategory,

    /// Short label rendered in proof sections
    pub headline: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Numeric value for quantitative claims; whole numbers serialize as integers
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_value"
    )]
    pub value: Option<f64>,

    /// Unit rendered after the value (e.g. "%", "operators")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// URL pointing to the source evidence. Required when `verified` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// Human-readable label for the source (e.g. "CRM export, 2025-Q4")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_label: Option<String>,

    /// Logo asset path; renderers fall back to a text badge when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,

    /// Evidence tier - controls where the claim may be rendered
    pub evidence_tier: EvidenceTier,

    /// Reviewed and approved for public display
    pub verified: bool,

    /// Nature of the association for program-category claims
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Relationship>,
}

/// Writes `12.0` as `12` so counts and years read the way they were authored.
fn serialize_value<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match *value {
        Some(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
            serializer.serialize_i64(v as i64)
        }
        Some(v) => serializer.serialize_f64(v),
        None => serializer.serialize_none(),
    }
}

impl Claim {
    /// Create a new, unverified claim with no optional attributes
    pub fn new(
        id: impl Into<String>,
        category: ClaimCategory,
        headline: impl Into<String>,
        evidence_tier: EvidenceTier,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            headline: headline.into(),
            detail: None,
            value: None,
            unit: None,
            source_url: None,
            source_label: None,
            logo_path: None,
            evidence_tier,
            verified: false,
            relationship: None,
        }
    }

    /// Set the verification flag
    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Attach a source URL and optional label
    pub fn with_source(mut self, url: impl Into<String>, label: Option<&str>) -> Self {
        self.source_url = Some(url.into());
        self.source_label = label.map(str::to_string);
        self
    }

    /// Attach a source label without a URL
    pub fn with_source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = Some(label.into());
        self
    }

    /// Attach a numeric value and optional unit
    pub fn with_value(mut self, value: f64, unit: Option<&str>) -> Self {
        self.value = Some(value);
        self.unit = unit.map(str::to_string);
        self
    }

    /// Attach a longer description
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the relationship type
    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationship = Some(relationship);
        self
    }

    /// True when `source_url` is present and non-empty
    pub fn has_source_url(&self) -> bool {
        self.source_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// True when `source_label` is present and non-empty
    pub fn has_source_label(&self) -> bool {
        self.source_label
            .as_deref()
            .is_some_and(|label| !label.is_empty())
    }

    /// Whether this claim passes the stricter traction policy
    ///
    /// Verified AND (external OR self OR internal with a source label).
    /// Claims in the `unverified` tier never qualify, whatever the flag says.
    pub fn is_traction_eligible(&self) -> bool {
        self.verified
            && (self.evidence_tier.is_public()
                || (self.evidence_tier == EvidenceTier::Internal && self.has_source_label()))
    }

    /// Whether the claim matches an optional category filter
    pub fn in_category(&self, category: Option<ClaimCategory>) -> bool {
        category.is_none_or(|c| self.category == c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internal_metric() -> Claim {
        Claim::new("m", ClaimCategory::Metric, "Metric", EvidenceTier::Internal)
            .verified(true)
            .with_source("https://example.com/m", None)
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(ClaimCategory::parse("metric"), Some(ClaimCategory::Metric));
        assert_eq!(ClaimCategory::parse("Press"), Some(ClaimCategory::Press));
        assert_eq!(ClaimCategory::parse("AWARD"), Some(ClaimCategory::Award));
        assert!(ClaimCategory::parse("trophy").is_none());
        assert!("".parse::<ClaimCategory>().is_err());
    }

    #[test]
    fn test_category_round_trips_through_as_str() {
        for category in ClaimCategory::ALL {
            assert_eq!(ClaimCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_internal_requires_source_label() {
        let claim = internal_metric();
        assert!(!claim.is_traction_eligible());

        let empty_label = internal_metric().with_source_label("");
        assert!(!empty_label.is_traction_eligible());

        let labelled = internal_metric().with_source_label("CRM export");
        assert!(labelled.is_traction_eligible());
    }

    #[test]
    fn test_unverified_tier_never_traction() {
        let claim = Claim::new("u", ClaimCategory::Metric, "U", EvidenceTier::Unverified)
            .verified(true)
            .with_source("https://example.com", Some("label"));
        assert!(!claim.is_traction_eligible());
    }

    #[test]
    fn test_external_and_self_need_no_label() {
        for tier in [EvidenceTier::External, EvidenceTier::SelfPublished] {
            let claim = Claim::new("x", ClaimCategory::Press, "X", tier).verified(true);
            assert!(claim.is_traction_eligible(), "{tier} should qualify");
            assert!(!claim.clone().verified(false).is_traction_eligible());
        }
    }

    #[test]
    fn test_in_category() {
        let claim = internal_metric();
        assert!(claim.in_category(None));
        assert!(claim.in_category(Some(ClaimCategory::Metric)));
        assert!(!claim.in_category(Some(ClaimCategory::Milestone)));
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let claim = internal_metric()
            .with_source_label("CRM export")
            .with_relationship(Relationship::Partner);
        let json = serde_json::to_value(&claim).unwrap();

        assert_eq!(json["evidenceTier"], "internal");
        assert_eq!(json["sourceLabel"], "CRM export");
        assert_eq!(json["relationship"], "partner");
        assert!(json.get("detail").is_none());
    }

    #[test]
    fn test_whole_values_serialize_as_integers() {
        let count = internal_metric().with_value(12.0, Some("operators"));
        let json = serde_json::to_string(&count).unwrap();
        assert!(json.contains(r#""value":12,"#), "{json}");

        let year = internal_metric().with_value(2024.0, None);
        assert_eq!(serde_json::to_value(&year).unwrap()["value"], serde_json::json!(2024));

        let ratio = internal_metric().with_value(1.5, None);
        assert_eq!(serde_json::to_value(&ratio).unwrap()["value"], serde_json::json!(1.5));

        let parsed: Claim = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.value, Some(12.0));
    }
}
