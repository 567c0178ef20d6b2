//! Integration tests for catalog loading and the eligibility filters

use blomso_content::{Catalog, CatalogError, CatalogIssue};
use blomso_domain::{ClaimCategory, EvidenceTier};
use std::io::Write;
use tempfile::NamedTempFile;

const LINKS: &str = r#"
[links.demo]
href = "https://example.com/demo"
label = "Demo"
description = "Try it"

[links.feedback]
href = "https://example.com/feedback"
label = "Feedback"
description = "Tell us"

[links.roadmap]
href = "https://example.com/roadmap"
label = "Roadmap"
description = "Next up"
"#;

fn write_catalog(claims: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}\n{}", claims, LINKS).unwrap();
    file
}

#[test]
fn test_load_catalog_from_file() {
    let file = write_catalog(
        r#"
        [[claims]]
        id = "a"
        category = "metric"
        headline = "A"
        sourceUrl = "https://example.com/a"
        evidenceTier = "external"
        verified = true

        [[claims]]
        id = "b"
        category = "metric"
        headline = "B"
        evidenceTier = "external"
        verified = false

        [[claims]]
        id = "c"
        category = "metric"
        headline = "C"
        sourceUrl = "https://example.com/c"
        evidenceTier = "internal"
        verified = true

        [[supporters]]
        id = "s"
        name = "Supporter"
        band = "programs"
        logo = "/partners/s.png"
        "#,
    );

    let catalog = Catalog::from_file(file.path()).unwrap();
    let registry = catalog.registry();

    let traction: Vec<&str> = registry
        .traction_claims(None)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(traction, vec!["a"]);

    let verified: Vec<&str> = registry
        .verified_claims(Some(ClaimCategory::Metric))
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(verified, vec!["a", "c"]);

    assert_eq!(registry.verified_claim_by_id("b"), None);
    assert_eq!(registry.verified_claim_by_id("zzz"), None);
    assert_eq!(catalog.supporters()[0].name, "Supporter");
}

#[test]
fn test_strict_load_keeps_warnings() {
    let file = write_catalog(
        r#"
        [[claims]]
        id = "internal-no-label"
        category = "metric"
        headline = "Hidden metric"
        sourceUrl = "https://example.com/x"
        evidenceTier = "internal"
        verified = true
        "#,
    );

    let catalog = Catalog::from_file(file.path())
        .unwrap()
        .into_checked()
        .unwrap();

    let claim = catalog.registry().verified_claim_by_id("internal-no-label").unwrap();
    assert_eq!(claim.evidence_tier, EvidenceTier::Internal);
    assert!(catalog.registry().traction_claims(None).is_empty());
}

#[test]
fn test_strict_load_rejects_duplicates() {
    let file = write_catalog(
        r#"
        [[claims]]
        id = "same"
        category = "press"
        headline = "One"
        evidenceTier = "unverified"
        verified = false

        [[claims]]
        id = "same"
        category = "press"
        headline = "Two"
        evidenceTier = "unverified"
        verified = false
        "#,
    );

    let err = Catalog::from_file(file.path())
        .unwrap()
        .into_checked()
        .unwrap_err();

    match err {
        CatalogError::Invalid(issues) => {
            assert_eq!(issues, vec![CatalogIssue::DuplicateClaimId("same".to_string())]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_file() {
    let result = Catalog::from_file("/nonexistent/catalog.toml");
    assert!(matches!(result, Err(CatalogError::FileRead(_))));
}
