//! Catalog error types

use crate::CatalogIssue;
use thiserror::Error;

/// Errors that can occur while loading the content catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the catalog file
    #[error("Failed to read catalog file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse catalog TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Catalog failed the strict audit
    #[error("Catalog has {} blocking issue(s): {}", .0.len(), summarize(.0))]
    Invalid(Vec<CatalogIssue>),
}

fn summarize(issues: &[CatalogIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
