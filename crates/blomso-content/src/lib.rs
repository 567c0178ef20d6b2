//! Blomso Content Layer
//!
//! Loads the content catalog (claims, supporters, external links) once at
//! startup and answers the one question every page asks: which claims may
//! I render?
//!
//! Two eligibility policies exist:
//! - [`ClaimRegistry::verified_claims`]: reviewed and approved for display
//! - [`ClaimRegistry::traction_claims`]: verified and backed by evidence a
//!   reader can trace (external, self-published, or internal with a named source)
//!
//! # Examples
//!
//! ```
//! use blomso_content::Catalog;
//! use blomso_domain::ClaimCategory;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let metrics = catalog.registry().traction_claims(Some(ClaimCategory::Metric));
//! assert!(metrics.iter().all(|c| c.verified));
//! ```

#![warn(missing_docs)]

pub mod audit;
pub mod catalog;
mod error;
pub mod pages;
pub mod registry;
pub mod site;

pub use audit::{audit, CatalogIssue, Severity};
pub use catalog::Catalog;
pub use error::CatalogError;
pub use pages::{HomePage, PlatformPage, SupporterGroup, TractionPage};
pub use registry::ClaimRegistry;
