//! Blomso Domain Layer
//!
//! This crate contains the content model for the Blomso site. It defines the
//! value types every other crate shares and the trait interface for lead
//! persistence. Loading, filtering and serving live in other crates.
//!
//! ## Key Concepts
//!
//! - **Claim**: A single assertable fact about the company, shown publicly only when sourced
//! - **Evidence Tier**: How strongly a claim's source is attested (external → self → internal → unverified)
//! - **Supporter**: A partner or program logo, grouped into display bands
//! - **External Link**: Product destinations the site redirects to
//! - **Lead**: A contact-form submission from an investor or operator
//!
//! ## Architecture
//!
//! - Only `serde` as an external dependency (wire names are part of the model)
//! - No I/O, no global state
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod evidence;
pub mod lead;
pub mod link;
pub mod relationship;
pub mod supporter;
pub mod traits;

// Re-exports for convenience
pub use claim::{Claim, ClaimCategory};
pub use evidence::EvidenceTier;
pub use lead::{LeadRecord, LeadType, NewLead};
pub use link::{ExternalLink, ExternalLinks, LinkKey};
pub use relationship::Relationship;
pub use supporter::{Supporter, SupporterBand};
pub use traits::LeadStore;
