//! Blomso Leads
//!
//! Validates contact-form submissions and stores them.
//!
//! The validator mirrors the public `/api/lead` contract exactly: every
//! failing rule contributes one human-readable message, and validation
//! failures are data, not errors. Storage sits behind
//! [`blomso_domain::LeadStore`]; the only adapter here is in-memory and
//! lives as long as the process.
//!
//! # Examples
//!
//! ```
//! use blomso_domain::LeadStore;
//! use blomso_leads::{validate_lead, InMemoryLeadStore};
//! use serde_json::json;
//!
//! let body = json!({
//!     "type": "investor",
//!     "name": " Ada ",
//!     "email": "Ada@Example.com",
//!     "company": "Analytical Engines",
//! });
//!
//! let lead = validate_lead(&body).unwrap();
//! let store = InMemoryLeadStore::new();
//! let record = store.save_lead(lead).unwrap();
//! assert_eq!(record.email, "ada@example.com");
//! ```

#![warn(missing_docs)]

mod error;
mod store;
mod validator;

pub use error::LeadStoreError;
pub use store::InMemoryLeadStore;
pub use validator::{validate_lead, messages};
