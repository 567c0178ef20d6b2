//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{LeadRecord, NewLead};

/// Trait for persisting contact-form leads
///
/// Implemented by the infrastructure layer (blomso-leads). Swap the
/// implementation for a database or CRM adapter; the interface stays the same.
pub trait LeadStore: Send + Sync {
    /// Error type for store operations
    type Error;

    /// Store a validated lead, assigning its id and creation time
    fn save_lead(&self, lead: NewLead) -> Result<LeadRecord, Self::Error>;

    /// All stored leads, oldest first
    fn leads(&self) -> Result<Vec<LeadRecord>, Self::Error>;

    /// Number of stored leads
    fn count(&self) -> Result<usize, Self::Error> {
        Ok(self.leads()?.len())
    }
}
