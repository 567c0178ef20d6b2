//! Lead storage error types

use thiserror::Error;

/// Errors that can occur in a lead store
#[derive(Error, Debug)]
pub enum LeadStoreError {
    /// Lock was poisoned by a panicking writer
    #[error("Lead store lock poisoned")]
    Poisoned,
}
