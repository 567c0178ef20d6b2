//! In-memory lead storage
//!
//! Placeholder adapter: records survive only for the lifetime of the
//! process. Replace with a database or CRM adapter implementing
//! [`LeadStore`] when one exists.

use crate::LeadStoreError;
use blomso_domain::{LeadRecord, LeadStore, NewLead};
use chrono::{SecondsFormat, Utc};
use std::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// Lead store backed by a process-local vector
#[derive(Debug, Default)]
pub struct InMemoryLeadStore {
    records: RwLock<Vec<LeadRecord>>,
}

impl InMemoryLeadStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeadStore for InMemoryLeadStore {
    type Error = LeadStoreError;

    fn save_lead(&self, lead: NewLead) -> Result<LeadRecord, Self::Error> {
        let record = LeadRecord::from_new(
            lead,
            Uuid::now_v7().to_string(),
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        );

        self.records
            .write()
            .map_err(|_| LeadStoreError::Poisoned)?
            .push(record.clone());

        info!(
            id = %record.id,
            lead_type = %record.lead_type,
            email = %record.email,
            "Lead saved"
        );

        Ok(record)
    }

    fn leads(&self) -> Result<Vec<LeadRecord>, Self::Error> {
        Ok(self
            .records
            .read()
            .map_err(|_| LeadStoreError::Poisoned)?
            .clone())
    }

    fn count(&self) -> Result<usize, Self::Error> {
        Ok(self
            .records
            .read()
            .map_err(|_| LeadStoreError::Poisoned)?
            .len())
    }
}
