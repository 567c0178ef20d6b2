//! Lead module - contact-form submissions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who submitted the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadType {
    /// Prospective investor
    Investor,

    /// Farm or land operator
    Operator,
}

impl LeadType {
    /// Get the lead type as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadType::Investor => "investor",
            LeadType::Operator => "operator",
        }
    }

    /// Parse an exact wire value; no case folding
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "investor" => Some(LeadType::Investor),
            "operator" => Some(LeadType::Operator),
            _ => None,
        }
    }
}

impl fmt::Display for LeadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, normalised submission that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    /// Submitter type
    pub lead_type: LeadType,

    /// Trimmed name
    pub name: String,

    /// Trimmed, lowercased email
    pub email: String,

    /// Trimmed company
    pub company: String,

    /// Trimmed message, if one was sent
    pub message: Option<String>,
}

/// A stored lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    /// Generated identifier
    pub id: String,

    /// Submitter type
    #[serde(rename = "type")]
    pub lead_type: LeadType,

    /// Name
    pub name: String,

    /// Email
    pub email: String,

    /// Company
    pub company: String,

    /// Optional message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Creation time, RFC 3339 UTC
    pub created_at: String,
}

impl LeadRecord {
    /// Build a record from a new lead and the store-assigned id and timestamp
    pub fn from_new(lead: NewLead, id: String, created_at: String) -> Self {
        Self {
            id,
            lead_type: lead.lead_type,
            name: lead.name,
            email: lead.email,
            company: lead.company,
            message: lead.message,
            created_at,
        }
    }
}
