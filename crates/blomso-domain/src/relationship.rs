//! Relationship module - the nature of a program or partner association

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of association behind a program-category claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// Accelerator cohort membership
    Accelerator,

    /// Startup or vendor program membership
    Program,

    /// Commercial or research partnership
    Partner,
}

impl Relationship {
    /// Get the relationship name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Accelerator => "accelerator",
            Relationship::Program => "program",
            Relationship::Partner => "partner",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
