//! Supporters command implementation.

use crate::error::Result;
use crate::output::Formatter;
use blomso_content::Catalog;

/// Execute the supporters command.
pub fn execute_supporters(catalog: &Catalog, formatter: &Formatter) -> Result<String> {
    formatter.format_supporters(&catalog.supporter_groups())
}
