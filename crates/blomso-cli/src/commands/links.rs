//! Links command implementation.

use crate::error::Result;
use crate::output::Formatter;
use blomso_content::Catalog;

/// Execute the links command.
pub fn execute_links(catalog: &Catalog, formatter: &Formatter) -> Result<String> {
    formatter.format_links(catalog.links())
}
