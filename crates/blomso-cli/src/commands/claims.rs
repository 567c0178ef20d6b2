//! Claims command implementation.

use crate::cli::ClaimsArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use blomso_content::Catalog;
use blomso_domain::ClaimCategory;

/// Execute the claims command.
pub fn execute_claims(args: ClaimsArgs, catalog: &Catalog, formatter: &Formatter) -> Result<String> {
    let category = args
        .category
        .as_deref()
        .map(|c| c.parse::<ClaimCategory>().map_err(CliError::InvalidInput))
        .transpose()?;

    let registry = catalog.registry();
    let claims = if args.traction {
        registry.traction_claims(category)
    } else {
        registry.verified_claims(category)
    };

    formatter.format_claims(&claims)
}
