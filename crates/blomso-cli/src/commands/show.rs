//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use blomso_content::Catalog;

/// Execute the show command.
///
/// Unverified claims are reported as missing, the same answer the site gives.
pub fn execute_show(args: ShowArgs, catalog: &Catalog, formatter: &Formatter) -> Result<String> {
    let claim = catalog
        .registry()
        .verified_claim_by_id(&args.id)
        .ok_or(CliError::NotFound(args.id))?;

    formatter.format_claim(claim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_show_hides_unverified() {
        let catalog = Catalog::builtin().unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let output = execute_show(
            ShowArgs {
                id: "founded".to_string(),
            },
            &catalog,
            &formatter,
        )
        .unwrap();
        assert!(output.contains("Company founded"));

        let result = execute_show(
            ShowArgs {
                id: "seed-round".to_string(),
            },
            &catalog,
            &formatter,
        );
        assert!(matches!(result, Err(CliError::NotFound(id)) if id == "seed-round"));
    }
}
