//! Audit command implementation.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use blomso_content::{audit, Catalog};

/// Execute the audit command.
///
/// Warnings are reported but pass; any error-severity issue fails the
/// command so it can gate content changes.
pub fn execute_audit(catalog: &Catalog, formatter: &Formatter) -> Result<String> {
    let issues = audit(catalog);
    let report = formatter.format_issues(&issues)?;

    let blocking = issues.iter().filter(|i| i.is_blocking()).count();
    if blocking > 0 {
        return Err(CliError::AuditFailed { report, blocking });
    }

    Ok(report)
}
