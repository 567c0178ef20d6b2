//! Blomso CLI library.
//!
//! Core of the `blomso` command-line tool: argument parsing, catalog
//! loading, command execution and output formatting. Commands return the
//! text to print so they can be tested without capturing stdout.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};

use blomso_content::Catalog;
use std::path::Path;

/// Load the catalog without the strict audit, so `audit` can report issues
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}

/// Run a parsed command against a loaded catalog
pub fn run_command(command: Command, catalog: &Catalog, formatter: &Formatter) -> Result<String> {
    match command {
        Command::Claims(args) => commands::execute_claims(args, catalog, formatter),
        Command::Show(args) => commands::execute_show(args, catalog, formatter),
        Command::Supporters => commands::execute_supporters(catalog, formatter),
        Command::Audit => commands::execute_audit(catalog, formatter),
        Command::Links => commands::execute_links(catalog, formatter),
    }
}
