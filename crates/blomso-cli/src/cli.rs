//! CLI command definitions and argument parsing.

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Blomso CLI - Inspect and audit the site content catalog.
#[derive(Debug, Parser)]
#[command(name = "blomso")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Catalog file (defaults to the embedded catalog)
    #[arg(short, long, global = true, env = "BLOMSO_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List claims approved for display
    Claims(ClaimsArgs),

    /// Show one verified claim
    Show(ShowArgs),

    /// List supporters by band
    Supporters,

    /// Check the catalog for content errors
    Audit,

    /// List external product links
    Links,
}

/// Arguments for the claims command.
#[derive(Debug, Parser)]
pub struct ClaimsArgs {
    /// Filter by category (metric, customer, press, milestone, capability, program, award)
    #[arg(short = 'k', long)]
    pub category: Option<String>,

    /// Apply the stricter traction policy
    #[arg(short, long)]
    pub traction: bool,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Claim id
    pub id: String,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}
