//! Blomso CLI - Command-line interface for the site content catalog.

use blomso_cli::{load_catalog, run_command, Cli, Formatter};
use clap::Parser;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> blomso_cli::Result<()> {
    let cli = Cli::parse();

    let formatter = Formatter::new(cli.format.into(), !cli.no_color);
    let catalog = load_catalog(cli.catalog.as_deref())?;

    let output = run_command(cli.command, &catalog, &formatter)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
