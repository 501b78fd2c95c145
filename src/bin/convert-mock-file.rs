//! Converts the stubs and verifications of a single test file.

use anyhow::{Context, Result};
use clap::Parser;
use mock_migrate::logging::init_cli_logger;
use mock_migrate::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "convert-mock-file")]
#[command(author, version, about = "Rewrite pegomock stubs and verifications in one Go test file", long_about = None)]
struct Cli {
    /// Test file to rewrite in place
    path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(false);

    let change = Migration::new()?
        .convert_file(&cli.path)
        .with_context(|| format!("Failed to convert {}", cli.path.display()))?;

    if change.is_modified() {
        println!("Converted {}", cli.path.display());
    } else {
        println!("No changes needed in {}", cli.path.display());
    }

    Ok(())
}
