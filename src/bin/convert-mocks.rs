//! Batch conversion of pegomock test files to gomock.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mock_migrate::logging::init_cli_logger;
use mock_migrate::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "convert-mocks")]
#[command(author, version, about = "Convert pegomock-style Go tests to gomock", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory to search for test files
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// File name suffix of test files
    #[arg(short, long, global = true)]
    suffix: Option<String>,

    /// Identifier of the gomock controller passed to mock constructors
    #[arg(short, long, global = true)]
    controller: Option<String>,

    /// Glob pattern (relative to the root) of files to skip; repeatable
    #[arg(short, long, global = true)]
    exclude: Vec<String>,

    /// YAML or JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// List files with an external `find` instead of walking the tree
    #[arg(long)]
    use_find: bool,

    /// Preview changes without writing files
    #[arg(long)]
    dry_run: bool,

    /// Print the dry-run diff without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the rewrite rules in the order they run
    Rules,

    /// Print the effective configuration as YAML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let config = load_config(&cli)?;
    let migration = Migration::from_config(&config).context("Failed to build rewrite rules")?;

    match &cli.command {
        Some(Commands::Rules) => cmd_rules(&migration),
        Some(Commands::Config) => cmd_config(&config),
        None => cmd_convert(migration, &config, &cli),
    }
}

fn load_config(cli: &Cli) -> Result<MigrationConfig> {
    let mut config = match &cli.config {
        Some(path) => MigrationConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => MigrationConfig::default(),
    };

    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    if let Some(suffix) = &cli.suffix {
        config.suffix = suffix.clone();
    }
    if let Some(controller) = &cli.controller {
        config.controller = controller.clone();
    }
    config.exclude.extend(cli.exclude.iter().cloned());

    Ok(config)
}

fn cmd_convert(migration: Migration, config: &MigrationConfig, cli: &Cli) -> Result<()> {
    let locator = Locator::from_config(config).use_find(cli.use_find);
    let migration = if cli.dry_run {
        migration.dry_run()
    } else {
        migration
    };

    let result = migration
        .run_located(&locator, |progress| match progress {
            Progress::Processing(path) => println!("Processing {}", path.display()),
            Progress::Updated { family, path } => {
                println!("Updated {} in {}", family, path.display())
            }
        })
        .context("Conversion failed")?;

    if cli.dry_run && result.files_modified() > 0 {
        if cli.no_color {
            println!("{}", result.diff());
        } else {
            println!("{}", result.colorized_diff());
        }
        println!("\n{}", result.summary);
    }
    println!("Processed {} files", result.files_processed());

    Ok(())
}

fn cmd_config(config: &MigrationConfig) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}

fn cmd_rules(migration: &Migration) -> Result<()> {
    for (name, description, rules) in migration.describe() {
        println!("{name}: {description}");
        for (idx, rule) in rules.iter().enumerate() {
            println!("  {:>2}. {}", idx + 1, rule);
        }
    }
    Ok(())
}
