//! Validate a map settings file against the bundled schema.
//!
//! Usage:
//!   validate-settings
//!   validate-settings --file path/to/map_settings.json
//!
//! Prints every configured map name, one per line, in the order `all` would
//! capture them.

use anyhow::{Context, Result};
use automapshot::{SETTINGS_FILE, SettingsStore, init_logging};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "validate-settings", version)]
#[command(about = "Validate map_settings.json and list its maps")]
struct Cli {
    /// Settings file to check.
    #[arg(long, default_value = SETTINGS_FILE)]
    file: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let store = SettingsStore::load(&cli.file)
        .with_context(|| format!("validating {}", cli.file.display()))?;
    if store.is_empty() {
        eprintln!("{} defines no maps", cli.file.display());
    }
    for name in store.all_map_names() {
        println!("{name}");
    }
    Ok(())
}
