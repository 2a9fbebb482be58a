//! Capture screenshots of the named maps in a running ezQuake client.
//!
//! Preflight runs before anything else: the environment file must load and the
//! configured client must be running, otherwise the run aborts with exit code
//! 1 before `map_settings.json` is read. Maps without settings are reported
//! and skipped; they do not change the exit code.

use anyhow::Result;
use automapshot::{ProgressPrinter, SETTINGS_FILE, SettingsStore, init_logging, preflight};
use clap::Parser;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "automapshot", version)]
#[command(about = "Automate screenshots of QuakeWorld maps.")]
#[command(after_help = "Example: automapshot dm2 dm6")]
struct Cli {
    /// Maps to capture. Pass `all` on its own to capture every configured map.
    #[arg(value_name = "MAPS")]
    maps: Vec<String>,
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

    let controller = preflight::validate(&preflight::env_file_path())?;
    let store = SettingsStore::load(Path::new(SETTINGS_FILE))?;

    let mut printer = ProgressPrinter::stdout();
    automapshot::run(&cli.maps, &store, &controller, |outcome| {
        printer.outcome(outcome)
    });
    Ok(())
}
