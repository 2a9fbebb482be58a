//! Automated QuakeWorld map screenshots.
//!
//! The crate drives an already running ezQuake client: it reads per-map camera
//! settings from `map_settings.json`, checks the client is up, and walks the
//! requested maps one at a time, sending the console commands that load the
//! map, place the camera and take the screenshot. Binaries under `src/bin/`
//! wire these pieces together; the library keeps the controller behind the
//! [`CaptureController`] trait so the orchestration can be exercised without a
//! game client.

pub mod controller;
pub mod error;
pub mod ezquake;
pub mod orchestrator;
pub mod preflight;
pub mod report;
pub mod settings;

pub use controller::CaptureController;
pub use error::{CaptureError, SettingsError, SetupError};
pub use ezquake::{CaptureTiming, ClientController, MapSettings};
pub use orchestrator::{CaptureOutcome, MapOutcome, SKIP_NO_SETTINGS, expand_request, run};
pub use preflight::{EnvConfig, ensure_started, load_environment, validate};
pub use report::ProgressPrinter;
pub use settings::SettingsStore;

use tracing_subscriber::EnvFilter;

/// Settings file read from the working directory.
pub const SETTINGS_FILE: &str = "map_settings.json";

/// Sole-argument sentinel that expands to every configured map.
pub const ALL_MAPS: &str = "all";

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "AUTOMAPSHOT_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr log subscriber used by the binaries.
///
/// Progress lines go to stdout through [`ProgressPrinter`]; diagnostics go
/// here so the two never interleave on the same stream.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
