//! Checks that run once before any map is processed.
//!
//! Loads the environment file, builds the ezQuake controller from it and
//! confirms the client is running. The controller is returned so the caller
//! hands the same instance to the orchestrator.

use crate::controller::CaptureController;
use crate::error::SetupError;
use crate::ezquake::{CaptureTiming, ClientController, PipeWriter};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_PROCESS_USERNAME: &str = "EZQUAKE_PROCESS_USERNAME";
pub const ENV_BIN_PATH: &str = "EZQUAKE_BIN_PATH";
pub const ENV_FIFO_PATH: &str = "EZQUAKE_FIFO_PATH";
pub const ENV_LOAD_DELAY: &str = "MAPSHOT_LOAD_DELAY_MS";
pub const ENV_SETTLE_DELAY: &str = "MAPSHOT_SETTLE_DELAY_MS";
pub const ENV_CAPTURE_DELAY: &str = "MAPSHOT_CAPTURE_DELAY_MS";

/// Overrides the location of the environment file.
pub const ENV_FILE_OVERRIDE: &str = "AUTOMAPSHOT_ENV_FILE";
const DEFAULT_ENV_FILE: &str = ".env";

#[derive(Clone, Debug, PartialEq)]
pub struct EnvConfig {
    pub process_username: String,
    pub bin_path: PathBuf,
    pub fifo_path: Option<PathBuf>,
    pub timing: CaptureTiming,
}

impl EnvConfig {
    /// Build the config from a variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SetupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let process_username = non_empty(ENV_PROCESS_USERNAME)
            .ok_or(SetupError::MissingVariable(ENV_PROCESS_USERNAME))?;
        let bin_path = non_empty(ENV_BIN_PATH)
            .map(PathBuf::from)
            .ok_or(SetupError::MissingVariable(ENV_BIN_PATH))?;
        let fifo_path = non_empty(ENV_FIFO_PATH).map(PathBuf::from);

        let defaults = CaptureTiming::default();
        let timing = CaptureTiming {
            load_delay: millis(ENV_LOAD_DELAY, non_empty(ENV_LOAD_DELAY))?
                .unwrap_or(defaults.load_delay),
            settle_delay: millis(ENV_SETTLE_DELAY, non_empty(ENV_SETTLE_DELAY))?
                .unwrap_or(defaults.settle_delay),
            capture_delay: millis(ENV_CAPTURE_DELAY, non_empty(ENV_CAPTURE_DELAY))?
                .unwrap_or(defaults.capture_delay),
        };

        Ok(Self {
            process_username: process_username.trim().to_string(),
            bin_path,
            fifo_path,
            timing,
        })
    }

    pub fn controller(&self) -> ClientController {
        let controller = ClientController::new(&self.process_username, &self.bin_path)
            .with_timing(self.timing);
        match &self.fifo_path {
            Some(path) => controller.with_pipe(PipeWriter::new(path)),
            None => controller,
        }
    }
}

fn millis(name: &'static str, raw: Option<String>) -> Result<Option<Duration>, SetupError> {
    raw.map(|value| {
        value
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| SetupError::InvalidVariable { name, value })
    })
    .transpose()
}

/// Environment file to load: `AUTOMAPSHOT_ENV_FILE` if set, else `.env`.
pub fn env_file_path() -> PathBuf {
    env::var_os(ENV_FILE_OVERRIDE)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE))
}

/// Load `env_file` into the process environment and read the config from it.
///
/// Variables already present in the environment take precedence over the
/// file.
pub fn load_environment(env_file: &Path) -> Result<EnvConfig, SetupError> {
    dotenvy::from_path(env_file).map_err(SetupError::Environment)?;
    EnvConfig::from_lookup(|name| env::var(name).ok())
}

/// Fail unless the controller's process is running.
pub fn ensure_started<C: CaptureController>(controller: &C) -> Result<(), SetupError> {
    if controller.is_started() {
        return Ok(());
    }
    Err(SetupError::NotStarted(controller.binary_path().to_path_buf()))
}

/// Full preflight: environment, controller, running process.
pub fn validate(env_file: &Path) -> Result<ClientController, SetupError> {
    let config = load_environment(env_file)?;
    let controller = config.controller();
    ensure_started(&controller)?;
    tracing::debug!(
        user = %config.process_username,
        pipe = %controller.pipe.path().display(),
        "ezQuake is running"
    );
    Ok(controller)
}
