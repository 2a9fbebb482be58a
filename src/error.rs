//! Error taxonomy for the library.
//!
//! Setup and settings errors are fatal and abort the run before any map is
//! touched. Capture errors are per-map and never stop the loop.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Preflight failures: environment or external process not ready.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("unable to load environment variables. create .env (see .env.example)")]
    Environment(#[source] dotenvy::Error),
    #[error("environment variable {0} is not set")]
    MissingVariable(&'static str),
    #[error("environment variable {name} must be a whole number of milliseconds, got '{value}'")]
    InvalidVariable { name: &'static str, value: String },
    #[error("ezQuake is not started ({})", .0.display())]
    NotStarted(PathBuf),
}

/// Failures loading `map_settings.json`.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("reading map settings {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing map settings {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("map settings {} failed schema validation:\n{details}", .path.display())]
    Schema { path: PathBuf, details: String },
}

/// Failures talking to the game client during a capture.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("writing to command pipe {}", .path.display())]
    Pipe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Other(String),
}
