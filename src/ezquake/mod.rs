//! ezQuake client controller.
//!
//! Pairs a [`ProcessController`] (is the client running?) with a
//! [`PipeWriter`] (send it console commands) and implements
//! [`CaptureController`] on top of the planned command sequence in
//! [`mapshot`].

pub mod mapshot;
pub mod pipe;
pub mod process;

pub use pipe::{PipeWriter, default_fifo_path};
pub use process::ProcessController;

use crate::controller::CaptureController;
use crate::error::CaptureError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Camera placement and extra console commands for one map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapSettings {
    /// Camera position (x y z).
    pub origin: [f32; 3],
    /// View angles (pitch yaw roll).
    pub angles: [f32; 3],
    #[serde(default)]
    pub commands: Vec<String>,
}

/// Waits inserted into the capture sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureTiming {
    /// After `map`, before the camera is placed.
    pub load_delay: Duration,
    /// After the camera and extra commands, before `screenshot`.
    pub settle_delay: Duration,
    /// After `screenshot`, so the file is written before the next map loads.
    pub capture_delay: Duration,
}

impl CaptureTiming {
    pub fn immediate() -> Self {
        Self {
            load_delay: Duration::ZERO,
            settle_delay: Duration::ZERO,
            capture_delay: Duration::ZERO,
        }
    }
}

impl Default for CaptureTiming {
    fn default() -> Self {
        Self {
            load_delay: Duration::from_millis(3000),
            settle_delay: Duration::from_millis(500),
            capture_delay: Duration::from_millis(500),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ClientController {
    pub process: ProcessController,
    pub pipe: PipeWriter,
    pub timing: CaptureTiming,
}

impl ClientController {
    /// Controller for the client owned by `username` running `bin_path`,
    /// using the user's default command pipe and default timing.
    pub fn new(username: &str, bin_path: impl Into<PathBuf>) -> Self {
        Self {
            process: ProcessController::new(username, bin_path),
            pipe: PipeWriter::new(default_fifo_path(username)),
            timing: CaptureTiming::default(),
        }
    }

    pub fn with_pipe(mut self, pipe: PipeWriter) -> Self {
        self.pipe = pipe;
        self
    }

    pub fn with_timing(mut self, timing: CaptureTiming) -> Self {
        self.timing = timing;
        self
    }
}

impl CaptureController for ClientController {
    type Settings = MapSettings;

    fn is_started(&self) -> bool {
        self.process.is_started()
    }

    fn binary_path(&self) -> &Path {
        self.process.path()
    }

    fn capture(&self, map_name: &str, settings: &MapSettings) -> Result<(), CaptureError> {
        let steps = mapshot::plan(map_name, settings, &self.timing);
        mapshot::execute(&self.pipe, &steps)
    }
}
