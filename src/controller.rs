//! Seam between the orchestration and the game client.

use crate::error::CaptureError;
use std::path::Path;

/// Handle to a running external application that can take map captures.
///
/// Implementations own their settings record type; callers pass records
/// through without inspecting them.
pub trait CaptureController {
    type Settings;

    /// Whether the application process is currently running.
    fn is_started(&self) -> bool;

    /// Executable the controller expects to find running.
    fn binary_path(&self) -> &Path;

    /// Load `map_name` and capture it using `settings`. Blocks until the
    /// command sequence has been delivered and its delays have elapsed.
    fn capture(&self, map_name: &str, settings: &Self::Settings) -> Result<(), CaptureError>;
}
