//! Console command plan for a single map capture.
//!
//! A capture is planned as a flat list of steps first and executed second, so
//! the exact command sequence can be checked without a client or any waiting.

use crate::error::CaptureError;
use crate::ezquake::{CaptureTiming, MapSettings};
use std::thread;
use std::time::Duration;

/// Directory (relative to the client's screenshot root) captures land in.
pub const SCREENSHOT_DIR: &str = "mapshots";

#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Command(String),
    Wait(Duration),
}

/// Anything that accepts ezQuake console commands, one per call.
pub trait Console {
    fn command(&self, line: &str) -> Result<(), CaptureError>;
}

/// Plan the command sequence that captures `map_name`.
///
/// Loads the map, waits for it, places the camera, runs the map's extra
/// commands, lets the frame settle and takes the screenshot.
pub fn plan(map_name: &str, settings: &MapSettings, timing: &CaptureTiming) -> Vec<Step> {
    let [x, y, z] = settings.origin;
    let [pitch, yaw, roll] = settings.angles;

    let mut steps = vec![
        Step::Command(format!("map {map_name}")),
        Step::Wait(timing.load_delay),
        Step::Command(format!("setpos {x} {y} {z}")),
        Step::Command(format!("setang {pitch} {yaw} {roll}")),
    ];
    steps.extend(
        settings
            .commands
            .iter()
            .map(|cmd| Step::Command(cmd.trim().to_string())),
    );
    steps.push(Step::Wait(timing.settle_delay));
    steps.push(Step::Command(format!("screenshot {SCREENSHOT_DIR}/{map_name}")));
    steps.push(Step::Wait(timing.capture_delay));
    steps
}

/// Run planned steps in order, stopping at the first failed command.
pub fn execute<C: Console + ?Sized>(console: &C, steps: &[Step]) -> Result<(), CaptureError> {
    for step in steps {
        match step {
            Step::Command(line) => console.command(line)?,
            Step::Wait(delay) if delay.is_zero() => {}
            Step::Wait(delay) => thread::sleep(*delay),
        }
    }
    Ok(())
}
