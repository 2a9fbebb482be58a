//! Walks the requested maps and captures each configured one.
//!
//! Maps are processed strictly in request order, one at a time. Each outcome is
//! handed to the caller's reporter as soon as it is known so progress is
//! visible map by map.

use crate::ALL_MAPS;
use crate::controller::CaptureController;
use crate::settings::SettingsStore;
use std::fmt;

/// Reason reported for maps without a settings entry.
pub const SKIP_NO_SETTINGS: &str = "no settings defined";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureOutcome {
    Success,
    Skipped(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapOutcome {
    pub map: String,
    pub outcome: CaptureOutcome,
}

impl fmt::Display for MapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            CaptureOutcome::Success => write!(f, "{} (success)", self.map),
            CaptureOutcome::Skipped(reason) => write!(f, "{} (skip, {reason})", self.map),
        }
    }
}

/// Resolve the requested names into the list to process.
///
/// Only a request consisting of exactly `all` expands to every configured map;
/// `all` alongside other names is kept as a literal map name.
pub fn expand_request<S>(requested: &[String], store: &SettingsStore<S>) -> Vec<String> {
    match requested {
        [only] if only == ALL_MAPS => store.all_map_names(),
        _ => requested.to_vec(),
    }
}

/// Capture every requested map, reporting each outcome as it is produced.
///
/// A capture error is logged and the map is still reported as a success; the
/// loop always continues with the next map.
pub fn run<C, R>(
    requested: &[String],
    store: &SettingsStore<C::Settings>,
    controller: &C,
    mut report: R,
) -> Vec<MapOutcome>
where
    C: CaptureController,
    R: FnMut(&MapOutcome),
{
    let maps = expand_request(requested, store);
    let mut outcomes = Vec::with_capacity(maps.len());

    for map in maps {
        let outcome = match store.get(&map) {
            None => CaptureOutcome::Skipped(SKIP_NO_SETTINGS.to_string()),
            Some(settings) => {
                if let Err(err) = controller.capture(&map, settings) {
                    tracing::warn!(map = %map, error = %err, "capture command failed");
                }
                CaptureOutcome::Success
            }
        };
        let outcome = MapOutcome { map, outcome };
        report(&outcome);
        outcomes.push(outcome);
    }

    outcomes
}
