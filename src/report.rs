//! Timestamped progress lines on stdout.

use crate::orchestrator::MapOutcome;
use chrono::Local;
use std::io::{self, Write};

const DEFAULT_PREFIX: &str = "mapshot";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Prints `<prefix> <HH:MM:SS> <message>` lines, flushing after each one.
pub struct ProgressPrinter<W: Write> {
    prefix: String,
    out: W,
}

impl ProgressPrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(DEFAULT_PREFIX, io::stdout())
    }
}

impl<W: Write> ProgressPrinter<W> {
    pub fn new(prefix: impl Into<String>, out: W) -> Self {
        Self {
            prefix: prefix.into(),
            out,
        }
    }

    pub fn line(&mut self, message: &str) {
        let timestamp = Local::now().format(TIME_FORMAT);
        // A closed stdout must not abort the capture loop.
        let _ = writeln!(self.out, "{} {} {}", self.prefix, timestamp, message);
        let _ = self.out.flush();
    }

    pub fn outcome(&mut self, outcome: &MapOutcome) {
        self.line(&outcome.to_string());
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
