//! ezQuake console FIFO writer.
//!
//! On Unix the client reads console commands, one per line, from a named pipe
//! it creates at startup. The writer opens the pipe per command and never
//! blocks: a pipe without a reader is an error, not a hang.

use crate::error::CaptureError;
use crate::ezquake::mapshot::Console;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::os::unix::fs::{FileTypeExt, OpenOptionsExt};
use std::path::{Path, PathBuf};

/// Pipe path ezQuake creates for `username`.
pub fn default_fifo_path(username: &str) -> PathBuf {
    PathBuf::from(format!("/tmp/ezquake_fifo_{username}"))
}

#[derive(Clone, Debug)]
pub struct PipeWriter {
    path: PathBuf,
}

impl PipeWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, line: &str) -> Result<(), CaptureError> {
        self.write_line(line).map_err(|source| CaptureError::Pipe {
            path: self.path.clone(),
            source,
        })
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let meta = self.path.metadata()?;
        if !meta.file_type().is_fifo() {
            return Err(io::Error::other("not a named pipe"));
        }
        let mut pipe = OpenOptions::new()
            .write(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(&self.path)?;
        pipe.write_all(format!("{line}\n").as_bytes())?;
        tracing::debug!(command = line, "sent console command");
        Ok(())
    }
}

impl Console for PipeWriter {
    fn command(&self, line: &str) -> Result<(), CaptureError> {
        self.write(line)
    }
}
