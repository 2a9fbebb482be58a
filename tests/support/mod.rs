#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use automapshot::{CaptureController, CaptureError};
use std::cell::{Cell, RefCell};
use std::ffi::CString;
use std::fs::{self, File, OpenOptions};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output};

pub fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// In-memory controller that records every capture call in order.
pub struct FakeController<S> {
    pub started: bool,
    pub fail_captures: bool,
    pub captures: RefCell<Vec<(String, S)>>,
    pub started_queries: Cell<usize>,
    path: PathBuf,
}

impl<S> FakeController<S> {
    pub fn running() -> Self {
        Self {
            started: true,
            fail_captures: false,
            captures: RefCell::new(Vec::new()),
            started_queries: Cell::new(0),
            path: PathBuf::from("/opt/ezquake/ezquake-linux-x86_64"),
        }
    }

    pub fn stopped() -> Self {
        Self {
            started: false,
            ..Self::running()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_captures: true,
            ..Self::running()
        }
    }

    pub fn captured_maps(&self) -> Vec<String> {
        self.captures
            .borrow()
            .iter()
            .map(|(map, _)| map.clone())
            .collect()
    }
}

impl<S: Clone> CaptureController for FakeController<S> {
    type Settings = S;

    fn is_started(&self) -> bool {
        self.started_queries.set(self.started_queries.get() + 1);
        self.started
    }

    fn binary_path(&self) -> &Path {
        &self.path
    }

    fn capture(&self, map_name: &str, settings: &S) -> Result<(), CaptureError> {
        self.captures
            .borrow_mut()
            .push((map_name.to_string(), settings.clone()));
        if self.fail_captures {
            return Err(CaptureError::Other(format!("client did not load {map_name}")));
        }
        Ok(())
    }
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

pub const SAMPLE_SETTINGS: &str = r#"{
  "dm2": {"origin": [1216, -784, 376], "angles": [28, 135, 0]},
  "dm6": {"origin": [896, -1536, 488], "angles": [30, 110, 0], "commands": ["r_drawflat 0"]}
}"#;

pub fn mkfifo(path: &Path) -> Result<()> {
    let c_path = CString::new(path.as_os_str().as_bytes())?;
    let rc = unsafe { libc::mkfifo(c_path.as_ptr(), 0o600) };
    if rc != 0 {
        bail!(
            "mkfifo {} failed: {}",
            path.display(),
            std::io::Error::last_os_error()
        );
    }
    Ok(())
}

// Opens the read end without blocking so writers find a reader immediately.
pub fn open_fifo_reader(path: &Path) -> Result<File> {
    OpenOptions::new()
        .read(true)
        .custom_flags(libc::O_NONBLOCK)
        .open(path)
        .with_context(|| format!("opening {} for reading", path.display()))
}

pub fn current_uid() -> String {
    unsafe { libc::getuid() }.to_string()
}

// A long-running stand-in for the game client, killed on drop.
pub struct StandInProcess {
    child: Child,
}

impl StandInProcess {
    pub fn spawn() -> Result<Self> {
        let child = Command::new("sleep")
            .arg("30")
            .spawn()
            .context("failed to spawn stand-in process")?;
        Ok(Self { child })
    }

    pub fn pid(&self) -> u32 {
        self.child.id()
    }

    pub fn exe(&self) -> Result<PathBuf> {
        fs::read_link(format!("/proc/{}/exe", self.pid()))
            .context("failed to resolve stand-in executable")
    }
}

impl Drop for StandInProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub const ENV_VARS: &[&str] = &[
    "EZQUAKE_PROCESS_USERNAME",
    "EZQUAKE_BIN_PATH",
    "EZQUAKE_FIFO_PATH",
    "MAPSHOT_LOAD_DELAY_MS",
    "MAPSHOT_SETTLE_DELAY_MS",
    "MAPSHOT_CAPTURE_DELAY_MS",
    "AUTOMAPSHOT_ENV_FILE",
    "AUTOMAPSHOT_LOG",
];

// Command for a crate binary, run in `cwd` with no inherited configuration.
pub fn binary_command(path: &str, cwd: &Path) -> Command {
    let mut cmd = Command::new(path);
    cmd.current_dir(cwd);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run {:?}", cmd.get_program()))?;
    Ok(output)
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// Strips the "mapshot HH:MM:SS " prefix from a progress line.
pub fn progress_message(line: &str) -> &str {
    line.splitn(3, ' ').nth(2).unwrap_or(line)
}
