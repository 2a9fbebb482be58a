//! Locate a running ezQuake process by owner and executable.

use std::ffi::CString;
use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

const PROC_ROOT: &str = "/proc";
const PASSWD_BUF_LEN: usize = 16 * 1024;

#[derive(Clone, Debug)]
pub struct ProcessController {
    username: String,
    path: PathBuf,
}

impl ProcessController {
    pub fn new(username: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            username: username.into(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_started(&self) -> bool {
        !self.pids().is_empty()
    }

    /// Pids owned by the configured user whose executable is the configured
    /// binary. Processes we may not inspect are ignored.
    pub fn pids(&self) -> Vec<u32> {
        let Some(uid) = uid_for_user(&self.username) else {
            tracing::debug!(user = %self.username, "unknown process owner");
            return Vec::new();
        };
        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());

        let Ok(entries) = fs::read_dir(PROC_ROOT) else {
            tracing::debug!("{PROC_ROOT} is not readable");
            return Vec::new();
        };

        let mut pids: Vec<u32> = entries
            .flatten()
            .filter_map(|entry| {
                let pid: u32 = entry.file_name().to_str()?.parse().ok()?;
                if entry.metadata().ok()?.uid() != uid {
                    return None;
                }
                let exe = fs::read_link(entry.path().join("exe")).ok()?;
                (exe == target).then_some(pid)
            })
            .collect();
        pids.sort_unstable();
        tracing::debug!(?pids, path = %target.display(), "matched client processes");
        pids
    }
}

/// Resolve a user name (or a numeric uid) to a uid via the passwd database.
fn uid_for_user(name: &str) -> Option<libc::uid_t> {
    if let Ok(uid) = name.parse::<libc::uid_t>() {
        return Some(uid);
    }
    let c_name = CString::new(name).ok()?;
    let mut buf = vec![0 as libc::c_char; PASSWD_BUF_LEN];
    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::passwd = std::ptr::null_mut();
    let rc = unsafe {
        libc::getpwnam_r(
            c_name.as_ptr(),
            &mut pwd,
            buf.as_mut_ptr(),
            buf.len(),
            &mut result,
        )
    };
    if rc != 0 || result.is_null() {
        return None;
    }
    Some(pwd.pw_uid)
}
