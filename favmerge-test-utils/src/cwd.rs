//! Scoped change of the process working directory
//!
//! The working directory is process-wide, so tests using this guard must not
//! run concurrently with each other (mark them `#[serial]`).

use std::env;
use std::io::Result;
use std::path::{Path, PathBuf};

/// Switches into a directory and switches back when dropped
pub struct CurrentDirGuard {
    previous: PathBuf,
}

impl CurrentDirGuard {
    /// Change into `dir`, remembering the current directory
    pub fn enter(dir: &Path) -> Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(dir)?;
        Ok(Self { previous })
    }
}

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}
