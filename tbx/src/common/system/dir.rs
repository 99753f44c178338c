//! # Directory Excursions (`common::system::dir`)
//!
//! File: tbx/src/common/system/dir.rs
//!
//! `DirGuard` changes the process working directory and changes back to
//! where it started when dropped. `chdir` wraps a closure in such an
//! excursion. Like the environment, the working directory is process-wide.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Returns to the original working directory on drop.
#[derive(Debug)]
#[must_use = "the original directory is restored as soon as the guard is dropped"]
pub struct DirGuard {
    origin: PathBuf,
}

impl DirGuard {
    /// Records the current directory, then changes into `dir`.
    ///
    /// # Errors
    ///
    /// Fails if the current directory cannot be determined (for example,
    /// it has been removed) or if `dir` cannot be entered. In both cases the
    /// working directory is left unchanged.
    pub fn enter(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let origin = env::current_dir().context("Failed to determine current directory")?;
        env::set_current_dir(dir)
            .with_context(|| format!("Failed to change directory to {}", dir.display()))?;
        debug!("chdir: {} -> {}", origin.display(), dir.display());
        Ok(DirGuard { origin })
    }

    /// The directory that will be restored.
    pub fn origin(&self) -> &Path {
        &self.origin
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        match env::set_current_dir(&self.origin) {
            Ok(()) => debug!("chdir: back to {}", self.origin.display()),
            Err(err) => warn!(
                "Failed to return to directory {}: {}",
                self.origin.display(),
                err
            ),
        }
    }
}

/// Runs `f` with `dir` as the working directory.
pub fn chdir<P, F, R>(dir: P, f: F) -> Result<R>
where
    P: AsRef<Path>,
    F: FnOnce() -> R,
{
    let _guard = DirGuard::enter(dir)?;
    Ok(f())
}
