//! Scratch working directories for tests.
//!
//! `classgen` writes into the process working directory by default. The
//! working directory is process-global, so every [`ScratchWorkdir`] holds a
//! global mutex for its whole lifetime and restores the previous directory
//! on drop.
//!
//! # Examples
//!
//! ```no_run
//! use test_helpers::cwd::ScratchWorkdir;
//!
//! let scratch = ScratchWorkdir::enter().expect("enter scratch dir");
//! // Relative paths now resolve inside `scratch.path()`.
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use parking_lot::{Mutex, MutexGuard};
use std::sync::LazyLock;
use tempfile::TempDir;

static CWD_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// A temporary directory that is also the current working directory.
#[must_use = "dropping restores the prior working directory"]
pub struct ScratchWorkdir {
    original: Utf8PathBuf,
    path: Utf8PathBuf,
    // Dropped after `Drop::drop` restores `original`, so the directory is
    // never removed while it is still the working directory.
    _temp: TempDir,
    _lock: MutexGuard<'static, ()>,
}

impl ScratchWorkdir {
    /// Creates a temporary directory and makes it the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the temporary directory cannot be created, a
    /// path is not valid UTF-8, or the working directory cannot be changed.
    pub fn enter() -> Result<Self> {
        let lock = CWD_MUTEX.lock();
        let original = utf8(std::env::current_dir().context("read current dir")?)?;
        let temp = tempfile::tempdir().context("create scratch dir")?;
        let path = utf8(temp.path().to_path_buf())?;
        std::env::set_current_dir(&path).context("enter scratch dir")?;
        Ok(Self {
            original,
            path,
            _temp: temp,
            _lock: lock,
        })
    }

    /// Returns the scratch directory.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl Drop for ScratchWorkdir {
    fn drop(&mut self) {
        // Best effort: a failure here cannot be reported from `drop`.
        let _unused = std::env::set_current_dir(&self.original);
    }
}

fn utf8(path: std::path::PathBuf) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|non_utf8| anyhow!("path is not valid UTF-8: {}", non_utf8.display()))
}
