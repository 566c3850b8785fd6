#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use uuid::Uuid;
use which::which;

/// Finds and returns the path to the C++ compiler `name`
pub fn compiler_path(name: &str) -> Result<OsString> {
    which(name)
        .map(PathBuf::into_os_string)
        .with_context(|| format!("Cannot find a C++ compiler on path ({name})"))
}

/// A uniquely named directory under the system temp dir, removed on drop.
#[derive(Debug)]
pub struct ScratchDir {
    /// Location of the directory.
    path: PathBuf,
}

impl ScratchDir {
    /// Creates a fresh scratch directory whose name starts with `prefix`.
    pub fn new(prefix: &str) -> Result<Self> {
        let path = std::env::temp_dir().join(format!("{prefix}-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&path)
            .with_context(|| format!("Could not create {}", path.display()))?;
        Ok(Self { path })
    }

    /// Path of the directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of `name` inside the directory.
    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.path) {
            tracing::debug!("Could not delete {}: {e}", self.path.display());
        }
    }
}
