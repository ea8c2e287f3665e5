//! Output directory and file writes.
//!
//! Files are created or truncated in place; existing contents of the
//! directory are never inspected or cleared.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory accepted images are written to.
#[derive(Debug, Clone)]
pub struct ImageDir {
    root: PathBuf,
}

impl ImageDir {
    /// Create `root` (and parents) if missing. Idempotent.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("failed to create output dir: {}", root.display()))?;
        Ok(ImageDir { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write `data` to `root/filename`, creating or truncating it.
    /// Returns the path written.
    pub fn write(&self, filename: &str, data: &[u8]) -> io::Result<PathBuf> {
        let path = self.root.join(filename);
        fs::write(&path, data)?;
        Ok(path)
    }
}
