//! File-backed store
//!
//! Keeps the value in a single file. Writes go to a sibling temp file
//! first and are renamed over the target, so a reader never sees a
//! half-written table.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Store;

/// Store that persists the value in one file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file; a missing file reads as `""`
    pub fn try_get(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write `value` via temp file + rename
    pub fn try_set(&self, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    /// Remove the file; a missing file is already reset
    pub fn try_reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// "levels.json" -> "levels.json.tmp"
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("store"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Store for FileStore {
    fn get(&self) -> String {
        self.try_get().unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to read pattern store");
            String::new()
        })
    }

    fn set(&self, value: String) {
        if let Err(e) = self.try_set(&value) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write pattern store");
        }
    }

    fn reset(&self) {
        if let Err(e) = self.try_reset() {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to reset pattern store");
        }
    }
}
