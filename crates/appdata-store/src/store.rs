//! Path resolution and file operations for stored values.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{DirectoryKind, Error, FilesystemAccess, OsFilesystem, Result};

/// Stateless service performing all storage operations through an injected
/// [`FilesystemAccess`].
///
/// Write-side operations (`store`, `remove`, `clear`) surface failures as
/// errors; query-side operations (`url_for`, `exists`, `retrieve`) collapse
/// every failure cause into an absent result.
#[derive(Debug, Clone)]
pub struct FileStore<F = OsFilesystem> {
    fs: F,
}

impl<F: FilesystemAccess> FileStore<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Base path for a directory kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolve`] when the platform cannot supply a base
    /// path for `directory`.
    pub fn base_url(&self, directory: DirectoryKind) -> Result<PathBuf> {
        self.fs
            .base_directory(directory)
            .ok_or(Error::Resolve { kind: directory })
    }

    /// Location a file with this name would occupy.
    ///
    /// Best-effort query: `None` when the base path cannot be resolved,
    /// never an error.
    pub fn url_for(&self, file_name: &str, directory: DirectoryKind) -> Option<PathBuf> {
        Some(self.base_url(directory).ok()?.join(file_name))
    }

    /// Whether a file is present under `file_name` in `directory`.
    ///
    /// False when the base path cannot be resolved; never an error.
    pub fn exists(&self, file_name: &str, directory: DirectoryKind) -> bool {
        match self.url_for(file_name, directory) {
            Some(url) => self.fs.file_exists(&url),
            None => false,
        }
    }

    /// Write raw bytes under `file_name` in `directory`.
    ///
    /// Write-once: when a file is already present at the target, the call is
    /// a no-op that reports success and leaves the existing content in
    /// place. There is no way to overwrite through this operation.
    ///
    /// # Errors
    ///
    /// [`Error::Resolve`] when the base path cannot be resolved,
    /// [`Error::Io`] when the underlying write fails.
    pub fn store(&self, data: &[u8], directory: DirectoryKind, file_name: &str) -> Result<()> {
        if self.exists(file_name, directory) {
            tracing::debug!(
                "store: {} already present in {}, keeping existing content",
                file_name,
                directory
            );
            return Ok(());
        }
        let url = self.base_url(directory)?.join(file_name);
        self.fs
            .write_protected(&url, data)
            .map_err(|e| Error::io(url, e))
    }

    /// Encode `value` with the JSON facility and store it under `file_name`.
    ///
    /// Subject to the same write-once contract as [`store`](Self::store).
    pub fn store_value<T: Serialize>(
        &self,
        value: &T,
        directory: DirectoryKind,
        file_name: &str,
    ) -> Result<()> {
        let bytes = serde_json::to_vec(value).map_err(|e| Error::Encode {
            file_name: file_name.to_string(),
            message: e.to_string(),
        })?;
        self.store(&bytes, directory, file_name)
    }

    /// Delete the file under `file_name` in `directory`.
    ///
    /// Compatibility contract, preserved from the original library: when the
    /// file exists the call is a no-op that reports success; deletion is
    /// only attempted once the existence check comes back negative, and the
    /// attempt may still be refused by the filesystem. Callers that need the
    /// file gone must verify with [`exists`](Self::exists) afterwards.
    ///
    /// # Errors
    ///
    /// [`Error::Resolve`] when the base path cannot be resolved,
    /// [`Error::Remove`] when the filesystem refuses the deletion.
    pub fn remove(&self, file_name: &str, directory: DirectoryKind) -> Result<()> {
        if self.exists(file_name, directory) {
            tracing::warn!(
                "remove: {} still present in {}, skipping deletion per compatibility contract",
                file_name,
                directory
            );
            return Ok(());
        }
        let url = self.base_url(directory)?.join(file_name);
        match self.fs.remove_item(&url) {
            Ok(()) => Ok(()),
            Err(_) => Err(Error::Remove { path: url }),
        }
    }

    /// Delete every entry directly under the base location for `directory`.
    ///
    /// Does nothing when the base path cannot be resolved. Deletion stops at
    /// the first entry the filesystem refuses; earlier deletions are not
    /// rolled back.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when listing the directory or deleting an entry fails.
    pub fn clear(&self, directory: DirectoryKind) -> Result<()> {
        let Ok(base) = self.base_url(directory) else {
            tracing::warn!("clear: no base directory for {}, nothing to do", directory);
            return Ok(());
        };
        let contents = self
            .fs
            .list_contents(&base)
            .map_err(|e| Error::io(base, e))?;
        for entry in contents {
            self.fs
                .remove_item(&entry)
                .map_err(|e| Error::io(entry, e))?;
        }
        Ok(())
    }

    /// Read and decode the value stored under `file_name` in `directory`.
    ///
    /// Every failure path collapses to `None`: an unresolvable base path, a
    /// missing or unreadable file, and a payload that fails to decode.
    pub fn retrieve<T: DeserializeOwned>(
        &self,
        file_name: &str,
        directory: DirectoryKind,
    ) -> Option<T> {
        let url = self.url_for(file_name, directory)?;
        let bytes = self.fs.read(&url).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}
