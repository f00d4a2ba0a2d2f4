//! Filesystem access abstraction
//!
//! [`FilesystemAccess`] is the seam between the store and the OS: production
//! code uses [`OsFilesystem`], tests substitute their own implementation.

use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::DirectoryKind;

/// Abstraction over OS file operations.
///
/// Injected into [`FileStore`](crate::FileStore) so every operation can be
/// exercised against a fake filesystem in tests.
pub trait FilesystemAccess {
    /// Platform base path for a directory kind, `None` when the platform
    /// cannot supply one.
    fn base_directory(&self, kind: DirectoryKind) -> Option<PathBuf>;

    /// Whether a file is present at `path`.
    fn file_exists(&self, path: &Path) -> bool;

    /// Write `data` to `path` with the strongest at-rest protection the
    /// platform offers, creating missing parent directories.
    fn write_protected(&self, path: &Path, data: &[u8]) -> io::Result<()>;

    /// Read the full contents of the file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Remove a file or directory tree. Removing a path that does not
    /// exist is a success.
    fn remove_item(&self, path: &Path) -> io::Result<()>;

    /// Paths of the entries directly under `dir`.
    fn list_contents(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Production [`FilesystemAccess`] backed by the OS standard directories.
///
/// Resolution has two modes:
/// - [`OsFilesystem::new`] maps [`DirectoryKind::UserData`] to the platform
///   data directory and [`DirectoryKind::Cache`] to the platform cache
///   directory, each joined with an application namespace so embedders do
///   not collide.
/// - [`OsFilesystem::rooted`] maps every kind to a subdirectory of a fixed
///   root, for tests and relocatable installs.
#[derive(Debug, Clone)]
pub struct OsFilesystem {
    namespace: Option<String>,
    root: Option<PathBuf>,
}

impl OsFilesystem {
    /// Resolve against the platform standard directories, namespaced by
    /// application name.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            namespace: Some(app_name.into()),
            root: None,
        }
    }

    /// Resolve every kind under a fixed root: `<root>/documents` for user
    /// data and `<root>/caches` for caches.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            namespace: None,
            root: Some(root.into()),
        }
    }
}

impl FilesystemAccess for OsFilesystem {
    fn base_directory(&self, kind: DirectoryKind) -> Option<PathBuf> {
        if let Some(root) = &self.root {
            return Some(root.join(kind.as_str()));
        }
        let base = match kind {
            DirectoryKind::UserData => dirs::data_dir()?,
            DirectoryKind::Cache => dirs::cache_dir()?,
        };
        match &self.namespace {
            Some(ns) => Some(base.join(ns)),
            None => Some(base),
        }
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn write_protected(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            // Owner-only access is the closest analogue of complete at-rest
            // file protection on desktop platforms.
            options.mode(0o600);
        }
        let mut file = options.open(path)?;
        file.write_all(data)?;
        file.sync_all()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn remove_item(&self, path: &Path) -> io::Result<()> {
        let result = if path.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        match result {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    fn list_contents(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn rooted_maps_kinds_to_subdirectories() {
        let fs = OsFilesystem::rooted("/srv/app");
        assert_eq!(
            fs.base_directory(DirectoryKind::UserData),
            Some(PathBuf::from("/srv/app/documents"))
        );
        assert_eq!(
            fs.base_directory(DirectoryKind::Cache),
            Some(PathBuf::from("/srv/app/caches"))
        );
    }

    #[test]
    fn namespaced_bases_end_with_app_name() {
        let fs = OsFilesystem::new("MyApp");
        for kind in [DirectoryKind::UserData, DirectoryKind::Cache] {
            if let Some(base) = fs.base_directory(kind) {
                assert_eq!(base.file_name().unwrap(), "MyApp");
            }
        }
    }

    #[test]
    fn remove_item_succeeds_on_missing_path() {
        let temp = TempDir::new().unwrap();
        let fs = OsFilesystem::rooted(temp.path());
        assert!(fs.remove_item(&temp.path().join("absent")).is_ok());
    }

    #[test]
    fn remove_item_removes_directory_trees() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("dir").join("inner");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("file"), b"x").unwrap();

        let fs = OsFilesystem::rooted(temp.path());
        fs.remove_item(&temp.path().join("dir")).unwrap();
        assert!(!temp.path().join("dir").exists());
    }
}
