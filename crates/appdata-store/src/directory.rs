//! Logical storage location categories.

use std::path::Path;

/// Logical storage location for a stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectoryKind {
    /// User-generated data the application cannot recreate on its own.
    /// Maps to the platform's backed-up data location.
    UserData,
    /// Content that can be downloaded again or regenerated, such as
    /// derived files or downloaded media. Maps to the platform's cache
    /// location, which is excluded from backups.
    Cache,
}

impl DirectoryKind {
    /// Subdirectory name used when resolving against a fixed root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserData => "documents",
            Self::Cache => "caches",
        }
    }
}

impl AsRef<Path> for DirectoryKind {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for DirectoryKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for DirectoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
