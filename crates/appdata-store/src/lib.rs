//! Per-application file storage for user data and caches
//!
//! Resolves logical (file name, directory kind) pairs to concrete filesystem
//! paths and performs existence checks, writes, reads, deletion, and bulk
//! clearing against them. All OS access goes through an injected
//! [`FilesystemAccess`] so behavior can be substituted in tests.

pub mod access;
pub mod directory;
pub mod error;
pub mod slot;
pub mod store;

pub use access::{FilesystemAccess, OsFilesystem};
pub use directory::DirectoryKind;
pub use error::{Error, Result};
pub use slot::BoundFileSlot;
pub use store::FileStore;
