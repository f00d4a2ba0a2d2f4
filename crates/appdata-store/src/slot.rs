//! Declarative read-only binding to a stored value.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::{DirectoryKind, FileStore, FilesystemAccess};

/// Read-only accessor bound to one (file name, directory kind, value type)
/// triple at construction time.
///
/// Each call to [`load`](Self::load) re-reads from storage and decodes
/// fresh; nothing is cached and there is no way to write through the slot.
#[derive(Debug, Clone)]
pub struct BoundFileSlot<T> {
    file_name: String,
    directory: DirectoryKind,
    _value: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> BoundFileSlot<T> {
    pub fn new(file_name: impl Into<String>, directory: DirectoryKind) -> Self {
        Self {
            file_name: file_name.into(),
            directory,
            _value: PhantomData,
        }
    }

    /// Bind to the user-data directory, the common case for persisted
    /// application state.
    pub fn user_data(file_name: impl Into<String>) -> Self {
        Self::new(file_name, DirectoryKind::UserData)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn directory(&self) -> DirectoryKind {
        self.directory
    }

    /// Fetch the current value, `None` when the file is missing or its
    /// content does not decode as `T`.
    pub fn load<F: FilesystemAccess>(&self, store: &FileStore<F>) -> Option<T> {
        store.retrieve(&self.file_name, self.directory)
    }
}
