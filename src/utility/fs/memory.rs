// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory [`FileSystem`] for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use super::FileSystem;

#[derive(Debug, Default)]
pub(crate) struct MemoryFileSystem {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    unreadable: RefCell<Vec<PathBuf>>,
    fail_appends: Cell<bool>,
}

impl MemoryFileSystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_file(self, path: impl Into<PathBuf>, contents: impl AsRef<[u8]>) -> Self {
        self.files
            .borrow_mut()
            .insert(path.into(), contents.as_ref().to_vec());
        self
    }

    /// The file exists but every read fails with `PermissionDenied`.
    pub(crate) fn with_unreadable(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.files.borrow_mut().entry(path.clone()).or_default();
        self.unreadable.borrow_mut().push(path);
        self
    }

    pub(crate) fn failing_appends(self) -> Self {
        self.fail_appends.set(true);
        self
    }

    pub(crate) fn contents(&self, path: &Path) -> Option<String> {
        self.files
            .borrow()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if self.unreadable.borrow().iter().any(|p| p == path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not found"))
    }

    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if self.fail_appends.get() {
            return Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"));
        }
        self.files
            .borrow_mut()
            .entry(path.to_path_buf())
            .or_default()
            .extend_from_slice(contents);
        Ok(())
    }
}
