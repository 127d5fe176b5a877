// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem access behind a small trait.
//!
//! ```text
//! FileSystem (trait)
//!   exists()   marker probes (vite.config.js)
//!   read()     package.json, .env (BOM decides the encoding)
//!   append()   .env, create if absent
//!
//! OsFileSystem      std::fs
//! MemoryFileSystem  in-memory map (tests)
//! ```
//!
//! The detector and the env merger only ever see `&dyn FileSystem`, which
//! keeps them testable without touching a real directory.

#[cfg(test)]
pub(crate) mod memory;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::utility::encoding::{TextEncoding, decode};

/// Minimal file access used by the conversion pipeline.
pub trait FileSystem {
    /// Returns true if anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the full contents of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Appends `contents` to the file at `path`, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be opened or written.
    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Reads a text file, decoding it according to its BOM.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be read.
pub fn read_text(fs: &dyn FileSystem, path: &Path) -> io::Result<String> {
    read_text_with_encoding(fs, path).map(|(_, text)| text)
}

/// Reads a text file and reports which encoding its BOM selected.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be read.
pub fn read_text_with_encoding(
    fs: &dyn FileSystem,
    path: &Path,
) -> io::Result<(TextEncoding, String)> {
    let bytes = fs.read(path)?;
    let (encoding, text) = decode(&bytes);
    Ok((encoding, text.into_owned()))
}

/// Final component of `path` for messages, or the whole path if it has none.
#[must_use]
pub fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// [`FileSystem`] backed by the real operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(contents)?;
        file.flush()
    }
}
