// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reading, merging and appending `.env` files.
//!
//! ```text
//! .env (optional) --load_existing()--> ExistingEnv (keys only matter)
//!                                           |
//! [ConfigPair] + prefix --plan_entries()----+--> [EnvEntry] (novel keys)
//!                                                     |
//!                              append_batch() <-------+
//!                              "\n# header\nK=V\n..." in the file's encoding
//! ```
//!
//! The file is never rewritten: existing lines stay where they are and new
//! entries go to the end.

pub mod merge;
pub mod writer;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fmt;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::utility::encoding::TextEncoding;
use crate::utility::fs::{FileSystem, read_text_with_encoding};

pub use merge::{plan_entries, qualified_key};
pub use writer::{DEFAULT_HEADER, append_batch, render_batch};

/// Default env file name inside the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// A `KEY=value` line to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    key: String,
    value: String,
}

impl EnvEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for EnvEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Variables already present in the env file, and the file's encoding.
///
/// Only key membership is consulted, never values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingEnv {
    keys: HashSet<String>,
    encoding: TextEncoding,
}

impl ExistingEnv {
    /// Parses env file text.
    ///
    /// Every line containing `=` is trimmed and split on the first `=`.
    /// Other lines, comments without `=` included, are ignored.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let keys = content
            .lines()
            .filter(|line| line.contains('='))
            .filter_map(|line| line.trim().split_once('='))
            .map(|(key, _)| key.to_string())
            .collect();
        Self {
            keys,
            encoding: TextEncoding::default(),
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Encoding new entries must be appended in.
    #[must_use]
    pub const fn encoding(&self) -> TextEncoding {
        self.encoding
    }
}

/// Loads the env file at `path`, or an empty mapping if it does not exist.
///
/// # Errors
///
/// Returns the I/O error if the file exists but cannot be read.
pub fn load_existing(fs: &dyn FileSystem, path: &Path) -> io::Result<ExistingEnv> {
    if !fs.exists(path) {
        debug!(path = %path.display(), "no env file yet");
        return Ok(ExistingEnv::default());
    }
    let (encoding, text) = read_text_with_encoding(fs, path)?;
    let existing = ExistingEnv {
        encoding,
        ..ExistingEnv::parse(&text)
    };
    debug!(path = %path.display(), keys = existing.len(), ?encoding, "loaded env file");
    Ok(existing)
}
