// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            FbenvError (~24 bytes)
//!                   |
//!     +---------+----+-----+--------+
//!     |         |          |        |
//!     v         v          v        v
//!  Extract   EnvFile    Config     Io
//!    Box       Box        Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Extract  ConfigNotFound, NoPairs
//!   EnvFile  Write
//!   Config   InvalidValue
//! ```
//!
//! Conversion failures are expected outcomes, not crashes: the convert
//! command reports them and still exits successfully.

use std::path::PathBuf;

use thiserror::Error;

use crate::utility::fs::file_name;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`FbenvError`].
pub type FbenvResult<T> = std::result::Result<T, FbenvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum FbenvError {
    /// The pasted snippet could not be turned into key/value pairs.
    #[error("extract error: {0}")]
    Extract(#[from] Box<ExtractError>),

    /// The env file could not be updated.
    #[error("env file error: {0}")]
    EnvFile(#[from] Box<EnvFileError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for FbenvError {
                fn from(err: $error) -> Self {
                    FbenvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ExtractError => Extract,
    EnvFileError => EnvFile,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Extraction Errors ---

/// Failures of the pattern-based snippet extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No `const firebaseConfig = {...};` block in the input.
    #[error("Could not find 'const firebaseConfig = {{...}}' in the input.")]
    ConfigNotFound,

    /// The block was found but contained no `key: value` entries.
    #[error("Could not parse key-value pairs from the configuration.")]
    NoPairs,
}

// --- Env File Errors ---

/// Env file write errors.
#[derive(Debug, Error)]
pub enum EnvFileError {
    /// Appending to the env file failed.
    #[error("Failed to write to {} file. Reason: {source}", file_name(.path))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
