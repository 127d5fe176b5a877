// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for fbenv-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, EnvConfig, PrefixConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::envfile::{DEFAULT_ENV_FILE, DEFAULT_HEADER};
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5), defaults to the console level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_log_level: Option<LogLevel>,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Env file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// Env file, relative to the working directory.
    pub file: PathBuf,
    /// Comment line written before each appended batch.
    pub header: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_ENV_FILE),
            header: DEFAULT_HEADER.to_string(),
        }
    }
}

/// Prefix selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrefixConfig {
    /// Fixed prefix, replaces detection and the prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Ask before using the detected prefix.
    pub prompt: bool,
}

impl Default for PrefixConfig {
    fn default() -> Self {
        Self {
            default: None,
            prompt: true,
        }
    }
}
