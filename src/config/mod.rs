// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for fbenv-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. fbenv.toml (working directory, optional)
//! 3. --config FILE (repeatable)
//! 4. FBENV_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! FBENV_ENV__FILE=.env.local       → env.file = ".env.local"
//! FBENV_PREFIX__DEFAULT=PUBLIC_    → prefix.default = "PUBLIC_"
//! FBENV_GLOBAL__OUTPUT_LOG_LEVEL=4 → global.output_log_level = 4
//! ```
//!
//! # Example
//!
//! ```toml
//! [env]
//! file = ".env.local"
//!
//! [prefix]
//! prompt = false
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{EnvConfig, GlobalConfig, PrefixConfig};

/// Config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "fbenv.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "FBENV";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Env file options.
    pub env: EnvConfig,
    /// Prefix options.
    pub prefix: PrefixConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fbenv_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("fbenv.toml")
    ///     .with_env_prefix("FBENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty env file name, a header
    /// that is not a single comment line, or a blank default prefix.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.env.file.as_os_str().is_empty() {
            return Err(invalid("env", "file", "must not be empty"));
        }
        if !self.env.header.starts_with('#') || self.env.header.contains(['\n', '\r']) {
            return Err(invalid(
                "env",
                "header",
                "must be a single line starting with '#'",
            ));
        }
        if self
            .prefix
            .default
            .as_deref()
            .is_some_and(|prefix| prefix.trim().is_empty())
        {
            return Err(invalid("prefix", "default", "must not be blank"));
        }
        Ok(())
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        let path = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global
                .file_log_level
                .unwrap_or(self.global.output_log_level)
                .as_u8()
                .to_string(),
        );
        options.insert("global.log_file", path(&self.global.log_file));
        options.insert("env.file", self.env.file.display().to_string());
        options.insert("env.header", self.env.header.clone());
        options.insert(
            "prefix.default",
            self.prefix.default.clone().unwrap_or_default(),
        );
        options.insert("prefix.prompt", self.prefix.prompt.to_string());

        let max_key_len = options.keys().map(|key| key.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
