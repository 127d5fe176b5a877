// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pattern-based extraction of the `firebaseConfig` literal.
//!
//! ```text
//! pasted text
//!     |  const\s+firebaseConfig\s*=\s*\{([^}]+)\};
//!     v
//! config body
//!     |  \s*(\w+):\s*(".*?"|\d+)\s*,?
//!     v
//! [(key, raw token), ...]   source order, quotes kept
//! ```
//!
//! This is a matcher, not a JavaScript parser. Nested objects, quoted keys
//! and single-quoted strings are not understood; entries that do not fit the
//! pair pattern are skipped.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExtractError;

static CONFIG_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)const\s+firebaseConfig\s*=\s*\{([^}]+)\};")
        .expect("config block pattern is valid")
});

static CONFIG_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)\s*(\w+):\s*(".*?"|\d+)\s*,?"#)
        .expect("config pair pattern is valid")
});

/// One `key: value` entry from the config body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPair {
    key: String,
    value: String,
}

impl ConfigPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The identifier as written in the snippet (e.g. `apiKey`).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw value token: `"..."` with quotes, or bare digits.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ConfigPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// Returns the text between the braces of `const firebaseConfig = {...};`.
///
/// # Errors
///
/// Returns [`ExtractError::ConfigNotFound`] if the block is absent.
pub fn find_config_body(input: &str) -> Result<&str, ExtractError> {
    CONFIG_BLOCK
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str())
        .ok_or(ExtractError::ConfigNotFound)
}

/// Splits a config body into pairs, in order of appearance.
#[must_use]
pub fn parse_pairs(body: &str) -> Vec<ConfigPair> {
    CONFIG_PAIR
        .captures_iter(body)
        .map(|caps| ConfigPair::new(&caps[1], &caps[2]))
        .collect()
}

/// Extracts every `key: value` pair from a pasted Firebase snippet.
///
/// # Errors
///
/// Returns [`ExtractError::ConfigNotFound`] if there is no config block, or
/// [`ExtractError::NoPairs`] if the block holds no recognisable entries.
///
/// # Example
///
/// ```
/// use fbenv_rs::extract::extract_config;
///
/// let pairs = extract_config(r#"const firebaseConfig = { apiKey: "abc", port: 42 };"#)?;
/// assert_eq!(pairs[0].value(), r#""abc""#);
/// assert_eq!(pairs[1].value(), "42");
/// # Ok::<(), fbenv_rs::error::ExtractError>(())
/// ```
pub fn extract_config(input: &str) -> Result<Vec<ConfigPair>, ExtractError> {
    let body = find_config_body(input)?;
    let pairs = parse_pairs(body);
    if pairs.is_empty() {
        return Err(ExtractError::NoPairs);
    }
    Ok(pairs)
}
