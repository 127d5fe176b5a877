// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Presence-only merge of extracted pairs into an env file.
//!
//! ```text
//! (apiKey, "x") + VITE_ --> VITE_APIKEY
//!   in ExistingEnv  --> skipped (value never compared)
//!   otherwise       --> EnvEntry { VITE_APIKEY, "x" }
//! ```

use tracing::debug;

use super::{EnvEntry, ExistingEnv};
use crate::extract::ConfigPair;

/// Builds the env variable name for a config key.
#[must_use]
pub fn qualified_key(prefix: &str, key: &str) -> String {
    format!("{prefix}{}", key.to_uppercase())
}

/// Selects the pairs whose qualified key is not in `existing`.
///
/// Extraction order is preserved. Pairs repeated within the snippet are
/// all kept since only the file contents are checked.
#[must_use]
pub fn plan_entries(prefix: &str, pairs: &[ConfigPair], existing: &ExistingEnv) -> Vec<EnvEntry> {
    pairs
        .iter()
        .filter_map(|pair| {
            let key = qualified_key(prefix, pair.key());
            if existing.contains(&key) {
                debug!(%key, "already present, skipping");
                None
            } else {
                Some(EnvEntry::new(key, pair.value()))
            }
        })
        .collect()
}
