// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Appending a batch of entries.

use std::path::Path;

use tracing::info;

use super::EnvEntry;
use crate::error::EnvFileError;
use crate::utility::encoding::TextEncoding;
use crate::utility::fs::FileSystem;

/// Comment line announcing each appended batch.
pub const DEFAULT_HEADER: &str = "# Firebase Configuration added by script";

/// Renders a batch: a blank separator line, the header, one entry per line.
#[must_use]
pub fn render_batch(header: &str, entries: &[EnvEntry]) -> String {
    let mut batch = format!("\n{header}\n");
    for entry in entries {
        batch.push_str(&entry.to_string());
        batch.push('\n');
    }
    batch
}

/// Appends `entries` to the env file at `path`, creating it if needed.
///
/// The batch is encoded as `encoding`, the encoding the existing file was
/// read in, so a UTF-16 file receives UTF-16 text.
///
/// # Errors
///
/// Returns [`EnvFileError::Write`] carrying the OS error if the file cannot be
/// opened or written.
pub fn append_batch(
    fs: &dyn FileSystem,
    path: &Path,
    header: &str,
    entries: &[EnvEntry],
    encoding: TextEncoding,
) -> Result<(), EnvFileError> {
    let batch = render_batch(header, entries);
    fs.append(path, &encoding.encode(&batch))
        .map_err(|source| EnvFileError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), count = entries.len(), ?encoding, "appended env entries");
    Ok(())
}
