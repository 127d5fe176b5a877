// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive input: the pasted snippet and the prefix answer.
//!
//! ```text
//! BufRead ──collect_snippet()──> String   (until end-of-input)
//! BufRead ──prefix::prompt()───> prefix   (one line, "" = accept)
//! ```
//!
//! Both take any line source so tests can feed canned text instead of a
//! terminal.

pub mod prefix;


use std::io::{self, BufRead};

use tracing::debug;

/// Reads lines until end-of-input, joining them with `\n`.
///
/// A blank line does not stop collection; only end-of-input does. Every
/// line, the last one included, ends with `\n` in the result.
///
/// # Errors
///
/// Returns the I/O error of the underlying reader, including invalid UTF-8.
pub fn collect_snippet<R: BufRead>(reader: R) -> io::Result<String> {
    let mut snippet = String::new();
    let mut count = 0usize;
    for line in reader.lines() {
        snippet.push_str(&line?);
        snippet.push('\n');
        count += 1;
    }
    debug!(lines = count, bytes = snippet.len(), "collected snippet");
    Ok(snippet)
}

/// Returns true if the collected text has nothing but whitespace.
#[must_use]
pub fn is_blank(snippet: &str) -> bool {
    snippet.trim().is_empty()
}
