// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Choosing the variable prefix.

use std::io::{self, BufRead, Write};

use crate::detect::ProjectProfile;

/// Separator every resolved prefix ends with.
pub const SEPARATOR: char = '_';

/// Appends [`SEPARATOR`] unless the prefix already ends with it.
///
/// Any other characters are accepted as typed.
#[must_use]
pub fn normalize_prefix(prefix: &str) -> String {
    let mut prefix = prefix.to_string();
    if !prefix.ends_with(SEPARATOR) {
        prefix.push(SEPARATOR);
    }
    prefix
}

/// Picks the override if it has any non-whitespace text, else the suggestion.
#[must_use]
pub fn resolve_prefix(suggested: &str, answer: Option<&str>) -> String {
    let chosen = answer
        .map(str::trim)
        .filter(|answer| !answer.is_empty())
        .unwrap_or(suggested);
    normalize_prefix(chosen)
}

/// Prints the detected project type and its suggested prefix.
///
/// # Errors
///
/// Returns the I/O error from writing to `out`.
pub fn announce<W: Write>(out: &mut W, profile: &ProjectProfile) -> io::Result<()> {
    writeln!(out, "Detected project type: {}.", profile.label())?;
    writeln!(
        out,
        "Suggested prefix for environment variables: {}",
        profile.prefix()
    )
}

/// Shows the detected profile and asks for an override.
///
/// End-of-input counts as pressing Enter.
///
/// # Errors
///
/// Returns the I/O error from writing the prompt or reading the answer.
pub fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    profile: &ProjectProfile,
) -> io::Result<String> {
    announce(out, profile)?;
    write!(
        out,
        "Press Enter to accept, or type a new prefix (e.g., FOO_): "
    )?;
    out.flush()?;

    let mut answer = String::new();
    let read = reader.read_line(&mut answer)?;
    let answer = (read > 0).then_some(answer.as_str());
    Ok(resolve_prefix(profile.prefix(), answer))
}
