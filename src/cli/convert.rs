// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `convert` command.
//!
//! ```text
//! fbenv [convert] [--prefix P | --yes] [--input FILE] [--dry]
//!
//! USAGE:
//! $ fbenv                          paste, detect, prompt, append
//! $ fbenv -p PUBLIC_ -i snippet.js non-interactive
//! $ fbenv --dry                    preview only
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `convert` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ConvertArgs {
    /// Prefix to use instead of the detected one; skips the prompt.
    #[arg(short = 'p', long = "prefix", value_name = "PREFIX", conflicts_with = "yes")]
    pub prefix: Option<String>,

    /// Accept the detected prefix without prompting.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Read the Firebase snippet from a file instead of standard input.
    /// A relative path is resolved against --dir.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Show the entries that would be added without touching the env file.
    #[arg(long)]
    pub dry: bool,
}
