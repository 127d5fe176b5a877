// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for fbenv-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! fbenv [global options] [convert options]   same as `convert`
//! convert   paste a snippet, append to .env
//! detect    show the detected project type
//! options   show the effective configuration
//! configs   list the loaded config files
//! version
//! ```

pub mod convert;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::convert::ConvertArgs;
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Firebase config to .env converter
///
/// Turns the `firebaseConfig` snippet from the Firebase console into
/// prefixed environment variables.
#[derive(Debug, Parser)]
#[command(
    name = "fbenv",
    author,
    version,
    about = "Firebase config to .env converter",
    long_about = "fbenv-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Paste the `const firebaseConfig = {...};` snippet from the\n\
                  Firebase console and fbenv appends each key to the project's\n\
                  .env file, prefixed for the detected build tool (VITE_,\n\
                  REACT_APP_, NUXT_ or CUSTOM_). Keys already in .env are left\n\
                  untouched.",
    after_help = "CONFIG FILES:\n\n\
                  fbenv reads fbenv.toml from the project directory if present,\n\
                  then every --config file in order, then FBENV_<SECTION>__<KEY>\n\
                  environment variables. Command-line flags win over all of them.\n\
                  Use --no-default-config to skip fbenv.toml.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Options for the default `convert` command
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Converts a pasted Firebase config into .env entries (default).
    Convert(ConvertArgs),

    /// Shows the detected project type and suggested prefix.
    Detect,

    /// Lists all options and their effective values.
    Options,

    /// Lists the config files used by fbenv.
    Configs,

    /// Shows the version.
    Version,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
