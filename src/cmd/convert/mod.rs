// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `convert` command: snippet in, `.env` lines out.
//!
//! ```text
//! banner --> collect --> blank? ----------------------> EmptyInput
//!                          |
//!                       detect --> prefix (prompt/fixed/detected)
//!                          |
//!                       extract --> not found / no pairs -> Rejected
//!                          |
//!                       load .env --> plan --> empty -----> NothingToAdd
//!                          |
//!                       preview --> --dry ---------------> Previewed
//!                          |
//!                       append --> io error -------------> WriteFailed
//!                          |
//!                          +-----------------------------> Written
//! ```
//!
//! Every branch prints its own message and ends normally; only I/O trouble
//! with the terminal or an unreadable `.env` escapes as an error.


use std::io::{self, BufRead, Cursor, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use tracing::{debug, info, instrument};

use crate::cli::convert::ConvertArgs;
use crate::config::Config;
use crate::detect::detect_project;
use crate::envfile::{DEFAULT_HEADER, EnvEntry, append_batch, load_existing, plan_entries};
use crate::error::{EnvFileError, ExtractError, FbenvError, FbenvResult, Result};
use crate::extract::extract_config;
use crate::input::prefix::{self, normalize_prefix, resolve_prefix};
use crate::input::{collect_snippet, is_blank};
use crate::utility::fs::{FileSystem, OsFileSystem, file_name, read_text};

const RULE_WIDTH: usize = 60;

/// How the variable prefix is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PrefixChoice {
    /// Show the detected prefix and ask for an override.
    #[default]
    Prompt,
    /// Use the detected prefix as is.
    Detected,
    /// Use this prefix, whatever was detected. Trimmed and normalized like a
    /// typed answer; a blank value falls back to the detected prefix.
    Fixed(String),
}

impl PrefixChoice {
    /// Combines command-line flags with the `[prefix]` config section.
    ///
    /// `--prefix` beats `prefix.default`; `--yes` or `prefix.prompt = false`
    /// skip the question.
    #[must_use]
    pub fn from_sources(args: &ConvertArgs, config: &Config) -> Self {
        if let Some(prefix) = args.prefix.as_ref().or(config.prefix.default.as_ref()) {
            Self::Fixed(prefix.clone())
        } else if args.yes || !config.prefix.prompt {
            Self::Detected
        } else {
            Self::Prompt
        }
    }
}

/// Everything one conversion run needs besides its I/O handles.
#[derive(Debug, Clone, Builder)]
pub struct ConvertOptions {
    /// Project directory: detection root and base of `env_file`.
    #[builder(setters(name = with_dir), into)]
    dir: PathBuf,
    #[builder(setters(name = with_env_file), into, default = PathBuf::from(crate::envfile::DEFAULT_ENV_FILE))]
    env_file: PathBuf,
    #[builder(setters(name = with_header), into, default = DEFAULT_HEADER.to_string())]
    header: String,
    #[builder(setters(name = with_prefix), default)]
    prefix: PrefixChoice,
    /// Snippet file, relative to `dir`; standard input when absent.
    #[builder(setters(name = with_input), into)]
    input: Option<PathBuf>,
    #[builder(setters(name = with_dry), default = false)]
    dry: bool,
}

impl ConvertOptions {
    /// Absolute path of the env file.
    #[must_use]
    pub fn env_path(&self) -> PathBuf {
        self.dir.join(&self.env_file)
    }
}

/// How a conversion run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing but whitespace was pasted.
    EmptyInput,
    /// The snippet had no usable `firebaseConfig` block.
    Rejected(ExtractError),
    /// Every qualified key is already in the env file.
    NothingToAdd,
    /// `--dry`: entries were listed but not written.
    Previewed { path: PathBuf, entries: Vec<EnvEntry> },
    /// Appending to the env file failed.
    WriteFailed { path: PathBuf },
    /// Entries were appended.
    Written { path: PathBuf, entries: Vec<EnvEntry> },
}

/// Runs the `convert` command against the real terminal and filesystem.
///
/// # Errors
///
/// Returns an error if the working directory cannot be resolved, or if the
/// terminal or an existing env file cannot be read.
pub fn run_convert_command(args: &ConvertArgs, config: &Config, dir: &Path) -> Result<()> {
    let options = ConvertOptions::builder()
        .with_dir(dir)
        .with_env_file(config.env.file.clone())
        .with_header(config.env.header.clone())
        .with_prefix(PrefixChoice::from_sources(args, config))
        .maybe_with_input(args.input.clone())
        .with_dry(args.dry)
        .build();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = run_session(
        &OsFileSystem,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &options,
    )
    .context("conversion aborted")?;
    info!(?outcome, "conversion finished");
    Ok(())
}

/// Runs one conversion and prints a message for every outcome.
///
/// Extraction and write failures become [`Outcome::Rejected`] and
/// [`Outcome::WriteFailed`] after their message has been shown.
///
/// # Errors
///
/// Returns an error if `input` or `out` fail, or if an existing env file
/// cannot be read.
pub fn run_session<R: BufRead, W: Write>(
    fs: &dyn FileSystem,
    input: &mut R,
    out: &mut W,
    options: &ConvertOptions,
) -> FbenvResult<Outcome> {
    match convert(fs, input, out, options) {
        Err(FbenvError::Extract(err)) => {
            writeln!(out, "\nError: {err}")?;
            Ok(Outcome::Rejected(*err))
        }
        Err(FbenvError::EnvFile(err)) => {
            writeln!(out, "\nError: {err}")?;
            let EnvFileError::Write { path, .. } = *err;
            Ok(Outcome::WriteFailed { path })
        }
        other => other,
    }
}

#[instrument(skip_all, fields(dir = %options.dir.display(), dry = options.dry))]
fn convert<R: BufRead, W: Write>(
    fs: &dyn FileSystem,
    input: &mut R,
    out: &mut W,
    options: &ConvertOptions,
) -> FbenvResult<Outcome> {
    let snippet = match &options.input {
        Some(path) => {
            let text = read_text(fs, &options.dir.join(path))?;
            collect_snippet(Cursor::new(text))?
        }
        None => {
            print_banner(out)?;
            collect_snippet(&mut *input)?
        }
    };

    if is_blank(&snippet) {
        writeln!(out, "\nNo input received. Exiting.")?;
        return Ok(Outcome::EmptyInput);
    }

    let profile = detect_project(fs, &options.dir);
    debug!(%profile, "detected project");
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    let chosen = match &options.prefix {
        PrefixChoice::Prompt => prefix::prompt(input, out, &profile)?,
        PrefixChoice::Detected => {
            prefix::announce(out, &profile)?;
            normalize_prefix(profile.prefix())
        }
        PrefixChoice::Fixed(fixed) => {
            prefix::announce(out, &profile)?;
            resolve_prefix(profile.prefix(), Some(fixed.as_str()))
        }
    };
    writeln!(out, "Using prefix: {chosen}\n")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    let pairs = extract_config(&snippet)?;
    debug!(count = pairs.len(), "extracted pairs");

    let path = options.env_path();
    let existing = load_existing(fs, &path)?;
    let entries = plan_entries(&chosen, &pairs, &existing);

    if entries.is_empty() {
        writeln!(
            out,
            "\nNo new Firebase configuration variables to add. All keys already exist in {}.",
            file_name(&path)
        )?;
        return Ok(Outcome::NothingToAdd);
    }

    writeln!(out, "\nSuccessfully parsed Firebase configuration.")?;
    writeln!(
        out,
        "The following new variables will be added to your {} file:",
        file_name(&path)
    )?;
    for entry in &entries {
        writeln!(out, "  - {entry}")?;
    }

    if options.dry {
        writeln!(out, "\nDry run: {} was not modified.", path.display())?;
        return Ok(Outcome::Previewed { path, entries });
    }

    append_batch(fs, &path, &options.header, &entries, existing.encoding())?;
    writeln!(
        out,
        "\nSuccess! New variables have been added to {}",
        path.display()
    )?;
    Ok(Outcome::Written { path, entries })
}

fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to the Firebase config to .env converter.")?;
    writeln!(
        out,
        "This tool converts a Firebase JavaScript config snippet into"
    )?;
    writeln!(out, "environment variables for your project's .env file.")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "Please paste the JavaScript snippet from the Firebase console."
    )?;
    writeln!(
        out,
        "When you are done, press Enter, then Ctrl+D (Ctrl+Z then Enter on Windows) to finish input.\n"
    )?;
    out.flush()
}
