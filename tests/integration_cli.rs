// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use std::path::PathBuf;

use clap::Parser;
use fbenv_rs::cli::global::GlobalOptions;
use fbenv_rs::cli::{Cli, Command};

// =============================================================================
// Default Command
// =============================================================================

#[test]
fn cli_no_args_runs_interactive_convert() {
    let cli = Cli::try_parse_from(["fbenv"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.convert.prefix.is_none());
    assert!(!cli.convert.yes);
    assert!(cli.convert.input.is_none());
    assert!(!cli.convert.dry);
}

#[test]
fn cli_top_level_convert_flags() {
    let cli =
        Cli::try_parse_from(["fbenv", "--yes", "--input", "firebase.js", "--dry"]).unwrap();
    assert!(cli.convert.yes);
    assert_eq!(cli.convert.input, Some(PathBuf::from("firebase.js")));
    assert!(cli.convert.dry);
}

#[test]
fn cli_convert_flags_conflict_with_subcommand() {
    assert!(Cli::try_parse_from(["fbenv", "--dry", "detect"]).is_err());
}

// =============================================================================
// Subcommands
// =============================================================================

#[test]
fn cli_subcommands() {
    let cases = [
        ("detect", "Detect"),
        ("options", "Options"),
        ("configs", "Configs"),
        ("version", "Version"),
    ];
    for (arg, expected) in cases {
        let cli = Cli::try_parse_from(["fbenv", arg]).unwrap();
        let command = cli.command.expect("subcommand parsed");
        assert_eq!(format!("{command:?}"), expected);
    }
}

#[test]
fn cli_convert_subcommand_with_prefix() {
    let cli = Cli::try_parse_from(["fbenv", "convert", "--prefix", "PUBLIC_"]).unwrap();
    let Some(Command::Convert(args)) = cli.command else {
        panic!("expected convert command");
    };
    assert_eq!(args.prefix.as_deref(), Some("PUBLIC_"));
}

#[test]
fn cli_unknown_subcommand_fails() {
    assert!(Cli::try_parse_from(["fbenv", "deploy"]).is_err());
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_everywhere() {
    let cli = Cli::try_parse_from([
        "fbenv",
        "options",
        "-C",
        "web",
        "-c",
        "a.toml",
        "-c",
        "b.toml",
        "--no-default-config",
    ])
    .unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));
    assert_eq!(cli.global.dir, Some(PathBuf::from("web")));
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(cli.global.no_default_config);
}

#[test]
fn cli_file_log_level_kept_separate() {
    let cli = Cli::try_parse_from(["fbenv", "-l", "1", "--file-log-level", "5"]).unwrap();
    let overrides = cli.global.to_config_overrides();
    assert_eq!(
        overrides,
        [
            ("global.output_log_level", "1".to_string()),
            ("global.file_log_level", "5".to_string()),
        ]
    );
}

#[test]
fn cli_no_overrides_by_default() {
    assert!(GlobalOptions::default().to_config_overrides().is_empty());
}
