// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_no_command_defaults_to_convert_args() {
    let cli = Cli::try_parse_from(["fbenv", "-p", "PUBLIC", "--dry"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.convert.prefix.as_deref(), Some("PUBLIC"));
    assert!(cli.convert.dry);
}

#[test]
fn test_parse_convert_subcommand() {
    let cli = Cli::try_parse_from(["fbenv", "convert", "-y", "-i", "snippet.js"]).unwrap();
    let Some(Command::Convert(args)) = cli.command else {
        panic!("expected convert command");
    };
    assert!(args.yes);
    assert_eq!(args.input, Some(PathBuf::from("snippet.js")));
}

#[test]
fn test_parse_global_options_after_subcommand() {
    let cli = Cli::try_parse_from(["fbenv", "detect", "-C", "/tmp/app", "-l", "4"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Detect)));
    assert_eq!(cli.global.dir, Some(PathBuf::from("/tmp/app")));
    assert_eq!(cli.global.log_level, Some(4));
}

#[test]
fn test_prefix_conflicts_with_yes() {
    assert!(Cli::try_parse_from(["fbenv", "-p", "X_", "-y"]).is_err());
}

#[test]
fn test_log_level_range() {
    assert!(Cli::try_parse_from(["fbenv", "-l", "6"]).is_err());
}

#[test]
fn test_config_overrides() {
    let cli = Cli::try_parse_from([
        "fbenv",
        "-l",
        "3",
        "--env-file",
        ".env.local",
        "--log-file",
        "fbenv.log",
    ])
    .unwrap();
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        (
            "global.output_log_level",
            "3",
        ),
        (
            "global.file_log_level",
            "3",
        ),
        (
            "global.log_file",
            "fbenv.log",
        ),
        (
            "env.file",
            ".env.local",
        ),
    ]
    "#);
}
