// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> project dir --> Config --> Logging --> Command Dispatch
//!   Convert (default) | Detect | Options | Configs | Version
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use fbenv_rs::cli::global::GlobalOptions;
use fbenv_rs::cli::{self, Command};
use fbenv_rs::cmd::config::{run_configs_command, run_options_command};
use fbenv_rs::cmd::convert::run_convert_command;
use fbenv_rs::cmd::detect::run_detect_command;
use fbenv_rs::config::loader::ConfigLoader;
use fbenv_rs::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use fbenv_rs::logging::{LogConfig, init_logging};
use tracing::debug;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let dir = match project_dir(&cli.global) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(Command::Version) = cli.command {
        handle_version_command();
        return ExitCode::SUCCESS;
    }
    if let Some(Command::Configs) = cli.command {
        run_configs_command(&build_config_loader(&cli.global, &dir).format_loaded_files());
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli.global, &dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(dir = %dir.display(), "project directory");

    dispatch_command(&cli, &config, &dir)
}

fn dispatch_command(cli: &cli::Cli, config: &Config, dir: &Path) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Convert(args)) => run_convert_command(args, config, dir),
        None => run_convert_command(&cli.convert, config, dir),
        Some(Command::Detect) => {
            run_detect_command(dir);
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Configs | Command::Version) => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn project_dir(global: &GlobalOptions) -> fbenv_rs::error::Result<PathBuf> {
    match &global.dir {
        Some(dir) => std::path::absolute(dir)
            .with_context(|| format!("invalid project directory {}", dir.display())),
        None => std::env::current_dir().context("cannot resolve the current directory"),
    }
}

fn build_config_loader(global: &GlobalOptions, dir: &Path) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(dir.join(DEFAULT_CONFIG_FILE));
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions, dir: &Path) -> fbenv_rs::error::Result<Config> {
    let mut loader = build_config_loader(global, dir);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    loader.build()
}

fn build_log_config(config: &Config) -> LogConfig {
    let console_level = config.global.output_log_level;
    let file_level = config.global.file_log_level.unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}
