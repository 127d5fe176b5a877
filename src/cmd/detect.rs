// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `detect` command.

use std::path::Path;

use crate::detect::detect_project;
use crate::utility::fs::OsFileSystem;

/// Prints the detected project type and its prefix.
pub fn run_detect_command(dir: &Path) {
    let profile = detect_project(&OsFileSystem, dir);
    println!("Project type: {}", profile.label());
    println!("Prefix:       {}", profile.prefix());
}
