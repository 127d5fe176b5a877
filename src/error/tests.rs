// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use super::{ConfigError, EnvFileError, ExtractError, FbenvError, FbenvResult};

#[test]
fn test_extract_error_display() {
    insta::assert_snapshot!(
        ExtractError::ConfigNotFound.to_string(),
        @"Could not find 'const firebaseConfig = {...}' in the input."
    );
    insta::assert_snapshot!(
        ExtractError::NoPairs.to_string(),
        @"Could not parse key-value pairs from the configuration."
    );
}

#[test]
fn test_env_file_error_names_file() {
    let err = EnvFileError::Write {
        path: PathBuf::from("/project/.env"),
        source: std::io::Error::other("disk full"),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"Failed to write to .env file. Reason: disk full"
    );
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "global".to_string(),
        key: "output_log_level".to_string(),
        message: "log level must be 0-5, got 9".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'output_log_level' in section '[global]': log level must be 0-5, got 9"
    );
}

#[test]
fn test_from_boxes_sub_errors() {
    let extract: FbenvError = ExtractError::NoPairs.into();
    let io: FbenvError = std::io::Error::other("broken pipe").into();

    assert!(matches!(extract, FbenvError::Extract(ref e) if **e == ExtractError::NoPairs));
    insta::assert_snapshot!(io.to_string(), @"io error: broken pipe");
}

#[test]
fn test_fbenv_error_size() {
    let size = std::mem::size_of::<FbenvError>();
    assert!(size <= 24, "FbenvError is {size} bytes, expected <= 24");
}

#[test]
fn test_fbenv_result_size() {
    let size = std::mem::size_of::<FbenvResult<()>>();
    assert!(size <= 24, "FbenvResult<()> is {size} bytes, expected <= 24");
}
