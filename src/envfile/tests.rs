// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    DEFAULT_HEADER, EnvEntry, ExistingEnv, append_batch, load_existing, plan_entries,
    qualified_key, render_batch,
};
use crate::error::EnvFileError;
use crate::extract::ConfigPair;
use crate::utility::encoding::{TextEncoding, bytes_to_utf8};
use crate::utility::fs::FileSystem;
use crate::utility::fs::memory::MemoryFileSystem;
use std::path::Path;

const ENV: &str = "/project/.env";

fn rendered(entries: &[EnvEntry]) -> Vec<String> {
    entries.iter().map(ToString::to_string).collect()
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_parse_existing_lines() {
    let existing = ExistingEnv::parse(
        "# comment\nVITE_APIKEY=xyz\n  PADDED = spaced  \nURL=https://x?a=b\nnot a pair\n",
    );
    assert_eq!(existing.len(), 3);
    assert!(existing.contains("VITE_APIKEY"));
    assert!(existing.contains("PADDED "));
    assert!(existing.contains("URL"));
    assert!(!existing.contains("URL=https://x?a"));
    assert!(!existing.contains("not a pair"));
}

#[test]
fn test_parse_existing_repeated_key() {
    let existing = ExistingEnv::parse("A=1\nA=2\n");
    assert_eq!(existing.len(), 1);
    assert!(existing.contains("A"));
}

#[test]
fn test_parse_existing_crlf() {
    let existing = ExistingEnv::parse("A=1\r\nB=2\r\n");
    assert!(existing.contains("A"));
    assert!(existing.contains("B"));
    assert_eq!(existing.encoding(), TextEncoding::Unmarked);
}

#[test]
fn test_load_missing_file_is_empty() {
    let existing = load_existing(&MemoryFileSystem::new(), Path::new(ENV)).unwrap();
    assert!(existing.is_empty());
}

#[test]
fn test_load_existing_file() {
    let fs = MemoryFileSystem::new().with_file(ENV, "\u{feff}CUSTOM_APIKEY=abc\n");
    let existing = load_existing(&fs, Path::new(ENV)).unwrap();
    assert!(existing.contains("CUSTOM_APIKEY"));
    assert_eq!(existing.encoding(), TextEncoding::Utf8);
}

#[test]
fn test_load_unreadable_file_errors() {
    let fs = MemoryFileSystem::new().with_unreadable(ENV);
    assert!(load_existing(&fs, Path::new(ENV)).is_err());
}

// =============================================================================
// Merging
// =============================================================================

#[test]
fn test_qualified_key() {
    assert_eq!(qualified_key("VITE_", "apiKey"), "VITE_APIKEY");
    assert_eq!(qualified_key("", "projectId"), "PROJECTID");
}

#[test]
fn test_plan_presence_only_dedup() {
    let existing = ExistingEnv::parse("VITE_APIKEY=xyz\n");
    let pairs = [
        ConfigPair::new("apiKey", "\"xyz2\""),
        ConfigPair::new("appId", "\"1:2:web:3\""),
    ];
    let entries = plan_entries("VITE_", &pairs, &existing);
    assert_eq!(rendered(&entries), ["VITE_APPID=\"1:2:web:3\""]);
}

#[test]
fn test_plan_keeps_order_and_tokens() {
    let pairs = [
        ConfigPair::new("projectId", "\"demo\""),
        ConfigPair::new("messagingSenderId", "42"),
        ConfigPair::new("apiKey", "\"k\""),
    ];
    let entries = plan_entries("CUSTOM_", &pairs, &ExistingEnv::default());
    insta::assert_snapshot!(rendered(&entries).join("\n"), @r#"
    CUSTOM_PROJECTID="demo"
    CUSTOM_MESSAGINGSENDERID=42
    CUSTOM_APIKEY="k"
    "#);
}

#[test]
fn test_plan_other_prefix_not_a_duplicate() {
    let existing = ExistingEnv::parse("REACT_APP_APIKEY=x\n");
    let pairs = [ConfigPair::new("apiKey", "\"x\"")];
    assert_eq!(plan_entries("VITE_", &pairs, &existing).len(), 1);
}

#[test]
fn test_plan_repeated_pair_in_snippet() {
    let pairs = [ConfigPair::new("appId", "\"a\""), ConfigPair::new("appId", "\"b\"")];
    let entries = plan_entries("X_", &pairs, &ExistingEnv::default());
    assert_eq!(rendered(&entries), ["X_APPID=\"a\"", "X_APPID=\"b\""]);
}

#[test]
fn test_plan_everything_present() {
    let existing = ExistingEnv::parse("X_A=1\nX_B=2\n");
    let pairs = [ConfigPair::new("a", "1"), ConfigPair::new("b", "2")];
    assert!(plan_entries("X_", &pairs, &existing).is_empty());
}

// =============================================================================
// Writing
// =============================================================================

#[test]
fn test_render_batch() {
    let entries = [EnvEntry::new("CUSTOM_APIKEY", "\"AIza123\"")];
    assert_eq!(
        render_batch(DEFAULT_HEADER, &entries),
        "\n# Firebase Configuration added by script\nCUSTOM_APIKEY=\"AIza123\"\n"
    );
}

#[test]
fn test_append_batch_after_existing_lines() {
    let fs = MemoryFileSystem::new().with_file(ENV, "OTHER=1\n");
    let entries = [EnvEntry::new("VITE_APIKEY", "\"k\"")];
    append_batch(&fs, Path::new(ENV), DEFAULT_HEADER, &entries, TextEncoding::Unmarked).unwrap();

    assert_eq!(
        fs.contents(Path::new(ENV)).unwrap(),
        "OTHER=1\n\n# Firebase Configuration added by script\nVITE_APIKEY=\"k\"\n"
    );
}

#[test]
fn test_append_batch_failure_carries_path() {
    let fs = MemoryFileSystem::new().failing_appends();
    let err = append_batch(
        &fs,
        Path::new(ENV),
        DEFAULT_HEADER,
        &[EnvEntry::new("A", "1")],
        TextEncoding::Unmarked,
    )
    .unwrap_err();
    let EnvFileError::Write { path, source } = err;
    assert_eq!(path, Path::new(ENV));
    assert_eq!(source.kind(), std::io::ErrorKind::StorageFull);
}

fn utf16le(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
    bytes
}

#[test]
fn test_append_keeps_utf16_file_utf16() {
    let fs = MemoryFileSystem::new().with_file(ENV, utf16le("PORT=3000\n"));
    let path = Path::new(ENV);

    let existing = load_existing(&fs, path).unwrap();
    assert_eq!(existing.encoding(), TextEncoding::Utf16Le);
    let entries = [EnvEntry::new("CUSTOM_APIKEY", "\"A\"")];
    append_batch(&fs, path, DEFAULT_HEADER, &entries, existing.encoding()).unwrap();

    let bytes = fs.read(path).unwrap();
    assert_eq!(
        bytes,
        utf16le("PORT=3000\n\n# Firebase Configuration added by script\nCUSTOM_APIKEY=\"A\"\n")
    );
    assert_eq!(
        bytes_to_utf8(&bytes),
        "PORT=3000\n\n# Firebase Configuration added by script\nCUSTOM_APIKEY=\"A\"\n"
    );
    assert!(load_existing(&fs, path).unwrap().contains("CUSTOM_APIKEY"));
}
