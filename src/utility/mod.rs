// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   bytes_to_utf8()  BOM sniffing, UTF-8/UTF-16 --> UTF-8
//! fs
//!   FileSystem       exists / read / append
//!   OsFileSystem     std::fs
//!   read_text()      read + decode
//! ```

pub mod encoding;
pub mod fs;
