// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! BOM-aware decoding of project text files.
//!
//! ```text
//! EF BB BF  -> UTF-8     (BOM stripped)
//! FF FE     -> UTF-16 LE (BOM stripped)
//! FE FF     -> UTF-16 BE (BOM stripped)
//! otherwise -> UTF-8 lossy
//! ```
//!
//! Uses `encoding_rs`. Invalid sequences → U+FFFD.
//!
//! Text appended to an existing file is encoded back with
//! [`TextEncoding::encode`] so a UTF-16 file stays UTF-16.

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use std::borrow::Cow;

/// Text encodings recognised from a byte order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// No BOM, treated as UTF-8
    #[default]
    Unmarked,
    /// UTF-8 with BOM (as saved by some Windows editors)
    Utf8,
    /// UTF-16 Little Endian
    Utf16Le,
    /// UTF-16 Big Endian
    Utf16Be,
}

impl TextEncoding {
    /// Detects the encoding from a leading BOM.
    ///
    /// Returns the encoding and the BOM length in bytes.
    #[must_use]
    pub fn sniff(bytes: &[u8]) -> (Self, usize) {
        match Encoding::for_bom(bytes) {
            Some((enc, len)) if enc == UTF_8 => (Self::Utf8, len),
            Some((enc, len)) if enc == UTF_16LE => (Self::Utf16Le, len),
            Some((enc, len)) if enc == UTF_16BE => (Self::Utf16Be, len),
            _ => (Self::Unmarked, 0),
        }
    }

    /// Encodes `text` for appending to a file in this encoding, without a BOM.
    #[must_use]
    pub fn encode(self, text: &str) -> Cow<'_, [u8]> {
        match self {
            Self::Unmarked | Self::Utf8 => Cow::Borrowed(text.as_bytes()),
            Self::Utf16Le => Cow::Owned(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            Self::Utf16Be => Cow::Owned(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
        }
    }
}

/// Converts file bytes to UTF-8, honouring a leading BOM.
///
/// # Example
/// ```
/// use fbenv_rs::utility::encoding::bytes_to_utf8;
///
/// assert_eq!(bytes_to_utf8(b"\xef\xbb\xbfKEY=1"), "KEY=1");
/// assert_eq!(bytes_to_utf8(b"KEY=1"), "KEY=1");
/// ```
#[must_use]
pub fn bytes_to_utf8(bytes: &[u8]) -> Cow<'_, str> {
    decode(bytes).1
}

/// Like [`bytes_to_utf8`], also reporting the encoding that was found.
#[must_use]
pub fn decode(bytes: &[u8]) -> (TextEncoding, Cow<'_, str>) {
    let (encoding, bom_len) = TextEncoding::sniff(bytes);
    let body = &bytes[bom_len..];
    let text = match encoding {
        TextEncoding::Unmarked | TextEncoding::Utf8 => String::from_utf8_lossy(body),
        TextEncoding::Utf16Le => UTF_16LE.decode_without_bom_handling(body).0,
        TextEncoding::Utf16Be => UTF_16BE.decode_without_bom_handling(body).0,
    };
    (encoding, text)
}
