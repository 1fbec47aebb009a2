//! Text decoding for map files and directory names.
//!
//! Content is UTF-8 when it is valid UTF-8, and Windows-1251 otherwise.

use std::borrow::Cow;
use std::ffi::OsStr;

use encoding_rs::WINDOWS_1251;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes raw file content to UTF-8 text.
#[must_use]
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            tracing::trace!("decoding content as windows-1251");
            WINDOWS_1251.decode_without_bom_handling(bytes).0
        }
    }
}

/// Decodes a directory name.
#[cfg(unix)]
#[must_use]
pub fn decode_name(name: &OsStr) -> String {
    use std::os::unix::ffi::OsStrExt;
    decode(name.as_bytes()).into_owned()
}

/// Decodes a directory name.
#[cfg(not(unix))]
#[must_use]
pub fn decode_name(name: &OsStr) -> String {
    name.to_string_lossy().into_owned()
}
