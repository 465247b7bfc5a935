// crates/mpf-core/src/text.rs

use std::borrow::Cow;

use crate::error::{MpfError, Result};
use crate::options::TextPolicy;

/// The meaningful prefix of a fixed-width text field: everything before the
/// first NUL, or the whole field if it has none.
pub fn trim_nul(raw: &[u8]) -> &[u8] {
    match raw.iter().position(|&b| b == 0) {
        Some(end) => &raw[..end],
        None => raw,
    }
}

/// Decode a header text field for display.
pub fn decode_field<'a>(raw: &'a [u8], field: &'static str, policy: TextPolicy) -> Result<Cow<'a, str>> {
    let bytes = trim_nul(raw);
    match policy {
        TextPolicy::Lossy => Ok(String::from_utf8_lossy(bytes)),
        TextPolicy::Strict => std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|_| MpfError::InvalidText { field }),
    }
}

/// Lowercase hex, two digits per byte, no separator.
pub fn hex_bytes(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}
