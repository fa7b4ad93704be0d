//! Hexadecimal helpers.
//!
//! Compact lowercase output is the canonical wire/log rendering; the spaced
//! form is only used for frame tracing. Parsing is strict: the input is
//! trimmed at both ends and must then consist of an even number of hex
//! digits, in either case.

use crate::{Error, Result};

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0x55, 0xaa, 0x00]` -> `"55aa00"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        use std::fmt::Write;
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// Leading and trailing whitespace is ignored. Fails with
/// [`Error::MalformedInput`] on odd length or any non-hex character.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let cleaned = hex.trim().as_bytes();

    if cleaned.len() % 2 != 0 {
        return Err(Error::MalformedInput(format!(
            "hex string has odd length {}",
            cleaned.len()
        )));
    }

    cleaned
        .chunks_exact(2)
        .map(|pair| -> Result<u8> { Ok((nibble(pair[0])? << 4) | nibble(pair[1])?) })
        .collect()
}

fn nibble(c: u8) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::MalformedInput(format!(
            "invalid hex digit {:?}",
            c as char
        ))),
    }
}
