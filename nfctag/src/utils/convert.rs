//! Fixed-width numeric conversions used when packing values into tag pages.

use crate::{Error, Result};

/// Convert a binary string (`'0'`/`'1'`) to hex, one digit per 4 bits.
///
/// Returns `None` for an empty string, a length that is not a multiple of
/// 8, or any character other than `0` and `1`.
///
/// Example: `"0000101011111111"` -> `"0aff"`
pub fn binary_to_hex(bits: &str) -> Option<String> {
    if bits.is_empty() || bits.len() % 8 != 0 {
        return None;
    }

    let mut out = String::with_capacity(bits.len() / 4);
    for quad in bits.as_bytes().chunks_exact(4) {
        let mut value = 0u32;
        for &bit in quad {
            value = (value << 1)
                | match bit {
                    b'0' => 0,
                    b'1' => 1,
                    _ => return None,
                };
        }
        out.push(char::from_digit(value, 16)?);
    }
    Some(out)
}

/// Convert a hex string to a binary string, each digit left-padded to 4 bits.
///
/// Returns `None` for an odd length or a non-hex digit. The empty string
/// converts to the empty string.
pub fn hex_to_binary(hex: &str) -> Option<String> {
    if hex.len() % 2 != 0 {
        return None;
    }

    let mut out = String::with_capacity(hex.len() * 4);
    for c in hex.chars() {
        let digit = c.to_digit(16)?;
        out.push_str(&format!("{:04b}", digit));
    }
    Some(out)
}

/// Render an integer in base 16 without padding.
///
/// Negative values render as their 32-bit two's complement, so `-1` becomes
/// `"ffffffff"`.
pub fn int_to_hex(value: i32) -> String {
    format!("{:x}", value)
}

/// Parse a base-16 integer. An optional leading sign is accepted.
pub fn hex_to_int(hex: &str) -> Result<i32> {
    i32::from_str_radix(hex, 16)
        .map_err(|e| Error::MalformedInput(format!("invalid hex integer {:?}: {}", hex, e)))
}

/// IEEE-754 single precision bit pattern, big-endian (sign/exponent first).
pub fn float_to_bytes(value: f32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Inverse of [`float_to_bytes`]. Only the first four bytes are read.
pub fn bytes_to_float(bytes: &[u8]) -> Result<f32> {
    let raw: [u8; 4] = bytes
        .get(..4)
        .and_then(|b| b.try_into().ok())
        .ok_or(Error::InvalidLength {
            expected: 4,
            actual: bytes.len(),
        })?;
    Ok(f32::from_be_bytes(raw))
}

/// Hex rendering of [`float_to_bytes`].
pub fn float_to_hex(value: f32) -> String {
    super::bytes_to_hex(&float_to_bytes(value))
}

/// Accumulate the first `n` bytes big-endian into an unsigned integer.
///
/// `n` is clamped to the slice length and to 8 bytes.
pub fn bytes_to_int_be(bytes: &[u8], n: usize) -> u64 {
    bytes
        .iter()
        .take(n.min(8))
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Decimal rendering of a little-endian unsigned byte string, the format
/// readers print tag identifiers in.
///
/// Arbitrary lengths are handled; the UID of a 10-byte tag does not fit
/// into a `u64`.
pub fn bytes_to_decimal_le(bytes: &[u8]) -> String {
    // base 10^9 limbs, least significant first
    let mut limbs: Vec<u32> = vec![0];
    for &b in bytes.iter().rev() {
        let mut carry = u64::from(b);
        for limb in limbs.iter_mut() {
            let v = u64::from(*limb) * 256 + carry;
            *limb = (v % 1_000_000_000) as u32;
            carry = v / 1_000_000_000;
        }
        while carry > 0 {
            limbs.push((carry % 1_000_000_000) as u32);
            carry /= 1_000_000_000;
        }
    }

    let mut out = String::new();
    for (i, limb) in limbs.iter().rev().enumerate() {
        if i == 0 {
            out.push_str(&limb.to_string());
        } else {
            out.push_str(&format!("{:09}", limb));
        }
    }
    out
}
