//! Text <-> bytes through a named charset.
//!
//! Page-oriented tags store text in legacy multi-byte encodings (the GBK
//! family for Chinese text), so labels are resolved through the WHATWG
//! registry that `encoding_rs` implements: `"GBK"`, `"GB2312"` and
//! `"UTF-8"` all resolve.

use encoding_rs::Encoding;

use crate::{Error, Result};

fn lookup(charset: &str) -> Result<&'static Encoding> {
    Encoding::for_label(charset.trim().as_bytes())
        .ok_or_else(|| Error::MalformedInput(format!("unknown charset {:?}", charset)))
}

/// Encode `text` with `charset`.
///
/// Characters the charset cannot represent are an error rather than being
/// replaced.
pub fn string_to_bytes(text: &str, charset: &str) -> Result<Vec<u8>> {
    let encoding = lookup(charset)?;
    let (bytes, _, unmappable) = encoding.encode(text);
    if unmappable {
        return Err(Error::MalformedInput(format!(
            "text is not representable in {}",
            encoding.name()
        )));
    }
    Ok(bytes.into_owned())
}

/// Encode `text` with `charset` and render the bytes as lowercase hex.
pub fn string_to_hex(text: &str, charset: &str) -> Result<String> {
    Ok(super::bytes_to_hex(&string_to_bytes(text, charset)?))
}

/// Decode `bytes` with `charset`. Invalid sequences decode to U+FFFD.
pub fn bytes_to_string(bytes: &[u8], charset: &str) -> Result<String> {
    let encoding = lookup(charset)?;
    let (text, _) = encoding.decode_without_bom_handling(bytes);
    Ok(text.into_owned())
}
