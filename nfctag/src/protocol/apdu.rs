// nfctag/src/protocol/apdu.rs
//! ISO 7816-4 command APDUs used by the IsoDep variant.

use crate::constants::APDU_SELECT_BY_NAME;
use crate::{Error, Result};

/// Status word of a successful APDU.
pub const SW_SUCCESS: [u8; 2] = [0x90, 0x00];

/// `00 A4 04 00 Lc <name> 00`: SELECT a DF by name, expecting FCI back.
pub fn select_by_name(name: &[u8]) -> Result<Vec<u8>> {
    if name.is_empty() || name.len() > 16 {
        return Err(Error::InvalidLength {
            expected: 16,
            actual: name.len(),
        });
    }
    let mut apdu = Vec::with_capacity(APDU_SELECT_BY_NAME.len() + name.len() + 2);
    apdu.extend_from_slice(&APDU_SELECT_BY_NAME);
    apdu.push(name.len() as u8);
    apdu.extend_from_slice(name);
    apdu.push(0x00);
    Ok(apdu)
}

/// Split a response APDU into its data field and status word.
pub fn split_status(response: &[u8]) -> Option<(&[u8], [u8; 2])> {
    let body_len = response.len().checked_sub(2)?;
    let (body, sw) = response.split_at(body_len);
    Some((body, [sw[0], sw[1]]))
}
