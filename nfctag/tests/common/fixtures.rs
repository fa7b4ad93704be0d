// fixtures.rs — commonly used capability lists, NDEF messages and card replies

use nfctag::constants::{TECH_ISO_DEP, TECH_MIFARE_CLASSIC, TECH_MIFARE_ULTRALIGHT, TECH_NDEF, TECH_NFC_A};
use nfctag::protocol::{NdefMessage, NdefRecord};

pub const NDEF: &[&str] = &[TECH_NDEF, TECH_NFC_A];
pub const ULTRALIGHT: &[&str] = &[TECH_MIFARE_ULTRALIGHT, TECH_NFC_A, TECH_NDEF];
pub const CLASSIC: &[&str] = &[TECH_MIFARE_CLASSIC, TECH_NFC_A];
pub const DESFIRE: &[&str] = &[TECH_NFC_A];
pub const ISO_DEP: &[&str] = &[TECH_ISO_DEP, TECH_NFC_A];

/// Card challenge used by the recorded DESFire exchange.
pub const ENC_RND_B: [u8; 8] = [0x5d, 0x99, 0x4c, 0xb0, 0xe9, 0xd7, 0xb8, 0xf3];

/// Confirmation frame body for the all-zero key, RndA = 0, IV reset.
pub const ZERO_KEY_SESSION: &str = "0000000000000000c6cde2852c1e97db";

pub fn text_message(lang: &str, text: &str) -> Vec<u8> {
    NdefMessage::single(NdefRecord::text(lang, text).unwrap())
        .encode()
        .unwrap()
}

/// Select OK, then `AF || ENC_RND_B`, then the card's confirmation.
pub fn desfire_replies(confirm: Vec<u8>) -> Vec<Vec<u8>> {
    let mut auth = vec![0xAF];
    auth.extend_from_slice(&ENC_RND_B);
    vec![vec![0x00], auth, confirm]
}

/// Replies for a Classic read where `open[i]` says whether sector `i`
/// accepts the key. Sector data is filled with the sector number.
pub fn classic_replies(open: &[bool], blocks_per_sector: usize) -> Vec<Vec<u8>> {
    let mut replies = Vec::new();
    for (sector, &ok) in open.iter().enumerate() {
        if ok {
            replies.push(vec![0x0A]);
            for _ in 0..blocks_per_sector {
                replies.push(vec![sector as u8; 16]);
            }
        } else {
            replies.push(vec![0x04]);
        }
    }
    replies
}
