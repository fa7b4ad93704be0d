// nfctag/src/constants.rs
//! Common protocol constants used across the crate

/// Technology names as reported by the platform tag stack.
pub const TECH_NDEF: &str = "android.nfc.tech.Ndef";
/// MIFARE Ultralight and NTAG.
pub const TECH_MIFARE_ULTRALIGHT: &str = "android.nfc.tech.MifareUltralight";
/// MIFARE Classic Mini/1K/4K.
pub const TECH_MIFARE_CLASSIC: &str = "android.nfc.tech.MifareClassic";
/// ISO 14443-4 (ISO-DEP).
pub const TECH_ISO_DEP: &str = "android.nfc.tech.IsoDep";
/// Raw ISO 14443-3A; DESFire native commands go here.
pub const TECH_NFC_A: &str = "android.nfc.tech.NfcA";

/// Prefix stripped when matching the short technology form ("NfcA").
pub const TECH_PREFIX: &str = "android.nfc.tech.";

/// Type 2 / Ultralight READ (returns 4 pages) and WRITE (one page)
pub const T2_CMD_READ: u8 = 0x30;
/// Type 2 page WRITE.
pub const T2_CMD_WRITE: u8 = 0xA2;
/// 4-bit ACK returned by Type 2 and Classic tags
pub const T2_ACK: u8 = 0x0A;
/// Bytes per Type 2 page.
pub const T2_PAGE_SIZE: usize = 4;
/// READ always returns four pages
pub const T2_READ_LEN: usize = 16;

/// First and last user-data page of an Ultralight tag
pub const ULTRALIGHT_FIRST_PAGE: u8 = 4;
/// Last user-data page of an Ultralight tag.
pub const ULTRALIGHT_LAST_PAGE: u8 = 15;

/// MIFARE Classic commands
pub const CLASSIC_CMD_AUTH_A: u8 = 0x60;
/// Classic block READ.
pub const CLASSIC_CMD_READ: u8 = 0x30;
/// Classic block WRITE.
pub const CLASSIC_CMD_WRITE: u8 = 0xA0;
/// Bytes per Classic block.
pub const CLASSIC_BLOCK_SIZE: usize = 16;

/// NFC Forum public key A used on NDEF-formatted Classic sectors
pub const KEY_NFC_FORUM: [u8; 6] = [0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7];

/// Sector 1 holds blocks 4..=7; block 7 is the trailer
pub const CLASSIC_WRITE_SECTOR: u8 = 1;
/// Block written by the Classic variant.
pub const CLASSIC_WRITE_BLOCK: u8 = 4;

/// DESFire native commands
pub const DESFIRE_NATIVE_SELECT: [u8; 4] = [0x5A, 0xFF, 0xFF, 0xFF];
/// Legacy DES authenticate with key number 0.
pub const DESFIRE_NATIVE_AUTHENTICATE: [u8; 2] = [0x0A, 0x00];
/// Card status: more frames follow.
pub const DESFIRE_ADDITIONAL_FRAME: u8 = 0xAF;
/// Card status: operation complete.
pub const DESFIRE_STATUS_OK: u8 = 0x00;
/// Card status: authentication refused.
pub const DESFIRE_AUTHENTICATION_ERROR: u8 = 0xAE;

/// NDEF TNF and RTD values
pub const TNF_WELL_KNOWN: u8 = 0x01;
/// Well-known Text record type.
pub const RTD_TEXT: &[u8] = b"T";
/// Language code length occupies the low 6 bits of the text status byte
pub const TEXT_LANG_LEN_MASK: u8 = 0x3F;
/// Text status bit set for UTF-16 bodies.
pub const TEXT_UTF16_FLAG: u8 = 0x80;

/// Type 2 TLV tags
pub const TLV_NULL: u8 = 0x00;
/// NDEF message TLV.
pub const TLV_NDEF: u8 = 0x03;
/// Terminator TLV, ends the data area.
pub const TLV_TERMINATOR: u8 = 0xFE;

/// ISO 7816 SELECT by DF name
pub const APDU_SELECT_BY_NAME: [u8; 4] = [0x00, 0xA4, 0x04, 0x00];
/// Payment system environment directory
pub const AID_PPSE: &[u8] = b"2PAY.SYS.DDF01";
/// Proprietary GET BALANCE
pub const APDU_GET_BALANCE: [u8; 5] = [0x80, 0x5C, 0x00, 0x02, 0x04];

/// DES block size
pub const DES_BLOCK_SIZE: usize = 8;
