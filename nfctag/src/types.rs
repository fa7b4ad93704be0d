// nfctag/src/types.rs
//! Identifier, capability and variant types.

use std::convert::TryFrom;

use derive_more::Display;

use crate::Error;
use crate::constants;

/// Tag identifier (UID), 1 to 10 bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Longest UID ISO 14443 allows (triple size).
    pub const MAX_LEN: usize = 10;

    /// Raw UID bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Uppercase hex, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }

    /// Little-endian decimal rendering, as printed by most readers.
    pub fn to_decimal(&self) -> String {
        crate::utils::bytes_to_decimal_le(self.as_bytes())
    }

    /// The four bytes MIFARE Classic authentication is keyed on: the last
    /// four bytes of the UID (the whole UID on single-size tags).
    pub fn auth_bytes(&self) -> [u8; 4] {
        let mut out = [0u8; 4];
        let tail = &self.0[self.0.len().saturating_sub(4)..];
        out[4 - tail.len()..].copy_from_slice(tail);
        out
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.is_empty() || bytes.len() > Self::MAX_LEN {
            return Err(Error::InvalidLength {
                expected: Self::MAX_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

/// Ordered technology names reported for a tag. The first entry drives
/// variant selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet(Vec<String>);

impl CapabilitySet {
    /// Keep the names in reported order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Name that drives variant selection.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// `true` when the platform reported nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of reported technologies.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Names in reported order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Substring match over every reported name, so both
    /// `"MifareUltralight"` and `"android.nfc.tech.MifareUltralight"` hit.
    pub fn mentions(&self, technology: &str) -> bool {
        self.iter().any(|name| name.contains(technology))
    }
}

/// The closed set of protocol variants.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Platform-delivered NDEF message, Text record.
    Ndef,
    /// Type 2 page reads and writes.
    MifareUltralight,
    /// Sector-authenticated block reads and writes.
    MifareClassic,
    /// DESFire native select and three-pass authentication.
    NfcA,
    /// SELECT then a balance query over ISO 7816 APDUs.
    IsoDep,
}

impl Variant {
    /// Every variant, in the order capability lookup tries them.
    pub const ALL: [Variant; 5] = [
        Variant::Ndef,
        Variant::MifareUltralight,
        Variant::MifareClassic,
        Variant::IsoDep,
        Variant::NfcA,
    ];

    /// Map one technology name to its variant. Both the fully qualified
    /// platform name and the short name match; nothing else does.
    pub fn from_capability(name: &str) -> Option<Self> {
        let short = name.strip_prefix(constants::TECH_PREFIX).unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|v| v.short_name() == short)
    }

    /// Technology name without the platform prefix.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Ndef => "Ndef",
            Self::MifareUltralight => "MifareUltralight",
            Self::MifareClassic => "MifareClassic",
            Self::NfcA => "NfcA",
            Self::IsoDep => "IsoDep",
        }
    }

    /// Fully qualified technology name.
    pub fn capability_name(&self) -> &'static str {
        match self {
            Self::Ndef => constants::TECH_NDEF,
            Self::MifareUltralight => constants::TECH_MIFARE_ULTRALIGHT,
            Self::MifareClassic => constants::TECH_MIFARE_CLASSIC,
            Self::NfcA => constants::TECH_NFC_A,
            Self::IsoDep => constants::TECH_ISO_DEP,
        }
    }
}

/// MIFARE Classic memory geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassicSize {
    /// 5 sectors, 320 bytes.
    Mini,
    /// 16 sectors.
    #[default]
    OneK,
    /// 40 sectors; the last 8 hold 16 blocks each.
    FourK,
}

impl ClassicSize {
    /// Derive the geometry from the SAK byte. Unknown SAKs are treated as 1K.
    pub fn from_sak(sak: Option<u8>) -> Self {
        match sak {
            Some(0x09) => Self::Mini,
            Some(0x18) | Some(0x38) => Self::FourK,
            _ => Self::OneK,
        }
    }

    /// Number of sectors.
    pub fn sector_count(&self) -> u8 {
        match self {
            Self::Mini => 5,
            Self::OneK => 16,
            Self::FourK => 40,
        }
    }

    /// Sectors 32 and up on a 4K tag hold 16 blocks, all others 4.
    pub fn blocks_in_sector(&self, sector: u8) -> u8 {
        if sector < 32 { 4 } else { 16 }
    }

    /// First block of a sector.
    pub fn sector_to_block(&self, sector: u8) -> u8 {
        if sector < 32 {
            sector * 4
        } else {
            // 4K only; sector 39 starts at block 240
            128u8.wrapping_add((sector - 32).wrapping_mul(16))
        }
    }
}
