// nfctag/src/variants/mod.rs
//! One read/write protocol per tag technology.

use std::sync::Arc;

use crate::config::ProtocolConfig;
use crate::constants::T2_ACK;
use crate::tag::Tag;
use crate::types::Variant;
use crate::{Error, Result};

pub mod classic;
pub mod desfire;
pub mod isodep;
pub mod ndef;
pub mod ultralight;

pub use classic::MifareClassic;
pub use desfire::Desfire;
pub use isodep::IsoDep;
pub use ndef::NdefText;
pub use ultralight::MifareUltralight;

/// Read/write contract every variant implements. Implementations only talk
/// to the tag through [`Tag::session`] and keep no mutable state between
/// calls.
pub trait TagProtocol: Send + Sync {
    /// The variant this implementation stands for.
    fn variant(&self) -> Variant;

    /// Run the variant's read exchange and return its payload.
    fn read(&self, tag: &mut Tag) -> Result<Vec<u8>>;

    /// Commit `data` to the tag.
    fn write(&self, tag: &mut Tag, data: &[u8]) -> Result<()>;
}

/// Factory for the built-in implementation of `variant`.
pub fn create_protocol_for(variant: Variant, config: Arc<ProtocolConfig>) -> Box<dyn TagProtocol> {
    match variant {
        Variant::Ndef => Box::new(NdefText::new(config)),
        Variant::MifareUltralight => Box::new(MifareUltralight::new(config)),
        Variant::MifareClassic => Box::new(MifareClassic::new(config)),
        Variant::NfcA => Box::new(Desfire::new(config)),
        Variant::IsoDep => Box::new(IsoDep::new(config)),
    }
}

/// Accept the ACK of a Type 2 / Classic write: nothing at all (the host
/// stack consumed it) or the 4-bit `0A`.
pub(crate) fn expect_ack(stage: &'static str, response: &[u8]) -> Result<()> {
    match response {
        [] | [T2_ACK] => Ok(()),
        [nak] => Err(Error::UnexpectedStatus {
            stage,
            expected: T2_ACK,
            actual: *nak,
        }),
        other => Err(Error::ProtocolViolation {
            stage,
            expected: 1,
            actual: other.len(),
        }),
    }
}
