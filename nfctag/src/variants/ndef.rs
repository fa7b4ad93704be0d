// nfctag/src/variants/ndef.rs
//! NDEF Text read and Type 2 TLV write.

use std::sync::Arc;

use log::debug;

use crate::config::ProtocolConfig;
use crate::constants::{T2_CMD_WRITE, T2_PAGE_SIZE};
use crate::protocol::ndef::{wrap_tlv, NdefMessage, NdefRecord};
use crate::tag::Tag;
use crate::types::Variant;
use crate::variants::{expect_ack, TagProtocol};
use crate::{Error, Result};

/// NDEF Text records. Reads decode the message the platform delivered at
/// discovery; writes commit a single-record message to the Type 2 data area.
pub struct NdefText {
    config: Arc<ProtocolConfig>,
}

impl NdefText {
    /// Variant reading tunables from `config`.
    pub fn new(config: Arc<ProtocolConfig>) -> Self {
        Self { config }
    }
}

impl TagProtocol for NdefText {
    fn variant(&self) -> Variant {
        Variant::Ndef
    }

    fn read(&self, tag: &mut Tag) -> Result<Vec<u8>> {
        let raw = tag.ndef_messages().first().ok_or(Error::NoNdefMessage)?;
        let message = NdefMessage::decode(raw)?;
        let record = message.first().ok_or(Error::NoNdefMessage)?;
        let text = record.text_payload()?;
        debug!(
            "ndef text record: lang={}, {} byte(s)",
            String::from_utf8_lossy(text.language),
            text.body.len()
        );
        Ok(text.body.to_vec())
    }

    fn write(&self, tag: &mut Tag, data: &[u8]) -> Result<()> {
        let record = NdefRecord::text_from_bytes(&self.config.ndef_language, data)?;
        let tlv = wrap_tlv(&NdefMessage::single(record).encode()?)?;

        let first = self.config.ultralight_first_page;
        let pages = tlv.len().div_ceil(T2_PAGE_SIZE);
        if first as usize + pages - 1 > u8::MAX as usize {
            return Err(Error::InvalidLength {
                expected: (u8::MAX as usize - first as usize + 1) * T2_PAGE_SIZE,
                actual: tlv.len(),
            });
        }

        let mut session = tag.session()?;
        for (i, chunk) in tlv.chunks(T2_PAGE_SIZE).enumerate() {
            let mut command = [0u8; 2 + T2_PAGE_SIZE];
            command[0] = T2_CMD_WRITE;
            command[1] = first + i as u8;
            command[2..2 + chunk.len()].copy_from_slice(chunk);
            let response = session.transceive(&command)?;
            expect_ack("ndef write", &response)?;
        }
        debug!("ndef message committed across {} page(s)", pages);
        Ok(())
    }
}
