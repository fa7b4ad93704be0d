// nfctag/src/tag/builder.rs
//! Tag construction from discovery data.

use std::convert::TryFrom;

use crate::protocol::ndef::unwrap_tlv;
use crate::tag::Tag;
use crate::transport::Transceiver;
use crate::types::{CapabilitySet, Uid};
use crate::{Error, Result};

/// Assemble a [`Tag`] from what the platform reports at discovery.
pub struct TagBuilder {
    transport: Box<dyn Transceiver + Send>,
    uid: Option<Vec<u8>>,
    capabilities: Vec<String>,
    sak: Option<u8>,
    ndef_messages: Vec<Vec<u8>>,
    ndef_areas: Vec<Vec<u8>>,
}

impl TagBuilder {
    /// Start from the host's transport for this tag.
    pub fn new(transport: Box<dyn Transceiver + Send>) -> Self {
        Self {
            transport,
            uid: None,
            capabilities: Vec::new(),
            sak: None,
            ndef_messages: Vec::new(),
            ndef_areas: Vec::new(),
        }
    }

    /// Tag UID, required.
    pub fn uid(mut self, uid: &[u8]) -> Self {
        self.uid = Some(uid.to_vec());
        self
    }

    /// Append one technology name. Order is preserved.
    pub fn capability(mut self, name: impl Into<String>) -> Self {
        self.capabilities.push(name.into());
        self
    }

    /// Append several technology names in order.
    pub fn capabilities<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities.extend(names.into_iter().map(Into::into));
        self
    }

    /// SAK byte from anticollision; sizes Classic tags.
    pub fn sak(mut self, sak: u8) -> Self {
        self.sak = Some(sak);
        self
    }

    /// Attach one delivered NDEF message (encoded form).
    pub fn ndef_message(mut self, message: Vec<u8>) -> Self {
        self.ndef_messages.push(message);
        self
    }

    /// Attach a raw Type 2 data area. Its NDEF TLV is extracted on build and
    /// queued after any message given through [`TagBuilder::ndef_message`].
    pub fn ndef_data_area(mut self, area: &[u8]) -> Self {
        self.ndef_areas.push(area.to_vec());
        self
    }

    /// Requires a UID of 1 to 10 bytes.
    pub fn build(mut self) -> Result<Tag> {
        let raw = self
            .uid
            .ok_or_else(|| Error::MalformedInput("tag UID is required".into()))?;
        let uid = Uid::try_from(raw.as_slice())?;
        for area in &self.ndef_areas {
            self.ndef_messages.push(unwrap_tlv(area)?.to_vec());
        }
        Ok(Tag::new(
            uid,
            CapabilitySet::new(self.capabilities),
            self.sak,
            self.ndef_messages,
            self.transport,
        ))
    }
}
