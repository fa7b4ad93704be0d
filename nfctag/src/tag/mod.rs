// nfctag/src/tag/mod.rs
//! A discovered tag: identity, reported technologies and the radio link.

use std::fmt;

use crate::transport::Transceiver;
use crate::types::{CapabilitySet, ClassicSize, Uid};
use crate::Result;

pub mod builder;
pub mod session;

pub use builder::TagBuilder;
pub use session::Session;

/// Handle to one discovered tag. Built with [`TagBuilder`].
pub struct Tag {
    uid: Uid,
    capabilities: CapabilitySet,
    sak: Option<u8>,
    ndef_messages: Vec<Vec<u8>>,
    transport: Box<dyn Transceiver + Send>,
}

impl Tag {
    pub(crate) fn new(
        uid: Uid,
        capabilities: CapabilitySet,
        sak: Option<u8>,
        ndef_messages: Vec<Vec<u8>>,
        transport: Box<dyn Transceiver + Send>,
    ) -> Self {
        Self {
            uid,
            capabilities,
            sak,
            ndef_messages,
            transport,
        }
    }

    /// Tag UID.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Technologies in reported order.
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// SAK byte, when the platform reported one.
    pub fn sak(&self) -> Option<u8> {
        self.sak
    }

    /// Classic memory layout implied by the SAK.
    pub fn classic_size(&self) -> ClassicSize {
        ClassicSize::from_sak(self.sak)
    }

    /// Encoded NDEF messages the platform delivered with the discovery.
    pub fn ndef_messages(&self) -> &[Vec<u8>] {
        &self.ndef_messages
    }

    /// Open an exclusive session. The `&mut` borrow keeps a second session
    /// on the same tag from being opened while this one lives.
    pub fn session(&mut self) -> Result<Session<'_>> {
        Session::open(self.transport.as_mut())
    }

    /// Whether the transport has a session open.
    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("uid", &self.uid.to_hex())
            .field("capabilities", &self.capabilities)
            .field("sak", &self.sak)
            .field("ndef_messages", &self.ndef_messages.len())
            .finish_non_exhaustive()
    }
}
