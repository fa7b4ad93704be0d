//! Test support helpers intended for use by unit and integration tests.
//!
//! A tag owns its transport as a boxed trait object, so tests keep a
//! [`SharedMock`] handle to inspect what was sent after the tag consumed it.
#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::tag::{Tag, TagBuilder};
use crate::transport::{MockTransport, Transceiver};
use crate::Result;

/// UID used by every fixture tag.
pub const FIXTURE_UID: [u8; 4] = [0x04, 0xA1, 0xB2, 0xC3];

/// A [`MockTransport`] behind a shared lock.
#[derive(Debug, Clone, Default)]
#[doc(hidden)]
pub struct SharedMock(Arc<Mutex<MockTransport>>);

impl SharedMock {
    /// Mock with an empty reply queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock pre-seeded with data replies.
    pub fn with_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self(Arc::new(Mutex::new(MockTransport::with_responses(responses))))
    }

    /// Lock the mock, ignoring poisoning.
    pub fn lock(&self) -> MutexGuard<'_, MockTransport> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every frame sent so far, in order.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.lock().sent.clone()
    }

    /// A tag with [`FIXTURE_UID`] and the given technologies, wired to this mock.
    pub fn tag(&self, capabilities: &[&str]) -> Tag {
        self.builder(capabilities).build().unwrap_or_else(|e| panic!("fixture tag: {e}"))
    }

    /// Fixture tag with a SAK.
    pub fn tag_with_sak(&self, capabilities: &[&str], sak: u8) -> Tag {
        self.builder(capabilities)
            .sak(sak)
            .build()
            .unwrap_or_else(|e| panic!("fixture tag: {e}"))
    }

    /// Fixture tag carrying delivered NDEF messages.
    pub fn tag_with_ndef(&self, capabilities: &[&str], messages: Vec<Vec<u8>>) -> Tag {
        messages
            .into_iter()
            .fold(self.builder(capabilities), TagBuilder::ndef_message)
            .build()
            .unwrap_or_else(|e| panic!("fixture tag: {e}"))
    }

    /// Builder preloaded with the fixture UID and technologies.
    pub fn builder(&self, capabilities: &[&str]) -> TagBuilder {
        TagBuilder::new(Box::new(self.clone()))
            .uid(&FIXTURE_UID)
            .capabilities(capabilities.iter().copied())
    }
}

impl Transceiver for SharedMock {
    fn connect(&mut self) -> Result<()> {
        self.lock().connect()
    }

    fn close(&mut self) -> Result<()> {
        self.lock().close()
    }

    fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        self.lock().transceive(command)
    }

    fn is_connected(&self) -> bool {
        self.lock().is_connected()
    }

    fn max_transceive_length(&self) -> usize {
        self.lock().max_transceive_length()
    }
}
