// nfctag/src/transport/mock.rs
//! Scripted transport for tests and demos.

use std::collections::VecDeque;
use std::io;

use crate::transport::traits::Transceiver;
use crate::{Error, Result};

/// A queued reply for [`MockTransport`].
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Frame the tag answers with.
    Data(Vec<u8>),
    /// Transport failure of this kind.
    Io(io::ErrorKind),
    /// Tag stops answering.
    Timeout,
}

/// Mock transport for unit tests. It records sent frames and returns queued
/// replies in order. An exhausted queue behaves like a tag that went silent.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Frames passed to `transceive`, oldest first.
    pub sent: Vec<Vec<u8>>,
    /// Replies still to hand out.
    pub replies: VecDeque<MockReply>,
    /// Whether a session is open.
    pub connected: bool,
    /// Calls to `connect`.
    pub connect_count: usize,
    /// Calls to `close`.
    pub close_count: usize,
    /// Testing hook: the next `connect` fails with this kind
    pub fail_connect: Option<io::ErrorKind>,
    /// Testing hook: every `close` fails with this kind
    pub fail_close: Option<io::ErrorKind>,
}

impl MockTransport {
    /// Empty mock: connects fine, never answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mock pre-seeded with successful replies.
    pub fn with_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut mock = Self::new();
        for resp in responses {
            mock.push_response(resp);
        }
        mock
    }

    /// Queue a data reply.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.replies.push_back(MockReply::Data(resp));
    }

    /// Queue a transport failure.
    pub fn push_io_error(&mut self, kind: io::ErrorKind) {
        self.replies.push_back(MockReply::Io(kind));
    }

    /// Queue a timeout.
    pub fn push_timeout(&mut self) {
        self.replies.push_back(MockReply::Timeout);
    }

    /// Remove and return the most recent frame.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transceiver for MockTransport {
    fn connect(&mut self) -> Result<()> {
        self.connect_count += 1;
        if let Some(kind) = self.fail_connect.take() {
            return Err(io::Error::new(kind, "mock connect failure").into());
        }
        self.connected = true;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.close_count += 1;
        self.connected = false;
        match self.fail_close {
            Some(kind) => Err(io::Error::new(kind, "mock close failure").into()),
            None => Ok(()),
        }
    }

    fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        if !self.connected {
            return Err(io::Error::new(io::ErrorKind::NotConnected, "tag not connected").into());
        }
        self.sent.push(command.to_vec());
        match self.replies.pop_front() {
            Some(MockReply::Data(resp)) => Ok(resp),
            Some(MockReply::Io(kind)) => Err(io::Error::new(kind, "mock transceive failure").into()),
            Some(MockReply::Timeout) | None => Err(Error::Timeout),
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}
