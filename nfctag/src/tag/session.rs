// nfctag/src/tag/session.rs
//! Scoped radio sessions.

use log::{debug, trace, warn};

use crate::transport::Transceiver;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Scoped radio session. Connects on open and closes on drop, whatever the
/// outcome of the exchange. A failing close is logged and never replaces the
/// exchange's own result.
pub struct Session<'a> {
    transport: &'a mut (dyn Transceiver + Send),
    frames: usize,
}

impl<'a> Session<'a> {
    pub(crate) fn open(transport: &'a mut (dyn Transceiver + Send)) -> Result<Self> {
        transport.connect()?;
        debug!("tag session opened");
        Ok(Self {
            transport,
            frames: 0,
        })
    }

    /// Exchange one frame.
    pub fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        let max = self.transport.max_transceive_length();
        if command.len() > max {
            return Err(Error::InvalidLength {
                expected: max,
                actual: command.len(),
            });
        }

        trace!(">> {}", bytes_to_hex_spaced(command));
        let response = self.transport.transceive(command)?;
        trace!("<< {}", bytes_to_hex_spaced(&response));
        self.frames += 1;
        Ok(response)
    }

    /// Exchange one frame whose response must be exactly `expected` bytes.
    pub fn transceive_exact(
        &mut self,
        stage: &'static str,
        command: &[u8],
        expected: usize,
    ) -> Result<Vec<u8>> {
        let response = self.transceive(command)?;
        crate::protocol::parser::expect_len(stage, &response, expected)?;
        Ok(response)
    }

    /// Frames exchanged so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        match self.transport.close() {
            Ok(()) => debug!("tag session closed after {} frame(s)", self.frames),
            Err(e) => warn!("error closing the tag session: {}", e),
        }
    }
}
