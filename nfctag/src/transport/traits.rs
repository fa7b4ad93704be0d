// nfctag/src/transport/traits.rs
//! Host collaborator trait.

use crate::Result;

/// Transceiver abstracts the platform radio stack away from the protocol
/// variants. The host implements it once per physical tag session.
pub trait Transceiver {
    /// Open the radio session. Called once before an exchange.
    fn connect(&mut self) -> Result<()>;

    /// Release the radio session. Called once after an exchange, also on
    /// failure.
    fn close(&mut self) -> Result<()>;

    /// Send one command frame and block until the tag answers. The host is
    /// responsible for bounding the wait and must fail with
    /// [`crate::Error::Timeout`] (or an `Io` error) rather than hang.
    fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>>;

    /// Whether `connect` succeeded and `close` has not been called since.
    fn is_connected(&self) -> bool;

    /// Largest frame the host stack accepts. Default matches the common
    /// ISO 14443-A limit.
    fn max_transceive_length(&self) -> usize {
        253
    }
}
