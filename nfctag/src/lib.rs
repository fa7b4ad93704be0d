// nfctag/src/lib.rs

//! nfctag
//!
//! Capability-driven read/write protocols for NFC tags: NDEF text records,
//! MIFARE Ultralight pages, MIFARE Classic sectors, a DESFire-style
//! three-pass DES handshake on NfcA, and ISO-DEP APDUs. The host supplies
//! the radio link through [`transport::Transceiver`].
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod crypto;
pub mod dispatcher;
pub mod error;
pub mod exchange;
pub mod prelude;
pub mod protocol;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;
pub mod variants;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the newtypes in `types` are reachable without the module path.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
