// nfctag/src/protocol/mod.rs
//! Wire formats spoken over a tag session.

pub mod apdu;
pub mod ndef;
pub mod parser;

pub use ndef::{NdefMessage, NdefRecord, TextPayload};
