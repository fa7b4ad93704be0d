// nfctag/src/crypto/mod.rs
//! Handshake cryptography.

pub mod auth;
pub mod des;

pub use auth::{SessionKey, derive_session_key};
