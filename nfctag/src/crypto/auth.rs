//! Three-pass challenge/response session key derivation.
//!
//! The card opens with `ek(RndB)`. The reader recovers RndB, rotates it
//! left by one byte, mixes it with its own challenge RndA and runs the
//! result through the cipher again. `RndA || ek(RndA ^ RndB')` is the
//! 16-byte body of the confirmation frame.

use std::fmt;

use log::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::config::{AuthConfig, ChallengeSource, IvPolicy, SendMode};
use crate::crypto::des::{self, Iv, ZERO_IV};
use crate::{Error, Result};

/// Length of RndA and RndB.
pub const CHALLENGE_LEN: usize = 8;
/// Length of the confirmation frame body.
pub const SESSION_KEY_LEN: usize = 16;

/// Transient session secret. Wiped on drop and never printed.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SessionKey([u8; SESSION_KEY_LEN]);

impl SessionKey {
    /// `RndA || ek(RndA ^ RndB')`.
    pub fn as_bytes(&self) -> &[u8; SESSION_KEY_LEN] {
        &self.0
    }

    /// The reader's challenge half.
    pub fn rnd_a(&self) -> &[u8] {
        &self.0[..CHALLENGE_LEN]
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionKey(..)")
    }
}

impl ChallengeSource {
    fn generate(&self) -> [u8; CHALLENGE_LEN] {
        match self {
            Self::Random => rand::random(),
            Self::Fixed(value) => *value,
        }
    }
}

/// Rotate an 8-byte block left by one byte.
pub fn rotate_left(block: &[u8; CHALLENGE_LEN]) -> [u8; CHALLENGE_LEN] {
    let mut out = *block;
    out.rotate_left(1);
    out
}

fn xor(a: &[u8; CHALLENGE_LEN], b: &[u8; CHALLENGE_LEN]) -> [u8; CHALLENGE_LEN] {
    let mut out = [0u8; CHALLENGE_LEN];
    for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        *o = x ^ y;
    }
    out
}

/// Derive the session key from the card's encrypted challenge.
///
/// Any primitive failure (key or block size) is reported as
/// [`Error::AuthenticationFailed`]; no partial key is ever produced.
pub fn derive_session_key(config: &AuthConfig, enc_rnd_b: &[u8]) -> Result<SessionKey> {
    let enc_rnd_b: [u8; CHALLENGE_LEN] = enc_rnd_b.try_into().map_err(|_| {
        Error::AuthenticationFailed(format!(
            "card challenge must be {} bytes, got {}",
            CHALLENGE_LEN,
            enc_rnd_b.len()
        ))
    })?;

    let rnd_b = Zeroizing::new(to_block(
        des::cbc_decrypt(&config.key, &ZERO_IV, &enc_rnd_b).map_err(primitive_failure)?,
    )?);
    let rnd_a = Zeroizing::new(config.challenge.generate());
    let mixed = Zeroizing::new(xor(&rnd_a, &rotate_left(&rnd_b)));

    let iv: Iv = match config.iv_policy {
        IvPolicy::Reset => ZERO_IV,
        IvPolicy::Chained => enc_rnd_b,
    };
    let sealed = match config.send_mode {
        SendMode::Encipher => des::cbc_encrypt(&config.key, &iv, mixed.as_slice()),
        SendMode::Decipher => des::cbc_decrypt(&config.key, &iv, mixed.as_slice()),
    }
    .map_err(primitive_failure)?;
    let sealed = to_block(sealed)?;

    let mut key = [0u8; SESSION_KEY_LEN];
    key[..CHALLENGE_LEN].copy_from_slice(rnd_a.as_slice());
    key[CHALLENGE_LEN..].copy_from_slice(&sealed);
    debug!(
        "session key derived ({:?} iv, {:?})",
        config.iv_policy, config.send_mode
    );
    Ok(SessionKey(key))
}

fn to_block(bytes: Vec<u8>) -> Result<[u8; CHALLENGE_LEN]> {
    let bytes = Zeroizing::new(bytes);
    bytes.as_slice().try_into().map_err(|_| {
        Error::AuthenticationFailed(format!("cipher produced {} bytes", bytes.len()))
    })
}

fn primitive_failure(err: Error) -> Error {
    Error::AuthenticationFailed(err.to_string())
}
