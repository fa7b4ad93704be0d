//! DES / 3DES in CBC mode without padding.
//!
//! The key length selects the primitive: 8 bytes single DES, 16 bytes
//! two-key 3DES (EDE2), 24 bytes three-key 3DES (EDE3). Input must be a
//! non-empty whole number of 8-byte blocks.

use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use des::{Des, TdesEde2, TdesEde3};

use crate::constants::DES_BLOCK_SIZE;
use crate::{Error, Result};

/// CBC initialisation vector.
pub type Iv = [u8; DES_BLOCK_SIZE];

/// All-zero IV.
pub const ZERO_IV: Iv = [0u8; DES_BLOCK_SIZE];

/// CBC-encrypt `data` under `key` starting from `iv`.
pub fn cbc_encrypt(key: &[u8], iv: &Iv, data: &[u8]) -> Result<Vec<u8>> {
    ensure_blocks(data)?;
    match key.len() {
        8 => encrypt_with::<Des>(key, iv, data),
        16 => encrypt_with::<TdesEde2>(key, iv, data),
        24 => encrypt_with::<TdesEde3>(key, iv, data),
        n => Err(bad_key(n)),
    }
}

/// CBC-decrypt `data` under `key` starting from `iv`.
pub fn cbc_decrypt(key: &[u8], iv: &Iv, data: &[u8]) -> Result<Vec<u8>> {
    ensure_blocks(data)?;
    match key.len() {
        8 => decrypt_with::<Des>(key, iv, data),
        16 => decrypt_with::<TdesEde2>(key, iv, data),
        24 => decrypt_with::<TdesEde3>(key, iv, data),
        n => Err(bad_key(n)),
    }
}

fn encrypt_with<C>(key: &[u8], iv: &Iv, data: &[u8]) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    let cipher = cbc::Encryptor::<C>::new_from_slices(key, iv).map_err(|_| bad_key(key.len()))?;
    Ok(cipher.encrypt_padded_vec_mut::<NoPadding>(data))
}

fn decrypt_with<C>(key: &[u8], iv: &Iv, data: &[u8]) -> Result<Vec<u8>>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let cipher = cbc::Decryptor::<C>::new_from_slices(key, iv).map_err(|_| bad_key(key.len()))?;
    cipher
        .decrypt_padded_vec_mut::<NoPadding>(data)
        .map_err(|_| Error::InvalidLength {
            expected: data.len().next_multiple_of(DES_BLOCK_SIZE),
            actual: data.len(),
        })
}

fn ensure_blocks(data: &[u8]) -> Result<()> {
    if data.is_empty() || data.len() % DES_BLOCK_SIZE != 0 {
        return Err(Error::InvalidLength {
            expected: data.len().next_multiple_of(DES_BLOCK_SIZE).max(DES_BLOCK_SIZE),
            actual: data.len(),
        });
    }
    Ok(())
}

fn bad_key(actual: usize) -> Error {
    Error::InvalidLength {
        expected: 16,
        actual,
    }
}
