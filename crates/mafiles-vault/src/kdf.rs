// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PBKDF2-HMAC-SHA1 key derivation from the manifest passphrase.
//!
//! The hash, iteration count, and output length are fixed by the on-disk
//! format written by Steam Desktop Authenticator. Changing any of them makes
//! existing maFiles undecryptable; a new format should use a memory-hard KDF
//! such as Argon2id instead.

use std::fmt;

use mafiles_core::DecryptError;
use secrecy::{ExposeSecret, SecretString};
use sha1::Sha1;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// PBKDF2 iteration count of the legacy format.
pub const PBKDF2_ITERATIONS: u32 = 50_000;

/// Salt length in bytes, after base64 decoding.
pub const SALT_LENGTH: usize = 8;

/// Derived key length in bytes (AES-256).
pub const KEY_LENGTH: usize = 32;

/// A 32-byte AES key derived for a single record.
///
/// Zeroized on drop. Deliberately not `Clone` or serializable, and `Debug`
/// never prints the bytes.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_LENGTH]);

impl DerivedKey {
    /// Wrap raw key bytes, rejecting anything that is not exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecryptError> {
        let key: [u8; KEY_LENGTH] = bytes.try_into().map_err(|_| {
            DecryptError::InvalidInput(format!(
                "key must be {KEY_LENGTH} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(key))
    }

    /// Returns a reference to the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DerivedKey").field(&"[REDACTED]").finish()
    }
}

/// Derive the record key from `passphrase` and the record's decoded `salt`.
///
/// Deterministic: the same inputs always produce the same key. The passphrase
/// is only borrowed for the duration of the call.
pub fn derive_key(passphrase: &SecretString, salt: &[u8]) -> Result<DerivedKey, DecryptError> {
    let passphrase = passphrase.expose_secret();
    if passphrase.is_empty() {
        return Err(DecryptError::InvalidInput(
            "passphrase must not be empty".to_string(),
        ));
    }
    if salt.len() != SALT_LENGTH {
        return Err(DecryptError::InvalidInput(format!(
            "salt must be {SALT_LENGTH} bytes, got {}",
            salt.len()
        )));
    }

    let mut key = DerivedKey([0u8; KEY_LENGTH]);
    pbkdf2::pbkdf2_hmac::<Sha1>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key.0);
    Ok(key)
}
