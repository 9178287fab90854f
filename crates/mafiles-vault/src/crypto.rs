// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AES-256-CBC record decryption.
//!
//! Encrypted maFiles are stored as base64 text. [`decode_ciphertext`] owns the
//! base64 layer; [`decrypt`] only ever sees raw ciphertext bytes. PKCS#7
//! padding is validated on every decryption, and a padding failure is the
//! usual symptom of a key derived from the wrong passphrase.

use aes::Aes256;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};
use mafiles_core::DecryptError;
use secrecy::SecretString;
use zeroize::Zeroizing;

use crate::kdf::{self, DerivedKey};

type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// IV length in bytes, after base64 decoding.
pub const IV_LENGTH: usize = 16;

/// AES block size in bytes.
const BLOCK_SIZE: usize = 16;

/// Decode the base64 text stored in an encrypted maFile into raw ciphertext.
///
/// Surrounding ASCII whitespace (a trailing newline added by an editor, for
/// example) is ignored.
pub fn decode_ciphertext(raw: &[u8]) -> Result<Vec<u8>, DecryptError> {
    STANDARD
        .decode(raw.trim_ascii())
        .map_err(|e| DecryptError::InvalidCiphertext(e.to_string()))
}

/// Decrypt raw `ciphertext` with `key` and `iv`, returning UTF-8 plaintext.
///
/// The intermediate buffer and the returned plaintext are zeroized on drop.
pub fn decrypt(
    key: &DerivedKey,
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Zeroizing<String>, DecryptError> {
    if iv.len() != IV_LENGTH {
        return Err(DecryptError::InvalidInput(format!(
            "iv must be {IV_LENGTH} bytes, got {}",
            iv.len()
        )));
    }
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(DecryptError::BadPaddingOrKey);
    }

    let decryptor = Aes256CbcDec::new_from_slices(key.as_bytes(), iv)
        .map_err(|e| DecryptError::InvalidInput(format!("cipher setup failed: {e}")))?;

    let mut buf = Zeroizing::new(ciphertext.to_vec());
    let plaintext = decryptor
        .decrypt_padded_mut::<Pkcs7>(&mut buf)
        .map_err(|_| DecryptError::BadPaddingOrKey)?;

    let text = std::str::from_utf8(plaintext).map_err(|_| DecryptError::NotUtf8)?;
    Ok(Zeroizing::new(text.to_owned()))
}

/// Derive the record key and decrypt a stored record in one scoped step.
///
/// `stored` is the maFile content exactly as read from disk (base64 text).
/// The derived key never leaves this function.
pub fn open_record(
    passphrase: &SecretString,
    salt: &[u8],
    iv: &[u8],
    stored: &[u8],
) -> Result<Zeroizing<String>, DecryptError> {
    if iv.len() != IV_LENGTH {
        return Err(DecryptError::InvalidInput(format!(
            "iv must be {IV_LENGTH} bytes, got {}",
            iv.len()
        )));
    }
    let key = kdf::derive_key(passphrase, salt)?;
    let ciphertext = decode_ciphertext(stored)?;
    decrypt(&key, iv, &ciphertext)
}
