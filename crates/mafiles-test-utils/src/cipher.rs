// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reference encryptor matching the authenticator's writer.
//!
//! Exists only to build fixtures; the production crates never encrypt.

use aes::Aes256;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockEncryptMut, KeyIvInit};
use sha1::Sha1;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;

/// PBKDF2-HMAC-SHA1, 50 000 rounds, 32-byte output.
pub fn reference_key(passphrase: &str, salt: &[u8]) -> [u8; 32] {
    let mut key = [0u8; 32];
    pbkdf2::pbkdf2_hmac::<Sha1>(passphrase.as_bytes(), salt, 50_000, &mut key);
    key
}

/// AES-256-CBC with PKCS#7 padding, raw bytes in and out.
pub fn encrypt_bytes(key: &[u8; 32], iv: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    Aes256CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Encrypt `plaintext` the way the authenticator stores an encrypted maFile:
/// base64 text of the ciphertext.
pub fn encrypt_record(passphrase: &str, salt: &[u8], iv: &[u8; 16], plaintext: &str) -> String {
    let key = reference_key(passphrase, salt);
    STANDARD.encode(encrypt_bytes(&key, iv, plaintext.as_bytes()))
}
