// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Known-answer vector for the legacy maFile format.
//!
//! Produced with an independent PBKDF2-HMAC-SHA1 / AES-256-CBC
//! implementation, not with this workspace's code.

use base64::{Engine as _, engine::general_purpose::STANDARD};

pub const PASSPHRASE: &str = "secret";

/// Fails PKCS#7 validation against [`CIPHERTEXT_B64`].
pub const WRONG_PASSPHRASE: &str = "wrong";

pub const SALT_B64: &str = "AQIDBAUGBwg=";

pub const IV_B64: &str = "EBESExQVFhcYGRobHB0eHw==";

/// PBKDF2-HMAC-SHA1("secret", salt, 50 000, 32), hex.
pub const KEY_HEX: &str = "6476e7f0a166d2ab114ef0dc36d2710d420e4c1fb0e9e61335bc6d1d49b4435f";

pub const PLAINTEXT: &str = r#"{"shared_secret":"c2hhcmVkLXNlY3JldA==","account_name":"gaben","identity_secret":"aWRlbnRpdHk="}"#;

pub const CIPHERTEXT_B64: &str = "i3zEeO/NKsfQlpH3lEKvXf69/wXL//pCDjBN8jtLXQFsxlVp/KWvD3wwlACvrW+bcNOY39/bu/QtOZJfIPDWIz1eOL4EvL6eocG7+qraCu2JMiX7sLk200oGEigU48tFgJrF0Pk8me711RbjOHD46A==";

/// Decoded [`SALT_B64`].
pub fn salt() -> Vec<u8> {
    STANDARD.decode(SALT_B64).expect("vector salt is valid base64")
}

/// Decoded [`IV_B64`].
pub fn iv() -> [u8; 16] {
    let mut iv = [0u8; 16];
    iv.copy_from_slice(&STANDARD.decode(IV_B64).expect("vector iv is valid base64"));
    iv
}
