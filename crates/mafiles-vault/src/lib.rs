// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolution and decryption of Steam Desktop Authenticator maFiles.
//!
//! The authenticator keeps one maFile per account next to a `manifest.json`.
//! When the manifest is encrypted, each maFile is base64 text of an
//! AES-256-CBC ciphertext whose key is derived from the user's passphrase
//! with PBKDF2-HMAC-SHA1 and a per-record salt:
//!
//! ```text
//! passphrase ─┐
//!   salt ─────┴─ PBKDF2-SHA1 (50 000 rounds) ─► key ─┐
//!   iv ──────────────────────────────────────────────┼─ AES-256-CBC ─► JSON
//!   maFile (base64) ─► ciphertext ───────────────────┘
//! ```

pub mod crypto;
pub mod kdf;
pub mod manifest;
pub mod prompt;
pub mod resolver;
pub mod source;

pub use kdf::{DerivedKey, derive_key};
pub use manifest::{IndexEntry, ManifestIndex, RecordProtection};
pub use prompt::{PASSPHRASE_ENV_VAR, StaticPassphrase, TerminalPassphrase};
pub use resolver::CredentialResolver;
pub use source::{FsRecordSource, load_manifest};
