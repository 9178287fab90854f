// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for manifest indexing, decryption, and record resolution.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::AccountId;

/// Boxed error returned by external collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures of key derivation and record decryption.
#[derive(Debug, Error)]
pub enum DecryptError {
    /// A caller supplied a parameter of the wrong shape (empty passphrase,
    /// salt/IV/key of the wrong length).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The stored ciphertext is not valid base64 text.
    #[error("ciphertext is not valid base64: {0}")]
    InvalidCiphertext(String),

    /// Block alignment or PKCS#7 padding check failed. With this format that
    /// almost always means the key was derived from the wrong passphrase.
    #[error("bad padding or wrong key")]
    BadPaddingOrKey,

    /// The decrypted bytes are not valid UTF-8.
    #[error("decrypted data is not valid UTF-8")]
    NotUtf8,
}

/// Failures while loading or indexing a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read manifest {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest is not a valid manifest document.
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two entries share the same account identifier.
    #[error("duplicate manifest entry for steamid {0}")]
    DuplicateAccount(AccountId),

    /// The manifest is encrypted but an entry lacks its salt or IV.
    #[error("encrypted manifest entry for steamid {account_id} has no {field}")]
    MissingEncryptionParams {
        account_id: AccountId,
        field: &'static str,
    },

    /// A salt or IV is not valid base64.
    #[error("manifest entry for steamid {account_id} has invalid {field}: {source}")]
    InvalidEncoding {
        account_id: AccountId,
        field: &'static str,
        source: base64::DecodeError,
    },
}

/// Failures of a single credential resolution.
///
/// Variants are mutually exclusive. In particular [`ResolveError::DecryptionFailed`]
/// (wrong passphrase, corrupt ciphertext) and [`ResolveError::MalformedRecord`]
/// (plaintext is not a valid maFile document) are never conflated.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Malformed salt, IV, key, or passphrase.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The manifest has no entry for the requested account.
    #[error("no manifest entry for steamid {0}")]
    EntryNotFound(AccountId),

    /// The record is encrypted but no usable passphrase was obtained.
    #[error("no encryption password was provided")]
    MissingPassphrase {
        #[source]
        source: Option<BoxError>,
    },

    /// The record could not be decrypted.
    #[error("decryption failed: {0}")]
    DecryptionFailed(DecryptError),

    /// The plaintext is not a valid maFile document.
    #[error("maFile is malformed: {0}")]
    MalformedRecord(serde_json::Error),

    /// The record bytes could not be fetched.
    #[error("failed to read {filename}: {source}")]
    SourceUnavailable { filename: String, source: BoxError },
}

impl ResolveError {
    /// A short, user-facing suggestion for how to recover, if there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::EntryNotFound(_) => Some("check the steamid64; it must match an entry in manifest.json"),
            Self::MissingPassphrase { .. } => {
                Some("enter the encryption password or set MAFILES_PASSPHRASE")
            }
            Self::DecryptionFailed(DecryptError::BadPaddingOrKey) => {
                Some("the encryption password is most likely wrong")
            }
            Self::DecryptionFailed(_) | Self::MalformedRecord(_) => {
                Some("the maFile appears to be corrupt")
            }
            Self::InvalidInput(_) => Some("the manifest entry has malformed encryption parameters"),
            Self::SourceUnavailable { .. } => None,
        }
    }
}

impl From<DecryptError> for ResolveError {
    fn from(err: DecryptError) -> Self {
        match err {
            DecryptError::InvalidInput(msg) => Self::InvalidInput(msg),
            other => Self::DecryptionFailed(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_resolve_invalid_input() {
        let err: ResolveError = DecryptError::InvalidInput("iv must be 16 bytes".into()).into();
        assert!(matches!(err, ResolveError::InvalidInput(ref m) if m == "iv must be 16 bytes"));
    }

    #[test]
    fn cipher_failures_map_to_decryption_failed() {
        let err: ResolveError = DecryptError::BadPaddingOrKey.into();
        assert!(matches!(
            err,
            ResolveError::DecryptionFailed(DecryptError::BadPaddingOrKey)
        ));

        let err: ResolveError = DecryptError::NotUtf8.into();
        assert!(matches!(err, ResolveError::DecryptionFailed(DecryptError::NotUtf8)));
    }

    #[test]
    fn entry_not_found_message_includes_account_id() {
        let err = ResolveError::EntryNotFound(AccountId(76561197960287930));
        assert!(err.to_string().contains("76561197960287930"));
    }

    #[test]
    fn wrong_password_hint_differs_from_corruption_hint() {
        let wrong = ResolveError::DecryptionFailed(DecryptError::BadPaddingOrKey);
        let corrupt =
            ResolveError::MalformedRecord(serde_json::from_str::<u8>("{").unwrap_err());
        assert_eq!(wrong.hint(), Some("the encryption password is most likely wrong"));
        assert_ne!(wrong.hint(), corrupt.hint());
    }
}
