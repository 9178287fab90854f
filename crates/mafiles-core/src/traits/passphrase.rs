// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Passphrase acquisition trait.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::BoxError;

/// Supplies the manifest encryption passphrase on demand.
///
/// Called at most once per resolution, and only when the manifest is
/// encrypted and the caller did not pass a passphrase directly. The call may
/// suspend indefinitely waiting for a human; callers bound it with a timeout.
#[async_trait]
pub trait PassphraseProvider: Send + Sync {
    /// Obtain the passphrase.
    async fn passphrase(&self) -> Result<SecretString, BoxError>;
}

#[async_trait]
impl<T: PassphraseProvider + ?Sized> PassphraseProvider for &T {
    async fn passphrase(&self) -> Result<SecretString, BoxError> {
        (**self).passphrase().await
    }
}
