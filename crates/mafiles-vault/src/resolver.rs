// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! maFile resolution: lookup, fetch, passphrase, decrypt, parse.
//!
//! A resolution either returns a fully decrypted and parsed [`MaFile`] or an
//! error; partially decrypted buffers never escape. Secrets acquired during
//! a call (the prompted passphrase, the derived key, the plaintext) are
//! owned by that call and zeroized when it returns, on every exit path.

use mafiles_core::{AccountId, MaFile, PassphraseProvider, RecordSource, ResolveError};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::crypto;
use crate::manifest::{IndexEntry, ManifestIndex, RecordProtection};

/// Resolves maFiles using a record source and a passphrase provider.
///
/// Holds no per-resolution state, so one resolver can serve concurrent
/// resolutions from multiple tasks.
#[derive(Debug, Clone)]
pub struct CredentialResolver<S, P> {
    source: S,
    prompt: P,
}

impl<S, P> CredentialResolver<S, P>
where
    S: RecordSource,
    P: PassphraseProvider,
{
    pub fn new(source: S, prompt: P) -> Self {
        Self { source, prompt }
    }

    /// Resolve the maFile for `account_id`.
    ///
    /// A non-empty caller-supplied `passphrase` is used as is; otherwise the
    /// passphrase provider is asked, but only if the manifest is encrypted.
    pub async fn resolve(
        &self,
        index: &ManifestIndex,
        account_id: AccountId,
        passphrase: Option<&SecretString>,
    ) -> Result<MaFile, ResolveError> {
        let entry = index
            .find_by_account_id(account_id)
            .ok_or(ResolveError::EntryNotFound(account_id))?;
        debug!(%account_id, filename = entry.filename(), "resolving maFile");

        let stored = Zeroizing::new(self.fetch(entry).await?);

        let mafile = match entry.protection() {
            RecordProtection::Plaintext => parse_record(&stored)?,
            RecordProtection::Encrypted { salt, iv } => {
                let prompted;
                let passphrase = match usable(passphrase) {
                    Some(passphrase) => passphrase,
                    None => {
                        prompted = self.obtain_passphrase().await?;
                        &prompted
                    }
                };

                let plaintext = crypto::open_record(passphrase, salt, iv, &stored)
                    .inspect_err(|e| warn!(%account_id, error = %e, "maFile decryption failed"))?;
                parse_record(plaintext.as_bytes())?
            }
        };

        debug!(%account_id, "maFile resolved");
        Ok(mafile)
    }

    /// Try to resolve every entry in `index` with a single passphrase.
    ///
    /// The passphrase is obtained at most once up front. Each entry's outcome
    /// is reported in manifest order; decrypted records are discarded
    /// immediately. Fails as a whole only if no passphrase can be obtained.
    pub async fn verify_all(
        &self,
        index: &ManifestIndex,
        passphrase: Option<&SecretString>,
    ) -> Result<Vec<(AccountId, Result<(), ResolveError>)>, ResolveError> {
        let prompted;
        let passphrase = match usable(passphrase) {
            Some(passphrase) => Some(passphrase),
            None if index.is_encrypted() && !index.is_empty() => {
                prompted = self.obtain_passphrase().await?;
                Some(&prompted)
            }
            None => None,
        };

        let mut outcomes = Vec::with_capacity(index.len());
        for entry in index.entries() {
            let account_id = entry.account_id();
            let outcome = self.resolve(index, account_id, passphrase).await.map(drop);
            outcomes.push((account_id, outcome));
        }
        Ok(outcomes)
    }

    async fn fetch(&self, entry: &IndexEntry) -> Result<Vec<u8>, ResolveError> {
        self.source
            .fetch(entry.filename())
            .await
            .map_err(|source| ResolveError::SourceUnavailable {
                filename: entry.filename().to_string(),
                source,
            })
    }

    async fn obtain_passphrase(&self) -> Result<SecretString, ResolveError> {
        let passphrase = self
            .prompt
            .passphrase()
            .await
            .map_err(|e| ResolveError::MissingPassphrase { source: Some(e) })?;
        if passphrase.expose_secret().is_empty() {
            return Err(ResolveError::MissingPassphrase { source: None });
        }
        Ok(passphrase)
    }
}

fn usable(passphrase: Option<&SecretString>) -> Option<&SecretString> {
    passphrase.filter(|p| !p.expose_secret().is_empty())
}

fn parse_record(plaintext: &[u8]) -> Result<MaFile, ResolveError> {
    serde_json::from_slice(plaintext).map_err(ResolveError::MalformedRecord)
}
