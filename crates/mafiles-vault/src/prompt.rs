// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Passphrase acquisition via MAFILES_PASSPHRASE or a TTY prompt.

use std::io::IsTerminal;

use async_trait::async_trait;
use mafiles_core::{BoxError, PassphraseProvider};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// The environment variable name for providing the encryption passphrase.
pub const PASSPHRASE_ENV_VAR: &str = "MAFILES_PASSPHRASE";

const PROMPT: &str = "Enter SDA encryption password: ";

/// Reads the passphrase from the environment or an interactive terminal.
///
/// Priority:
/// 1. `MAFILES_PASSPHRASE` environment variable (for scripts and CI)
/// 2. Interactive TTY prompt via `rpassword`, with echo disabled
///
/// Returns an error if neither source is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPassphrase;

impl TerminalPassphrase {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PassphraseProvider for TerminalPassphrase {
    async fn passphrase(&self) -> Result<SecretString, BoxError> {
        if let Ok(value) = std::env::var(PASSPHRASE_ENV_VAR)
            && !value.is_empty()
        {
            debug!("passphrase taken from {PASSPHRASE_ENV_VAR}");
            return Ok(SecretString::from(value));
        }

        if !std::io::stdin().is_terminal() {
            return Err(format!(
                "no passphrase provided. Set {PASSPHRASE_ENV_VAR} or run interactively."
            )
            .into());
        }

        // rpassword blocks on the terminal; keep it off the async workers so
        // a caller-side timeout can abandon the wait.
        let passphrase = tokio::task::spawn_blocking(|| rpassword::prompt_password(PROMPT))
            .await
            .map_err(|e| format!("passphrase prompt aborted: {e}"))?
            .map_err(|e| format!("failed to read passphrase: {e}"))?;

        if passphrase.is_empty() {
            return Err("empty passphrase not allowed".into());
        }
        Ok(SecretString::from(passphrase))
    }
}

/// Always yields the same passphrase. Useful for scripted callers.
pub struct StaticPassphrase(SecretString);

impl StaticPassphrase {
    pub fn new(passphrase: SecretString) -> Self {
        Self(passphrase)
    }
}

impl std::fmt::Debug for StaticPassphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StaticPassphrase").field(&"[REDACTED]").finish()
    }
}

#[async_trait]
impl PassphraseProvider for StaticPassphrase {
    async fn passphrase(&self) -> Result<SecretString, BoxError> {
        Ok(SecretString::from(self.0.expose_secret().to_owned()))
    }
}
