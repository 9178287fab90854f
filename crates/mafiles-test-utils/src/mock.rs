// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted collaborators that record how often they are called.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mafiles_core::{BoxError, PassphraseProvider, RecordSource};
use secrecy::SecretString;

enum Script {
    Answer(String),
    Fail,
    Hang,
}

/// A passphrase provider with a fixed behaviour.
pub struct ScriptedPassphrase {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedPassphrase {
    /// Answers `passphrase` on every call.
    pub fn new(passphrase: &str) -> Self {
        Self::with_script(Script::Answer(passphrase.to_string()))
    }

    /// Fails on every call, like a closed terminal.
    pub fn failing() -> Self {
        Self::with_script(Script::Fail)
    }

    /// Never answers, like a user walking away from the prompt.
    pub fn hanging() -> Self {
        Self::with_script(Script::Hang)
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times the passphrase was requested.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PassphraseProvider for ScriptedPassphrase {
    async fn passphrase(&self) -> Result<SecretString, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Answer(value) => Ok(SecretString::from(value.clone())),
            Script::Fail => Err("no terminal attached".into()),
            Script::Hang => std::future::pending().await,
        }
    }
}

/// An in-memory record source.
#[derive(Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
    fetches: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the content of `filename`.
    pub fn with_file(mut self, filename: &str, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(filename.to_string(), content.into());
        self
    }

    /// Number of fetches attempted, including failed ones.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    async fn fetch(&self, filename: &str) -> Result<Vec<u8>, BoxError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.files.get(filename).cloned().ok_or_else(|| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{filename} not found"),
            )) as BoxError
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[tokio::test]
    async fn scripted_passphrase_counts_calls() {
        let provider = ScriptedPassphrase::new("secret");
        assert_eq!(provider.calls(), 0);
        assert_eq!(provider.passphrase().await.unwrap().expose_secret(), "secret");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn memory_source_reports_missing_files() {
        let source = MemorySource::new().with_file("a", "content");
        assert_eq!(source.fetch("a").await.unwrap(), b"content");
        assert!(source.fetch("b").await.is_err());
        assert_eq!(source.fetches(), 2);
    }
}
