// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::time::Duration;

use mafiles_core::{ManifestError, ResolveError};
use thiserror::Error;

/// Failures surfaced to the user by a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("gave up after {}s waiting for the maFile", .0.as_secs())]
    Timeout(Duration),

    #[error("unknown maFile field `{name}`")]
    UnknownField {
        name: String,
        suggestion: Option<String>,
    },

    #[error("maFile has no value for `{0}`")]
    FieldAbsent(String),

    #[error("{failed} of {total} maFiles failed to decrypt")]
    VerifyFailed { failed: usize, total: usize },

    #[error("failed to render output: {0}")]
    Output(String),
}

impl CliError {
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Resolve(e) => e.hint().map(str::to_string),
            Self::Manifest(ManifestError::Read { .. }) => {
                Some("pass --manifest or set manifest.path in mafiles.toml".to_string())
            }
            Self::Timeout(_) => Some("raise prompt.timeout_secs or set MAFILES_PASSPHRASE".to_string()),
            Self::UnknownField {
                suggestion: Some(s),
                ..
            } => Some(format!("did you mean `{s}`?")),
            Self::UnknownField { .. } => Some(format!(
                "valid fields: {}",
                mafiles_core::types::MAFILE_FIELDS.join(", ")
            )),
            _ => None,
        }
    }
}
