// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for mafiles.
//!
//! This crate provides the error types, the manifest and credential
//! document types, and the collaborator traits shared by the resolver, the
//! configuration layer, and the command-line front end. It performs no
//! cryptography and no I/O of its own.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{BoxError, DecryptError, ManifestError, ResolveError};
pub use traits::{PassphraseProvider, RecordSource};
pub use types::{AccountId, ExtraFields, MaFile, Manifest, ManifestEntry, Session};
