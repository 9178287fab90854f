// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for mafiles tests.
//!
//! Provides a reference encryptor, on-disk fixtures, and scripted
//! collaborators for fast, deterministic tests.
//!
//! # Components
//!
//! - [`encrypt_record`] - Reference PBKDF2 + AES-256-CBC encryptor for building fixtures
//! - [`FixtureBuilder`] - Writes a manifest and maFiles into a temp directory
//! - [`ScriptedPassphrase`] - Passphrase provider with a fixed answer and a call counter
//! - [`MemorySource`] - In-memory record source with a fetch counter
//! - [`vectors`] - Known-answer vector produced by an independent implementation

pub mod cipher;
pub mod fixture;
pub mod mock;
pub mod vectors;

pub use cipher::{encrypt_bytes, encrypt_record, reference_key};
pub use fixture::{Fixture, FixtureBuilder, plaintext_manifest, sample_mafile_json};
pub use mock::{MemorySource, ScriptedPassphrase};
