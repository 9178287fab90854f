// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits the resolver depends on.
//!
//! Both traits use `#[async_trait]` so they can be used as trait objects and
//! awaited from any task. Implementations live outside the resolver: the
//! vault crate ships terminal and filesystem implementations, and tests use
//! scripted ones.

pub mod passphrase;
pub mod source;

pub use passphrase::PassphraseProvider;
pub use source::RecordSource;
