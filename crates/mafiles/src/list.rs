// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mafiles list` command implementation.

use std::fmt::Write as _;

use mafiles_config::MafilesConfig;
use mafiles_vault::ManifestIndex;

use crate::ManifestArgs;
use crate::error::CliError;

/// Run the `mafiles list` command. Reads only the manifest.
pub fn run_list(config: &MafilesConfig, args: &ManifestArgs) -> Result<(), CliError> {
    let index = ManifestIndex::load(&args.manifest_path(config))?;
    print!("{}", format_index(&index));
    Ok(())
}

fn format_index(index: &ManifestIndex) -> String {
    let mut out = String::new();
    let mode = if index.is_encrypted() {
        "encrypted"
    } else {
        "plaintext"
    };
    let _ = writeln!(out, "{} accounts ({mode})", index.len());
    for entry in index.entries() {
        let _ = writeln!(out, "{:<20} {}", entry.account_id(), entry.filename());
    }
    out
}
