// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mafiles verify` command implementation.
//!
//! Asks for the passphrase once and tries every maFile in the manifest.
//! Colors are used only when stdout is a terminal.

use std::io::IsTerminal;

use colored::Colorize;
use mafiles_config::MafilesConfig;
use mafiles_vault::{CredentialResolver, FsRecordSource, ManifestIndex, TerminalPassphrase};
use tracing::debug;

use crate::ManifestArgs;
use crate::error::CliError;

/// Run the `mafiles verify` command.
pub async fn run_verify(config: &MafilesConfig, args: &ManifestArgs) -> Result<(), CliError> {
    let manifest_path = args.manifest_path(config);
    let index = ManifestIndex::load(&manifest_path)?;
    let resolver = CredentialResolver::new(
        FsRecordSource::for_manifest(&manifest_path),
        TerminalPassphrase::new(),
    );

    let timeout = config.prompt.timeout();
    debug!(entries = index.len(), encrypted = index.is_encrypted(), "verifying manifest");
    let outcomes = tokio::time::timeout(timeout, resolver.verify_all(&index, None))
        .await
        .map_err(|_| CliError::Timeout(timeout))??;

    let use_color = std::io::stdout().is_terminal();
    let mut failed = 0;
    for (account_id, outcome) in &outcomes {
        let filename = index
            .find_by_account_id(*account_id)
            .map(|e| e.filename())
            .unwrap_or_default();
        match outcome {
            Ok(()) => println!("{} {account_id} {filename}", status_mark(true, use_color)),
            Err(e) => {
                failed += 1;
                println!("{} {account_id} {filename}: {e}", status_mark(false, use_color));
            }
        }
    }

    if failed > 0 {
        return Err(CliError::VerifyFailed {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}

/// The fixed-width status column. Padding is applied before coloring so
/// escape codes do not count towards the width.
fn status_mark(ok: bool, use_color: bool) -> String {
    let padded = format!("{:<4}", if ok { "ok" } else { "FAIL" });
    match (use_color, ok) {
        (false, _) => padded,
        (true, true) => padded.green().to_string(),
        (true, false) => padded.red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_marks_share_one_width() {
        assert_eq!(status_mark(true, false), "ok  ");
        assert_eq!(status_mark(false, false), "FAIL");
    }

    #[test]
    fn colored_marks_pad_inside_the_escape_codes() {
        colored::control::set_override(true);
        let ok = status_mark(true, true);
        let fail = status_mark(false, true);
        colored::control::unset_override();

        assert!(ok.contains("ok  "), "{ok:?}");
        assert!(ok.starts_with('\u{1b}'));
        assert!(ok.ends_with("\u{1b}[0m"));
        assert!(fail.contains("FAIL"));
    }
}
