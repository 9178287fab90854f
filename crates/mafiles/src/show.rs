// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mafiles show` command implementation.

use std::path::PathBuf;

use clap::Args;
use mafiles_config::MafilesConfig;
use mafiles_core::types::MAFILE_FIELDS;
use mafiles_core::{AccountId, MaFile};
use mafiles_vault::{CredentialResolver, FsRecordSource, ManifestIndex, TerminalPassphrase};
use tracing::debug;
use zeroize::Zeroizing;

use crate::ManifestArgs;
use crate::error::CliError;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// SteamID64 of the account.
    pub steamid: u64,

    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Read this maFile instead of the one named in the manifest.
    #[arg(long, value_name = "PATH")]
    pub mafile: Option<PathBuf>,

    /// Print a single top-level field instead of the whole document.
    #[arg(long, value_name = "NAME")]
    pub field: Option<String>,

    /// Print JSON on one line.
    #[arg(long)]
    pub compact: bool,
}

/// Run the `mafiles show` command.
///
/// The passphrase comes from `MAFILES_PASSPHRASE` or the terminal. The whole
/// resolution, prompt included, is bounded by `prompt.timeout_secs`.
pub async fn run_show(config: &MafilesConfig, args: ShowArgs) -> Result<(), CliError> {
    let manifest_path = args.manifest.manifest_path(config);
    let index = ManifestIndex::load(&manifest_path)?;
    debug!(manifest = %manifest_path.display(), entries = index.len(), "manifest loaded");

    let mut source = FsRecordSource::for_manifest(&manifest_path);
    let override_path = args
        .mafile
        .or_else(|| config.manifest.mafile_path.as_ref().map(PathBuf::from));
    if let Some(path) = override_path {
        source = source.with_override(path);
    }

    let resolver = CredentialResolver::new(source, TerminalPassphrase::new());
    let timeout = config.prompt.timeout();
    let mafile = tokio::time::timeout(
        timeout,
        resolver.resolve(&index, AccountId(args.steamid), None),
    )
    .await
    .map_err(|_| CliError::Timeout(timeout))??;

    let output = render(&mafile, args.field.as_deref(), args.compact)?;
    println!("{}", output.as_str());
    Ok(())
}

/// Render a maFile, or one of its fields, for printing.
pub fn render(
    mafile: &MaFile,
    field: Option<&str>,
    compact: bool,
) -> Result<Zeroizing<String>, CliError> {
    if let Some(name) = field {
        return match mafile.field(name) {
            Some(value) => Ok(Zeroizing::new(value)),
            None if MAFILE_FIELDS.contains(&name) => Err(CliError::FieldAbsent(name.to_string())),
            None => Err(CliError::UnknownField {
                name: name.to_string(),
                suggestion: suggest_field(name),
            }),
        };
    }

    let json = if compact {
        serde_json::to_string(mafile)
    } else {
        serde_json::to_string_pretty(mafile)
    };
    json.map(Zeroizing::new)
        .map_err(|e| CliError::Output(e.to_string()))
}

fn suggest_field(name: &str) -> Option<String> {
    MAFILE_FIELDS
        .iter()
        .map(|&field| (strsim::jaro_winkler(name, field), field))
        .filter(|(score, _)| *score > 0.8)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, field)| field.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mafiles_test_utils::sample_mafile_json;

    fn mafile() -> MaFile {
        serde_json::from_str(&sample_mafile_json("gaben")).unwrap()
    }

    #[test]
    fn renders_single_field() {
        let out = render(&mafile(), Some("account_name"), false).unwrap();
        assert_eq!(out.as_str(), "gaben");
    }

    #[test]
    fn compact_output_is_one_line() {
        let out = render(&mafile(), None, true).unwrap();
        assert!(!out.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["Session"]["SteamID"], 76561197960287930u64);
    }

    #[test]
    fn pretty_output_round_trips_through_the_schema() {
        let out = render(&mafile(), None, false).unwrap();
        assert!(out.contains('\n'));
        let back: MaFile = serde_json::from_str(&out).unwrap();
        assert_eq!(back.account_name, "gaben");
    }

    #[test]
    fn extra_keys_and_absent_fields_survive_rendering() {
        let document = r#"{"shared_secret":"s","account_name":"a","phone_number_hint":"12","Session":{"SteamID":1,"AccessToken":"at","RefreshToken":"rt"}}"#;
        let mafile: MaFile = serde_json::from_str(document).unwrap();

        for compact in [true, false] {
            let out = render(&mafile, None, compact).unwrap();
            let printed: serde_json::Value = serde_json::from_str(&out).unwrap();
            let original: serde_json::Value = serde_json::from_str(document).unwrap();
            assert_eq!(printed, original);
        }

        let hint = render(&mafile, Some("phone_number_hint"), false).unwrap();
        assert_eq!(hint.as_str(), "12");
    }

    #[test]
    fn schema_field_missing_from_document_is_absent_not_unknown() {
        let mafile: MaFile =
            serde_json::from_str(r#"{"shared_secret":"s","account_name":"a"}"#).unwrap();
        let err = render(&mafile, Some("revocation_code"), false).unwrap_err();
        assert!(matches!(err, CliError::FieldAbsent(ref name) if name == "revocation_code"));
    }

    #[test]
    fn unknown_field_suggests_closest_name() {
        let err = render(&mafile(), Some("shared_secert"), false).unwrap_err();
        match err {
            CliError::UnknownField { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("shared_secret"));
            }
            other => panic!("expected UnknownField, got {other:?}"),
        }
    }
}
