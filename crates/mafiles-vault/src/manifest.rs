// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only index over a manifest's entries.
//!
//! Building the index validates what can be validated without a passphrase:
//! account ids are unique, and in encrypted mode every entry carries a
//! decodable salt and IV. Salt and IV *lengths* are checked later by the KDF
//! and the cipher, where a mismatch is reported as invalid input.

use std::collections::HashMap;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use mafiles_core::{AccountId, Manifest, ManifestEntry, ManifestError};
use tracing::debug;

use crate::source;

/// How a single record is stored on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordProtection {
    /// The maFile is the JSON document itself.
    Plaintext,
    /// The maFile is base64 AES-256-CBC ciphertext.
    Encrypted { salt: Vec<u8>, iv: Vec<u8> },
}

/// A validated manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    account_id: AccountId,
    filename: String,
    protection: RecordProtection,
}

impl IndexEntry {
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn protection(&self) -> &RecordProtection {
        &self.protection
    }
}

/// In-memory index of every record in a manifest, keyed by account id.
#[derive(Debug, Clone)]
pub struct ManifestIndex {
    encrypted: bool,
    entries: Vec<IndexEntry>,
    by_account: HashMap<AccountId, usize>,
}

impl ManifestIndex {
    /// Build an index from a parsed manifest.
    pub fn from_manifest(manifest: Manifest) -> Result<Self, ManifestError> {
        let encrypted = manifest.encrypted;
        let mut entries = Vec::with_capacity(manifest.entries.len());
        let mut by_account = HashMap::with_capacity(manifest.entries.len());

        for raw in &manifest.entries {
            let entry = index_entry(raw, encrypted)?;
            if by_account.insert(entry.account_id, entries.len()).is_some() {
                return Err(ManifestError::DuplicateAccount(entry.account_id));
            }
            entries.push(entry);
        }

        debug!(encrypted, entries = entries.len(), "manifest indexed");
        Ok(Self {
            encrypted,
            entries,
            by_account,
        })
    }

    /// Load `manifest.json` from `path` and index it.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        Self::from_manifest(source::load_manifest(path)?)
    }

    /// Look up the entry for `account_id`.
    pub fn find_by_account_id(&self, account_id: AccountId) -> Option<&IndexEntry> {
        self.by_account.get(&account_id).map(|&i| &self.entries[i])
    }

    /// Whether the manifest marks every record as password-protected.
    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    /// Entries in manifest order.
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn index_entry(raw: &ManifestEntry, encrypted: bool) -> Result<IndexEntry, ManifestError> {
    let protection = if encrypted {
        RecordProtection::Encrypted {
            salt: decode_param(raw.steamid, "encryption_salt", raw.encryption_salt.as_deref())?,
            iv: decode_param(raw.steamid, "encryption_iv", raw.encryption_iv.as_deref())?,
        }
    } else {
        RecordProtection::Plaintext
    };

    Ok(IndexEntry {
        account_id: raw.steamid,
        filename: raw.filename.clone(),
        protection,
    })
}

fn decode_param(
    account_id: AccountId,
    field: &'static str,
    value: Option<&str>,
) -> Result<Vec<u8>, ManifestError> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ManifestError::MissingEncryptionParams { account_id, field })?;

    STANDARD
        .decode(value)
        .map_err(|source| ManifestError::InvalidEncoding {
            account_id,
            field,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, salt: Option<&str>, iv: Option<&str>) -> ManifestEntry {
        ManifestEntry {
            encryption_iv: iv.map(str::to_string),
            encryption_salt: salt.map(str::to_string),
            filename: format!("{id}.maFile"),
            steamid: AccountId(id),
        }
    }

    fn manifest(encrypted: bool, entries: Vec<ManifestEntry>) -> Manifest {
        serde_json::from_value(serde_json::json!({
            "encrypted": encrypted,
            "entries": entries,
        }))
        .unwrap()
    }

    const SALT: &str = "AQIDBAUGBwg=";
    const IV: &str = "EBESExQVFhcYGRobHB0eHw==";

    #[test]
    fn finds_present_entry() {
        let index = ManifestIndex::from_manifest(manifest(
            false,
            vec![entry(1, None, None), entry(2, None, None)],
        ))
        .unwrap();

        let found = index.find_by_account_id(AccountId(2)).unwrap();
        assert_eq!(found.account_id(), AccountId(2));
        assert_eq!(found.filename(), "2.maFile");
        assert_eq!(found.protection(), &RecordProtection::Plaintext);
        assert!(!index.is_encrypted());
    }

    #[test]
    fn absent_ids_including_boundaries_are_not_found() {
        let index = ManifestIndex::from_manifest(manifest(
            false,
            vec![entry(1, None, None), entry(76561197960287930, None, None)],
        ))
        .unwrap();

        for id in [0, 2, 76561197960287931, u64::MAX] {
            assert!(index.find_by_account_id(AccountId(id)).is_none(), "id {id}");
        }
    }

    #[test]
    fn boundary_ids_are_found_when_present() {
        let index = ManifestIndex::from_manifest(manifest(
            false,
            vec![entry(0, None, None), entry(u64::MAX, None, None)],
        ))
        .unwrap();

        assert!(index.find_by_account_id(AccountId(0)).is_some());
        assert!(index.find_by_account_id(AccountId(u64::MAX)).is_some());
    }

    #[test]
    fn duplicate_account_is_rejected() {
        let err = ManifestIndex::from_manifest(manifest(
            false,
            vec![entry(5, None, None), entry(5, None, None)],
        ))
        .unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateAccount(AccountId(5))));
    }

    #[test]
    fn encrypted_entries_decode_salt_and_iv() {
        let index =
            ManifestIndex::from_manifest(manifest(true, vec![entry(1, Some(SALT), Some(IV))]))
                .unwrap();

        assert!(index.is_encrypted());
        match index.find_by_account_id(AccountId(1)).unwrap().protection() {
            RecordProtection::Encrypted { salt, iv } => {
                assert_eq!(salt, &[1, 2, 3, 4, 5, 6, 7, 8]);
                assert_eq!(iv.len(), 16);
            }
            RecordProtection::Plaintext => panic!("expected encrypted entry"),
        }
    }

    #[test]
    fn encrypted_entry_without_salt_is_rejected() {
        for salt in [None, Some(""), Some("   ")] {
            let err =
                ManifestIndex::from_manifest(manifest(true, vec![entry(9, salt, Some(IV))]))
                    .unwrap_err();
            assert!(matches!(
                err,
                ManifestError::MissingEncryptionParams {
                    account_id: AccountId(9),
                    field: "encryption_salt"
                }
            ));
        }
    }

    #[test]
    fn encrypted_entry_without_iv_is_rejected() {
        let err = ManifestIndex::from_manifest(manifest(true, vec![entry(9, Some(SALT), None)]))
            .unwrap_err();
        assert!(matches!(
            err,
            ManifestError::MissingEncryptionParams {
                field: "encryption_iv",
                ..
            }
        ));
    }

    #[test]
    fn undecodable_salt_is_rejected() {
        let err = ManifestIndex::from_manifest(manifest(
            true,
            vec![entry(3, Some("%%%"), Some(IV))],
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            ManifestError::InvalidEncoding {
                account_id: AccountId(3),
                field: "encryption_salt",
                ..
            }
        ));
    }

    #[test]
    fn plaintext_manifest_ignores_stray_encryption_params() {
        let index = ManifestIndex::from_manifest(manifest(
            false,
            vec![entry(1, Some("garbage%"), Some("garbage%"))],
        ))
        .unwrap();
        assert_eq!(
            index.find_by_account_id(AccountId(1)).unwrap().protection(),
            &RecordProtection::Plaintext
        );
    }

    #[test]
    fn entries_keep_manifest_order() {
        let index = ManifestIndex::from_manifest(manifest(
            false,
            vec![entry(30, None, None), entry(10, None, None), entry(20, None, None)],
        ))
        .unwrap();

        let ids: Vec<u64> = index.entries().map(|e| e.account_id().0).collect();
        assert_eq!(ids, vec![30, 10, 20]);
        assert_eq!(index.len(), 3);
        assert!(!index.is_empty());
    }
}
