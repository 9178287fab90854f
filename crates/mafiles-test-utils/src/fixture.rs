// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! On-disk manifest fixtures.
//!
//! `FixtureBuilder` writes a `manifest.json` and one maFile per account into
//! a temp directory, encrypted or plaintext, laid out the way the
//! authenticator lays out its `maFiles` folder.

use std::path::PathBuf;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use mafiles_core::{AccountId, Manifest, ManifestEntry};
use tempfile::TempDir;

use crate::cipher::encrypt_record;

/// Builder for a manifest directory.
pub struct FixtureBuilder {
    passphrase: Option<String>,
    documents: Vec<(u64, String)>,
}

impl FixtureBuilder {
    /// Plaintext manifest: maFiles are stored as JSON.
    pub fn plaintext() -> Self {
        Self {
            passphrase: None,
            documents: Vec::new(),
        }
    }

    /// Encrypted manifest: every maFile is encrypted with `passphrase`.
    pub fn encrypted(passphrase: &str) -> Self {
        Self {
            passphrase: Some(passphrase.to_string()),
            documents: Vec::new(),
        }
    }

    /// Add an account with a complete sample maFile.
    pub fn with_account(self, steamid: u64, account_name: &str) -> Self {
        self.with_document(steamid, &sample_mafile_json(account_name))
    }

    /// Add an account whose maFile holds `document` verbatim.
    pub fn with_document(mut self, steamid: u64, document: &str) -> Self {
        self.documents.push((steamid, document.to_string()));
        self
    }

    /// Write the fixture to a fresh temp directory.
    pub fn build(self) -> std::io::Result<Fixture> {
        let dir = TempDir::new()?;
        let mut entries = Vec::with_capacity(self.documents.len());

        for (steamid, document) in &self.documents {
            let filename = format!("{steamid}.maFile");
            let (content, salt, iv) = match &self.passphrase {
                Some(passphrase) => {
                    let salt = salt_for(*steamid);
                    let iv = iv_for(*steamid);
                    let content = encrypt_record(passphrase, &salt, &iv, document);
                    (content, Some(STANDARD.encode(salt)), Some(STANDARD.encode(iv)))
                }
                None => (document.clone(), None, None),
            };
            std::fs::write(dir.path().join(&filename), content)?;
            entries.push(ManifestEntry {
                encryption_iv: iv,
                encryption_salt: salt,
                filename,
                steamid: AccountId(*steamid),
            });
        }

        let manifest = manifest(self.passphrase.is_some(), entries);
        let manifest_path = dir.path().join("manifest.json");
        let json = serde_json::to_vec_pretty(&manifest).map_err(std::io::Error::other)?;
        std::fs::write(&manifest_path, json)?;

        Ok(Fixture {
            dir,
            manifest_path,
            manifest,
        })
    }
}

/// A manifest directory on disk. Removed when dropped.
pub struct Fixture {
    pub dir: TempDir,
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
}

impl Fixture {
    /// Path of the maFile written for `steamid`.
    pub fn mafile_path(&self, steamid: u64) -> PathBuf {
        self.dir.path().join(format!("{steamid}.maFile"))
    }
}

/// Per-record salt. Distinct per account, like the authenticator's random salts.
pub fn salt_for(steamid: u64) -> [u8; 8] {
    steamid.to_le_bytes()
}

/// Per-record IV.
pub fn iv_for(steamid: u64) -> [u8; 16] {
    let mut iv = [0u8; 16];
    iv[..8].copy_from_slice(&steamid.to_le_bytes());
    iv[8..].copy_from_slice(&(!steamid).to_be_bytes());
    iv
}

/// An in-memory plaintext manifest plus `(filename, content)` pairs.
pub fn plaintext_manifest(accounts: &[(u64, &str)]) -> (Manifest, Vec<(String, String)>) {
    let mut entries = Vec::with_capacity(accounts.len());
    let mut files = Vec::with_capacity(accounts.len());
    for (steamid, account_name) in accounts {
        let filename = format!("{steamid}.maFile");
        files.push((filename.clone(), sample_mafile_json(account_name)));
        entries.push(ManifestEntry {
            encryption_iv: None,
            encryption_salt: None,
            filename,
            steamid: AccountId(*steamid),
        });
    }
    (manifest(false, entries), files)
}

fn manifest(encrypted: bool, entries: Vec<ManifestEntry>) -> Manifest {
    Manifest {
        encrypted,
        first_run: false,
        entries,
        periodic_checking: false,
        periodic_checking_interval: 5,
        periodic_checking_checkall: false,
        auto_confirm_market_transactions: false,
        auto_confirm_trades: false,
    }
}

/// A complete maFile document for `account_name`.
pub fn sample_mafile_json(account_name: &str) -> String {
    serde_json::json!({
        "shared_secret": "c2hhcmVkLXNlY3JldA==",
        "serial_number": "5847361029384756102",
        "revocation_code": "R12345",
        "uri": format!("otpauth://totp/Steam:{account_name}?secret=ABCDEF&issuer=Steam"),
        "server_time": 1_600_000_000u64,
        "account_name": account_name,
        "token_gid": "2f1e0d",
        "identity_secret": "aWRlbnRpdHktc2VjcmV0",
        "secret_1": "c2VjcmV0LW9uZQ==",
        "status": 1,
        "device_id": "android:6a3c0e1b-0000-0000-0000-000000000000",
        "fully_enrolled": true,
        "Session": {
            "SessionID": "b1d2c3",
            "SteamLogin": "76561197960287930%7C%7Clogin",
            "SteamLoginSecure": "76561197960287930%7C%7Csecure",
            "WebCookie": "cookie",
            "OAuthToken": "oauth-token",
            "SteamID": 76561197960287930u64,
        },
    })
    .to_string()
}
