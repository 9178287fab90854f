// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Manifest and credential document types.
//!
//! The shapes mirror the files written by Steam Desktop Authenticator:
//! `manifest.json` indexes one `.maFile` per account, and each `.maFile`
//! (after decryption, if the manifest is encrypted) is a JSON credential
//! document.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 64-bit Steam account identifier (SteamID64).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for AccountId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// The authenticator's `manifest.json`.
///
/// Only `encrypted` and `entries` matter for resolution; the remaining
/// settings are carried so the document round-trips without loss. Unknown
/// keys written by newer authenticator versions are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Whether every maFile is password-protected.
    pub encrypted: bool,

    #[serde(default)]
    pub first_run: bool,

    /// One entry per account, in the order the authenticator lists them.
    #[serde(default)]
    pub entries: Vec<ManifestEntry>,

    #[serde(default)]
    pub periodic_checking: bool,

    #[serde(default = "default_periodic_checking_interval")]
    pub periodic_checking_interval: u32,

    #[serde(default)]
    pub periodic_checking_checkall: bool,

    #[serde(default)]
    pub auto_confirm_market_transactions: bool,

    #[serde(default)]
    pub auto_confirm_trades: bool,
}

fn default_periodic_checking_interval() -> u32 {
    5
}

/// A single manifest entry pointing at one maFile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Base64-encoded IV; `null` when the manifest is not encrypted.
    #[serde(default)]
    pub encryption_iv: Option<String>,

    /// Base64-encoded PBKDF2 salt; `null` when the manifest is not encrypted.
    #[serde(default)]
    pub encryption_salt: Option<String>,

    /// File name of the maFile, relative to the manifest directory.
    pub filename: String,

    pub steamid: AccountId,
}

/// A decrypted maFile credential document.
///
/// Fields the authenticator may omit are `None` rather than defaulted, and
/// keys outside the schema are carried in [`ExtraFields`], so a document
/// serializes back without losing or inventing content. All secret material
/// is zeroized when the value is dropped, and `Debug` output never includes
/// it.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct MaFile {
    pub shared_secret: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revocation_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_time: Option<u64>,

    pub account_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_gid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_secret: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fully_enrolled: Option<bool>,

    /// Web session; absent or `null` when the account was never logged in.
    #[serde(rename = "Session", default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,

    /// Keys written by other authenticator versions, e.g. `phone_number_hint`.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Schema keys accepted by [`MaFile::field`]. Extra keys are accepted too.
pub const MAFILE_FIELDS: &[&str] = &[
    "shared_secret",
    "serial_number",
    "revocation_code",
    "uri",
    "server_time",
    "account_name",
    "token_gid",
    "identity_secret",
    "secret_1",
    "status",
    "device_id",
    "fully_enrolled",
];

impl MaFile {
    /// Render one top-level value as text.
    ///
    /// Looks at the schema fields first, then at [`MaFile::extra`]. Returns
    /// `None` when the document has no value for `name`.
    pub fn field(&self, name: &str) -> Option<String> {
        fn text<T: ToString>(value: &Option<T>) -> Option<String> {
            value.as_ref().map(ToString::to_string)
        }

        match name {
            "shared_secret" => Some(self.shared_secret.clone()),
            "serial_number" => self.serial_number.clone(),
            "revocation_code" => self.revocation_code.clone(),
            "uri" => self.uri.clone(),
            "server_time" => text(&self.server_time),
            "account_name" => Some(self.account_name.clone()),
            "token_gid" => self.token_gid.clone(),
            "identity_secret" => self.identity_secret.clone(),
            "secret_1" => self.secret_1.clone(),
            "status" => text(&self.status),
            "device_id" => self.device_id.clone(),
            "fully_enrolled" => text(&self.fully_enrolled),
            _ => self.extra.get(name).map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
        }
    }
}

impl fmt::Debug for MaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaFile")
            .field("account_name", &self.account_name)
            .field("server_time", &self.server_time)
            .field("status", &self.status)
            .field("fully_enrolled", &self.fully_enrolled)
            .field("shared_secret", &"[REDACTED]")
            .field("identity_secret", &"[REDACTED]")
            .field("revocation_code", &"[REDACTED]")
            .field("session", &self.session)
            .field("extra", &self.extra)
            .finish_non_exhaustive()
    }
}

/// Steam web session stored inside a maFile.
#[derive(Clone, Default, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Session {
    #[serde(rename = "SessionID", default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(rename = "SteamLogin", default, skip_serializing_if = "Option::is_none")]
    pub steam_login: Option<String>,

    #[serde(rename = "SteamLoginSecure", default, skip_serializing_if = "Option::is_none")]
    pub steam_login_secure: Option<String>,

    #[serde(rename = "WebCookie", default, skip_serializing_if = "Option::is_none")]
    pub web_cookie: Option<String>,

    #[serde(rename = "OAuthToken", default, skip_serializing_if = "Option::is_none")]
    pub oauth_token: Option<String>,

    #[serde(rename = "SteamID", default, skip_serializing_if = "Option::is_none")]
    pub steam_id: Option<u64>,

    /// Tokens written by newer authenticators (`AccessToken`, `RefreshToken`).
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("steam_id", &self.steam_id)
            .field("tokens", &"[REDACTED]")
            .field("extra", &self.extra)
            .finish()
    }
}

/// JSON keys outside the fixed schema, kept verbatim.
///
/// Values may hold secrets (refresh tokens), so every string inside is
/// zeroized on drop and `Debug` prints only the keys.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraFields(Map<String, Value>);

impl ExtraFields {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Zeroize for ExtraFields {
    fn zeroize(&mut self) {
        self.0.values_mut().for_each(zeroize_value);
        self.0.clear();
    }
}

impl Drop for ExtraFields {
    fn drop(&mut self) {
        self.zeroize();
    }
}

fn zeroize_value(value: &mut Value) {
    match value {
        Value::String(s) => s.zeroize(),
        Value::Array(items) => {
            items.iter_mut().for_each(zeroize_value);
            items.clear();
        }
        Value::Object(map) => {
            map.values_mut().for_each(zeroize_value);
            map.clear();
        }
        _ => *value = Value::Null,
    }
}

impl ZeroizeOnDrop for ExtraFields {}

impl fmt::Debug for ExtraFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}
