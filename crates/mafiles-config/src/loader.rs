// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Merge order, later layers winning:
//! 1. Compiled defaults
//! 2. `/etc/mafiles/mafiles.toml`
//! 3. `~/.config/mafiles/mafiles.toml`
//! 4. `./mafiles.toml`
//! 5. `MAFILES_*` environment variables

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::MafilesConfig;

pub(crate) const SYSTEM_CONFIG: &str = "/etc/mafiles/mafiles.toml";
pub(crate) const LOCAL_CONFIG: &str = "mafiles.toml";

pub(crate) fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mafiles/mafiles.toml"))
}

/// Load configuration from the XDG hierarchy with environment overrides.
pub fn load_config() -> Result<MafilesConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only. No files, no environment.
pub fn load_config_from_str(toml_content: &str) -> Result<MafilesConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MafilesConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one file with environment overrides.
pub fn load_config_from_path(path: &Path) -> Result<MafilesConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MafilesConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The full layered Figment, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(MafilesConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// `MAFILES_*` variables mapped to dotted keys with explicit section prefixes,
/// so `MAFILES_MANIFEST_MAFILE_PATH` becomes `manifest.mafile_path` rather
/// than `manifest.mafile.path`.
///
/// `MAFILES_PASSPHRASE` belongs to the passphrase prompt and never reaches
/// the configuration.
fn env_provider() -> Env {
    Env::prefixed("MAFILES_")
        .filter(|key| !key.as_str().eq_ignore_ascii_case("passphrase"))
        .map(|key| {
            // Keys reach the mapper with their original case.
            key.as_str()
                .to_ascii_lowercase()
                .replacen("manifest_", "manifest.", 1)
                .replacen("prompt_", "prompt.", 1)
                .replacen("log_", "log.", 1)
                .into()
        })
}
