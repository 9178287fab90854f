// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model.
//!
//! Every struct uses `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported instead of silently ignored.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level mafiles configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MafilesConfig {
    /// Where the manifest and maFiles live.
    #[serde(default)]
    pub manifest: ManifestConfig,

    /// Interactive passphrase prompt.
    #[serde(default)]
    pub prompt: PromptConfig,

    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
}

/// Manifest location.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestConfig {
    /// Path to `manifest.json`. maFiles are read from the same directory.
    #[serde(default = "default_manifest_path")]
    pub path: String,

    /// Read this maFile for every lookup instead of the manifest entry's file.
    #[serde(default)]
    pub mafile_path: Option<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: default_manifest_path(),
            mafile_path: None,
        }
    }
}

fn default_manifest_path() -> String {
    "maFiles/manifest.json".to_string()
}

/// Passphrase prompt settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PromptConfig {
    /// Seconds a resolution may wait, prompt included, before giving up.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl PromptConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    120
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// trace, debug, info, warn or error.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MafilesConfig::default();
        assert_eq!(config.manifest.path, "maFiles/manifest.json");
        assert!(config.manifest.mafile_path.is_none());
        assert_eq!(config.prompt.timeout(), Duration::from_secs(120));
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: MafilesConfig = toml::from_str("").unwrap();
        assert_eq!(config.manifest.path, "maFiles/manifest.json");
        assert_eq!(config.prompt.timeout_secs, 120);
    }

    #[test]
    fn serializes_back_to_toml() {
        let text = toml::to_string_pretty(&MafilesConfig::default()).unwrap();
        assert!(text.contains("[manifest]"));
        assert!(text.contains("timeout_secs = 120"));
        assert!(!text.contains("mafile_path"));
    }
}
