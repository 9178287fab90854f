// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic checks that serde attributes cannot express.

use crate::diagnostic::ConfigError;
use crate::model::MafilesConfig;

/// Levels accepted by `log.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first.
pub fn validate_config(config: &MafilesConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.manifest.path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "manifest.path must not be empty".to_string(),
        });
    }

    if let Some(path) = &config.manifest.mafile_path
        && path.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "manifest.mafile_path must not be empty when set".to_string(),
        });
    }

    if config.prompt.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "prompt.timeout_secs must be greater than 0".to_string(),
        });
    }

    let level = config.log.level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
