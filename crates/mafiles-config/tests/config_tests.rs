// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for configuration loading.

use mafiles_config::diagnostic::ConfigError;
use mafiles_config::{load_and_validate_str, load_config_from_path, load_config_from_str};
use serial_test::serial;

#[test]
fn full_toml_deserializes() {
    let toml = r#"
[manifest]
path = "/home/user/sda/maFiles/manifest.json"
mafile_path = "/tmp/one.maFile"

[prompt]
timeout_secs = 30

[log]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.manifest.path, "/home/user/sda/maFiles/manifest.json");
    assert_eq!(config.manifest.mafile_path.as_deref(), Some("/tmp/one.maFile"));
    assert_eq!(config.prompt.timeout_secs, 30);
    assert_eq!(config.log.level, "debug");
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = load_config_from_str("[log]\nlevel = \"info\"\n").unwrap();
    assert_eq!(config.log.level, "info");
    assert_eq!(config.manifest.path, "maFiles/manifest.json");
    assert_eq!(config.prompt.timeout_secs, 120);
}

#[test]
fn unknown_key_gets_a_suggestion() {
    let errors = load_and_validate_str("[manifest]\npth = \"x\"\n").unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "pth");
            assert_eq!(suggestion.as_deref(), Some("path"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_section_is_rejected() {
    let errors = load_and_validate_str("[vault]\nkdf = \"argon2\"\n").unwrap_err();
    assert!(matches!(errors[0], ConfigError::UnknownKey { ref key, .. } if key == "vault"));
}

#[test]
fn wrong_type_is_reported_with_key_path() {
    let errors = load_and_validate_str("[prompt]\ntimeout_secs = \"soon\"\n").unwrap_err();
    match &errors[0] {
        ConfigError::InvalidType { key, .. } => assert_eq!(key, "prompt.timeout_secs"),
        other => panic!("expected InvalidType, got {other:?}"),
    }
}

#[test]
fn zero_timeout_fails_validation() {
    let errors = load_and_validate_str("[prompt]\ntimeout_secs = 0\n").unwrap_err();
    assert!(
        errors
            .iter()
            .any(|e| e.to_string().contains("prompt.timeout_secs"))
    );
}

#[test]
fn diagnostics_render_through_miette() {
    let errors = load_and_validate_str("[log]\nlevl = \"debug\"\n").unwrap_err();
    let handler = miette::GraphicalReportHandler::new();
    let mut out = String::new();
    handler.render_report(&mut out, &errors[0]).unwrap();
    assert!(out.contains("levl"));
    assert!(out.contains("level"));
}

#[test]
#[serial]
fn env_overrides_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mafiles.toml");
    std::fs::write(&path, "[manifest]\npath = \"from-file.json\"\n[log]\nlevel = \"info\"\n").unwrap();

    // SAFETY: test-only env mutation, serialized with #[serial].
    unsafe {
        std::env::set_var("MAFILES_MANIFEST_MAFILE_PATH", "/env/account.maFile");
        std::env::set_var("MAFILES_PROMPT_TIMEOUT_SECS", "15");
    }
    let config = load_config_from_path(&path);
    unsafe {
        std::env::remove_var("MAFILES_MANIFEST_MAFILE_PATH");
        std::env::remove_var("MAFILES_PROMPT_TIMEOUT_SECS");
    }

    let config = config.unwrap();
    assert_eq!(config.manifest.path, "from-file.json");
    assert_eq!(config.manifest.mafile_path.as_deref(), Some("/env/account.maFile"));
    assert_eq!(config.prompt.timeout_secs, 15);
    assert_eq!(config.log.level, "info");
}

#[test]
#[serial]
fn passphrase_env_var_is_not_a_config_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mafiles.toml");
    std::fs::write(&path, "").unwrap();

    unsafe { std::env::set_var("MAFILES_PASSPHRASE", "hunter2") };
    let config = load_config_from_path(&path);
    unsafe { std::env::remove_var("MAFILES_PASSPHRASE") };

    assert!(config.is_ok(), "MAFILES_PASSPHRASE must not trip deny_unknown_fields");
}

#[test]
#[serial]
fn explicit_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let errors = mafiles_config::load_and_validate_path(&dir.path().join("nope.toml")).unwrap_err();
    assert!(errors[0].to_string().contains("nope.toml"));
}

#[test]
#[serial]
fn explicit_config_file_is_validated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mafiles.toml");
    std::fs::write(&path, "[log]\nlevel = \"chatty\"\n").unwrap();

    let errors = mafiles_config::load_and_validate_path(&path).unwrap_err();
    assert!(matches!(errors[0], ConfigError::Validation { .. }));
}

#[test]
#[serial]
fn every_section_accepts_env_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mafiles.toml");
    std::fs::write(&path, "").unwrap();

    unsafe {
        std::env::set_var("MAFILES_MANIFEST_PATH", "/env/manifest.json");
        std::env::set_var("MAFILES_LOG_LEVEL", "debug");
    }
    let config = mafiles_config::load_and_validate_path(&path);
    unsafe {
        std::env::remove_var("MAFILES_MANIFEST_PATH");
        std::env::remove_var("MAFILES_LOG_LEVEL");
    }

    let config = config.unwrap();
    assert_eq!(config.manifest.path, "/env/manifest.json");
    assert_eq!(config.log.level, "debug");
}
