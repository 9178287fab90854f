// SPDX-FileCopyrightText: 2026 mafiles Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! mafiles: inspect and decrypt Steam Desktop Authenticator maFiles.

mod error;
mod list;
mod show;
mod verify;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use mafiles_config::MafilesConfig;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Inspect and decrypt Steam Desktop Authenticator maFiles.
#[derive(Parser, Debug)]
#[command(name = "mafiles", version, about, long_about = None)]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read configuration from this file only, skipping the XDG lookup.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decrypt and print one account's maFile.
    Show(show::ShowArgs),
    /// List the accounts in the manifest without decrypting anything.
    List(ManifestArgs),
    /// Check that every maFile decrypts and parses.
    Verify(ManifestArgs),
    /// Print the effective configuration.
    Config,
}

/// Options shared by commands that read a manifest.
#[derive(Args, Debug, Default)]
pub struct ManifestArgs {
    /// Path to manifest.json. Overrides `manifest.path`.
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,
}

impl ManifestArgs {
    pub fn manifest_path(&self, config: &MafilesConfig) -> PathBuf {
        self.manifest
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.manifest.path))
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => mafiles_config::load_and_validate_path(path),
        None => mafiles_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            mafiles_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.log.level.as_str()
    };
    init_tracing(level);

    let result = match cli.command {
        Commands::Show(args) => show::run_show(&config, args).await,
        Commands::List(args) => list::run_list(&config, &args),
        Commands::Verify(args) => verify::run_verify(&config, &args).await,
        Commands::Config => print_config(&config),
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        if let Some(hint) = e.hint() {
            eprintln!("{}: {hint}", "hint".yellow());
        }
        // Exit without dropping the runtime: an abandoned passphrase prompt
        // is still parked on a blocking thread.
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mafiles={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn print_config(config: &MafilesConfig) -> Result<(), CliError> {
    let rendered =
        toml::to_string_pretty(config).map_err(|e| CliError::Output(e.to_string()))?;
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_options() {
        let cli = Cli::try_parse_from([
            "mafiles",
            "-v",
            "show",
            "76561197960287930",
            "--manifest",
            "/tmp/manifest.json",
            "--field",
            "shared_secret",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.steamid, 76561197960287930);
                assert_eq!(args.field.as_deref(), Some("shared_secret"));
                assert!(!args.compact);
            }
            other => panic!("expected show, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_steamid() {
        assert!(Cli::try_parse_from(["mafiles", "show", "gaben"]).is_err());
    }

    #[test]
    fn manifest_flag_overrides_config() {
        let config = MafilesConfig::default();
        let args = ManifestArgs {
            manifest: Some(PathBuf::from("/x/manifest.json")),
        };
        assert_eq!(args.manifest_path(&config), PathBuf::from("/x/manifest.json"));
        assert_eq!(
            ManifestArgs::default().manifest_path(&config),
            PathBuf::from("maFiles/manifest.json")
        );
    }
}
