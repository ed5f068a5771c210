//! `petstay` - verifies rendered front-end configuration before it ships.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use petstay_config::source::load_file;
use petstay_config::{FrontendConfig, PlaceholderMarker, VerifiedConfig, find_unresolved};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "petstay")]
#[command(about = "Verify PetStay front-end configuration artifacts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fail if any value still contains a template placeholder
    Check {
        /// Config artifact (`.json` or `.js`)
        path: PathBuf,
        /// Report every offending key instead of only the first
        #[arg(long)]
        all: bool,
        /// Also require the full front-end field set
        #[arg(long)]
        typed: bool,
        /// Opening placeholder delimiter
        #[arg(long, default_value = "{{")]
        open: String,
        /// Closing placeholder delimiter
        #[arg(long, default_value = "}}")]
        close: String,
    },
    /// Verify and print the configuration as JSON
    Export {
        /// Config artifact (`.json` or `.js`)
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Check {
            path,
            all,
            typed,
            open,
            close,
        } => {
            let marker = PlaceholderMarker::new(open, close)?;
            let verified = check_command(&path, &marker, all, typed)?;
            info!(path = %path.display(), entries = verified.map().len(), "config ok");
        }
        Commands::Export { path } => {
            let verified = check(&path, &PlaceholderMarker::default(), false)?;
            println!("{}", serde_json::to_string_pretty(&verified)?);
        }
    }

    Ok(())
}

/// Runs `petstay check`: verification plus the optional front-end schema check.
fn check_command(
    path: &Path,
    marker: &PlaceholderMarker,
    all: bool,
    typed: bool,
) -> Result<VerifiedConfig> {
    let verified = check(path, marker, all)?;
    if typed {
        FrontendConfig::try_from(&verified)
            .with_context(|| format!("schema check of {}", path.display()))?;
    }
    Ok(verified)
}

/// Loads `path` and verifies it, optionally reporting every offender.
fn check(path: &Path, marker: &PlaceholderMarker, all: bool) -> Result<VerifiedConfig> {
    let map = load_file(path).with_context(|| format!("loading {}", path.display()))?;

    if all {
        let offenders = find_unresolved(&map, marker);
        for key in &offenders {
            error!(%key, "unresolved placeholder");
        }
        if !offenders.is_empty() {
            let keys = offenders
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            bail!(
                "{} unresolved config value(s) in {}: {keys} (did you forget to set environment variables?)",
                offenders.len(),
                path.display()
            );
        }
    }

    VerifiedConfig::with_marker(map, marker)
        .with_context(|| format!("verifying {}", path.display()))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../petstay-config/tests/fixtures")
            .join(name)
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_defaults_to_double_braces() {
        let cli = Cli::try_parse_from(["petstay", "check", "config.js"]).unwrap();
        let Commands::Check { open, close, all, typed, .. } = cli.command else {
            panic!("expected check");
        };
        assert_eq!((open.as_str(), close.as_str()), ("{{", "}}"));
        assert!(!all && !typed);
    }

    #[test]
    fn check_accepts_deployed_script() {
        let verified = check(&fixture("config.js"), &PlaceholderMarker::default(), true).unwrap();
        assert!(FrontendConfig::try_from(&verified).is_ok());
    }

    #[test]
    fn check_names_first_offender() {
        let err = check(&fixture("template.js"), &PlaceholderMarker::default(), false)
            .expect_err("placeholders");
        assert!(format!("{err:#}").contains("missing config value: API_BASE_URL"));
    }

    #[test]
    fn check_all_counts_offenders() {
        let err = check(&fixture("template.js"), &PlaceholderMarker::default(), true)
            .expect_err("placeholders");
        let message = err.to_string();
        assert!(message.starts_with("5 unresolved config value(s)"));
        assert!(message.contains(
            "API_BASE_URL, AWS_REGION, BOOKINGS_API_URL, COGNITO_DOMAIN, COGNITO_USER_POOL_ID"
        ));
    }

    #[test]
    fn check_reports_duplicate_keys() {
        let err = check(&fixture("duplicate.js"), &PlaceholderMarker::default(), false)
            .expect_err("duplicate");
        assert!(format!("{err:#}").contains("duplicate config key: BOOKINGS_API_URL"));
    }

    #[test]
    fn typed_check_accepts_full_field_set() {
        let verified =
            check_command(&fixture("config.js"), &PlaceholderMarker::default(), false, true)
                .unwrap();
        assert_eq!(verified.map().len(), 19);
    }

    #[test]
    fn typed_check_rejects_partial_field_set() {
        let err = check_command(&fixture("config.json"), &PlaceholderMarker::default(), false, true)
            .expect_err("missing fields");
        assert!(format!("{err:#}").contains("front-end schema"));

        check_command(&fixture("config.json"), &PlaceholderMarker::default(), false, false)
            .unwrap();
    }

    #[test]
    fn custom_delimiters_from_flags() {
        let cli = Cli::try_parse_from([
            "petstay",
            "check",
            "dollar.json",
            "--open",
            "${",
            "--close",
            "}",
        ])
        .unwrap();
        let Commands::Check { open, close, .. } = cli.command else {
            panic!("expected check");
        };
        let marker = PlaceholderMarker::new(open, close).unwrap();

        let err = check_command(&fixture("dollar.json"), &marker, false, false)
            .expect_err("dollar placeholder");
        assert!(format!("{err:#}").contains("missing config value: AWS_REGION"));

        let err = check_command(&fixture("dollar.json"), &marker, true, false)
            .expect_err("dollar placeholder");
        assert!(err.to_string().contains(": AWS_REGION ("));

        // The same file is clean under the default braces.
        check_command(&fixture("dollar.json"), &PlaceholderMarker::default(), false, false)
            .unwrap();
    }
}
