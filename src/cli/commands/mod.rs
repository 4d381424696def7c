//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `search`: Venue text search
//! - `inspect`: Full pipeline for one search result
//! - `config`: Configuration and credential checks

mod config;
mod inspect;
mod search;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use smokescreen::config::Config;
use smokescreen::error::Error;

pub use config::cmd_check_config;
pub use inspect::cmd_inspect;
pub use search::cmd_search;

/// SmokeScreen CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Places API key (overrides the config file)
    #[arg(long, global = true, env = "PLACES_API_KEY", hide_env_values = true)]
    pub places_key: Option<String>,

    /// Gemini API key (overrides the config file)
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_key: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search bars and pubs by name
    Search {
        /// Search text, e.g. a venue name or neighbourhood
        query: String,
    },
    /// Search, load photos for one result and score its smoking policy
    Inspect {
        /// Search text
        query: String,
        /// Which search result to inspect (1 = first)
        #[arg(long, default_value = "1")]
        pick: usize,
    },
    /// Show the configuration and which credentials are set
    CheckConfig {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli);

    match &cli.command {
        Commands::Search { query } => {
            let rt = Runtime::new()?;
            cmd_search(&rt, cli, &config, query)
        }
        Commands::Inspect { query, pick } => {
            let rt = Runtime::new()?;
            cmd_inspect(&rt, cli, &config, query, *pick)
        }
        Commands::CheckConfig { init } => cmd_check_config(cli, &config, *init),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

fn load_config(cli: &Cli) -> Config {
    match &cli.config {
        Some(path) => smokescreen::config::load_from(path),
        None => smokescreen::config::load(),
    }
}

/// Config file location in effect for this invocation
pub(crate) fn effective_config_path(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(smokescreen::config::config_path)
}

/// Pick the command-line key over the stored one; blank values count as unset.
pub(crate) fn resolve_key(flag: Option<&str>, stored: Option<&str>) -> Option<String> {
    flag.into_iter()
        .chain(stored)
        .map(str::trim)
        .find(|key| !key.is_empty())
        .map(String::from)
}

pub(crate) fn places_key(cli: &Cli, config: &Config) -> Result<String, Error> {
    resolve_key(
        cli.places_key.as_deref(),
        config.credentials.places_api_key.as_deref(),
    )
    .ok_or(Error::MissingCredential("Places API key"))
}

pub(crate) fn gemini_key(cli: &Cli, config: &Config) -> Result<String, Error> {
    resolve_key(
        cli.gemini_key.as_deref(),
        config.credentials.gemini_api_key.as_deref(),
    )
    .ok_or(Error::MissingCredential("Gemini API key"))
}

/// Print how to supply a missing key
pub(crate) fn print_key_instructions() {
    eprintln!("Set keys with --places-key / --gemini-key,");
    eprintln!("the PLACES_API_KEY / GEMINI_API_KEY env vars,");
    eprintln!("or the [credentials] section of the config file.");
}

/// Format a price tier as currency symbols
pub(crate) fn price_symbols(tier: u8) -> String {
    if tier == 0 {
        "free".to_string()
    } else {
        "€".repeat(tier as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_key_wins() {
        assert_eq!(
            resolve_key(Some("from-flag"), Some("from-file")),
            Some("from-flag".to_string())
        );
    }

    #[test]
    fn test_blank_keys_are_unset() {
        assert_eq!(
            resolve_key(Some("  "), Some("from-file")),
            Some("from-file".to_string())
        );
        assert_eq!(resolve_key(None, Some("")), None);
        assert_eq!(resolve_key(None, None), None);
    }

    #[test]
    fn test_cli_parses_inspect() {
        let cli = Cli::try_parse_from(["smokescreen", "inspect", "Kumpelnest", "--pick", "2"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Inspect { ref query, pick: 2 } if query == "Kumpelnest"
        ));
    }

    #[test]
    fn test_price_symbols() {
        assert_eq!(price_symbols(0), "free");
        assert_eq!(price_symbols(3), "€€€");
    }
}
