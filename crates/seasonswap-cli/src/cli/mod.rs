//! CLI shell for the seasonswap engine.
//!
//! Owns the external collaborators the core treats as contracts: the
//! JSON-file override store and the simulated request events fed to the
//! decision functions.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use seasonswap_core::config::{self, SwapConfig};
use seasonswap_core::store::JsonFileStore;

use commands::{run_clear, run_decide, run_observe, run_seasons, run_set, run_status};

/// Top-level CLI for the seasonswap override engine.
#[derive(Debug, Parser)]
#[command(name = "seasonswap")]
#[command(about = "seasonswap: season-override request interception engine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the built-in season catalog.
    Seasons,

    /// Show the stored override state and its staleness verdict.
    Status,

    /// Select a season override, as the external settings UI would.
    Set {
        /// Catalog hash of the season to display.
        season_hash: u32,
    },

    /// Clear the season override and its change timestamp.
    Clear,

    /// Evaluate the interception decision for a request URL.
    Decide {
        /// Full request URL to judge.
        url: String,
    },

    /// Feed an outbound request through the credential capture filter.
    Observe {
        /// Full request URL of the outbound request.
        url: String,

        /// Request header, repeatable (e.g. --header x-api-key=abc).
        #[arg(long = "header", value_name = "NAME=VALUE")]
        headers: Vec<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let mut store = open_store(&cfg)?;

        match cli.command {
            CliCommand::Seasons => run_seasons(),
            CliCommand::Status => run_status(&store)?,
            CliCommand::Set { season_hash } => run_set(&mut store, &cfg, season_hash)?,
            CliCommand::Clear => run_clear(&mut store)?,
            CliCommand::Decide { url } => run_decide(&store, &url)?,
            CliCommand::Observe { url, headers } => run_observe(&mut store, &url, &headers)?,
        }

        Ok(())
    }
}

fn open_store(cfg: &SwapConfig) -> Result<JsonFileStore> {
    let path = match &cfg.store_path {
        Some(path) => path.clone(),
        None => JsonFileStore::default_path()?,
    };
    Ok(JsonFileStore::open(path))
}

#[cfg(test)]
mod tests;
