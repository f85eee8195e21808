//! Command-line interface
//!
//! Without a subcommand the binary starts the interactive search. `search` and `detail`
//! run a single lookup against the configured provider and print JSON.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{self, Config, ProviderKind};
use crate::error::AppError;
use crate::provider::Provider;

#[derive(Debug, Parser)]
#[command(name = "calsearch")]
#[command(version, about = "Food search for the calorie log")]
pub struct Cli {
    /// Config file (default: ~/.config/calorie-search/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// GraphQL endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
    /// Use an offline TOML food catalog instead of the endpoint
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    /// Quiet period in milliseconds before typed text is looked up
    #[arg(long, global = true)]
    pub debounce_ms: Option<u64>,
    /// Minimum characters before a lookup is issued
    #[arg(long = "min-chars", global = true)]
    pub min_chars: Option<usize>,
    /// Start signed in as this user
    #[arg(long)]
    pub user: Option<String>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print suggestions for a term
    Search { term: String },
    /// Print the detail record for a food name
    Detail { name: String },
}

impl Cli {
    /// Load the config file and apply flag overrides on top
    pub fn resolve_config(&self) -> Result<Config, AppError> {
        let mut config = match &self.config {
            Some(path) => config::load_config_from_path(path)?,
            None => config::load_config()?,
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.provider.endpoint = endpoint.clone();
        }
        if let Some(path) = &self.catalog {
            config.provider.kind = ProviderKind::Catalog;
            config.provider.catalog_path = Some(path.clone());
        }
        if let Some(ms) = self.debounce_ms {
            config.search.debounce_ms = ms;
        }
        if let Some(min) = self.min_chars {
            config.search.min_term_len = min;
        }
    }
}

/// Run a one-shot subcommand, writing pretty JSON to `out`
pub fn run_command(command: &Command, config: &Config, out: &mut impl Write) -> Result<(), AppError> {
    // Same guard the interactive search applies
    if let Command::Search { term } = command
        && term.chars().count() < config.search.min_term_len
    {
        writeln!(out, "[]")?;
        return Ok(());
    }

    let provider = Provider::from_config(&config.provider)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match command {
        Command::Search { term } => {
            let items = runtime.block_on(provider.search(term))?;
            log::debug!("search {:?}: {} suggestions", term, items.len());
            serde_json::to_writer_pretty(&mut *out, &items).map_err(io::Error::from)?;
        }
        Command::Detail { name } => {
            let detail = runtime.block_on(provider.fetch_detail(name))?;
            serde_json::to_writer_pretty(&mut *out, &detail).map_err(io::Error::from)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
