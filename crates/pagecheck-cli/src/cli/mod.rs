//! CLI for the pagecheck URL registry.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pagecheck_core::checker::PageChecker;
use pagecheck_core::config;
use pagecheck_core::store::UrlStore;

use commands::{run_add, run_check, run_list, run_show};

/// Top-level CLI for the pagecheck URL registry.
#[derive(Debug, Parser)]
#[command(name = "pagecheck")]
#[command(about = "Register website URLs and record SEO page checks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Register a URL (stored in canonical scheme://host form).
    Add {
        /// URL to register, e.g. https://example.com/any/page
        url: String,
    },

    /// List registered URLs with their most recent check.
    List {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show one URL and its full check history.
    Show {
        /// URL identifier.
        id: i64,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Fetch a URL's page once and record the outcome.
    Check {
        /// URL identifier.
        id: i64,

        /// Emit the recorded check as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let store = UrlStore::open(&cfg).await?;

        match cli.command {
            CliCommand::Add { url } => run_add(&store, &url).await?,
            CliCommand::List { json } => run_list(&store, json).await?,
            CliCommand::Show { id, json } => run_show(&store, id, json).await?,
            CliCommand::Check { id, json } => {
                let checker = PageChecker::new()?;
                run_check(&store, &checker, id, json).await?;
            }
        }

        Ok(())
    }
}
