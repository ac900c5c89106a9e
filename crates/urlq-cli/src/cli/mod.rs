//! CLI for urlq.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use urlq_core::config::{self, UrlqConfig};

use commands::{run_completions, run_encode, run_merge, run_presets};

/// Top-level CLI for urlq.
#[derive(Debug, Parser)]
#[command(name = "urlq")]
#[command(about = "urlq: merge query parameters into URLs", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Merge parameter sources into the query of a URL.
    ///
    /// Each SOURCE is `@preset`, a JSON object / pair array, or query text.
    /// Sources apply in order; a later value for the same key wins.
    Merge {
        /// Absolute (http/https) or relative URL.
        base: String,

        /// Parameter sources, applied left to right.
        sources: Vec<String>,

        /// Remove this key after all sources are applied (repeatable).
        #[arg(long, value_name = "KEY")]
        unset: Vec<String>,
    },

    /// Encode parameter sources as a query string (no leading `?`).
    Encode {
        /// Parameter sources, applied left to right.
        sources: Vec<String>,

        /// Remove this key after all sources are applied (repeatable).
        #[arg(long, value_name = "KEY")]
        unset: Vec<String>,
    },

    /// List configured presets.
    Presets,

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Merge {
                base,
                sources,
                unset,
            } => {
                let cfg = load_config(cli.config.as_deref())?;
                println!("{}", run_merge(&cfg, &base, &sources, &unset)?);
            }
            CliCommand::Encode { sources, unset } => {
                let cfg = load_config(cli.config.as_deref())?;
                println!("{}", run_encode(&cfg, &sources, &unset)?);
            }
            CliCommand::Presets => {
                let cfg = load_config(cli.config.as_deref())?;
                println!("{}", run_presets(&cfg)?);
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<UrlqConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}
