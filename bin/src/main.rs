//! Ronda CLI binary.
//!
//! Provides a command-line interface for the Ronda fundamental signal
//! evaluator.

mod cmd;
mod config;
mod data;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use ronda_traits::{Language, Period};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "ronda")]
#[command(about = "Rule-based fundamental signals for equities", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Output format for `analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON object keyed by symbol
    Json,
    /// One row per symbol
    Table,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze fundamentals for one or more symbols
    Analyze {
        /// Ticker symbols
        #[arg(required = true, value_delimiter = ',')]
        symbols: Vec<String>,

        /// As-of date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        end_date: Option<String>,

        /// Reporting period (annual, quarter, ttm)
        #[arg(short, long)]
        period: Option<Period>,

        /// Maximum number of snapshots to fetch per symbol
        #[arg(short, long)]
        limit: Option<u32>,

        /// Display language (en, zh)
        #[arg(short = 'L', long)]
        language: Option<Language>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Show per-rule-group reasoning in text output
        #[arg(short = 'r', long)]
        show_reasoning: bool,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the built-in rule groups, or describe one
    Rules {
        /// Rule group to describe (e.g. growth_signal)
        name: Option<String>,

        /// Show descriptions and metrics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the display string table for a language
    Strings {
        /// Display language (en, zh)
        #[arg(short = 'L', long, default_value = "en")]
        language: Language,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            symbols,
            end_date,
            period,
            limit,
            language,
            format,
            show_reasoning,
            config,
        } => {
            let overrides = config::Overrides {
                language,
                period,
                limit,
            };
            let config = config::resolve(config.as_deref(), &overrides)?;
            cmd::analyze::analyze(&symbols, end_date.as_deref(), config, format, show_reasoning)
                .await?;
        }
        Commands::Rules { name, verbose } => match name {
            Some(name) => cmd::rules::show_rule(&name)?,
            None => cmd::rules::list_rules(verbose),
        },
        Commands::Strings { language } => {
            cmd::strings::print_strings(language);
        }
    }

    Ok(())
}
