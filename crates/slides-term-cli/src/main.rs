use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use slides_term_cli::{AppConfig, extract, rank, select};

#[derive(Parser)]
#[command(name = "slides-term")]
#[command(about = "Technical term extraction from slide-deck candidates")]
struct Cli {
    /// JSON config file; defaults to $SLIDES_TERM_CONFIG.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, split, and augment a raw domain file.
    Extract {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
    },
    /// Rank every domain file in a directory.
    Rank {
        #[arg(long)]
        candidates: PathBuf,
        #[arg(long)]
        output: PathBuf,
        /// tfidf, lfidf, flr, hits, flrh, or mdp.
        #[arg(long)]
        method: Option<String>,
    },
    /// Keep the top share of a ranking.
    Select {
        #[arg(long)]
        ranking: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        acceptance_rate: Option<f64>,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Extract { input, output } => {
            let candidates = extract(&config, &input, &output)?;
            info!(
                "extracted {} documents for domain {}",
                candidates.num_documents(),
                candidates.domain
            );
        }
        Commands::Rank {
            candidates,
            output,
            method,
        } => {
            let config = match method {
                Some(name) => config.with_method_name(&name)?,
                None => config,
            };
            let written = rank(&config, &candidates, &output)?;
            info!("ranked {} domains", written.len());
        }
        Commands::Select {
            ranking,
            output,
            acceptance_rate,
        } => {
            let rate = acceptance_rate.unwrap_or(config.acceptance_rate);
            select(rate, &ranking, &output)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
