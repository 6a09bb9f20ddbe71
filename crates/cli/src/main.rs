//! Lexis CLI - stem, normalize and rank text from the command line

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lexis_core::{Document, LexisConfig};
use lexis_engine::search::{stem, Normalizer, Ranker};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "lexis")]
#[command(author, version, about = "Lexical retrieval: normalize text and rank it with BM25")]
#[command(propagate_version = true)]
struct Cli {
    /// TOML config file with [bm25] and [normalizer] sections
    #[arg(long, short = 'c', global = true, env = "LEXIS_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stem each word
    Stem {
        /// Words to stem
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Run the normalizer over text
    Normalize {
        /// Text to normalize
        text: String,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Rank a corpus against a query
    Search {
        /// Search query (normalized before ranking)
        query: String,

        /// JSON array of {"text": ..., "metadata": ...} objects
        #[arg(long)]
        corpus: PathBuf,

        /// Maximum number of results (all documents if omitted)
        #[arg(long, short = 'k')]
        top_k: Option<usize>,

        /// Corpus text is already normalized; score it as-is
        #[arg(long)]
        prenormalized: bool,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// One corpus file entry. Metadata is any JSON value and defaults to null.
#[derive(Debug, Deserialize)]
struct CorpusEntry {
    text: String,
    #[serde(default)]
    metadata: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct Hit<'a> {
    rank: usize,
    score: f64,
    index: usize,
    metadata: &'a serde_json::Value,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps stdout clean for JSON output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Stem { words } => {
            for word in words {
                println!("{}\t{}", word, stem(&word));
            }
        }

        Commands::Normalize { text, format } => {
            let normalizer = Normalizer::from_config(&config.normalizer);
            let tokens = normalizer.normalize(&text);
            match format {
                Format::Json => println!("{}", serde_json::to_string(&tokens)?),
                Format::Text => println!("{}", tokens.join(" ")),
            }
        }

        Commands::Search {
            query,
            corpus,
            top_k,
            prenormalized,
            format,
        } => {
            let normalizer = Normalizer::from_config(&config.normalizer);
            let entries = load_corpus(&corpus)?;
            let ranker = build_ranker(entries, &normalizer, prenormalized, &config)?;
            let results = ranker.search_text(&normalizer, &query, top_k);

            let hits: Vec<Hit<'_>> = results
                .iter()
                .enumerate()
                .map(|(i, r)| Hit {
                    rank: i + 1,
                    score: r.score,
                    index: r.index,
                    metadata: r.metadata(),
                })
                .collect();

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&hits)?),
                Format::Text => {
                    if hits.is_empty() {
                        println!("No results for '{}'", query);
                        return Ok(());
                    }
                    for hit in &hits {
                        println!(
                            "{:>3}. {:>8.4}  #{}  {}",
                            hit.rank, hit.score, hit.index, hit.metadata
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<LexisConfig> {
    match path {
        Some(path) => LexisConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(LexisConfig::default()),
    }
}

fn load_corpus(path: &Path) -> Result<Vec<CorpusEntry>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus {}", path.display()))?;
    let entries: Vec<CorpusEntry> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse corpus {}", path.display()))?;
    if entries.is_empty() {
        bail!("Corpus {} contains no documents", path.display());
    }
    tracing::debug!(
        target: "lexis::cli",
        path = %path.display(),
        documents = entries.len(),
        "Loaded corpus"
    );
    Ok(entries)
}

fn build_ranker(
    entries: Vec<CorpusEntry>,
    normalizer: &Normalizer,
    prenormalized: bool,
    config: &LexisConfig,
) -> Result<Ranker<serde_json::Value>> {
    let documents = entries
        .into_iter()
        .map(|entry| {
            if prenormalized {
                Document::new(entry.text, entry.metadata)
            } else {
                normalizer.document(&entry.text, entry.metadata)
            }
        })
        .collect();
    Ok(Ranker::new(documents, Some(config.bm25))?)
}
