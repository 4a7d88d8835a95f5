use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vocab_config::Config;
use vocab_core::cleaner::{self, CleanReport};
use vocab_core::error::CleanError;
use vocab_core::loader::VocabularyLoader;

#[cfg(test)]
mod tests;

/// Vocabulary dataset cleaner
#[derive(Parser, Debug)]
#[command(name = "vocab-cleaner")]
#[command(about = "Deduplicate, normalize and sort a vocabulary dataset")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Path to the vocabulary JSON file (defaults to the configured path)
    pub file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::new();
    init_tracing(&config);

    let path = cli.file.unwrap_or_else(|| config.storage.path.clone());

    match run(&path) {
        Ok(report) => {
            println!("{report}");
            Ok(())
        }
        // Missing input is a soft failure: log it, touch nothing, exit clean.
        Err(err @ CleanError::NotFound { .. }) => {
            tracing::error!("{err}");
            Ok(())
        }
        Err(err) => Err(err).context("vocabulary cleaning failed"),
    }
}

/// Full pipeline for one file: load, clean, write back.
pub fn run(path: &Path) -> Result<CleanReport, CleanError> {
    let vocabulary = VocabularyLoader::load_from_file(path)?;
    let (cleaned, report) = cleaner::clean(vocabulary);
    VocabularyLoader::save_to_file(path, &cleaned)?;

    Ok(report)
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}
