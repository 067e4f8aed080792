//! Corpus statistics command.

use clap::Args;
use hidayah_core::{config::AppConfig, AppResult};
use hidayah_retrieval::{Corpus, SourceKind};

/// Show corpus statistics
#[derive(Args, Debug)]
pub struct InfoCommand {}

impl InfoCommand {
    /// Execute the info command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        for (kind, paths) in [
            (SourceKind::Quran, &config.quran),
            (SourceKind::Hadith, &config.hadith),
        ] {
            match Corpus::load(paths, kind) {
                Ok(corpus) => println!(
                    "{:<8} {} chunks, dim {} ({})",
                    kind.as_str(),
                    corpus.len(),
                    corpus.dimensions(),
                    paths.index.display()
                ),
                Err(e) => println!("{:<8} not available: {}", kind.as_str(), e),
            }
        }

        println!(
            "embedder {} ({}, dim {})",
            config.embedding.provider, config.embedding.model, config.embedding.dimensions
        );
        println!(
            "generator {} ({})",
            config.generator.provider, config.generator.model
        );

        Ok(())
    }
}
