//! Index build command.
//!
//! Embeds a corpus chunks file and writes the vector index blob plus its
//! normalized metadata sidecar to the paths the config points at.

use clap::{Args, ValueEnum};
use hidayah_core::{config::AppConfig, AppError, AppResult};
use hidayah_retrieval::embeddings::{create_provider, EmbeddingProvider};
use hidayah_retrieval::{ChunkStore, FlatIndex, PassageChunk, SourceKind};
use std::path::PathBuf;

/// Chunks embedded per provider batch.
const BATCH_SIZE: usize = 32;

/// Which corpus to (re)build.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum CorpusArg {
    Quran,
    Hadith,
}

/// Build a corpus index from a chunks file
#[derive(Args, Debug)]
pub struct IndexCommand {
    /// Corpus to build
    #[arg(long, value_enum)]
    pub source: CorpusArg,

    /// Chunks file: JSON array of {chunk_id, text, [metadata]} records
    #[arg(long)]
    pub chunks: PathBuf,
}

impl IndexCommand {
    /// Execute the index command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let (kind, paths) = match self.source {
            CorpusArg::Quran => (SourceKind::Quran, &config.quran),
            CorpusArg::Hadith => (SourceKind::Hadith, &config.hadith),
        };

        let content = std::fs::read_to_string(&self.chunks).map_err(|e| {
            AppError::Index(format!(
                "Failed to read chunks file {}: {}",
                self.chunks.display(),
                e
            ))
        })?;
        let chunks: Vec<PassageChunk> = serde_json::from_str(&content).map_err(|e| {
            AppError::Index(format!(
                "Failed to parse chunks file {}: {}",
                self.chunks.display(),
                e
            ))
        })?;

        if chunks.is_empty() {
            return Err(AppError::Index("Chunks file contains no chunks".to_string()));
        }

        tracing::info!(
            "Embedding {} {} chunks with {} ({})",
            chunks.len(),
            kind.as_str(),
            config.embedding.provider,
            config.embedding.model
        );

        let embedder = create_provider(&config.embedding)?;

        let mut vectors = Vec::with_capacity(chunks.len());
        for batch in chunks.chunks(BATCH_SIZE) {
            let texts: Vec<String> = batch.iter().map(|chunk| chunk.text.clone()).collect();
            vectors.extend(embedder.embed_batch(&texts).await?);
            tracing::debug!("Embedded {}/{} chunks", vectors.len(), chunks.len());
        }

        let index = FlatIndex::from_vectors(embedder.dimensions(), &vectors)?;
        let store = ChunkStore::from_chunks(kind, chunks);

        if let Some(parent) = paths.index.parent() {
            std::fs::create_dir_all(parent)?;
        }
        index.save(&paths.index)?;
        store.save(&paths.metadata)?;

        println!(
            "Indexed {} {} chunks (dim {}) -> {}",
            store.len(),
            kind.as_str(),
            index.dimensions(),
            paths.index.display()
        );

        Ok(())
    }
}
