//! Shared fixtures for retrieval tests.

use crate::embeddings::EmbeddingProvider;
use crate::engine::Corpus;
use crate::index::FlatIndex;
use crate::store::ChunkStore;
use crate::types::{PassageChunk, SourceKind};
use async_trait::async_trait;
use hidayah_core::AppResult;
use std::collections::HashMap;

/// Test embedder returning fixed vectors for known texts and a far-away
/// vector for everything else.
#[derive(Debug)]
pub(crate) struct StaticEmbedder {
    pub map: HashMap<String, Vec<f32>>,
    pub dimensions: usize,
}

impl StaticEmbedder {
    pub fn new(dimensions: usize, entries: &[(&str, Vec<f32>)]) -> Self {
        Self {
            map: entries
                .iter()
                .map(|(text, vector)| (text.to_string(), vector.clone()))
                .collect(),
            dimensions,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for StaticEmbedder {
    fn provider_name(&self) -> &str {
        "static"
    }

    fn model_name(&self) -> &str {
        "static-v1"
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    async fn embed_batch(&self, texts: &[String]) -> AppResult<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|text| {
                self.map
                    .get(text)
                    .cloned()
                    .unwrap_or_else(|| vec![10.0; self.dimensions])
            })
            .collect())
    }
}

pub(crate) fn chunk(id: u32, text: &str) -> PassageChunk {
    PassageChunk {
        chunk_id: id,
        text: text.to_string(),
        metadata: Vec::new(),
    }
}

/// Three Quran chunks at unit vectors; chunk 2 carries the canonical
/// patience citation.
pub(crate) fn quran_corpus() -> Corpus {
    let index =
        FlatIndex::from_vectors(2, &[vec![1.0, 0.0], vec![0.0, 1.0], vec![-1.0, 0.0]]).unwrap();
    let store = ChunkStore::from_chunks(
        SourceKind::Quran,
        vec![
            chunk(1, "Surah Al-Fatihah, Ayah 5: You alone we worship."),
            chunk(
                2,
                "Surah Al-Baqarah, Ayah 153: Seek help through patience and prayer.",
            ),
            chunk(3, "Surah Al-Ikhlas, Ayah 1: Say, He is Allah, the One."),
        ],
    );
    Corpus::new(index, store)
}

pub(crate) fn hadith_corpus() -> Corpus {
    let index = FlatIndex::from_vectors(2, &[vec![0.0, -1.0]]).unwrap();
    let store = ChunkStore::from_chunks(
        SourceKind::Hadith,
        vec![chunk(1, "Sahih Bukhari, Hadith 1: Actions are by intentions.")],
    );
    Corpus::new(index, store)
}
