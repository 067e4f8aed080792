//! Retrieval over the dual corpora.
//!
//! The engine owns the embedder and the two loaded corpora (index + chunk
//! store). Everything here is read-only after construction; a single
//! engine is built at startup and passed by reference.

use crate::embeddings::EmbeddingProvider;
use crate::index::FlatIndex;
use crate::store::ChunkStore;
use crate::types::{SearchResult, SourceKind, SourceSelector};
use hidayah_core::config::CorpusPaths;
use hidayah_core::AppResult;
use std::sync::Arc;

/// Keywords that mark a query as hadith-oriented. English, transliterated,
/// and Urdu terms.
const HADITH_KEYWORDS: &[&str] = &[
    "hadith",
    "hadees",
    "bukhari",
    "muslim",
    "tirmidhi",
    "tirmizi",
    "sunan",
    "abu dawood",
    "nasai",
    "ibn majah",
    "sunnah",
    "prophet",
    "muhammad",
    "saying",
    "narration",
    "reported",
    "حدیث",
    "بخاری",
    "مسلم",
    "ترمذی",
    "ابو داؤد",
    "نسائی",
    "ابن ماجہ",
];

/// Keywords that mark a query as Quran-oriented.
const QURAN_KEYWORDS: &[&str] = &[
    "quran", "surah", "ayah", "verse", "quranic", "قرآن", "سورہ", "آیت", "ayat",
];

/// Determine whether a query targets the Quran, the Hadith, or both.
///
/// Only an unambiguous keyword hit narrows the search; anything else
/// (both sets matched, or neither) searches everything.
pub fn detect_source_type(query: &str) -> SourceSelector {
    let query_lower = query.to_lowercase();

    let has_hadith = HADITH_KEYWORDS
        .iter()
        .any(|keyword| query_lower.contains(keyword));
    let has_quran = QURAN_KEYWORDS
        .iter()
        .any(|keyword| query_lower.contains(keyword));

    if has_hadith && !has_quran {
        SourceSelector::Hadith
    } else if has_quran && !has_hadith {
        SourceSelector::Quran
    } else {
        SourceSelector::Both
    }
}

/// Whether at least one result clears the relevance threshold.
///
/// This is the sole relevance gate in the pipeline: a single boolean, no
/// partial-credit scoring. Empty input is never relevant.
pub fn is_relevant(results: &[SearchResult], threshold: f32) -> bool {
    results.iter().any(|result| result.distance < threshold)
}

/// One loaded corpus: vector index plus its metadata sidecar.
pub struct Corpus {
    index: FlatIndex,
    store: ChunkStore,
}

impl Corpus {
    /// Load a corpus from its index blob and metadata sidecar.
    pub fn load(paths: &CorpusPaths, kind: SourceKind) -> AppResult<Self> {
        let index = FlatIndex::load(&paths.index)?;
        let store = ChunkStore::load(&paths.metadata, kind)?;

        if index.len() != store.len() {
            // Search still works; rows beyond the sidecar are dropped at
            // query time
            tracing::warn!(
                "{} index has {} rows but metadata has {} chunks; index and sidecar are out of sync",
                kind.as_str(),
                index.len(),
                store.len()
            );
        }

        tracing::info!(
            "Loaded {} corpus: {} chunks, dim {}",
            kind.as_str(),
            index.len(),
            index.dimensions()
        );

        Ok(Self { index, store })
    }

    /// Assemble a corpus from in-memory parts.
    pub fn new(index: FlatIndex, store: ChunkStore) -> Self {
        Self { index, store }
    }

    /// Number of indexed chunks.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Embedding dimension of the index.
    pub fn dimensions(&self) -> usize {
        self.index.dimensions()
    }
}

/// Embeds queries and searches the two corpora.
pub struct RetrievalEngine {
    embedder: Arc<dyn EmbeddingProvider>,
    quran: Corpus,
    hadith: Corpus,
}

impl RetrievalEngine {
    /// Build an engine over loaded corpora.
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, quran: Corpus, hadith: Corpus) -> Self {
        Self {
            embedder,
            quran,
            hadith,
        }
    }

    /// Access the quran corpus.
    pub fn quran(&self) -> &Corpus {
        &self.quran
    }

    /// Access the hadith corpus.
    pub fn hadith(&self) -> &Corpus {
        &self.hadith
    }

    /// Retrieve the `top_k` nearest passages for a query.
    ///
    /// Embeds the query once, searches every corpus the selector includes,
    /// merges, and sorts ascending by distance. Ties keep per-source order
    /// (Quran results first). The result has at most `top_k` entries and
    /// may be empty.
    pub async fn retrieve(
        &self,
        query: &str,
        selector: SourceSelector,
        top_k: usize,
    ) -> AppResult<Vec<SearchResult>> {
        let embedding = self.embedder.embed(query).await?;

        let mut results = Vec::new();
        if selector.includes(SourceKind::Quran) {
            results.extend(self.search_corpus(&self.quran, SourceKind::Quran, &embedding, top_k)?);
        }
        if selector.includes(SourceKind::Hadith) {
            results.extend(self.search_corpus(
                &self.hadith,
                SourceKind::Hadith,
                &embedding,
                top_k,
            )?);
        }

        // Stable sort: equal distances keep their per-source order
        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results.truncate(top_k);

        tracing::debug!(
            "Retrieved {} results for '{}' (selector: {})",
            results.len(),
            query,
            selector.as_str()
        );

        Ok(results)
    }

    fn search_corpus(
        &self,
        corpus: &Corpus,
        kind: SourceKind,
        embedding: &[f32],
        top_k: usize,
    ) -> AppResult<Vec<SearchResult>> {
        let hits = corpus.index.search(embedding, top_k)?;

        let mut results = Vec::with_capacity(hits.len());
        for (row_id, distance) in hits {
            match corpus.store.get(row_id) {
                Some(chunk) => results.push(SearchResult {
                    source: kind,
                    text: chunk.text.clone(),
                    distance,
                }),
                None => {
                    // Points at a build-time consistency bug between the
                    // index and its sidecar
                    tracing::warn!(
                        "{} index returned row {} outside metadata bounds ({}); dropping",
                        kind.as_str(),
                        row_id,
                        corpus.store.len()
                    );
                }
            }
        }

        Ok(results)
    }
}
