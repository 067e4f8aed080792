//! Retrieval engine for the Hidayah QA pipeline.
//!
//! Covers everything between the user's query and the final linked answer:
//! embedding, nearest-neighbor search over the two corpora, relevance
//! gating, query-expansion fallback, topic-verse injection, and the ask
//! orchestration that wires the generator and citation linker together.

pub mod ask;
pub mod embeddings;
pub mod engine;
pub mod index;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use ask::{build_pipeline, AskSettings, QaPipeline};
pub use engine::{detect_source_type, is_relevant, Corpus, RetrievalEngine};
pub use index::FlatIndex;
pub use store::ChunkStore;
pub use types::{PassageChunk, QueryResponse, SearchResult, SourceKind, SourceSelector};
