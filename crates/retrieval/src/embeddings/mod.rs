//! Embedding providers.
//!
//! The embedder maps text to a fixed-dimension vector, deterministically
//! for a fixed model. Both corpora indices and all queries must use the
//! same provider and model.

pub mod provider;
pub mod providers;

pub use provider::{create_provider, EmbeddingProvider};
