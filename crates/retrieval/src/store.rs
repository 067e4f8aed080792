//! Chunk metadata store.
//!
//! The JSON sidecar of a vector index: a flat array of chunk records whose
//! array position matches the index row. Loaded once at startup, read-only
//! afterwards.

use crate::types::{PassageChunk, SourceKind};
use hidayah_core::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Parsed metadata sidecar for one corpus.
pub struct ChunkStore {
    kind: SourceKind,
    chunks: Vec<PassageChunk>,
}

impl ChunkStore {
    /// Load a sidecar from disk.
    pub fn load(path: &Path, kind: SourceKind) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Index(format!("Failed to read metadata {}: {}", path.display(), e))
        })?;
        let chunks: Vec<PassageChunk> = serde_json::from_str(&content).map_err(|e| {
            AppError::Index(format!("Failed to parse metadata {}: {}", path.display(), e))
        })?;

        tracing::debug!(
            "Loaded {} metadata ({} chunks) from {}",
            kind.as_str(),
            chunks.len(),
            path.display()
        );

        Ok(Self { kind, chunks })
    }

    /// Build a store from in-memory chunks.
    pub fn from_chunks(kind: SourceKind, chunks: Vec<PassageChunk>) -> Self {
        Self { kind, chunks }
    }

    /// Write the sidecar to disk.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(&self.chunks)?;
        fs::write(path, json).map_err(|e| {
            AppError::Index(format!("Failed to write metadata {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    /// Look up the chunk for an index row. `None` when the row is outside
    /// the sidecar, which indicates an index/metadata desync.
    pub fn get(&self, row_id: usize) -> Option<&PassageChunk> {
        self.chunks.get(row_id)
    }

    /// Corpus this store belongs to.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Iterate over all chunks in row order.
    pub fn iter(&self) -> impl Iterator<Item = &PassageChunk> {
        self.chunks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(id: u32, text: &str) -> PassageChunk {
        PassageChunk {
            chunk_id: id,
            text: text.to_string(),
            metadata: Vec::new(),
        }
    }

    #[test]
    fn test_get_is_bounds_checked() {
        let store = ChunkStore::from_chunks(SourceKind::Quran, vec![chunk(1, "a"), chunk(2, "b")]);
        assert!(store.get(1).is_some());
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.json");

        let store = ChunkStore::from_chunks(
            SourceKind::Hadith,
            vec![chunk(1, "Sahih Bukhari, Hadith 1: intentions")],
        );
        store.save(&path).unwrap();

        let loaded = ChunkStore::load(&path, SourceKind::Hadith).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(0).unwrap().chunk_id, 1);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.json");
        fs::write(&path, "{not json").unwrap();
        assert!(ChunkStore::load(&path, SourceKind::Quran).is_err());
    }
}
