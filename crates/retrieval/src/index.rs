//! Flat L2 vector index.
//!
//! Brute-force nearest-neighbor search over row-major f32 vectors. The
//! corpora are a few thousand rows each, so exact search is both simpler
//! and more predictable than an approximate structure.
//!
//! Persistence format: `HIDX` magic, little-endian u32 dimension, u32 row
//! count, then the vectors as little-endian f32 in row order. The metadata
//! sidecar (see [`crate::store`]) is aligned with the rows positionally.

use hidayah_core::{AppError, AppResult};
use std::fs;
use std::path::Path;

const MAGIC: &[u8; 4] = b"HIDX";
const HEADER_LEN: usize = 12;

/// In-memory flat vector index. Loaded once, read-only at query time.
pub struct FlatIndex {
    dimensions: usize,
    vectors: Vec<f32>,
}

impl FlatIndex {
    /// Create an empty index for the given dimension.
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            vectors: Vec::new(),
        }
    }

    /// Build an index from row vectors, validating their dimension.
    pub fn from_vectors(dimensions: usize, rows: &[Vec<f32>]) -> AppResult<Self> {
        let mut vectors = Vec::with_capacity(dimensions * rows.len());
        for (row_id, row) in rows.iter().enumerate() {
            if row.len() != dimensions {
                return Err(AppError::Index(format!(
                    "Row {} has dimension {}, expected {}",
                    row_id,
                    row.len(),
                    dimensions
                )));
            }
            vectors.extend_from_slice(row);
        }
        Ok(Self {
            dimensions,
            vectors,
        })
    }

    /// Number of stored vectors.
    pub fn len(&self) -> usize {
        if self.dimensions == 0 {
            0
        } else {
            self.vectors.len() / self.dimensions
        }
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Embedding dimension.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Find the `k` nearest rows to `query` by L2 distance.
    ///
    /// Returns `(row_id, distance)` pairs sorted ascending by distance,
    /// at most `k` of them.
    pub fn search(&self, query: &[f32], k: usize) -> AppResult<Vec<(usize, f32)>> {
        if query.len() != self.dimensions {
            return Err(AppError::Index(format!(
                "Query embedding dimension mismatch: expected {}, got {}",
                self.dimensions,
                query.len()
            )));
        }
        if self.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits: Vec<(usize, f32)> = self
            .vectors
            .chunks_exact(self.dimensions)
            .enumerate()
            .map(|(row_id, row)| (row_id, l2_distance(query, row)))
            .collect();

        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        hits.truncate(k);
        Ok(hits)
    }

    /// Load an index blob from disk.
    pub fn load(path: &Path) -> AppResult<Self> {
        let bytes = fs::read(path).map_err(|e| {
            AppError::Index(format!("Failed to read index {}: {}", path.display(), e))
        })?;

        if bytes.len() < HEADER_LEN || &bytes[..4] != MAGIC {
            return Err(AppError::Index(format!(
                "Not a vector index blob: {}",
                path.display()
            )));
        }

        let dimensions = u32::from_le_bytes(bytes[4..8].try_into().unwrap()) as usize;
        let rows = u32::from_le_bytes(bytes[8..12].try_into().unwrap()) as usize;
        let expected = HEADER_LEN + dimensions * rows * 4;
        if bytes.len() != expected {
            return Err(AppError::Index(format!(
                "Corrupt index blob {}: expected {} bytes, found {}",
                path.display(),
                expected,
                bytes.len()
            )));
        }

        let vectors = bytes[HEADER_LEN..]
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes(chunk.try_into().unwrap()))
            .collect();

        tracing::debug!(
            "Loaded index {} ({} rows, dim {})",
            path.display(),
            rows,
            dimensions
        );

        Ok(Self {
            dimensions,
            vectors,
        })
    }

    /// Write the index blob to disk.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.vectors.len() * 4);
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&(self.dimensions as u32).to_le_bytes());
        bytes.extend_from_slice(&(self.len() as u32).to_le_bytes());
        for value in &self.vectors {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        fs::write(path, bytes).map_err(|e| {
            AppError::Index(format!("Failed to write index {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}

fn l2_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_index() -> FlatIndex {
        FlatIndex::from_vectors(
            2,
            &[vec![1.0, 0.0], vec![0.0, 1.0], vec![-1.0, 0.0], vec![0.0, -1.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_search_orders_by_distance() {
        let index = toy_index();
        let hits = index.search(&[0.1, 0.9], 4).unwrap();
        assert_eq!(hits[0].0, 1);
        for pair in hits.windows(2) {
            assert!(pair[0].1 <= pair[1].1);
        }
    }

    #[test]
    fn test_search_length_bound() {
        let index = toy_index();
        assert_eq!(index.search(&[1.0, 0.0], 2).unwrap().len(), 2);
        assert_eq!(index.search(&[1.0, 0.0], 100).unwrap().len(), 4);
        assert!(index.search(&[1.0, 0.0], 0).unwrap().is_empty());
    }

    #[test]
    fn test_search_dimension_mismatch() {
        let index = toy_index();
        assert!(index.search(&[1.0, 0.0, 0.0], 2).is_err());
    }

    #[test]
    fn test_search_empty_index() {
        let index = FlatIndex::new(2);
        assert!(index.search(&[1.0, 0.0], 3).unwrap().is_empty());
    }

    #[test]
    fn test_from_vectors_rejects_ragged_rows() {
        let result = FlatIndex::from_vectors(2, &[vec![1.0, 0.0], vec![1.0]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toy.index");

        let index = toy_index();
        index.save(&path).unwrap();

        let loaded = FlatIndex::load(&path).unwrap();
        assert_eq!(loaded.len(), 4);
        assert_eq!(loaded.dimensions(), 2);
        let hits = loaded.search(&[0.1, 0.9], 1).unwrap();
        assert_eq!(hits[0].0, 1);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.index");
        fs::write(&path, b"not an index").unwrap();
        assert!(FlatIndex::load(&path).is_err());
    }
}
