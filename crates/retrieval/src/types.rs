//! Retrieval type definitions.

use serde::{Deserialize, Serialize};

/// Which corpus a chunk or search result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Quran,
    Hadith,
}

impl SourceKind {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quran => "quran",
            Self::Hadith => "hadith",
        }
    }
}

/// Which corpora a retrieval call searches.
///
/// Ambiguous or unmatched queries search everything; the detection rule
/// favors recall over precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceSelector {
    Quran,
    Hadith,
    Both,
}

impl SourceSelector {
    /// Whether this selector includes the given corpus.
    pub fn includes(&self, kind: SourceKind) -> bool {
        match self {
            Self::Both => true,
            Self::Quran => kind == SourceKind::Quran,
            Self::Hadith => kind == SourceKind::Hadith,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quran => "quran",
            Self::Hadith => "hadith",
            Self::Both => "both",
        }
    }
}

/// A citation entry attached to a hadith chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HadithCitation {
    /// Full book name (e.g., "Sahih Bukhari")
    pub book: String,

    /// Hadith number within the collection
    pub number: u32,
}

/// Unit of retrieval: a fixed-granularity slice of source text.
///
/// Created at index-build time, positionally aligned with the index rows,
/// and read-only at query time. Quran chunks carry their citations inline
/// as "Surah X, Ayah Y" markers in the text; hadith chunks list theirs in
/// `metadata`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassageChunk {
    /// Stable chunk identifier assigned at build time
    pub chunk_id: u32,

    /// Chunk text (may concatenate several verses or narrations)
    pub text: String,

    /// Per-hadith citations (empty for Quran chunks)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<HadithCitation>,
}

/// One retrieved passage, ephemeral per query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Corpus the passage came from
    pub source: SourceKind,

    /// Passage text
    pub text: String,

    /// L2 distance in embedding space; smaller = more similar
    pub distance: f32,
}

/// Response of the end-to-end ask operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// The original query
    pub query: String,

    /// Final answer with citation links injected
    pub answer: String,

    /// Source selector the query was answered from
    pub source_type: String,

    /// Wall-clock processing time in seconds
    pub processing_time: f64,

    /// Number of links in the final answer
    pub references_count: usize,

    /// Alternative phrasings that improved retrieval, in the order they won
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives_used: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_includes() {
        assert!(SourceSelector::Both.includes(SourceKind::Quran));
        assert!(SourceSelector::Both.includes(SourceKind::Hadith));
        assert!(SourceSelector::Quran.includes(SourceKind::Quran));
        assert!(!SourceSelector::Quran.includes(SourceKind::Hadith));
        assert!(!SourceSelector::Hadith.includes(SourceKind::Quran));
    }

    #[test]
    fn test_chunk_record_parses_quran_sidecar() {
        let chunk: PassageChunk =
            serde_json::from_str(r#"{"chunk_id": 7, "text": "Surah Al-Fatihah, Ayah 1: ..."}"#)
                .unwrap();
        assert_eq!(chunk.chunk_id, 7);
        assert!(chunk.metadata.is_empty());
    }

    #[test]
    fn test_chunk_record_parses_hadith_sidecar() {
        let chunk: PassageChunk = serde_json::from_str(
            r#"{"chunk_id": 1, "text": "Sahih Bukhari, Hadith 1: ...", "metadata": [{"book": "Sahih Bukhari", "number": 1}]}"#,
        )
        .unwrap();
        assert_eq!(chunk.metadata.len(), 1);
        assert_eq!(chunk.metadata[0].book, "Sahih Bukhari");
    }

    #[test]
    fn test_query_response_omits_empty_alternatives() {
        let response = QueryResponse {
            query: "q".to_string(),
            answer: "a".to_string(),
            source_type: "both".to_string(),
            processing_time: 0.5,
            references_count: 0,
            alternatives_used: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("alternatives_used"));
    }
}
