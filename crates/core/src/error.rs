//! Error types for the Hidayah QA pipeline.
//!
//! This module defines a unified error enum covering all error categories
//! in the application: configuration, I/O, embedding, vector index,
//! generation, and citation linking.

use thiserror::Error;

/// Unified error type for the Hidayah pipeline.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
/// We never panic — errors must be represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Embedding model errors (unreachable backend, dimension mismatch)
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Vector index errors (corrupt blob, search failure)
    #[error("Index error: {0}")]
    Index(String),

    /// Generative model errors
    #[error("Generation error: {0}")]
    Llm(String),

    /// Citation extraction and linking errors
    #[error("Citation error: {0}")]
    Cite(String),

    /// Prompt template errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
