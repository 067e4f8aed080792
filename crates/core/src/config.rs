//! Configuration management for the Hidayah CLI.
//!
//! Configuration is merged from three layers, later layers winning:
//! - Built-in defaults
//! - An optional YAML config file (`hidayah.yaml`)
//! - Command-line flags / environment variables
//!
//! Everything the pipeline needs at startup lives here: index and metadata
//! paths for both corpora, the embedding backend, the generator backend,
//! and the retrieval thresholds.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Paths to one corpus: the vector index blob and its metadata sidecar.
///
/// The sidecar is a JSON array positionally aligned with the index rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusPaths {
    /// Vector index blob
    pub index: PathBuf,

    /// Metadata sidecar (JSON array of chunk records)
    pub metadata: PathBuf,
}

/// Generator (LLM) backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Provider identifier ("ollama", "gemini")
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Optional custom endpoint URL
    pub endpoint: Option<String>,

    /// Environment variable holding the API key, for providers that need one
    #[serde(rename = "apiKeyEnv")]
    pub api_key_env: Option<String>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            model: "llama3.2".to_string(),
            endpoint: None,
            api_key_env: None,
        }
    }
}

impl GeneratorSettings {
    /// Resolve the API key from the configured environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|key| !key.is_empty())
    }
}

/// Embedding backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    /// Provider identifier ("ollama", "mock")
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Embedding vector dimension
    pub dimensions: usize,

    /// Optional custom endpoint URL
    pub endpoint: Option<String>,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            model: "nomic-embed-text".to_string(),
            dimensions: 768,
            endpoint: None,
        }
    }
}

/// Retrieval tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalSettings {
    /// Number of nearest neighbors to retrieve per query
    pub top_k: usize,

    /// L2 distance below which a result counts as a genuine match
    pub relevance_threshold: f32,

    /// Stricter threshold gating topic-verse injection
    pub injection_threshold: f32,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            top_k: 10,
            relevance_threshold: 0.6,
            injection_threshold: 0.5,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Quran corpus paths
    pub quran: CorpusPaths,

    /// Hadith corpus paths
    pub hadith: CorpusPaths,

    /// Generator backend
    pub generator: GeneratorSettings,

    /// Embedding backend
    pub embedding: EmbeddingSettings,

    /// Retrieval tuning
    pub retrieval: RetrievalSettings,

    /// Log level override
    pub log_level: Option<String>,

    /// Disable colored output
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            quran: CorpusPaths {
                index: PathBuf::from("data/quran_english.index"),
                metadata: PathBuf::from("data/quran_english_metadata.json"),
            },
            hadith: CorpusPaths {
                index: PathBuf::from("data/hadith.index"),
                metadata: PathBuf::from("data/hadith_chunks.json"),
            },
            generator: GeneratorSettings::default(),
            embedding: EmbeddingSettings::default(),
            retrieval: RetrievalSettings::default(),
            log_level: None,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration, merging an optional YAML file over defaults.
    ///
    /// A missing explicit file is an error; a missing default `hidayah.yaml`
    /// silently falls back to built-in defaults.
    pub fn load(config_file: Option<&Path>) -> AppResult<Self> {
        match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => {
                let default_path = Path::new("hidayah.yaml");
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn with_overrides(
        mut self,
        provider: Option<String>,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(provider) = provider {
            self.generator.provider = provider;
        }
        if let Some(model) = model {
            self.generator.model = model;
        }
        if let Some(level) = log_level {
            self.log_level = Some(level);
        }
        if verbose {
            self.log_level = Some("debug".to_string());
        }
        if no_color {
            self.no_color = true;
        }
        self
    }
}
