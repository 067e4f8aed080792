//! LLM integration crate for the Hidayah pipeline.
//!
//! Provider-agnostic abstraction for the generative model. The pipeline
//! treats generation as an opaque capability: prompt in, text out, fallible.
//!
//! # Providers
//! - **Ollama**: local LLM runtime
//! - **Gemini**: Google Generative Language API
//!
//! # Example
//! ```no_run
//! use hidayah_llm::{LlmClient, LlmRequest, providers::OllamaClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OllamaClient::new();
//! let request = LlmRequest::new("Hello, world!", "llama3.2");
//! let response = client.complete(&request).await?;
//! println!("{}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;
pub mod providers;

// Re-export main types
pub use client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
pub use factory::create_client;
pub use providers::{GeminiClient, OllamaClient};
