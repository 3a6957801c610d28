//! # ragline - Gemini-backed RAG generation pipeline
//!
//! A small library (and CLI) for the generation side of a
//! retrieval-augmented-generation pipeline: prompt templates pulled from a
//! remote hub, chat completion against the Gemini API, and remote
//! embeddings for vector-store integration.
//!
//! ## Overview
//!
//! ragline can be used in two ways:
//!
//! 1. **As a CLI** - Run the `ragline` binary
//! 2. **As a library** - Import components into your own Rust project
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use ragline::chains::GenerationChain;
//! use ragline::llm::ChatClientFactory;
//! use ragline::prompts::PromptHubClient;
//! use ragline::utils::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!
//!     let hub = PromptHubClient::new(&config.hub.base_url);
//!     let factory = ChatClientFactory::new(config.chat_provider());
//!     let chain = GenerationChain::from_hub(&hub, &factory, "rlm/rag-prompt").await?;
//!
//!     let answer = chain.answer("<retrieved documents>", "What is Rust?").await?;
//!     println!("{}", answer);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Embeddings
//!
//! ```rust,ignore
//! use ragline::rag::{Embedder, GeminiEmbedder, GeminiEmbeddingFunction};
//! use ragline::types::EmbeddingTask;
//! use std::sync::Arc;
//!
//! let embedder = Arc::new(GeminiEmbedder::new(api_key, api_base, model));
//! let vector = embedder.embed("some text", EmbeddingTask::RetrievalQuery).await?;
//!
//! // Or hand a vector store the embedding-function adapter
//! let function = GeminiEmbeddingFunction::for_documents(embedder);
//! ```
//!
//! ## Modules
//!
//! - [`llm`] - Chat-model clients and provider abstraction
//! - [`rag`] - Embedding clients and the vector-store adapter
//! - [`prompts`] - Prompt templates and the remote hub client
//! - [`chains`] - The linear generation chain
//! - [`utils`] - Environment-driven configuration
//! - [`types`] - Common types and error handling

#![warn(missing_docs)]

/// Linear generation chains (prompt → model → parser).
pub mod chains;
/// CLI parsing and terminal output.
pub mod cli;
/// Chat-model provider clients and abstractions.
pub mod llm;
/// Prompt templates and the remote prompt hub.
pub mod prompts;
/// Embedding clients and the vector-store embedding function.
pub mod rag;
/// Core types (messages, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use chains::{GenerationChain, StrOutputParser};
pub use llm::{ChatClient, ChatClientFactory, GenerationOptions, Provider};
pub use prompts::{PromptHubClient, PromptTemplate};
pub use rag::{Embedder, EmbeddingFunction, GeminiEmbedder, GeminiEmbeddingFunction};
pub use types::{AppError, Result};
pub use utils::Config;
