//! Chat-Model Provider Clients and Abstractions
//!
//! This module provides a unified interface for chat-completion providers.
//! It abstracts provider-specific wire formats behind a common trait, so the
//! rest of the crate can compose pipelines against any supported model.
//!
//! # Architecture
//!
//! The module follows a factory pattern:
//! - [`ChatClient`] - The core trait that all providers implement
//! - [`Provider`] - Runtime provider selection, `create_client` constructor
//! - [`ChatClientFactory`] - Creates clients from a configured default
//!
//! # Example
//!
//! ```ignore
//! use ragline::llm::{GenerationOptions, Provider};
//! use ragline::types::Message;
//!
//! let provider = Provider::Gemini {
//!     api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
//!     api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
//!     model: "gemini-2.5-flash".to_string(),
//! };
//!
//! let client = provider.create_client()?;
//! let response = client
//!     .generate(&[Message::user("What is 2+2?")], &GenerationOptions::deterministic())
//!     .await?;
//! println!("{}", response.content);
//! ```
//!
//! # Streaming
//!
//! Providers support streaming responses via the `stream` method, which
//! returns a boxed `Stream<Item = Result<String>>` of text deltas.

/// Core chat client trait, provider enum, and factory.
pub mod client;
/// Gemini REST client (`generateContent` / `streamGenerateContent`).
pub mod gemini;

pub use client::{ChatClient, ChatClientFactory, GenerationOptions, Provider};
pub use gemini::GeminiClient;
