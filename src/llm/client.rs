//! Chat-model client abstractions and provider management
//!
//! This module provides a unified interface for chat-completion providers:
//! - **Gemini**: Full support including streaming
//! - **OpenAI**: Placeholder (not yet implemented)

use crate::types::{AppError, ChatResponse, Message, Result};
use async_trait::async_trait;

/// Sampling parameters for a single generation request.
///
/// All fields are optional; `None` leaves the vendor default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationOptions {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl GenerationOptions {
    /// Deterministic sampling: temperature pinned to zero.
    pub fn deterministic() -> Self {
        Self {
            temperature: Some(0.0),
            ..Self::default()
        }
    }
}

/// Generic chat-model client trait for provider abstraction
///
/// All chat providers implement this trait, allowing for easy swapping
/// between providers without changing application code.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Generate a completion from a conversation.
    async fn generate(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<ChatResponse>;

    /// Stream a completion as text deltas.
    async fn stream(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Box<dyn futures::Stream<Item = Result<String>> + Send + Unpin>>;

    /// Get the model name/identifier.
    fn model_name(&self) -> &str;
}

/// Provider enum for runtime selection
///
/// # Supported Providers
///
/// | Provider | Status | Streaming | Notes |
/// |----------|--------|-----------|-------|
/// | Gemini | ✅ Full | ✅ | Default |
/// | OpenAI | ❌ Stub | - | Not yet implemented |
#[derive(Debug, Clone)]
pub enum Provider {
    /// Gemini API provider (generativelanguage.googleapis.com)
    ///
    /// # Example
    /// ```rust,ignore
    /// let provider = Provider::Gemini {
    ///     api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
    ///     api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
    ///     model: "gemini-2.5-flash".to_string(),
    /// };
    /// ```
    ///
    /// An empty `api_key` is accepted here; the remote service rejects the
    /// request at call time.
    Gemini {
        api_key: String,
        api_base: String,
        model: String,
    },

    /// OpenAI chat-completion provider
    ///
    /// # Status
    ///
    /// **Not yet implemented.** This is a placeholder for future implementation.
    ///
    /// # Alternatives
    ///
    /// - Use the Gemini provider (default)
    /// - Use the async-openai crate directly in your application
    OpenAi { api_key: String, model: String },
}

impl Provider {
    /// Create a client instance for this provider
    ///
    /// # Errors
    ///
    /// Returns an error if the provider is not yet implemented (OpenAI).
    pub fn create_client(&self) -> Result<Box<dyn ChatClient>> {
        match self {
            Provider::Gemini {
                api_key,
                api_base,
                model,
            } => Ok(Box::new(super::gemini::GeminiClient::new(
                api_key.clone(),
                api_base.clone(),
                model.clone(),
            ))),

            Provider::OpenAi { api_key, model } => Err(AppError::Llm(format!(
                "OpenAI provider not yet implemented. \
                 Requested model: '{}'. \
                 Alternatives: \
                 (1) Use the Gemini provider, \
                 (2) Use the async-openai crate directly. \
                 API key provided: {}",
                model,
                if api_key.is_empty() { "no" } else { "yes" }
            ))),
        }
    }

    /// Check if this provider is fully implemented
    pub fn is_implemented(&self) -> bool {
        matches!(self, Provider::Gemini { .. })
    }

    /// Get a human-readable name for this provider
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini { .. } => "Gemini",
            Provider::OpenAi { .. } => "OpenAI",
        }
    }

    /// Get the model identifier this provider is configured with
    pub fn model(&self) -> &str {
        match self {
            Provider::Gemini { model, .. } => model,
            Provider::OpenAi { model, .. } => model,
        }
    }
}

/// Configuration-based client factory
///
/// Provides a convenient way to create chat clients with a default provider
/// while allowing runtime provider switching.
///
/// # Example
///
/// ```rust,ignore
/// use ragline::llm::{ChatClientFactory, Provider};
///
/// let factory = ChatClientFactory::new(Provider::Gemini {
///     api_key: "...".to_string(),
///     api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
///     model: "gemini-2.5-flash".to_string(),
/// });
///
/// let client = factory.create_default()?;
/// ```
pub struct ChatClientFactory {
    default_provider: Provider,
}

impl ChatClientFactory {
    /// Create a new factory with the specified default provider
    pub fn new(default_provider: Provider) -> Self {
        Self { default_provider }
    }

    /// Create a client using the default provider
    pub fn create_default(&self) -> Result<Box<dyn ChatClient>> {
        self.default_provider.create_client()
    }

    /// Create a client using a specific provider
    pub fn create_with_provider(&self, provider: Provider) -> Result<Box<dyn ChatClient>> {
        provider.create_client()
    }

    /// Get a reference to the default provider
    pub fn default_provider(&self) -> &Provider {
        &self.default_provider
    }

    /// Check if the default provider is implemented
    pub fn is_default_implemented(&self) -> bool {
        self.default_provider.is_implemented()
    }
}
