//! Environment-driven configuration.

use crate::llm::Provider;
use crate::types::{AppError, Result};
use serde::Deserialize;
use std::env;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_EMBEDDING_MODEL: &str = "gemini-embedding-001";
pub const DEFAULT_HUB_URL: &str = "https://api.hub.langchain.com";
pub const DEFAULT_PROMPT_HANDLE: &str = "rlm/rag-prompt";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub hub: HubConfig,
    pub chain: ChainConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API key for the Gemini service. May be empty; the remote service
    /// rejects unauthenticated calls at request time.
    pub api_key: String,
    pub api_base: String,
    pub chat_model: String,
    pub embedding_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HubConfig {
    pub base_url: String,
    pub prompt_handle: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    pub temperature: f32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            gemini: GeminiConfig {
                api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
                api_base: env::var("GEMINI_API_BASE")
                    .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
                chat_model: env::var("GEMINI_CHAT_MODEL")
                    .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
                embedding_model: env::var("GEMINI_EMBEDDING_MODEL")
                    .unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string()),
            },
            hub: HubConfig {
                base_url: env::var("PROMPT_HUB_URL")
                    .unwrap_or_else(|_| DEFAULT_HUB_URL.to_string()),
                prompt_handle: env::var("PROMPT_HANDLE")
                    .unwrap_or_else(|_| DEFAULT_PROMPT_HANDLE.to_string()),
            },
            chain: ChainConfig {
                temperature: env::var("TEMPERATURE")
                    .unwrap_or_else(|_| "0".to_string())
                    .parse()
                    .map_err(|e| AppError::Config(format!("Invalid TEMPERATURE: {}", e)))?,
            },
        })
    }

    /// Chat provider built from the Gemini section.
    pub fn chat_provider(&self) -> Provider {
        Provider::Gemini {
            api_key: self.gemini.api_key.clone(),
            api_base: self.gemini.api_base.clone(),
            model: self.gemini.chat_model.clone(),
        }
    }
}
