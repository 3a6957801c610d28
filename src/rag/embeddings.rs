//! Remote embedding clients
//!
//! Wraps the Gemini `embedContent` / `batchEmbedContents` endpoints behind
//! the [`Embedder`] trait. The service weights vectors differently per task,
//! so callers pass an [`EmbeddingTask`] with every request.

use crate::types::{AppError, Embedding, EmbeddingTask, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Generic embedding-model trait for provider abstraction.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single text.
    async fn embed(&self, text: &str, task: EmbeddingTask) -> Result<Embedding>;

    /// Embed a batch of texts in one request.
    ///
    /// An empty input returns an empty vec without touching the network.
    async fn embed_batch(&self, texts: &[String], task: EmbeddingTask) -> Result<Vec<Embedding>>;

    /// Get the model name/identifier.
    fn model_name(&self) -> &str;
}

/// Client for the Gemini embedding API.
pub struct GeminiEmbedder {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
    /// Optional document title forwarded with `RETRIEVAL_DOCUMENT` requests.
    title: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmbedContentRequest {
    model: String,
    content: EmbedContent,
    task_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

#[derive(Debug, Serialize)]
struct EmbedContent {
    parts: Vec<EmbedPart>,
}

#[derive(Debug, Serialize)]
struct EmbedPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct BatchEmbedRequest {
    requests: Vec<EmbedContentRequest>,
}

#[derive(Debug, Deserialize)]
struct EmbedContentResponse {
    embedding: ContentEmbedding,
}

#[derive(Debug, Deserialize)]
struct BatchEmbedResponse {
    #[serde(default)]
    embeddings: Vec<ContentEmbedding>,
}

#[derive(Debug, Deserialize)]
struct ContentEmbedding {
    #[serde(default)]
    values: Vec<f32>,
}

impl GeminiEmbedder {
    pub fn new(api_key: String, api_base: String, model: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            http,
            api_key,
            api_base,
            model,
            title: None,
        }
    }

    /// Attach a title forwarded with document-embedding requests.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn build_request(&self, text: &str, task: EmbeddingTask) -> EmbedContentRequest {
        // The API only accepts a title for document embeddings.
        let title = match task {
            EmbeddingTask::RetrievalDocument => self.title.clone(),
            _ => None,
        };

        EmbedContentRequest {
            model: format!("models/{}", self.model),
            content: EmbedContent {
                parts: vec![EmbedPart {
                    text: text.to_string(),
                }],
            },
            task_type: task.as_str().to_string(),
            title,
        }
    }

    fn check_values(values: Vec<f32>) -> Result<Embedding> {
        if values.is_empty() {
            return Err(AppError::Embedding(
                "Embedding response contained no values".to_string(),
            ));
        }
        Ok(values)
    }
}

#[async_trait]
impl Embedder for GeminiEmbedder {
    async fn embed(&self, text: &str, task: EmbeddingTask) -> Result<Embedding> {
        let url = format!("{}/models/{}:embedContent", self.api_base, self.model);
        let request = self.build_request(text, task);

        debug!(model = %self.model, task = task.as_str(), "sending embedContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Embedding(format!("Embedding API error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Embedding(format!(
                "Embedding API returned {}: {}",
                status, detail
            )));
        }

        let body: EmbedContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Embedding(format!("Malformed embedding response: {}", e)))?;

        Self::check_values(body.embedding.values)
    }

    async fn embed_batch(&self, texts: &[String], task: EmbeddingTask) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let url = format!("{}/models/{}:batchEmbedContents", self.api_base, self.model);
        let request = BatchEmbedRequest {
            requests: texts
                .iter()
                .map(|text| self.build_request(text, task))
                .collect(),
        };

        debug!(model = %self.model, batch = texts.len(), "sending batchEmbedContents request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Embedding(format!("Embedding API error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Embedding(format!(
                "Embedding API returned {}: {}",
                status, detail
            )));
        }

        let body: BatchEmbedResponse = response
            .json()
            .await
            .map_err(|e| AppError::Embedding(format!("Malformed embedding response: {}", e)))?;

        if body.embeddings.len() != texts.len() {
            return Err(AppError::Embedding(format!(
                "Requested {} embeddings, got {}",
                texts.len(),
                body.embeddings.len()
            )));
        }

        body.embeddings
            .into_iter()
            .map(|e| Self::check_values(e.values))
            .collect()
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
