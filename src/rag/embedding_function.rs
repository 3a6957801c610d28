//! Vector-store embedding-function adapter
//!
//! Vector stores take an embedding callback rather than a concrete client:
//! they hand over the documents being indexed (or the query being searched)
//! and get vectors back. [`EmbeddingFunction`] is that seam, and
//! [`GeminiEmbeddingFunction`] implements it over any [`Embedder`] with a
//! fixed task hint.

use crate::rag::embeddings::Embedder;
use crate::types::{Embedding, EmbeddingTask, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Embedding callback interface expected by vector stores.
#[async_trait]
pub trait EmbeddingFunction: Send + Sync {
    /// Embed the given documents, one vector per input, in input order.
    async fn call(&self, documents: &[String]) -> Result<Vec<Embedding>>;
}

/// [`EmbeddingFunction`] backed by a remote embedding model.
pub struct GeminiEmbeddingFunction {
    embedder: Arc<dyn Embedder>,
    task: EmbeddingTask,
}

impl GeminiEmbeddingFunction {
    /// Adapter embedding corpus documents (`RETRIEVAL_DOCUMENT`).
    pub fn for_documents(embedder: Arc<dyn Embedder>) -> Self {
        Self {
            embedder,
            task: EmbeddingTask::RetrievalDocument,
        }
    }

    /// Adapter embedding search queries (`RETRIEVAL_QUERY`).
    pub fn for_queries(embedder: Arc<dyn Embedder>) -> Self {
        Self {
            embedder,
            task: EmbeddingTask::RetrievalQuery,
        }
    }

    /// The task hint this adapter passes through.
    pub fn task(&self) -> EmbeddingTask {
        self.task
    }
}

#[async_trait]
impl EmbeddingFunction for GeminiEmbeddingFunction {
    async fn call(&self, documents: &[String]) -> Result<Vec<Embedding>> {
        self.embedder.embed_batch(documents, self.task).await
    }
}
