//! Tests for the Gemini embedding client and the vector-store adapter.

use ragline::rag::{Embedder, EmbeddingFunction, GeminiEmbedder, GeminiEmbeddingFunction};
use ragline::types::EmbeddingTask;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn embedder(server: &MockServer) -> GeminiEmbedder {
    GeminiEmbedder::new(
        "test-key".to_string(),
        format!("{}/v1beta", server.uri()),
        "gemini-embedding-001".to_string(),
    )
}

#[tokio::test]
async fn test_embed_sends_task_type_and_parses_values() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-embedding-001:embedContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "model": "models/gemini-embedding-001",
            "taskType": "RETRIEVAL_QUERY"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "embedding": {"values": [0.1, -0.2, 0.3]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let vector = embedder(&server)
        .embed("what is rust?", EmbeddingTask::RetrievalQuery)
        .await
        .unwrap();

    assert_eq!(vector, vec![0.1, -0.2, 0.3]);
}

#[tokio::test]
async fn test_embed_document_forwards_title() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "taskType": "RETRIEVAL_DOCUMENT",
            "title": "Custom query"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "embedding": {"values": [1.0]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    embedder(&server)
        .with_title("Custom query")
        .embed("doc text", EmbeddingTask::RetrievalDocument)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_embed_batch_preserves_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/v1beta/models/gemini-embedding-001:batchEmbedContents",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "embeddings": [
                {"values": [1.0, 0.0]},
                {"values": [0.0, 1.0]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let vectors = embedder(&server)
        .embed_batch(
            &["first".to_string(), "second".to_string()],
            EmbeddingTask::RetrievalDocument,
        )
        .await
        .unwrap();

    assert_eq!(vectors.len(), 2);
    assert_eq!(vectors[0], vec![1.0, 0.0]);
    assert_eq!(vectors[1], vec![0.0, 1.0]);
}

#[tokio::test]
async fn test_embed_batch_empty_input_skips_network() {
    // No mocks mounted: any request would 404 and fail the call.
    let server = MockServer::start().await;

    let vectors = embedder(&server)
        .embed_batch(&[], EmbeddingTask::RetrievalDocument)
        .await
        .unwrap();
    assert!(vectors.is_empty());
}

#[tokio::test]
async fn test_embed_batch_count_mismatch_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "embeddings": [{"values": [1.0]}]
        })))
        .mount(&server)
        .await;

    let err = embedder(&server)
        .embed_batch(
            &["a".to_string(), "b".to_string()],
            EmbeddingTask::RetrievalDocument,
        )
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Requested 2 embeddings, got 1"));
}

#[tokio::test]
async fn test_embed_empty_values_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "embedding": {"values": []}
        })))
        .mount(&server)
        .await;

    let err = embedder(&server)
        .embed("text", EmbeddingTask::SemanticSimilarity)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no values"));
}

#[tokio::test]
async fn test_embedding_function_uses_document_task() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "requests": [{"taskType": "RETRIEVAL_DOCUMENT"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "embeddings": [{"values": [0.5, 0.5]}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let function = GeminiEmbeddingFunction::for_documents(Arc::new(embedder(&server)));
    let vectors = function.call(&["one doc".to_string()]).await.unwrap();
    assert_eq!(vectors, vec![vec![0.5, 0.5]]);
}
