//! Mock implementations for testing.
//!
//! This module provides a mock chat client that can be used across test
//! files without duplication.

use async_trait::async_trait;
use futures::StreamExt;
use ragline::llm::{ChatClient, GenerationOptions};
use ragline::types::{AppError, ChatResponse, Message, Result};
use std::sync::{Arc, Mutex};

/// Mock chat client with configurable responses.
///
/// Can be configured to return a fixed response or to simulate failures,
/// and records the prompts it was sent for later assertions. Clones share
/// the prompt log, so a test can keep one clone and box the other.
#[derive(Clone)]
pub struct MockChatClient {
    response: String,
    should_fail: bool,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockChatClient {
    /// Create a mock client that returns the given response.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            should_fail: false,
            prompts: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Create a mock client that always returns an error.
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            should_fail: true,
            prompts: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn record(&self, messages: &[Message]) {
        let mut prompts = self.prompts.lock().unwrap();
        prompts.extend(messages.iter().map(|m| m.content.clone()));
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn generate(
        &self,
        messages: &[Message],
        _options: &GenerationOptions,
    ) -> Result<ChatResponse> {
        if self.should_fail {
            return Err(AppError::Llm("Mock failure".to_string()));
        }
        self.record(messages);

        Ok(ChatResponse {
            content: self.response.clone(),
            finish_reason: "stop".to_string(),
            usage: None,
        })
    }

    async fn stream(
        &self,
        messages: &[Message],
        _options: &GenerationOptions,
    ) -> Result<Box<dyn futures::Stream<Item = Result<String>> + Send + Unpin>> {
        if self.should_fail {
            return Err(AppError::Llm("Mock failure".to_string()));
        }
        self.record(messages);

        let deltas: Vec<Result<String>> = self
            .response
            .split_inclusive(' ')
            .map(|chunk| Ok(chunk.to_string()))
            .collect();
        Ok(Box::new(futures::stream::iter(deltas).boxed()))
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
