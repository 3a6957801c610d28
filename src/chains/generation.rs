//! Generation chain
//!
//! The linear composition at the heart of the pipeline: format a prompt
//! template, send it to the chat model, extract the text. No branching,
//! no retries, no validation beyond what the stages themselves enforce.

use crate::llm::{ChatClient, ChatClientFactory, GenerationOptions};
use crate::prompts::{PromptHubClient, PromptTemplate};
use crate::types::{ChatResponse, Message, Result};
use std::collections::HashMap;
use tracing::info;

/// Extracts the caller-facing output from a model response.
pub trait OutputParser: Send + Sync {
    fn parse(&self, response: ChatResponse) -> Result<String>;
}

/// Passes the response text through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrOutputParser;

impl OutputParser for StrOutputParser {
    fn parse(&self, response: ChatResponse) -> Result<String> {
        Ok(response.content)
    }
}

/// Prompt template → chat model → output parser.
///
/// Sampling defaults to temperature zero so the same context and question
/// produce stable answers.
///
/// # Example
///
/// ```ignore
/// let hub = PromptHubClient::new(&config.hub.base_url);
/// let factory = ChatClientFactory::new(config.gemini_provider());
/// let chain = GenerationChain::from_hub(&hub, &factory, "rlm/rag-prompt").await?;
///
/// let answer = chain.answer("<retrieved documents>", "What is Rust?").await?;
/// ```
pub struct GenerationChain {
    template: PromptTemplate,
    client: Box<dyn ChatClient>,
    parser: Box<dyn OutputParser>,
    options: GenerationOptions,
}

impl GenerationChain {
    /// Build a chain from an already-pulled template and client.
    pub fn new(template: PromptTemplate, client: Box<dyn ChatClient>) -> Self {
        Self {
            template,
            client,
            parser: Box::new(StrOutputParser),
            options: GenerationOptions::deterministic(),
        }
    }

    /// Pull the template from the hub and wire up the factory's default
    /// client.
    ///
    /// # Errors
    ///
    /// Fails when the hub pull fails (there is no fallback template) or the
    /// configured provider cannot produce a client.
    pub async fn from_hub(
        hub: &PromptHubClient,
        factory: &ChatClientFactory,
        handle: &str,
    ) -> Result<Self> {
        let template = hub.pull(handle).await?;
        let client = factory.create_default()?;

        info!(
            handle,
            model = client.model_name(),
            "generation chain ready"
        );

        Ok(Self::new(template, client))
    }

    /// Replace the output parser.
    pub fn with_parser(mut self, parser: Box<dyn OutputParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Override the sampling options (defaults to deterministic).
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the chain over arbitrary template inputs.
    pub async fn invoke(&self, inputs: &HashMap<String, String>) -> Result<String> {
        let prompt = self.template.format(inputs)?;
        let response = self
            .client
            .generate(&[Message::user(prompt)], &self.options)
            .await?;
        self.parser.parse(response)
    }

    /// Run the chain with the RAG inputs (`{context}`, `{question}`).
    pub async fn answer(&self, context: &str, question: &str) -> Result<String> {
        self.invoke(&Self::rag_inputs(context, question)).await
    }

    /// Stream the chain's output as text deltas.
    ///
    /// The parser is bypassed here; deltas are raw model text.
    pub async fn stream(
        &self,
        context: &str,
        question: &str,
    ) -> Result<Box<dyn futures::Stream<Item = Result<String>> + Send + Unpin>> {
        let prompt = self.template.format(&Self::rag_inputs(context, question))?;
        self.client
            .stream(&[Message::user(prompt)], &self.options)
            .await
    }

    /// The template this chain formats.
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// The sampling options this chain sends with every request.
    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    fn rag_inputs(context: &str, question: &str) -> HashMap<String, String> {
        HashMap::from([
            ("context".to_string(), context.to_string()),
            ("question".to_string(), question.to_string()),
        ])
    }
}
