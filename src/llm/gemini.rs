//! Gemini chat-completion client
//!
//! Thin client over the `generateContent` and `streamGenerateContent`
//! endpoints of the Gemini API. Request and response shapes follow the
//! public REST surface; streaming uses server-sent events (`alt=sse`).

use crate::llm::client::{ChatClient, GenerationOptions};
use crate::types::{AppError, ChatResponse, Message, MessageRole, Result, TokenUsage};
use async_trait::async_trait;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 120;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

impl GeminiClient {
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
        }
    }

    /// Convert conversation turns to the Gemini content format.
    ///
    /// The API accepts only `user` and `model` roles; system turns are
    /// folded into user turns.
    fn convert_messages(messages: &[Message]) -> Vec<Content> {
        messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    MessageRole::Assistant => "model",
                    MessageRole::System | MessageRole::User => "user",
                };
                Content {
                    role: role.to_string(),
                    parts: vec![Part {
                        text: msg.content.clone(),
                    }],
                }
            })
            .collect()
    }

    fn build_request(messages: &[Message], options: &GenerationOptions) -> GenerateContentRequest {
        let generation_config = Some(GenerationConfig {
            temperature: options.temperature,
            top_p: options.top_p,
            max_output_tokens: options.max_output_tokens,
        });

        GenerateContentRequest {
            contents: Self::convert_messages(messages),
            generation_config,
        }
    }

    fn endpoint_url(&self, stream: bool) -> String {
        let method = if stream {
            "streamGenerateContent?alt=sse"
        } else {
            "generateContent"
        };
        format!("{}/models/{}:{}", self.api_base, self.model, method)
    }

    fn parse_response(response: GenerateContentResponse) -> Result<ChatResponse> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Llm("No candidates in Gemini response".to_string()))?;

        let content = candidate
            .content
            .map(|c| {
                c.parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();

        let finish_reason = candidate
            .finish_reason
            .map(|r| match r.as_str() {
                "STOP" => "stop".to_string(),
                "MAX_TOKENS" => "length".to_string(),
                other => other.to_lowercase(),
            })
            .unwrap_or_else(|| "stop".to_string());

        let usage = response.usage_metadata.map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(ChatResponse {
            content,
            finish_reason,
            usage,
        })
    }

    /// Extract the text delta from a single SSE payload, if any.
    fn delta_from_chunk(chunk: GenerateContentResponse) -> Option<String> {
        let candidate = chunk.candidates.into_iter().next()?;
        let content = candidate.content?;
        let text = content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() { None } else { Some(text) }
    }
}

#[async_trait]
impl ChatClient for GeminiClient {
    async fn generate(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<ChatResponse> {
        let request = Self::build_request(messages, options);
        let url = self.endpoint_url(false);

        debug!(model = %self.model, turns = messages.len(), "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Gemini API error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Llm(format!(
                "Gemini API returned {}: {}",
                status, detail
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Malformed Gemini response: {}", e)))?;

        Self::parse_response(body)
    }

    async fn stream(
        &self,
        messages: &[Message],
        options: &GenerationOptions,
    ) -> Result<Box<dyn futures::Stream<Item = Result<String>> + Send + Unpin>> {
        let request = Self::build_request(messages, options);
        let url = self.endpoint_url(true);

        debug!(model = %self.model, turns = messages.len(), "opening streamGenerateContent stream");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Gemini API error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Llm(format!(
                "Gemini API returned {}: {}",
                status, detail
            )));
        }

        let mut bytes = response.bytes_stream();

        let result_stream = async_stream::stream! {
            let mut buffer = String::new();

            while let Some(chunk) = bytes.next().await {
                let chunk = match chunk {
                    Ok(c) => c,
                    Err(e) => {
                        yield Err(AppError::Llm(format!("Stream error: {}", e)));
                        return;
                    }
                };
                buffer.push_str(&String::from_utf8_lossy(&chunk));

                // SSE payloads are newline-delimited; anything after the last
                // newline may be a partial line and stays in the buffer.
                while let Some(pos) = buffer.find('\n') {
                    let line = buffer[..pos].trim().to_string();
                    buffer.drain(..=pos);

                    let Some(data) = line.strip_prefix("data:") else {
                        continue;
                    };
                    let data = data.trim();
                    if data.is_empty() || data == "[DONE]" {
                        continue;
                    }

                    match serde_json::from_str::<GenerateContentResponse>(data) {
                        Ok(payload) => {
                            if let Some(delta) = Self::delta_from_chunk(payload) {
                                yield Ok(delta);
                            }
                        }
                        Err(e) => {
                            yield Err(AppError::Llm(format!("Malformed stream chunk: {}", e)));
                            return;
                        }
                    }
                }
            }
        };

        Ok(Box::new(Box::pin(result_stream)))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(content: &str) -> Message {
        Message::user(content)
    }

    #[test]
    fn test_convert_messages_folds_system_into_user() {
        let messages = vec![Message::system("be terse"), user("hello")];
        let contents = GeminiClient::convert_messages(&messages);

        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].role, "user");
        assert_eq!(contents[0].parts[0].text, "be terse");
        assert_eq!(contents[1].role, "user");
    }

    #[test]
    fn test_convert_messages_maps_assistant_to_model() {
        let messages = vec![user("hi"), Message::assistant("hello there")];
        let contents = GeminiClient::convert_messages(&messages);

        assert_eq!(contents[1].role, "model");
        assert_eq!(contents[1].parts[0].text, "hello there");
    }

    #[test]
    fn test_request_serializes_generation_config_camel_case() {
        let options = GenerationOptions {
            temperature: Some(0.0),
            top_p: None,
            max_output_tokens: Some(256),
        };
        let request = GeminiClient::build_request(&[user("q")], &options);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["generationConfig"]["temperature"], 0.0);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 256);
        assert!(json["generationConfig"].get("topP").is_none());
    }

    #[test]
    fn test_endpoint_url_shapes() {
        let client = GeminiClient::new(
            "key".to_string(),
            "https://generativelanguage.googleapis.com/v1beta".to_string(),
            "gemini-2.5-flash".to_string(),
        );

        assert_eq!(
            client.endpoint_url(false),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
        assert!(client.endpoint_url(true).ends_with(":streamGenerateContent?alt=sse"));
    }

    #[test]
    fn test_parse_response_joins_parts_and_maps_finish_reason() {
        let body: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "a"}, {"text": "b"}]},
                "finishReason": "MAX_TOKENS"
            }],
            "usageMetadata": {
                "promptTokenCount": 3,
                "candidatesTokenCount": 2,
                "totalTokenCount": 5
            }
        }))
        .unwrap();

        let parsed = GeminiClient::parse_response(body).unwrap();
        assert_eq!(parsed.content, "a\nb");
        assert_eq!(parsed.finish_reason, "length");
        assert_eq!(parsed.usage.unwrap().total_tokens, 5);
    }

    #[test]
    fn test_parse_response_without_candidates_is_error() {
        let body: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({"candidates": []})).unwrap();

        let err = GeminiClient::parse_response(body).unwrap_err();
        assert!(err.to_string().contains("No candidates"));
    }

    #[test]
    fn test_delta_from_chunk_skips_empty_text() {
        let chunk: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": ""}]}}]
        }))
        .unwrap();
        assert!(GeminiClient::delta_from_chunk(chunk).is_none());

        let chunk: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "delta"}]}}]
        }))
        .unwrap();
        assert_eq!(GeminiClient::delta_from_chunk(chunk).unwrap(), "delta");
    }
}
