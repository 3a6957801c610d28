//! Prompt hub client
//!
//! Pulls named templates from a remote prompt registry. Handles use the
//! `owner/name` form (`rlm/rag-prompt`). There is no local fallback: a
//! failed pull is an error, nothing is cached or substituted.

use crate::prompts::template::PromptTemplate;
use crate::types::{AppError, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for a remote prompt-template registry.
pub struct PromptHubClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PullResponse {
    repo: String,
    manifest: Manifest,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    template: String,
    #[serde(default)]
    input_variables: Vec<String>,
}

impl PromptHubClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Pull the latest version of a template by handle.
    ///
    /// # Errors
    ///
    /// Returns a hub error for malformed handles (checked locally, before
    /// any network I/O), HTTP failures, and manifests that do not parse.
    pub async fn pull(&self, handle: &str) -> Result<PromptTemplate> {
        let (owner, name) = Self::split_handle(handle)?;
        let url = format!(
            "{}/commits/{}/{}/latest",
            self.base_url.trim_end_matches('/'),
            owner,
            name
        );

        debug!(handle, "pulling prompt template from hub");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Hub(format!("Failed to reach prompt hub: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Hub(format!(
                "Hub returned {} for '{}'",
                status, handle
            )));
        }

        let body: PullResponse = response
            .json()
            .await
            .map_err(|e| AppError::Hub(format!("Malformed hub manifest for '{}': {}", handle, e)))?;

        Ok(
            PromptTemplate::new(body.manifest.template, body.manifest.input_variables)
                .with_repo(body.repo),
        )
    }

    fn split_handle(handle: &str) -> Result<(&str, &str)> {
        match handle.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok((owner, name))
            }
            _ => Err(AppError::Hub(format!(
                "Invalid hub handle '{}': expected 'owner/name'",
                handle
            ))),
        }
    }
}
