//! Remote summarization service client
//!
//! Sends truncated page content to the configured text-summarization
//! endpoint and shapes the returned summary into bullet lines.

use crate::config::SummarizerConfig;
use crate::summarize::SummarizeError;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Request body accepted by the summarization service
#[derive(Debug, Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
}

/// One element of the service's response array
///
/// Extra fields are ignored; a missing `summary_text` is a shape error.
#[derive(Debug, Deserialize)]
struct SummaryResponseItem {
    summary_text: String,
}

/// Client for the remote summarization service
///
/// Holds the endpoint and bearer token injected at construction; credentials
/// are never read from ambient process state.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    client: Client,
    config: SummarizerConfig,
}

impl SummaryClient {
    /// Creates a new summarization client
    pub fn new(client: Client, config: SummarizerConfig) -> Self {
        Self { client, config }
    }

    /// Summarizes the given content into bullet lines
    ///
    /// POSTs `{"inputs": content}` with bearer authentication, expects a
    /// JSON array whose first element carries a `summary_text` string, and
    /// shapes that text via [`split_into_bullets`]. Any deviation from the
    /// expected response shape is an error.
    pub async fn summarize_text(&self, content: &str) -> Result<Vec<String>, SummarizeError> {
        let response = self
            .client
            .post(&self.config.endpoint_url)
            .bearer_auth(&self.config.api_token)
            .json(&SummaryRequest { inputs: content })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummarizeError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let items: Vec<SummaryResponseItem> = serde_json::from_str(&body)
            .map_err(|e| SummarizeError::ResponseShape(e.to_string()))?;

        let first = items
            .into_iter()
            .next()
            .ok_or_else(|| SummarizeError::ResponseShape("empty response array".to_string()))?;

        Ok(split_into_bullets(&first.summary_text))
    }
}

/// Shapes raw summary text into trimmed bullet lines
///
/// The whole text is trimmed, a trailing period is appended if absent, and
/// the result is split on newlines, so the period lands on the final line
/// only, never on each line independently.
pub fn split_into_bullets(raw: &str) -> Vec<String> {
    let mut text = raw.trim().to_string();
    if !text.ends_with('.') {
        text.push('.');
    }

    text.split('\n').map(|line| line.trim().to_string()).collect()
}
