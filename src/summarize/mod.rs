//! Content summarization module
//!
//! Fetches a product page, extracts its visible paragraph text, truncates
//! it, and delegates to the remote summarization service. Failures are fully
//! contained at the item level: this module never raises past its own
//! boundary, so one bad product cannot fail a whole batch.

mod client;
mod content;

pub use client::{split_into_bullets, SummaryClient};
pub use content::{extract_paragraph_text, truncate_chars, MAX_CONTENT_CHARS};

use crate::config::SummarizerConfig;
use crate::pipeline::fetch_text;
use crate::sitemap::ProductCandidate;
use crate::FetchError;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

/// Sentinel summary for a candidate with no link to fetch
pub const NO_CONTENT_SENTINEL: &str = "No content available";

/// Sentinel summary for a candidate whose fetch or summarization failed
pub const FAILED_SENTINEL: &str = "Failed to summarize content";

/// Errors internal to a single candidate's summarization
///
/// These never escape [`Summarizer::summarize`]; they exist so the failure
/// cause can be logged before the sentinel substitution.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("page fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("summarization request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("summarization service returned status {0}")]
    Status(u16),

    #[error("unexpected summarization response shape: {0}")]
    ResponseShape(String),
}

/// A product candidate extended with its summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResult {
    /// URL of the product page
    pub link: String,

    /// URL of the product image
    pub image: String,

    /// Title of the product
    pub title: String,

    /// One bullet line per element; never empty: real bullets or a single
    /// sentinel line
    pub summary: Vec<String>,
}

impl ProductResult {
    fn from_candidate(candidate: ProductCandidate, summary: Vec<String>) -> Self {
        Self {
            link: candidate.link,
            image: candidate.image,
            title: candidate.title,
            summary,
        }
    }
}

/// Summarizes product pages via the remote summarization service
#[derive(Debug, Clone)]
pub struct Summarizer {
    client: Client,
    summary_client: SummaryClient,
}

impl Summarizer {
    /// Creates a new summarizer
    ///
    /// # Arguments
    ///
    /// * `client` - HTTP client used for product page fetches
    /// * `config` - Summarization service endpoint and credentials
    pub fn new(client: Client, config: SummarizerConfig) -> Self {
        let summary_client = SummaryClient::new(client.clone(), config);
        Self {
            client,
            summary_client,
        }
    }

    /// Summarizes one product candidate
    ///
    /// Always yields a [`ProductResult`]: a candidate with an empty link
    /// short-circuits to the no-content sentinel, and any fetch or service
    /// failure is caught and replaced with the failure sentinel.
    pub async fn summarize(&self, candidate: ProductCandidate) -> ProductResult {
        if candidate.link.is_empty() {
            return ProductResult::from_candidate(
                candidate,
                vec![NO_CONTENT_SENTINEL.to_string()],
            );
        }

        match self.summarize_page(&candidate.link).await {
            Ok(summary) if !summary.is_empty() => {
                ProductResult::from_candidate(candidate, summary)
            }
            Ok(_) => ProductResult::from_candidate(candidate, vec![FAILED_SENTINEL.to_string()]),
            Err(e) => {
                tracing::warn!("Failed to summarize {}: {}", candidate.link, e);
                ProductResult::from_candidate(candidate, vec![FAILED_SENTINEL.to_string()])
            }
        }
    }

    /// Fetches a product page and summarizes its paragraph text
    async fn summarize_page(&self, link: &str) -> Result<Vec<String>, SummarizeError> {
        let html = fetch_text(&self.client, link).await?;
        let text = extract_paragraph_text(&html);
        let truncated = truncate_chars(&text, MAX_CONTENT_CHARS);

        tracing::debug!(
            "Summarizing {} ({} of {} chars)",
            link,
            truncated.chars().count(),
            text.chars().count()
        );

        self.summary_client.summarize_text(truncated).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn candidate(link: &str) -> ProductCandidate {
        ProductCandidate {
            link: link.to_string(),
            image: "https://cdn.e.com/p.jpg".to_string(),
            title: "Widget".to_string(),
        }
    }

    fn summarizer_for(server: &MockServer) -> Summarizer {
        Summarizer::new(
            Client::new(),
            SummarizerConfig {
                endpoint_url: format!("{}/summarize", server.uri()),
                api_token: "test-token".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_empty_link_short_circuits() {
        let server = MockServer::start().await;
        let result = summarizer_for(&server).summarize(candidate("")).await;
        assert_eq!(result.summary, vec![NO_CONTENT_SENTINEL.to_string()]);
    }

    #[tokio::test]
    async fn test_successful_summary() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/widget"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "<html><body><p>A widget for widgeting.</p></body></html>",
            ))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"summary_text": "Does widgeting\nBuilt to last"}
            ])))
            .mount(&server)
            .await;

        let link = format!("{}/products/widget", server.uri());
        let result = summarizer_for(&server).summarize(candidate(&link)).await;

        assert_eq!(result.link, link);
        assert_eq!(result.title, "Widget");
        assert_eq!(
            result.summary,
            vec!["Does widgeting".to_string(), "Built to last.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_page_fetch_failure_becomes_sentinel() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/widget"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let link = format!("{}/products/widget", server.uri());
        let result = summarizer_for(&server).summarize(candidate(&link)).await;
        assert_eq!(result.summary, vec![FAILED_SENTINEL.to_string()]);
    }

    #[tokio::test]
    async fn test_service_failure_becomes_sentinel() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/widget"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><body><p>Text.</p></body></html>"),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let link = format!("{}/products/widget", server.uri());
        let result = summarizer_for(&server).summarize(candidate(&link)).await;
        assert_eq!(result.summary, vec![FAILED_SENTINEL.to_string()]);
    }
}
