//! Vitrine: a sitemap-driven product catalog summarizer
//!
//! This crate discovers a website's product catalog from its sitemap metadata,
//! fetches each product's page, and produces a short bullet-style summary per
//! product by delegating to a remote text-summarization service.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod sitemap;
pub mod summarize;

use thiserror::Error;

/// Main error type for vitrine operations
#[derive(Debug, Error)]
pub enum VitrineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("No sitemap declared in robots.txt for {domain}")]
    NoSitemapDeclared { domain: String },

    #[error("Malformed sitemap: {0}")]
    MalformedSitemap(String),

    #[error("Unrecognized sitemap shape: {0}")]
    UnrecognizedSitemapShape(String),

    #[error("No product sitemap found in {sitemap_url}")]
    ProductSitemapNotFound { sitemap_url: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Transport-level errors from the resource fetcher
///
/// No retries happen at this layer; retry policy belongs to callers.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    /// The URL the failed request was issued against
    pub fn url(&self) -> &str {
        match self {
            FetchError::Request { url, .. } => url,
            FetchError::Status { url, .. } => url,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for vitrine operations
pub type Result<T> = std::result::Result<T, VitrineError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use pipeline::build_catalog;
pub use sitemap::{ProductCandidate, SitemapDocument};
pub use summarize::ProductResult;
