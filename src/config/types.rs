use serde::Deserialize;

/// Main configuration structure for vitrine
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub summarizer: SummarizerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the scraper
    #[serde(rename = "scraper-name")]
    pub scraper_name: String,

    /// Version of the scraper
    #[serde(rename = "scraper-version")]
    pub scraper_version: String,

    /// URL with information about the scraper
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for scraper-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Remote summarization service configuration
///
/// Injected into the summarizer at construction; the pipeline never reads
/// service credentials from ambient process state.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerConfig {
    /// Endpoint URL of the text-summarization service
    #[serde(rename = "endpoint-url")]
    pub endpoint_url: String,

    /// Bearer token for the summarization service
    #[serde(rename = "api-token")]
    pub api_token: String,
}

/// Catalog extraction configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Number of leading urlset entries to skip before the product window
    #[serde(rename = "skip-leading", default = "default_skip_leading")]
    pub skip_leading: usize,

    /// Maximum number of products summarized per request
    #[serde(rename = "batch-size", default = "default_batch_size")]
    pub batch_size: usize,

    /// Substring that marks a sitemap location as product-related
    #[serde(rename = "product-marker", default = "default_product_marker")]
    pub product_marker: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            skip_leading: default_skip_leading(),
            batch_size: default_batch_size(),
            product_marker: default_product_marker(),
        }
    }
}

fn default_skip_leading() -> usize {
    1
}

fn default_batch_size() -> usize {
    5
}

fn default_product_marker() -> String {
    "products".to_string()
}
