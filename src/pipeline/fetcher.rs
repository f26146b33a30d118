//! HTTP fetcher implementation
//!
//! This module handles all outbound HTTP GET requests for the pipeline:
//! - Building HTTP clients with proper user agent strings
//! - Fetching robots.txt, sitemap XML, and product page bodies as text
//! - Classifying transport failures into a uniform error kind
//!
//! There is no retry logic at this layer. A failed fetch is final for that
//! call; callers decide whether the failure is fatal or contained.

use crate::config::UserAgentConfig;
use crate::FetchError;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use vitrine::config::UserAgentConfig;
/// use vitrine::pipeline::build_http_client;
///
/// let config = UserAgentConfig {
///     scraper_name: "Vitrine".to_string(),
///     scraper_version: "0.1".to_string(),
///     contact_url: "https://example.com/about".to_string(),
///     contact_email: "admin@example.com".to_string(),
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    // Format: ScraperName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.scraper_name, config.scraper_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body as text
///
/// Sitemap locations and product page URLs come from third-party documents,
/// so the body is taken as-is; content-type sniffing is left to the parsers.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(FetchError)` - Transport failure or non-2xx status
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> UserAgentConfig {
        UserAgentConfig {
            scraper_name: "TestScraper".to_string(),
            scraper_version: "1.0".to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }

    #[test]
    fn test_build_http_client() {
        let config = create_test_config();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_text_success() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .mount(&server)
            .await;

        let client = build_http_client(&create_test_config()).unwrap();
        let body = fetch_text(&client, &format!("{}/page", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "hello");
    }

    #[tokio::test]
    async fn test_fetch_text_non_2xx_is_error() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client(&create_test_config()).unwrap();
        let url = format!("{}/missing", server.uri());
        let err = fetch_text(&client, &url).await.unwrap_err();

        match err {
            FetchError::Status { url: u, status } => {
                assert_eq!(u, url);
                assert_eq!(status, 404);
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_text_connection_refused() {
        let client = build_http_client(&create_test_config()).unwrap();
        // Port 1 is essentially never listening
        let err = fetch_text(&client, "http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
        assert_eq!(err.url(), "http://127.0.0.1:1/");
    }
}
