//! Sitemap discovery from robots.txt
//!
//! A domain's robots.txt is the only discovery source: the first `Sitemap:`
//! directive wins, and multiple declarations are not merged.

use crate::pipeline::fetch_text;
use crate::VitrineError;
use reqwest::Client;

/// Locates the sitemap declared in a domain's robots.txt
///
/// Builds `{origin}/robots.txt` for the domain, fetches it, and scans
/// line-by-line (case-insensitively) for a `Sitemap:` directive.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `domain` - The domain to probe; a bare host gets the https scheme
///
/// # Returns
///
/// * `Ok(String)` - URL of the first declared sitemap
/// * `Err(VitrineError::NoSitemapDeclared)` - No directive present, or the
///   robots.txt fetch itself failed
pub async fn locate_sitemap(client: &Client, domain: &str) -> Result<String, VitrineError> {
    let host = domain_host(domain);
    let robots_url = format!("{}/robots.txt", domain_origin(domain));

    tracing::debug!("Fetching robots.txt from {}", robots_url);

    let body = match fetch_text(client, &robots_url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("robots.txt fetch failed for {}: {}", host, e);
            return Err(VitrineError::NoSitemapDeclared { domain: host });
        }
    };

    match extract_sitemap_directive(&body) {
        Some(url) => {
            tracing::info!("Found sitemap for {}: {}", host, url);
            Ok(url)
        }
        None => Err(VitrineError::NoSitemapDeclared { domain: host }),
    }
}

/// Extracts the first `Sitemap:` directive value from robots.txt content
///
/// The directive name is matched case-insensitively; the value is taken
/// verbatim after the colon, whitespace-trimmed.
fn extract_sitemap_directive(robots: &str) -> Option<String> {
    for line in robots.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = trimmed.split_once(':') {
            if key.trim().eq_ignore_ascii_case("sitemap") {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    None
}

/// Builds the origin URL for a user-supplied domain argument
///
/// A bare host gets the https scheme. An explicit `http://`/`https://`
/// prefix is preserved, which also lets local test harnesses stand in for a
/// real domain. Any path suffix is dropped.
pub fn domain_origin(domain: &str) -> String {
    let (scheme, rest) = split_scheme(domain);
    format!("{}://{}", scheme, rest.split('/').next().unwrap_or(rest))
}

/// Extracts the bare host from a user-supplied domain argument
pub fn domain_host(domain: &str) -> String {
    let (_, rest) = split_scheme(domain);
    rest.split('/').next().unwrap_or(rest).to_string()
}

fn split_scheme(domain: &str) -> (&str, &str) {
    let trimmed = domain.trim();
    if let Some(rest) = trimmed.strip_prefix("https://") {
        ("https", rest)
    } else if let Some(rest) = trimmed.strip_prefix("http://") {
        ("http", rest)
    } else {
        ("https", trimmed)
    }
}
