//! Pipeline module for catalog discovery and orchestration
//!
//! This module contains the request-scoped control flow:
//! - HTTP client construction and text fetching
//! - Sequential discovery staging (locate, parse, resolve, extract)
//! - Concurrent summarization fan-out with per-item failure isolation

mod coordinator;
mod fetcher;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_text};

use crate::config::Config;
use crate::summarize::ProductResult;
use crate::VitrineError;

/// Builds the product catalog for a domain
///
/// This is the main entry point for one catalog request. It will:
/// 1. Locate the sitemap declared in the domain's robots.txt
/// 2. Parse it and resolve the product sub-sitemap
/// 3. Extract the bounded product candidate window
/// 4. Summarize every candidate concurrently
///
/// Every request is computed fresh; nothing persists between calls.
///
/// # Arguments
///
/// * `config` - The pipeline configuration
/// * `domain` - The domain to build a catalog for
///
/// # Returns
///
/// * `Ok(Vec<ProductResult>)` - One result per retained candidate, in
///   extraction order (possibly empty)
/// * `Err(VitrineError)` - A discovery stage failed
pub async fn build_catalog(config: Config, domain: &str) -> Result<Vec<ProductResult>, VitrineError> {
    let coordinator = Coordinator::new(config)?;
    coordinator.build_catalog(domain).await
}
