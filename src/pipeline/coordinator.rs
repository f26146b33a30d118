//! Catalog pipeline coordinator
//!
//! Runs the discovery stages (locate, parse, resolve, extract) in sequence,
//! then fans out over the summarizer concurrently. Discovery failures are
//! fatal to the whole request; summarization failures are contained per
//! item and never reach this level.

use crate::config::Config;
use crate::pipeline::{build_http_client, fetch_text};
use crate::sitemap::{
    extract_candidates, locate_sitemap, parse_sitemap, resolve_product_sitemap, SitemapDocument,
    UrlEntry,
};
use crate::summarize::{ProductResult, Summarizer};
use crate::VitrineError;
use futures::future::join_all;
use reqwest::Client;
use std::sync::Arc;

/// Main pipeline coordinator structure
pub struct Coordinator {
    config: Arc<Config>,
    client: Client,
    summarizer: Summarizer,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The pipeline configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(VitrineError)` - Failed to build the HTTP client
    pub fn new(config: Config) -> Result<Self, VitrineError> {
        let client = build_http_client(&config.user_agent)?;
        let summarizer = Summarizer::new(client.clone(), config.summarizer.clone());

        Ok(Self {
            config: Arc::new(config),
            client,
            summarizer,
        })
    }

    /// Builds the product catalog for a domain
    ///
    /// Discovery runs strictly sequentially: each stage's output is required
    /// input to the next. Summarization then runs concurrently over every
    /// retained candidate, a wait-for-all join that cannot be
    /// short-circuited by one item's failure, and the final order matches
    /// candidate order, not completion order.
    pub async fn build_catalog(&self, domain: &str) -> Result<Vec<ProductResult>, VitrineError> {
        // Stage 1: locate the declared sitemap
        let sitemap_url = locate_sitemap(&self.client, domain).await?;

        // Stage 2: fetch and classify it
        let xml = fetch_text(&self.client, &sitemap_url).await?;
        let document = parse_sitemap(&xml)?;

        // Stages 3-4: resolve the product urlset
        let entries = self.resolve_product_entries(document, &sitemap_url).await?;

        // Stage 5: extract the candidate window
        let candidates = extract_candidates(&entries, &self.config.catalog);
        tracing::info!(
            "Extracted {} product candidates from {} urlset entries",
            candidates.len(),
            entries.len()
        );

        if candidates.is_empty() {
            // Zero products is a valid catalog, not an error
            return Ok(Vec::new());
        }

        // Stage 6: summarize all candidates concurrently
        let results = join_all(
            candidates
                .into_iter()
                .map(|candidate| self.summarizer.summarize(candidate)),
        )
        .await;

        tracing::info!("Catalog complete: {} products for {}", results.len(), domain);
        Ok(results)
    }

    /// Resolves the url entries of the product sitemap
    ///
    /// For a sitemap index, the matching sub-sitemap is fetched and must
    /// itself parse as a urlset. A top-level urlset containing a product
    /// entry is the degenerate single-file catalog: it is itself the
    /// product sitemap and no second fetch happens.
    async fn resolve_product_entries(
        &self,
        document: SitemapDocument,
        sitemap_url: &str,
    ) -> Result<Vec<UrlEntry>, VitrineError> {
        let marker = &self.config.catalog.product_marker;
        let resolved = resolve_product_sitemap(&document, marker, sitemap_url)?.to_string();

        match document {
            // Degenerate single-file catalog: the top-level urlset is itself
            // the product sitemap, no second fetch
            SitemapDocument::UrlSet(entries) => Ok(entries),
            SitemapDocument::Index(_) => {
                tracing::info!("Product sitemap: {}", resolved);

                let xml = fetch_text(&self.client, &resolved).await?;
                match parse_sitemap(&xml)? {
                    SitemapDocument::UrlSet(entries) => Ok(entries),
                    SitemapDocument::Index(_) => Err(VitrineError::UnrecognizedSitemapShape(
                        format!("product sitemap {} is itself a sitemap index", resolved),
                    )),
                }
            }
        }
    }
}
