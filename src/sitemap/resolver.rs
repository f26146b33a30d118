//! Product sitemap resolution
//!
//! Walks a parsed sitemap to find the sub-sitemap (or URL set) whose
//! location marks it as product-related.

use crate::sitemap::parser::SitemapDocument;
use crate::VitrineError;

/// Resolves the product sitemap location from a parsed document
///
/// For a sitemap index, scans entries in document order for the first whose
/// location contains the marker substring. For a urlset, applies the same
/// scan directly to its url entries: the degenerate case where the catalog
/// fits in one file and the top-level document is itself the product
/// sitemap. First match wins; later matches are ignored.
///
/// # Arguments
///
/// * `document` - The parsed sitemap
/// * `marker` - Substring marking a location as product-related
/// * `sitemap_url` - Where the document came from, for error reporting
///
/// # Returns
///
/// * `Ok(&str)` - Location of the product sitemap
/// * `Err(VitrineError::ProductSitemapNotFound)` - No entry matched
pub fn resolve_product_sitemap<'a>(
    document: &'a SitemapDocument,
    marker: &str,
    sitemap_url: &str,
) -> Result<&'a str, VitrineError> {
    let found = match document {
        SitemapDocument::Index(refs) => refs
            .iter()
            .map(|r| r.location.as_str())
            .find(|location| location.contains(marker)),
        SitemapDocument::UrlSet(urls) => urls
            .iter()
            .map(|u| u.location.as_str())
            .find(|location| location.contains(marker)),
    };

    found.ok_or_else(|| VitrineError::ProductSitemapNotFound {
        sitemap_url: sitemap_url.to_string(),
    })
}
