//! Product candidate extraction
//!
//! Selects a bounded window of entries from the resolved product urlset and
//! maps each to a candidate record, discarding incomplete records before any
//! summarization cost is paid.

use crate::config::CatalogConfig;
use crate::sitemap::parser::UrlEntry;
use serde::Serialize;

/// A product entry extracted from a urlset, before summarization
///
/// All three fields are non-empty; entries that cannot satisfy that are
/// dropped during extraction, never surfaced with a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCandidate {
    /// URL of the product page
    pub link: String,

    /// URL of the product image
    pub image: String,

    /// Title of the product
    pub title: String,
}

/// Extracts product candidates from the url entries of a product sitemap
///
/// Takes a contiguous window of entries in document order (skip the first
/// `skip_leading`, take the next `batch_size`), then maps location to link
/// and the image block to image/title (empty strings when absent), and
/// filters out any candidate with an empty field.
///
/// An empty result is "zero products", not an error.
pub fn extract_candidates(entries: &[UrlEntry], config: &CatalogConfig) -> Vec<ProductCandidate> {
    entries
        .iter()
        .skip(config.skip_leading)
        .take(config.batch_size)
        .map(|entry| {
            let (image, title) = match &entry.image {
                Some(image) => (image.location.clone(), image.title.clone()),
                None => (String::new(), String::new()),
            };
            ProductCandidate {
                link: entry.location.clone(),
                image,
                title,
            }
        })
        .filter(|candidate| {
            !candidate.link.is_empty() && !candidate.image.is_empty() && !candidate.title.is_empty()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::parser::ImageRef;

    fn entry(n: usize) -> UrlEntry {
        UrlEntry {
            location: format!("https://e.com/products/p{}", n),
            image: Some(ImageRef {
                location: format!("https://cdn.e.com/p{}.jpg", n),
                title: format!("Product {}", n),
            }),
        }
    }

    #[test]
    fn test_window_takes_second_through_sixth() {
        let entries: Vec<UrlEntry> = (0..8).map(entry).collect();
        let candidates = extract_candidates(&entries, &CatalogConfig::default());

        assert_eq!(candidates.len(), 5);
        assert_eq!(candidates[0].link, "https://e.com/products/p1");
        assert_eq!(candidates[4].link, "https://e.com/products/p5");
        // Never position 0 or positions past the window
        assert!(candidates.iter().all(|c| c.link != "https://e.com/products/p0"));
        assert!(candidates.iter().all(|c| c.link != "https://e.com/products/p6"));
    }

    #[test]
    fn test_window_with_fewer_entries_than_batch() {
        let entries: Vec<UrlEntry> = (0..3).map(entry).collect();
        let candidates = extract_candidates(&entries, &CatalogConfig::default());

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].link, "https://e.com/products/p1");
        assert_eq!(candidates[1].link, "https://e.com/products/p2");
    }

    #[test]
    fn test_configurable_window() {
        let entries: Vec<UrlEntry> = (0..10).map(entry).collect();
        let config = CatalogConfig {
            skip_leading: 0,
            batch_size: 2,
            product_marker: "products".to_string(),
        };
        let candidates = extract_candidates(&entries, &config);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].link, "https://e.com/products/p0");
    }

    #[test]
    fn test_incomplete_candidates_dropped() {
        let mut entries: Vec<UrlEntry> = (0..7).map(entry).collect();
        // Entry 2: empty title; entry 3: no image block at all
        entries[2].image = Some(ImageRef {
            location: "https://cdn.e.com/p2.jpg".to_string(),
            title: String::new(),
        });
        entries[3].image = None;

        let candidates = extract_candidates(&entries, &CatalogConfig::default());

        let links: Vec<&str> = candidates.iter().map(|c| c.link.as_str()).collect();
        assert_eq!(
            links,
            vec![
                "https://e.com/products/p1",
                "https://e.com/products/p4",
                "https://e.com/products/p5",
            ]
        );
    }

    #[test]
    fn test_complete_candidate_mapped_verbatim() {
        let entries = vec![entry(0), entry(1)];
        let candidates = extract_candidates(&entries, &CatalogConfig::default());

        assert_eq!(
            candidates[0],
            ProductCandidate {
                link: "https://e.com/products/p1".to_string(),
                image: "https://cdn.e.com/p1.jpg".to_string(),
                title: "Product 1".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_entries_yield_empty_result() {
        let candidates = extract_candidates(&[], &CatalogConfig::default());
        assert!(candidates.is_empty());
    }
}
