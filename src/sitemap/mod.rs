//! Sitemap discovery and traversal module
//!
//! This module covers the discovery half of the pipeline:
//! - Locating a domain's sitemap via its robots.txt declaration
//! - Parsing sitemap / sitemap-index XML into a structured tree
//! - Resolving the product-specific sub-sitemap
//! - Extracting a bounded window of product candidates

mod extractor;
mod locator;
mod parser;
mod resolver;

pub use extractor::{extract_candidates, ProductCandidate};
pub use locator::{domain_host, domain_origin, locate_sitemap};
pub use parser::{parse_sitemap, ImageRef, SitemapDocument, SitemapRef, UrlEntry};
pub use resolver::resolve_product_sitemap;
