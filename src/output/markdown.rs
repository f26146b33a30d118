//! Markdown catalog export
//!
//! Generates a human-readable markdown rendering of a product catalog, one
//! section per product with its bullet summary.

use crate::summarize::ProductResult;
use crate::VitrineError;
use chrono::Utc;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown catalog to the given path
///
/// # Arguments
///
/// * `domain` - The domain the catalog was built for
/// * `results` - The product results to render
/// * `output_path` - Path where the markdown file should be written
pub fn write_markdown(
    domain: &str,
    results: &[ProductResult],
    output_path: &Path,
) -> Result<(), VitrineError> {
    let markdown = format_markdown(domain, results);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a product catalog as markdown
pub fn format_markdown(domain: &str, results: &[ProductResult]) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Product Catalog: {}\n\n", domain));
    md.push_str(&format!(
        "- **Generated**: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!("- **Products**: {}\n\n", results.len()));

    if results.is_empty() {
        md.push_str("No products found.\n");
        return md;
    }

    for result in results {
        md.push_str(&format!("## {}\n\n", result.title));
        md.push_str(&format!("- **Link**: {}\n", result.link));
        md.push_str(&format!("- **Image**: {}\n\n", result.image));

        for bullet in &result.summary {
            md.push_str(&format!("> {}\n", bullet));
        }
        md.push('\n');
    }

    md
}
