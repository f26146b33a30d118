//! JSON catalog rendering
//!
//! The JSON shape is the request contract: a bare array of product results,
//! each with `link`, `image`, `title`, and `summary` fields.

use crate::summarize::ProductResult;
use crate::VitrineError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Renders a catalog as a pretty-printed JSON array
///
/// # Arguments
///
/// * `results` - The product results to render
///
/// # Returns
///
/// * `Ok(String)` - The JSON text
/// * `Err(VitrineError)` - Serialization failed
pub fn render_json(results: &[ProductResult]) -> Result<String, VitrineError> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Writes a catalog as JSON to the given path
pub fn write_json(results: &[ProductResult], output_path: &Path) -> Result<(), VitrineError> {
    let json = render_json(results)?;

    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(())
}
