//! Product page content extraction
//!
//! Static HTML text extraction only: visible paragraph text is collected in
//! document order and bounded before being sent to the summarization
//! service. No rendering, no script execution.

use scraper::{Html, Selector};

/// Maximum number of characters of page content sent for summarization
pub const MAX_CONTENT_CHARS: usize = 2000;

/// Extracts the text content of every paragraph within the body
///
/// Paragraph texts are concatenated in document order, joined by single
/// spaces. Non-paragraph content (headings, list items, scripts) is ignored.
///
/// # Arguments
///
/// * `html` - The raw product page HTML
///
/// # Returns
///
/// The joined paragraph text, possibly empty
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);

    // Selector literals are known-valid
    let selector = match Selector::parse("body p") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Truncates text to at most `max_chars` characters
///
/// Character truncation, not word-boundary-aware: the cut may land mid-word,
/// but never inside a UTF-8 sequence.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_paragraph() {
        let html = "<html><body><p>A fine widget.</p></body></html>";
        assert_eq!(extract_paragraph_text(html), "A fine widget.");
    }

    #[test]
    fn test_extract_joins_paragraphs_with_spaces() {
        let html = "<html><body><p>First.</p><div><p>Second.</p></div><p>Third.</p></body></html>";
        assert_eq!(extract_paragraph_text(html), "First. Second. Third.");
    }

    #[test]
    fn test_extract_ignores_non_paragraph_text() {
        let html = "<html><body><h1>Title</h1><p>Body text.</p><li>item</li></body></html>";
        assert_eq!(extract_paragraph_text(html), "Body text.");
    }

    #[test]
    fn test_extract_nested_inline_markup() {
        let html = "<html><body><p>Made of <strong>steel</strong> and wood.</p></body></html>";
        assert_eq!(extract_paragraph_text(html), "Made of steel and wood.");
    }

    #[test]
    fn test_extract_no_paragraphs() {
        let html = "<html><body><div>nothing here</div></body></html>";
        assert_eq!(extract_paragraph_text(html), "");
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_chars("short", 2000), "short");
    }

    #[test]
    fn test_truncate_cuts_mid_word() {
        assert_eq!(truncate_chars("hello world", 7), "hello w");
    }

    #[test]
    fn test_truncate_exact_boundary() {
        assert_eq!(truncate_chars("abcde", 5), "abcde");
        assert_eq!(truncate_chars("abcde", 4), "abcd");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        // Multi-byte characters count as one each
        let text = "héllo wörld";
        assert_eq!(truncate_chars(text, 5), "héllo");
    }
}
