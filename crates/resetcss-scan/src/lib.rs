//! HTML tag scanner.
//!
//! Parses an HTML document and collects the set of distinct element names it
//! uses. Parsing goes through `scraper` (html5ever underneath), which recovers
//! from malformed markup, so scanning never fails; file-level errors belong to
//! the caller.
//!
//! # Example
//!
//! ```
//! let tags = resetcss_scan::scan("<p>hi</p>");
//! assert!(tags.contains("p"));
//! ```

pub mod tagset;

pub use tagset::TagSet;

use scraper::Html;

/// Scan an HTML document for the distinct element names it contains.
///
/// Tag names are lower-cased and deduplicated. Text, comments, and the
/// doctype contribute nothing.
pub fn scan(html: &str) -> TagSet {
    let document = Html::parse_document(html);

    let mut tags = TagSet::new();
    for node in document.tree.nodes() {
        if let Some(element) = node.value().as_element() {
            tags.insert(element.name());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_empty() {
        // html5ever wraps every document in html/head/body
        let tags = scan("");
        assert!(tags.contains("html"));
        assert!(tags.contains("head"));
        assert!(tags.contains("body"));
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn test_scan_dedupes() {
        let tags = scan("<div><p>a</p><p>b</p><p>c</p></div>");
        assert!(tags.contains("div"));
        assert!(tags.contains("p"));
        // html, head, body, div, p
        assert_eq!(tags.len(), 5);
    }

    #[test]
    fn test_scan_lowercases() {
        let tags = scan("<DIV><SPAN>x</SPAN></DIV>");
        assert!(tags.contains("div"));
        assert!(tags.contains("span"));
        assert!(!tags.contains("DIV"));
    }

    #[test]
    fn test_scan_ignores_text_and_comments() {
        let tags = scan("<body><!-- note --><p>text only</p></body>");
        assert_eq!(tags.sorted(), vec!["body", "head", "html", "p"]);
    }

    #[test]
    fn test_scan_malformed_recovers() {
        let tags = scan("<ul><li>one<li>two</ul");
        assert!(tags.contains("ul"));
        assert!(tags.contains("li"));
    }
}
