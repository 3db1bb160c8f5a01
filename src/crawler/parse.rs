// src/crawler/parse.rs
// =============================================================================
// This module defines the parse capability: turning a raw HTML body into
// (a) the page's visible text and (b) the hrefs of its anchors.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// html5ever follows the browser parsing algorithm, which means malformed
// or truncated markup never makes parsing fail - it just produces the same
// best-effort tree a browser would. That is exactly the tolerance the
// crawler needs: a broken page should still be indexed, not abort a branch.
//
// Rust concepts:
// - Traits: The engine depends on ParsePage, not on scraper directly
// - Iterators: For walking text nodes and anchor elements
// =============================================================================

use scraper::{Html, Selector};

/// What the parser extracts from one document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPage {
    /// The visible text of the page, whitespace-joined
    pub text: String,
    /// Every anchor href, in document order, exactly as written in the HTML
    pub links: Vec<String>,
}

// The parse capability consumed by the crawl engine
//
// Note this is infallible: malformed HTML yields a best-effort ParsedPage,
// never an error. Only the fetch side of the pipeline can fail.
pub trait ParsePage {
    fn parse(&self, body: &str) -> ParsedPage;
}

// The real parser, backed by scraper
//
// Stateless - parsing one page doesn't affect the next.
pub struct HtmlParser;

impl ParsePage for HtmlParser {
    fn parse(&self, body: &str) -> ParsedPage {
        let document = Html::parse_document(body);

        // Create a CSS selector to find all <a> tags with an href
        // Selector::parse returns Result, so we use .unwrap() which panics on error
        // This is OK here because our selector is a constant and known to be valid
        let selector = Selector::parse("a[href]").unwrap();

        // Collect hrefs in document order, as-is
        // Resolving them against the page URL is the engine's job, not ours -
        // the parser never sees the page's URL
        let links = document
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .map(|href| href.to_string())
            .collect();

        // Collect every text node in the document and join with spaces
        // .text() walks the tree depth-first, so reading order is preserved
        let text = document
            .root_element()
            .text()
            .map(|chunk| chunk.trim())
            .filter(|chunk| !chunk.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        ParsedPage { text, links }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_text_and_links() {
        let html = r#"
            <html><body>
                <h1>Welcome!</h1>
                <a href="/about">About Us</a>
                <a href="https://www.external.com">External Link</a>
            </body></html>
        "#;
        let page = HtmlParser.parse(html);

        assert!(page.text.contains("Welcome!"));
        assert!(page.text.contains("About Us"));
        assert_eq!(page.links, vec!["/about", "https://www.external.com"]);
    }

    #[test]
    fn test_links_in_document_order() {
        let html = r#"
            <a href="/first">1</a>
            <a href="/second">2</a>
            <a href="/third">3</a>
        "#;
        let page = HtmlParser.parse(html);
        assert_eq!(page.links, vec!["/first", "/second", "/third"]);
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<a name="top">anchor</a> <a href="/real">link</a>"#;
        let page = HtmlParser.parse(html);
        assert_eq!(page.links, vec!["/real"]);
    }

    #[test]
    fn test_malformed_html_does_not_fail() {
        // Unclosed tags, stray brackets - html5ever shrugs and builds a tree
        let html = "<html><body><h1>Broken <a href='/still-found'>page";
        let page = HtmlParser.parse(html);
        assert_eq!(page.links, vec!["/still-found"]);
        assert!(page.text.contains("Broken"));
    }

    #[test]
    fn test_empty_document() {
        let page = HtmlParser.parse("");
        assert_eq!(page.text, "");
        assert!(page.links.is_empty());
    }
}
