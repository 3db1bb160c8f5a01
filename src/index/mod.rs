// src/index/mod.rs
// =============================================================================
// This module is the text index the crawler fills in: a URL -> page-text
// mapping with a case-insensitive substring search over it.
//
// Why a Vec of entries instead of a HashMap?
// - Search results are contractually returned in the order pages were
//   indexed (crawl order), and a HashMap forgets insertion order
// - The index is written once per page and scanned per search; for that
//   access pattern a Vec is the simplest thing that preserves order
//
// Duplicate keys can't normally happen (the crawler visits each URL at
// most once), but if the same URL is ever inserted twice the later text
// wins and the entry keeps its original position.
//
// Rust concepts:
// - Vec<T>: An ordered, growable list
// - Iterators: filter/map chains for the search scan
// =============================================================================

#[derive(Debug, Clone)]
struct IndexEntry {
    url: String,
    text: String,
}

/// In-memory index of page text, keyed by URL, in insertion order.
#[derive(Debug, Default)]
pub struct Index {
    entries: Vec<IndexEntry>,
}

impl Index {
    pub fn new() -> Self {
        Index::default()
    }

    // Stores the text for a URL
    //
    // Inserting a URL that is already present overwrites its text in
    // place (last write wins) without changing its position.
    pub fn insert(&mut self, url: String, text: String) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.url == url) {
            entry.text = text;
        } else {
            self.entries.push(IndexEntry { url, text });
        }
    }

    // Returns the URLs of all pages whose text contains `keyword`,
    // case-insensitively, in the order the pages were indexed
    //
    // Never errors: an empty index just produces an empty Vec.
    //
    // Boundary worth knowing: every string contains "", so an empty
    // keyword matches every indexed page.
    pub fn search(&self, keyword: &str) -> Vec<String> {
        let needle = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.text.to_lowercase().contains(&needle))
            .map(|entry| entry.url.clone())
            .collect()
    }

    /// Looks up the indexed text for one URL.
    pub fn get(&self, url: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.url == url)
            .map(|entry| entry.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_with(entries: &[(&str, &str)]) -> Index {
        let mut index = Index::new();
        for (url, text) in entries {
            index.insert(url.to_string(), text.to_string());
        }
        index
    }

    #[test]
    fn test_search_match() {
        let index = index_with(&[
            ("page1", "This has the keyword in content"),
            ("page2", "No matching text here"),
        ]);
        assert_eq!(index.search("keyword"), vec!["page1"]);
    }

    #[test]
    fn test_search_case_insensitive() {
        let index = index_with(&[
            ("page1", "This has the KEYWORD in content"),
            ("page2", "Another KeyWord is here"),
            ("page3", "No matching text"),
        ]);
        let results = index.search("keyword");
        assert_eq!(results, vec!["page1", "page2"]);
    }

    #[test]
    fn test_search_empty_index() {
        let index = Index::new();
        assert!(index.search("anything").is_empty());
    }

    #[test]
    fn test_search_no_match() {
        let index = index_with(&[
            ("page1", "Content without match"),
            ("page2", "More unrelated content"),
        ]);
        assert!(index.search("keyword").is_empty());
    }

    #[test]
    fn test_results_in_insertion_order() {
        let index = index_with(&[
            ("https://example.com/c", "shared term"),
            ("https://example.com/a", "shared term"),
            ("https://example.com/b", "shared term"),
        ]);
        // Crawl order, not alphabetical
        assert_eq!(
            index.search("shared"),
            vec![
                "https://example.com/c",
                "https://example.com/a",
                "https://example.com/b",
            ]
        );
    }

    #[test]
    fn test_empty_keyword_matches_everything() {
        let index = index_with(&[("page1", "anything"), ("page2", "at all")]);
        assert_eq!(index.search("").len(), 2);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut index = index_with(&[("page1", "old text"), ("page2", "other")]);
        index.insert("page1".to_string(), "new text".to_string());

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("page1"), Some("new text"));
        assert_eq!(index.search("new"), vec!["page1"]);
        assert!(index.search("old").is_empty());
    }
}
