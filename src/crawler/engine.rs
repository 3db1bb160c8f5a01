// src/crawler/engine.rs
// =============================================================================
// This module implements the crawl itself: depth-first traversal of the
// link graph, confined to a URL prefix, feeding the text index.
//
// How it works:
// 1. Start with the seed URL on a stack
// 2. Pop a URL; skip it if already visited, otherwise mark it visited
// 3. Fetch the page; on failure, report and move on (never retry)
// 4. Parse the body into visible text + hrefs; index the text
// 5. Resolve each href, keep the in-scope ones, push them in reverse
//    order so the first link on the page is crawled first
// 6. Repeat until the stack is empty
//
// Two invariants carry the whole design:
// - A URL is marked visited BEFORE its fetch is attempted. A URL that
//   fails to fetch is never retried, and a URL discovered twice is never
//   fetched twice.
// - The only termination condition is visited-set exhaustion. Cycles in
//   the link graph are harmless because step 2 drops revisits.
//
// We use an explicit stack instead of recursion so a deeply-linked site
// can't overflow the call stack. Pushing each page's links in reverse
// keeps the visit order identical to what recursion would do: the full
// subtree behind the first link is crawled before the second link.
//
// Rust concepts:
// - Generics: Crawler<F, P> works with any fetcher/parser implementation
// - HashSet: To track visited URLs (O(1) lookup)
// - Vec as a stack: push/pop from the back for depth-first order
// =============================================================================

use std::collections::HashSet;

use crate::crawler::fetch::{Fetch, FetchError};
use crate::crawler::links::{in_scope, resolve_href};
use crate::crawler::parse::ParsePage;
use crate::index::Index;

/// A page that could not be fetched during a crawl.
///
/// The URL stays in the visited set (no retry), contributes no index
/// entry, and the rest of the crawl carries on. Kept around so callers
/// can see what was skipped after the crawl finishes.
#[derive(Debug)]
pub struct CrawlFailure {
    pub url: String,
    pub error: FetchError,
}

impl std::fmt::Display for CrawlFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error crawling {}: {}", self.url, self.error)
    }
}

// The crawler: visited set + index + the two injected capabilities
//
// All traversal state lives here, owned by the value - nothing global.
// State is cumulative across crawl() calls on one instance: crawling two
// seeds into the same Crawler builds one combined index, and a URL visited
// by the first crawl is not refetched by the second. Start from a fresh
// Crawler when you want a fresh index.
pub struct Crawler<F, P> {
    fetcher: F,
    parser: P,
    visited: HashSet<String>,
    index: Index,
    failures: Vec<CrawlFailure>,
}

impl<F: Fetch, P: ParsePage> Crawler<F, P> {
    pub fn new(fetcher: F, parser: P) -> Self {
        Crawler {
            fetcher,
            parser,
            visited: HashSet::new(),
            index: Index::new(),
            failures: Vec::new(),
        }
    }

    // Crawls everything reachable from `url` within the scope prefix
    //
    // Parameters:
    //   url: absolute URL to start from, used exactly as given (no
    //        normalization - "https://a.com" and "https://a.com/" are
    //        two different pages as far as the visited set is concerned)
    //   base_url: scope prefix; None means "use the seed URL itself"
    //
    // Fetch failures are reported and swallowed, so this never errors:
    // a crawl always runs to completion, even if every single fetch fails.
    pub async fn crawl(&mut self, url: &str, base_url: Option<&str>) {
        let scope = base_url.unwrap_or(url).to_string();

        // The worklist. Depth-first: push/pop from the back.
        let mut stack = vec![url.to_string()];

        while let Some(current) = stack.pop() {
            // Skip if already visited
            if self.visited.contains(&current) {
                continue;
            }

            // Mark as visited before fetching, so a failed fetch is not
            // retried and duplicates already on the stack get dropped
            self.visited.insert(current.clone());

            let body = match self.fetcher.fetch(&current).await {
                Ok(body) => body,
                Err(error) => {
                    // This branch contributes nothing; the rest of the
                    // crawl is unaffected
                    self.report_failure(current, error);
                    continue;
                }
            };

            let page = self.parser.parse(&body);
            self.index.insert(current.clone(), page.text);

            // Resolve hrefs in document order, keep the in-scope ones
            let mut found = Vec::new();
            for href in &page.links {
                let resolved = match resolve_href(&current, href) {
                    Some(resolved) => resolved,
                    None => continue,
                };
                if in_scope(&resolved, &scope) && !self.visited.contains(&resolved) {
                    found.push(resolved);
                }
            }

            // Reverse so the first link on the page ends up on top of the
            // stack and is therefore crawled (with its whole subtree) first
            for link in found.into_iter().rev() {
                stack.push(link);
            }
        }
    }

    fn report_failure(&mut self, url: String, error: FetchError) {
        let failure = CrawlFailure { url, error };
        // Diagnostics go to stderr so they don't mix with search output
        eprintln!("{}", failure);
        self.failures.push(failure);
    }

    /// Case-insensitive substring search over every indexed page.
    /// Results come back in the order the pages were indexed.
    pub fn search(&self, keyword: &str) -> Vec<String> {
        self.index.search(keyword)
    }

    /// The set of URLs this crawler has attempted (successfully or not).
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    /// The text index built so far.
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Every fetch failure encountered so far, in the order they happened.
    pub fn failures(&self) -> &[CrawlFailure] {
        &self.failures
    }
}
