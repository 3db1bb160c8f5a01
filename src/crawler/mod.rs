// src/crawler/mod.rs
// =============================================================================
// This module contains the crawl pipeline.
//
// Submodules:
// - engine: The traversal itself (visited set, scoping, depth-first order)
// - fetch: The fetch capability (trait + reqwest implementation)
// - parse: The parse capability (trait + scraper implementation)
// - links: href resolution and the scope-prefix test
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod engine;
mod fetch;
mod links;
mod parse;

// Re-export public items from submodules
// This lets users write `crawler::Crawler` instead of
// `crawler::engine::Crawler`
pub use engine::{CrawlFailure, Crawler};
pub use fetch::{Fetch, FetchError, HttpFetcher};
pub use parse::{HtmlParser, ParsePage, ParsedPage};
