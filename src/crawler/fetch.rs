// src/crawler/fetch.rs
// =============================================================================
// This module defines the fetch capability: how the crawler gets the raw
// body of a page.
//
// The crawl engine never talks to reqwest directly. It goes through the
// `Fetch` trait, which has two big benefits:
// - Tests can plug in a fake fetcher that serves canned HTML (no network)
// - All transport failures come back as one structured error type, so the
//   engine can branch on a Result instead of catching exceptions
//
// Rust concepts:
// - Traits: Interfaces that types can implement
// - async fn in traits: Async methods on a trait (static dispatch)
// - thiserror: Derive macro that writes Display/Error impls for us
// =============================================================================

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

/// What can go wrong when fetching a page.
///
/// Exactly the failures the engine cares about: either the transport broke
/// (timeout, DNS, connection refused, ...) or the server answered with a
/// non-success status. Both end the branch; neither ends the crawl.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request itself failed (timeout, DNS error, connection refused...)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server responded, but not with a 2xx status
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),
}

// The fetch capability consumed by the crawl engine
//
// Given an absolute URL, return the raw response body on success or a
// FetchError on any transport-level failure. The engine treats the two
// outcomes very differently (index + follow links vs. report + move on),
// which is why this returns Result instead of panicking or logging.
pub trait Fetch {
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<String, FetchError>>;
}

// The real fetcher, backed by a reqwest Client
//
// The Client is created once and reused for every request, which gives us
// connection pooling for free.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher with a 10 second timeout per request.
    ///
    /// Building the client can fail (e.g., TLS backend initialization), so
    /// this returns Result and lets main.rs decide what to do about it.
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        // A response came back, but 4xx/5xx pages are failures for us:
        // we don't want to index a 404 page's error text
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        Ok(body)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of just calling reqwest?
//    - The crawl engine's logic (visited set, scoping, indexing) has nothing
//      to do with HTTP specifically
//    - With a trait, tests hand the engine a fake fetcher and the whole
//      crawl runs offline and deterministically
//
// 2. What is that Future-returning trait method?
//    - It's the desugared form of `async fn fetch(...)` in a trait
//    - Spelling out the return type keeps the trait flexible for
//      implementors while the engine stays generic (static dispatch)
//
// 3. What does #[from] do in thiserror?
//    - It generates a From<reqwest::Error> impl for FetchError
//    - That's what lets us use the ? operator on reqwest calls above
// -----------------------------------------------------------------------------
