// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Crawl the site, starting from the seed URL
// 3. Search the resulting index for the keyword
// 4. Print the matching URLs
// 5. Exit with proper code (0 = matches found, 1 = no matches, 2 = error)
//
// Rust concepts used:
// - async/await: The fetch capability does network I/O
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod crawler;   // src/crawler/ - traversal engine + fetch/parse capabilities
mod index;     // src/index/ - URL -> text store and keyword search
mod output;    // src/output.rs - result presentation

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use crawler::{Crawler, HtmlParser, HttpFetcher};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = keyword found on at least one page
//   Ok(1) = crawl finished but no page matched
//   Err = unexpected error (bad HTTP client setup, etc.)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    println!("🔍 Crawling site: {}", cli.url);
    if let Some(base) = &cli.base_url {
        println!("📌 Scope prefix: {}", base);
    }

    // Wire the real capabilities into the engine
    let fetcher = HttpFetcher::new()?;
    let mut crawler = Crawler::new(fetcher, HtmlParser);

    // Crawl everything reachable from the seed within the scope prefix
    // Fetch failures are reported to stderr as they happen; the crawl
    // itself never errors out
    crawler.crawl(&cli.url, cli.base_url.as_deref()).await;

    println!(
        "📄 Visited {} URL(s), indexed {} page(s), {} fetch failure(s)",
        crawler.visited().len(),
        crawler.index().len(),
        crawler.failures().len()
    );
    println!();

    // Search the index and show what matched
    let results = crawler.search(&cli.keyword);

    if cli.json {
        // Serialize the report to JSON and print
        let report = output::SearchReport {
            keyword: &cli.keyword,
            results: &results,
        };
        let json_output = serde_json::to_string_pretty(&report)?;
        println!("{}", json_output);
    } else {
        output::print_results(&results);
    }

    if results.is_empty() {
        Ok(1) // Exit code 1 = no page matched the keyword
    } else {
        Ok(0) // Exit code 0 = matches found
    }
}
