// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The tool does one job, so there are no subcommands: you give it a seed
// URL and a keyword, it crawls the site, and it prints the URLs of the
// pages whose text contains the keyword.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "site-indexer",
    version = "0.1.0",
    about = "Crawl a site, index the text of its pages, and search it by keyword",
    long_about = "site-indexer starts at a seed URL, follows links that stay within the \
                  seed's URL prefix, indexes the visible text of every page it reaches, \
                  and prints the URLs of pages whose text contains the given keyword."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g., https://example.com)
    ///
    /// This is a positional argument (required, no flag needed)
    pub url: String,

    /// Keyword to search the indexed pages for (case-insensitive substring)
    ///
    /// #[arg(long)] creates a --keyword flag from the field name
    #[arg(long)]
    pub keyword: String,

    /// URL prefix that defines the crawl scope (default: the seed URL)
    ///
    /// Only links whose resolved URL starts with this prefix are followed.
    /// Note this is a literal prefix match, so a base of
    /// https://example.com/blog keeps the crawl inside /blog.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output matching URLs as JSON instead of a plain list
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no subcommands this time?
//    - Subcommands make sense when a tool does several distinct things
//    - This tool has exactly one workflow: crawl, then search
//    - A flat argument list keeps `site-indexer --help` short and obvious
//
// 2. What is Option<String>?
//    - Option represents a value that might not be provided
//    - clap turns an Option field into an optional flag automatically
//    - We default --base-url to the seed URL later, in main.rs
//
// 3. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
// -----------------------------------------------------------------------------
