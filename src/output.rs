// src/output.rs
// =============================================================================
// This module formats search results for display.
//
// Small on purpose: a header plus one line per result, or a fixed
// "nothing found" line. The formatting is written against `impl Write`
// so tests can render into a Vec<u8> and assert on the exact bytes;
// print_results is the thin stdout wrapper the binary uses.
//
// Rust concepts:
// - Generics with trait bounds: W: Write accepts stdout, files, buffers
// - writeln!: Like println! but targets any writer and returns a Result
// =============================================================================

use std::io::{self, Write};

use serde::Serialize;

// The JSON shape of a finished search, for --json mode
//
// #[derive(Serialize)] lets serde_json turn this into JSON directly.
// Machine consumers (CI pipelines, scripts) get the keyword echoed back
// alongside the matching URLs, in crawl order.
#[derive(Debug, Serialize)]
pub struct SearchReport<'a> {
    /// The keyword that was searched for
    pub keyword: &'a str,
    /// URLs of the pages whose text matched, in the order they were indexed
    pub results: &'a [String],
}

// Writes search results to any writer
//
// Non-empty results:
//   Search results:
//   - https://example.com
//   - https://example.com/about
//
// Empty results:
//   No results found.
pub fn write_results<W: Write>(writer: &mut W, results: &[String]) -> io::Result<()> {
    if results.is_empty() {
        writeln!(writer, "No results found.")?;
        return Ok(());
    }

    writeln!(writer, "Search results:")?;
    for result in results {
        writeln!(writer, "- {}", result)?;
    }
    Ok(())
}

// Prints search results to stdout
//
// Writing to stdout only fails in exotic situations (closed pipe), and
// there is nothing sensible to do about it here, so the error is dropped
// and this never fails from the caller's point of view.
pub fn print_results(results: &[String]) {
    let stdout = io::stdout();
    let _ = write_results(&mut stdout.lock(), results);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(results: &[String]) -> String {
        let mut buffer = Vec::new();
        write_results(&mut buffer, results).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_results_with_matches() {
        let output = render(&[
            "https://test.com/result1".to_string(),
            "https://test.com/result2".to_string(),
        ]);
        assert_eq!(
            output,
            "Search results:\n- https://test.com/result1\n- https://test.com/result2\n"
        );
    }

    #[test]
    fn test_no_results() {
        assert_eq!(render(&[]), "No results found.\n");
    }

    #[test]
    fn test_empty_url_still_listed() {
        // An empty string is still a result: header plus a bare "- " line
        let output = render(&["".to_string()]);
        assert_eq!(output, "Search results:\n- \n");
    }

    #[test]
    fn test_search_report_json() {
        let results = vec!["https://example.com".to_string()];
        let report = SearchReport {
            keyword: "test",
            results: &results,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"keyword":"test","results":["https://example.com"]}"#
        );
    }
}
