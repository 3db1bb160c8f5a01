// src/crawler/links.rs
// =============================================================================
// This module decides what to do with a raw href found on a page:
//
// 1. Resolve it to an absolute URL
//    - An href that is already absolute (has its own scheme + host) is
//      used exactly as written
//    - Anything else (relative path, absolute path, fragment, query) is
//      resolved against the URL of the page it appeared on, the same way
//      a browser would
// 2. Test whether the result is in scope
//    - In scope = the resolved URL starts with the scope-base string
//
// The scope test is deliberately a literal string-prefix match, not a
// host-equality check. That means a scope base of
// https://example.com/blog confines the crawl to /blog, not just to
// example.com. Surprising if you expect "same domain", but it's the
// contract, and it's what makes path-scoped crawls possible.
//
// Rust concepts:
// - Option<T>: For hrefs that can't be resolved at all
// - The url crate: Url::parse and Url::join do the RFC 3986 heavy lifting
// =============================================================================

use url::Url;

// Resolves a possibly-relative href to an absolute URL
//
// Parameters:
//   page_url: the URL of the page the href was found on
//   href: the href value, exactly as written in the HTML
//
// Returns: Some(absolute_url) or None if it can't be resolved
//
// Examples:
//   page_url = "https://example.com/docs/intro"
//   href = "/about"            -> Some("https://example.com/about")
//   href = "guide"             -> Some("https://example.com/docs/guide")
//   href = "https://other.com" -> Some("https://other.com")  (as-is!)
pub fn resolve_href(page_url: &str, href: &str) -> Option<String> {
    // An href with its own network location is taken verbatim - we do NOT
    // round-trip it through Url, because serialization can change it
    // (e.g., "https://other.com" would become "https://other.com/") and
    // the visited set works on exact strings
    if let Ok(parsed) = Url::parse(href) {
        if parsed.has_host() {
            return Some(href.to_string());
        }
    }

    // Everything else resolves relative to the current page
    // This also covers scheme-only hrefs like "mailto:a@b.com", which
    // join() passes through unchanged - the scope test filters them out
    let base = Url::parse(page_url).ok()?;
    let resolved = base.join(href).ok()?;
    Some(resolved.to_string())
}

// Tests whether a resolved URL falls within the crawl scope
//
// A literal prefix test on the string, per the module comment above.
pub fn in_scope(url: &str, scope_base: &str) -> bool {
    url.starts_with(scope_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_path() {
        let result = resolve_href("https://example.com", "/about");
        assert_eq!(result, Some("https://example.com/about".to_string()));
    }

    #[test]
    fn test_resolve_relative_path() {
        let result = resolve_href("https://example.com/docs/intro", "guide");
        assert_eq!(result, Some("https://example.com/docs/guide".to_string()));
    }

    #[test]
    fn test_absolute_href_kept_verbatim() {
        // No trailing slash added - the href is used exactly as written
        let result = resolve_href("https://example.com", "https://www.external.com");
        assert_eq!(result, Some("https://www.external.com".to_string()));
    }

    #[test]
    fn test_resolve_root() {
        let result = resolve_href("https://example.com", "/");
        assert_eq!(result, Some("https://example.com/".to_string()));
    }

    #[test]
    fn test_resolve_query_string() {
        let result = resolve_href("https://example.com/search", "?q=rust");
        assert_eq!(result, Some("https://example.com/search?q=rust".to_string()));
    }

    #[test]
    fn test_unresolvable_base() {
        // A page URL that isn't a URL at all means relative hrefs are lost
        let result = resolve_href("not a url", "/about");
        assert_eq!(result, None);
    }

    #[test]
    fn test_mailto_resolves_but_fails_scope() {
        let result = resolve_href("https://example.com", "mailto:test@example.com");
        let resolved = result.expect("mailto should resolve");
        assert!(!in_scope(&resolved, "https://example.com"));
    }

    #[test]
    fn test_scope_is_prefix_not_host() {
        // Same host, different path prefix: out of scope
        assert!(in_scope(
            "https://example.com/blog/post-1",
            "https://example.com/blog"
        ));
        assert!(!in_scope(
            "https://example.com/other-page",
            "https://example.com/blog"
        ));
    }

    #[test]
    fn test_external_host_out_of_scope() {
        assert!(!in_scope("https://www.external.com", "https://example.com"));
    }
}
