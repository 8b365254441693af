//! Slug and destination URL validation.
//!
//! All functions are pure and never panic on user input.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Shown when a slug fails the format or reserved-word check.
pub const SLUG_ERROR: &str = "Alias must be 2–40 lowercase letters, numbers, or hyphens.";

/// Shown when a destination is not an absolute http(s) URL.
pub const URL_ERROR: &str = "URL must start with http:// or https://";

/// Slugs that would shadow a fixed route.
pub const RESERVED_SLUGS: &[&str] = &["healthz", "static", "favicon.ico", "links", "help"];

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]{2,40}$").expect("slug pattern is valid"));

/// Returns true if `slug` is 2-40 characters of `[a-z0-9-]` and not reserved.
///
/// # Examples
///
/// ```
/// use vilinks::utils::validation::is_valid_slug;
///
/// assert!(is_valid_slug("team-wiki"));
/// assert!(!is_valid_slug("Team Wiki"));
/// assert!(!is_valid_slug("help"));
/// ```
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug) && !RESERVED_SLUGS.contains(&slug)
}

/// Returns true if `url` parses with an `http`/`https` scheme and a host.
///
/// ASCII control characters are rejected; the parser would otherwise strip
/// tabs and newlines and accept the string.
pub fn is_valid_url(url: &str) -> bool {
    if url.chars().any(|c| c.is_ascii_control()) {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Collects every format problem with a slug/url pair.
///
/// The slug message always comes before the URL message. Uniqueness is not
/// checked here.
pub fn validate_link(slug: &str, url: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_valid_slug(slug) {
        errors.push(SLUG_ERROR.to_string());
    }

    if !is_valid_url(url) {
        errors.push(URL_ERROR.to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        for slug in ["ab", "docs", "team-wiki", "q3-2024", "a1"] {
            assert!(is_valid_slug(slug), "'{slug}' should be valid");
        }
        assert!(is_valid_slug(&"x".repeat(40)));
    }

    #[test]
    fn test_slug_too_short() {
        assert!(!is_valid_slug("x"));
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn test_slug_too_long() {
        assert!(!is_valid_slug(&"x".repeat(41)));
    }

    #[test]
    fn test_slug_rejects_uppercase_and_spaces() {
        assert!(!is_valid_slug("A B"));
        assert!(!is_valid_slug("Docs"));
        assert!(!is_valid_slug("my docs"));
    }

    #[test]
    fn test_slug_rejects_special_characters() {
        assert!(!is_valid_slug("my_docs"));
        assert!(!is_valid_slug("docs/v2"));
        assert!(!is_valid_slug("docs.v2"));
        assert!(!is_valid_slug("café"));
    }

    #[test]
    fn test_slug_rejects_trailing_newline() {
        assert!(!is_valid_slug("docs\n"));
    }

    #[test]
    fn test_all_reserved_slugs_rejected() {
        for &reserved in RESERVED_SLUGS {
            assert!(
                !is_valid_slug(reserved),
                "Reserved slug '{}' should be invalid",
                reserved
            );
        }
    }

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/path?q=1#frag"));
        assert!(is_valid_url("http://localhost:3000/test"));
        assert!(is_valid_url("https://192.168.1.1/api"));
    }

    #[test]
    fn test_url_rejects_other_schemes() {
        assert!(!is_valid_url("ftp://x.com"));
        assert!(!is_valid_url("mailto:test@example.com"));
        assert!(!is_valid_url("javascript:alert('xss')"));
        assert!(!is_valid_url("file:///etc/passwd"));
    }

    #[test]
    fn test_url_rejects_garbage() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("https://"));
    }

    #[test]
    fn test_url_rejects_control_characters() {
        assert!(!is_valid_url("https://example.com/a\nb"));
        assert!(!is_valid_url("https://example.com/a\tb"));
        assert!(!is_valid_url("https://exa\rmple.com"));
        assert!(!is_valid_url("https://example.com/\u{7f}"));
    }

    #[test]
    fn test_validate_link_ok() {
        assert!(validate_link("demo", "https://example.com").is_empty());
    }

    #[test]
    fn test_validate_link_reports_slug_first() {
        let errors = validate_link("help", "not a url");
        assert_eq!(errors, vec![SLUG_ERROR.to_string(), URL_ERROR.to_string()]);
    }

    #[test]
    fn test_validate_link_url_only() {
        let errors = validate_link("demo", "ftp://x.com");
        assert_eq!(errors, vec![URL_ERROR.to_string()]);
    }

    #[test]
    fn test_validate_link_slug_only() {
        let errors = validate_link(&"a".repeat(41), "https://example.com");
        assert_eq!(errors, vec![SLUG_ERROR.to_string()]);
    }
}
