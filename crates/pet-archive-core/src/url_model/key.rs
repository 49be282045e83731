//! `k` query parameter extraction from pet page links.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Query parameter carrying the pet key.
pub const KEY_PARAM: &str = "k";

/// `k=` at the start of the string or after `?`/`&`, up to the next `&`.
static KEY_FALLBACK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[?&])k=([^&]+)").expect("key fallback pattern is valid"));

/// Returns the value of the `k` query parameter.
///
/// Absolute URLs are parsed and the first `k` value is returned
/// percent-decoded. Anything else is scanned textually and the raw text after
/// the first `k=` is returned.
pub fn extract_key(url: &str) -> Option<String> {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .query_pairs()
            .find(|(name, _)| name == KEY_PARAM)
            .map(|(_, value)| value.into_owned()),
        Err(_) => KEY_FALLBACK
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_with_key() {
        assert_eq!(
            extract_key("https://example.com/page?k=abc123&other=1").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn absolute_url_without_key() {
        assert_eq!(extract_key("https://example.com/page"), None);
        assert_eq!(extract_key("https://example.com/page?kk=1&key=2"), None);
    }

    #[test]
    fn absolute_url_value_is_decoded() {
        assert_eq!(
            extract_key("https://example.com/p?k=a%20b+c").as_deref(),
            Some("a b c")
        );
    }

    #[test]
    fn absolute_url_first_key_wins() {
        assert_eq!(
            extract_key("https://example.com/p?k=one&k=two").as_deref(),
            Some("one")
        );
    }

    #[test]
    fn absolute_url_empty_key() {
        assert_eq!(extract_key("https://example.com/p?k=").as_deref(), Some(""));
    }

    #[test]
    fn fallback_bare_query() {
        assert_eq!(extract_key("k=xyz&foo=bar").as_deref(), Some("xyz"));
    }

    #[test]
    fn fallback_relative_link() {
        assert_eq!(
            extract_key("/view.php?foo=1&k=R2D2&x=2").as_deref(),
            Some("R2D2")
        );
        assert_eq!(extract_key("?k=abc").as_deref(), Some("abc"));
    }

    #[test]
    fn fallback_is_not_decoded() {
        assert_eq!(extract_key("/p?k=a%20b").as_deref(), Some("a%20b"));
    }

    #[test]
    fn fallback_requires_separator_before_k() {
        assert_eq!(extract_key("/p?kk=1&bk=2"), None);
        assert_eq!(extract_key("not a url"), None);
        assert_eq!(extract_key(""), None);
    }

    #[test]
    fn fallback_skips_empty_value() {
        assert_eq!(extract_key("/p?k=&k=real").as_deref(), Some("real"));
    }
}
