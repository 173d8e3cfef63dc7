//! URL decomposition.
//!
//! This module splits a raw URL string into its scheme, host, path and query
//! parameters. Every function here is total: any input, including the empty
//! string or text that looks nothing like a URL, produces a result instead of
//! an error. Malformed input degrades to empty or partial slices.
//!
//! All results borrow from the input, nothing is copied or percent-decoded.
//!
//! # Fallback when `://` is missing
//!
//! When the url has no `://` marker the host is read from the start of the
//! string, so `host("localhost/a")` is `"localhost"` and `path("localhost/a")`
//! is `"/a"`. The path is always the text following the host at the position
//! the host was taken from, which means it starts with `/` whenever it is not
//! empty.
//!
//! # Example
//!
//! ```
//! use mini_http::url::{host, path, query_params, scheme};
//!
//! let url = "https://www.imperial.ac.uk/computing?q=abc";
//! assert_eq!(scheme(url), "https");
//! assert_eq!(host(url), "www.imperial.ac.uk");
//! assert_eq!(path(url), "/computing");
//! assert_eq!(query_params(url).as_slice(), &[("q", "abc")]);
//! ```

mod query;

pub use query::QueryParams;

use std::fmt;
use std::fmt::{Display, Formatter};

const SCHEME_SEPARATOR: &str = "://";

/// Returns the text before the first `:`, or the whole url if there is none.
pub fn scheme(url: &str) -> &str {
    url.split_once(':').map_or(url, |(scheme, _)| scheme)
}

/// Returns the text after `://` up to the next `/`.
pub fn host(url: &str) -> &str {
    let authority = after_scheme(url);
    authority.split_once('/').map_or(authority, |(host, _)| host)
}

/// Returns the text following the host, up to the first `?`.
pub fn path(url: &str) -> &str {
    let authority = after_scheme(url);
    let after_host = authority.find('/').map_or("", |index| &authority[index..]);
    after_host.split_once('?').map_or(after_host, |(path, _)| path)
}

/// Returns the raw query string, which is everything after the first `?`.
pub fn query(url: &str) -> Option<&str> {
    url.split_once('?').map(|(_, query)| query)
}

/// Returns the query parameters in url order, empty when the url has no `?`.
pub fn query_params(url: &str) -> QueryParams<'_> {
    query(url).map_or_else(QueryParams::empty, QueryParams::from_query)
}

#[inline]
fn after_scheme(url: &str) -> &str {
    url.split_once(SCHEME_SEPARATOR).map_or(url, |(_, rest)| rest)
}

/// A borrowed view of one raw url, split into its parts.
///
/// `Url::parse` never fails, the parts are computed with [`scheme`], [`host`],
/// [`path`] and [`query`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Url<'a> {
    raw: &'a str,
    scheme: &'a str,
    host: &'a str,
    path: &'a str,
    query: Option<&'a str>,
}

impl<'a> Url<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self { raw, scheme: scheme(raw), host: host(raw), path: path(raw), query: query(raw) }
    }

    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    #[inline]
    pub fn scheme(&self) -> &'a str {
        self.scheme
    }

    #[inline]
    pub fn host(&self) -> &'a str {
        self.host
    }

    #[inline]
    pub fn path(&self) -> &'a str {
        self.path
    }

    #[inline]
    pub fn query(&self) -> Option<&'a str> {
        self.query
    }

    /// Parses the query string into ordered key/value pairs.
    pub fn query_params(&self) -> QueryParams<'a> {
        self.query.map_or_else(QueryParams::empty, QueryParams::from_query)
    }
}

impl Display for Url<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme() {
        assert_eq!(scheme("http://www.imperial.ac.uk/"), "http");
        assert_eq!(scheme("https://www.imperial.ac.uk/"), "https");
        assert_eq!(scheme("https://www.google.com/"), "https");
        assert_eq!(scheme("https://hoogle.haskell.org/"), "https");
    }

    #[test]
    fn test_scheme_without_colon_is_whole_url() {
        assert_eq!(scheme("www.imperial.ac.uk"), "www.imperial.ac.uk");
        assert_eq!(scheme(""), "");
    }

    #[test]
    fn test_host() {
        assert_eq!(host("http://www.imperial.ac.uk/"), "www.imperial.ac.uk");
        assert_eq!(host("https://www.imperial.ac.uk/"), "www.imperial.ac.uk");
        assert_eq!(host("https://www.imperial.ac.uk/computing"), "www.imperial.ac.uk");
        assert_eq!(host("https://hoogle.haskell.org/?hoogle=lists&scope=set%3Astackage"), "hoogle.haskell.org");
        assert_eq!(host("https://www.google.com/search?q=google"), "www.google.com");
    }

    #[test]
    fn test_host_without_scheme_marker() {
        assert_eq!(host("localhost/a/b"), "localhost");
        assert_eq!(host("localhost"), "localhost");
        assert_eq!(host("/only/path"), "");
    }

    #[test]
    fn test_path() {
        assert_eq!(path("http://www.imperial.ac.uk/"), "/");
        assert_eq!(path("https://www.imperial.ac.uk/"), "/");
        assert_eq!(path("https://www.imperial.ac.uk/computing"), "/computing");
        assert_eq!(path("https://www.imperial.ac.uk/computing/programming"), "/computing/programming");
        assert_eq!(path("https://www.imperial.ac.uk/computing?q=abc"), "/computing");
    }

    #[test]
    fn test_path_keeps_trailing_slash() {
        assert_eq!(path("https://www.imperial.ac.uk/computing/"), "/computing/");
    }

    #[test]
    fn test_path_when_host_text_repeats() {
        // the host also appears at the front of the url
        assert_eq!(path("http://http/computing"), "/computing");
        assert_eq!(path("https://x/x/x?x=x"), "/x/x");
    }

    #[test]
    fn test_path_without_slash_after_host() {
        assert_eq!(path("http://www.imperial.ac.uk"), "");
        assert_eq!(path("http://www.imperial.ac.uk?q=abc"), "");
        assert_eq!(path("localhost/a?b=c"), "/a");
    }

    #[test]
    fn test_query_params() {
        assert_eq!(query_params("http://www.imperial.ac.uk/?q=xxx").as_slice(), &[("q", "xxx")]);
        assert_eq!(
            query_params("http://www.imperial.ac.uk/?q=xxx&rr=zzz").as_slice(),
            &[("q", "xxx"), ("rr", "zzz")]
        );
        assert_eq!(query_params("https://www.imperial.ac.uk/computing?q=abc").as_slice(), &[("q", "abc")]);
        assert_eq!(
            query_params("https://www.google.com/search?q=google&id=256").as_slice(),
            &[("q", "google"), ("id", "256")]
        );
    }

    #[test]
    fn test_no_query_params() {
        assert!(query_params("http://www.imperial.ac.uk/").is_empty());
        assert!(query_params("https://www.google.com/").is_empty());
        assert!(query_params("https://hoogle.haskell.org/").is_empty());
    }

    #[test]
    fn test_query_params_are_not_decoded() {
        let params = query_params("https://hoogle.haskell.org/?hoogle=lists&scope=set%3Astackage");
        assert_eq!(params.get("scope"), Some("set%3Astackage"));
    }

    #[test]
    fn test_query_segment_without_equals() {
        assert_eq!(query_params("http://x/?flag&a=1").as_slice(), &[("flag", ""), ("a", "1")]);
    }

    #[test]
    fn test_query_value_keeps_later_equals() {
        assert_eq!(query_params("http://x/?expr=a=b").as_slice(), &[("expr", "a=b")]);
    }

    #[test]
    fn test_empty_query_yields_one_empty_pair() {
        assert_eq!(query_params("http://x/?").as_slice(), &[("", "")]);
        assert_eq!(query_params("http://x/?a=1&").as_slice(), &[("a", "1"), ("", "")]);
    }

    #[test]
    fn test_degenerate_input_never_panics() {
        for url in ["", "?", "://", ":", "/", "?&=", "abc", "http://", "ü://ß/ä?ö=ñ&€", "::///??=="] {
            let parsed = Url::parse(url);
            assert_eq!(parsed.scheme(), scheme(url));
            assert_eq!(parsed.host(), host(url));
            assert_eq!(parsed.path(), path(url));
            assert_eq!(parsed.query_params(), query_params(url));
        }
        assert_eq!(host("ü://ß/ä?ö=ñ&€"), "ß");
        assert_eq!(path("ü://ß/ä?ö=ñ&€"), "/ä");
        assert_eq!(query_params("ü://ß/ä?ö=ñ&€").as_slice(), &[("ö", "ñ"), ("€", "")]);
    }

    #[test]
    fn test_only_question_mark() {
        assert_eq!(scheme("?"), "?");
        assert_eq!(host("?"), "?");
        assert_eq!(path("?"), "");
        assert_eq!(query_params("?").as_slice(), &[("", "")]);
    }

    #[test]
    fn test_url_view() {
        let url = Url::parse("https://www.google.com/search?q=google&id=256");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host(), "www.google.com");
        assert_eq!(url.path(), "/search");
        assert_eq!(url.query(), Some("q=google&id=256"));
        assert_eq!(url.query_params().get("id"), Some("256"));
        assert_eq!(url.to_string(), "https://www.google.com/search?q=google&id=256");
    }
}
