//! Refresh-cookie inspection.
//!
//! The cookie is httpOnly and owned by the remote auth API: set on
//! register/login with `SameSite=Lax`, a 7-day max age and root path. The
//! gate only reads it, and only to decide whether a protected navigation
//! may render. The raw value must never be logged or echoed to the page.

use axum::http::{header::COOKIE, HeaderMap};

/// Name of the httpOnly cookie carrying the refresh token.
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

/// Extract the refresh token from the request cookies.
///
/// An empty value counts as absent: a cleared cookie is a definitive
/// "not authenticated" signal for this request, with no retries.
#[must_use]
pub fn refresh_token(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;

    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let Some(key) = parts.next() else { continue };
        let Some(val) = parts.next() else { continue };
        if key.trim() == REFRESH_COOKIE_NAME && !val.trim().is_empty() {
            return Some(val.trim().to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).expect("cookie header"));
        headers
    }

    #[test]
    fn extracts_the_refresh_token() {
        let headers = headers_with_cookie("refreshToken=abc123");
        assert_eq!(refresh_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn finds_the_token_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; refreshToken=abc123; lang=eo");
        assert_eq!(refresh_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn skips_malformed_pairs() {
        let headers = headers_with_cookie("garbage; refreshToken=abc123");
        assert_eq!(refresh_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn missing_cookie_header_yields_none() {
        assert_eq!(refresh_token(&HeaderMap::new()), None);
    }

    #[test]
    fn other_cookies_only_yields_none() {
        let headers = headers_with_cookie("theme=dark; lang=eo");
        assert_eq!(refresh_token(&headers), None);
    }

    #[test]
    fn empty_value_counts_as_absent() {
        let headers = headers_with_cookie("refreshToken=");
        assert_eq!(refresh_token(&headers), None);
    }

    #[test]
    fn does_not_match_a_prefixed_name() {
        let headers = headers_with_cookie("xrefreshToken=abc123");
        assert_eq!(refresh_token(&headers), None);
    }
}
