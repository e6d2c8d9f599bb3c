//! Bearer token header formatting and parsing.

/// Formats a token into a bearer `Authorization` header value.
///
/// # Examples
///
/// ```
/// use bearer_client::auth::bearer_header;
///
/// assert_eq!(bearer_header("abc123"), "Bearer abc123");
/// ```
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Extracts the token from a bearer `Authorization` header value.
///
/// Returns `None` for non-bearer schemes, a missing token, or a header that
/// is only whitespace. The scheme match is case-sensitive, as produced by
/// [`bearer_header`].
///
/// # Examples
///
/// ```
/// use bearer_client::auth::parse_bearer_header;
///
/// assert_eq!(parse_bearer_header("Bearer abc123"), Some("abc123"));
/// assert_eq!(parse_bearer_header("Basic dXNlcjpwYXNz"), None);
/// ```
pub fn parse_bearer_header(header: &str) -> Option<&str> {
    let token = header.trim().strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_format() {
        assert_eq!(bearer_header("abc123"), "Bearer abc123");
    }

    #[test]
    fn test_bearer_header_preserves_opaque_token() {
        let jwt = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJqYW5lIn0.sig";
        assert_eq!(bearer_header(jwt), format!("Bearer {}", jwt));
    }

    #[test]
    fn test_parse_valid_header() {
        assert_eq!(parse_bearer_header("Bearer abc123"), Some("abc123"));
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        assert_eq!(parse_bearer_header("  Bearer   abc123  "), Some("abc123"));
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        assert_eq!(parse_bearer_header("Basic dXNlcjpwYXNz"), None);
        assert_eq!(parse_bearer_header("bearer abc123"), None);
    }

    #[test]
    fn test_parse_rejects_empty_token() {
        assert_eq!(parse_bearer_header("Bearer "), None);
        assert_eq!(parse_bearer_header("Bearer    "), None);
    }

    #[test]
    fn test_roundtrip() {
        let header = bearer_header("my_secret_token");
        assert_eq!(parse_bearer_header(&header), Some("my_secret_token"));
    }
}
