//! Cookie Helpers
//!
//! Parsing of `Cookie` header values as produced by the client's cookie jar.

use reqwest::header::HeaderValue;

/// Iterate over `name=value` pairs of a `Cookie` header string
pub fn cookie_pairs(header: &str) -> impl Iterator<Item = (&str, &str)> {
    header.split(';').filter_map(|cookie| {
        let (key, value) = cookie.trim().split_once('=')?;
        Some((key.trim(), value.trim()))
    })
}

/// Extract a cookie value from a `Cookie` header value
pub fn extract_cookie(header: &HeaderValue, name: &str) -> Option<String> {
    let header = header.to_str().ok()?;

    cookie_pairs(header)
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Split a `;`-separated cookie list into individual `name=value` strings
///
/// Used to seed the jar from a single environment variable.
pub fn split_cookie_list(list: &str) -> Vec<String> {
    cookie_pairs(list)
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| format!("{key}={value}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_cookie() {
        let header = HeaderValue::from_static("sessionid=abc123; csrftoken=tok; other=xyz");

        assert_eq!(
            extract_cookie(&header, "csrftoken"),
            Some("tok".to_string())
        );
        assert_eq!(
            extract_cookie(&header, "sessionid"),
            Some("abc123".to_string())
        );
        assert_eq!(extract_cookie(&header, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_empty_value() {
        let header = HeaderValue::from_static("csrftoken=; sessionid=abc");
        assert_eq!(extract_cookie(&header, "csrftoken"), None);
    }

    #[test]
    fn test_split_cookie_list() {
        let cookies = split_cookie_list(" sessionid=abc ;csrftoken=tok;;junk");
        assert_eq!(cookies, vec!["sessionid=abc", "csrftoken=tok"]);
    }
}
