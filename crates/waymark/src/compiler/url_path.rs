//! # Url Path Reduction
//!
//! Routes only ever match the path component of a uri. These helpers reduce
//! template strings and request uris to that component.

/// Reduce a request uri to its path component.
///
/// Strips a `scheme://authority` prefix when the uri is absolute, and
/// truncates at the first `?` or `#`.
///
/// ## Arguments
/// * `uri` - The request uri.
///
/// ## Returns
/// The path component.
pub fn request_path(uri: &str) -> &str {
    let path = strip_authority(uri);
    match path.find(['?', '#']) {
        Some(end) => &path[..end],
        None => path,
    }
}

/// Reduce a route template to its path component.
///
/// Like [`request_path`], except a `?` that ends a fragment (followed by
/// `/` or end of input) is an optional-segment marker, not a query
/// separator, and survives the reduction.
///
/// ## Arguments
/// * `uri` - The route template.
///
/// ## Returns
/// The path component, optional markers intact.
pub fn template_path(uri: &str) -> &str {
    let path = strip_authority(uri);
    let path = match path.find('#') {
        Some(end) => &path[..end],
        None => path,
    };

    for (i, c) in path.char_indices() {
        if c == '?' {
            let rest = &path[i + 1..];
            if !rest.is_empty() && !rest.starts_with('/') {
                return &path[..i];
            }
        }
    }
    path
}

/// Strip a `scheme://authority` prefix, leaving the path onward.
fn strip_authority(uri: &str) -> &str {
    let Some(pos) = uri.find("://") else {
        return uri;
    };

    let scheme = &uri[..pos];
    if scheme.is_empty()
        || !scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return uri;
    }

    let rest = &uri[pos + 3..];
    match rest.find('/') {
        Some(slash) => &rest[slash..],
        None => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path() {
        assert_eq!(request_path("/foo/bar"), "/foo/bar");
        assert_eq!(request_path("/foo?q=1"), "/foo");
        assert_eq!(request_path("/foo#section"), "/foo");
        assert_eq!(request_path("/foo?q=1#section"), "/foo");
        assert_eq!(request_path("http://example.com/foo/bar?q=1"), "/foo/bar");
        assert_eq!(request_path("https://example.com"), "/");
    }

    #[test]
    fn test_template_path_keeps_optional_markers() {
        assert_eq!(template_path("/foo/:bar?"), "/foo/:bar?");
        assert_eq!(template_path("/a/:b?/c/:d?"), "/a/:b?/c/:d?");
        assert_eq!(template_path("/foo/bar?"), "/foo/bar?");
    }

    #[test]
    fn test_template_path_strips_queries() {
        assert_eq!(template_path("/search?q=term"), "/search");
        assert_eq!(template_path("/a/:b?/c?x=1"), "/a/:b?/c");
        assert_eq!(template_path("/foo#section"), "/foo");
        assert_eq!(template_path("http://example.com/foo/:bar?"), "/foo/:bar?");
    }

    #[test]
    fn test_strip_authority_ignores_non_schemes() {
        // "://" without a scheme-shaped prefix is left alone.
        assert_eq!(request_path("/odd ://path"), "/odd ://path");
    }
}
