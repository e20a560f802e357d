//! Raw identifier-string manipulation.
//!
//! Note that functions in this module operate on raw `&str` values.
//! It is caller's responsibility to guarantee that the given string satisfies
//! the precondition.

use alloc::string::String;

/// Recomposes the components into a single string.
///
/// See <https://datatracker.ietf.org/doc/html/rfc3986#section-5.3>.
#[must_use]
pub(crate) fn recompose(
    scheme: Option<&str>,
    authority: Option<&str>,
    path: &str,
    query: Option<&str>,
    fragment: Option<&str>,
) -> String {
    let mut result = String::new();
    if let Some(scheme) = scheme {
        result.push_str(scheme);
        result.push(':');
    }
    if let Some(authority) = authority {
        result.push_str("//");
        result.push_str(authority);
    }
    result.push_str(path);
    if let Some(query) = query {
        result.push('?');
        result.push_str(query);
    }
    if let Some(fragment) = fragment {
        result.push('#');
        result.push_str(fragment);
    }
    result
}

/// Composes the root-relative form: path, query, and fragment.
#[inline]
#[must_use]
pub(crate) fn compose_root_relative(
    path: &str,
    query: Option<&str>,
    fragment: Option<&str>,
) -> String {
    recompose(None, None, path, query, fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recompose_roundtrip() {
        assert_eq!(
            recompose(Some("http"), Some("a"), "/b/c", Some("q"), Some("f")),
            "http://a/b/c?q#f"
        );
        assert_eq!(recompose(Some("urn"), None, "example:1", None, None), "urn:example:1");
        assert_eq!(recompose(None, None, "/a/b", Some(""), None), "/a/b?");
        assert_eq!(compose_root_relative("/a", None, Some("f")), "/a#f");
    }
}
