//! Fast parsers for trusted (already validated) input.
//!
//! Using this in wrong way will lead to unexpected wrong result.

use crate::components::RiReferenceComponents;
use crate::parser::str::{find_split2, find_split3, find_split_hole};
use crate::parser::validate::split_scheme;

/// Eats a `scheme` and a following colon if available, and returns the rest
/// and the scheme.
///
/// Scheme detection is shared with the validating parser: a bare relative
/// reference may carry a colon inside a later segment (e.g. `./a:b`), and
/// such a colon must not be mistaken for a scheme delimiter.
#[must_use]
fn scheme_colon_opt(i: &str) -> (&str, Option<&str>) {
    match split_scheme(i) {
        Some((scheme, rest)) => (rest, Some(scheme)),
        None => (i, None),
    }
}

/// Eats double slash and the following authority if available, and returns
/// the authority.
#[must_use]
fn slash_slash_authority_opt(i: &str) -> (&str, Option<&str>) {
    let s = match i.strip_prefix("//") {
        Some(rest) => rest,
        None => return (i, None),
    };
    // A slash, question mark, and hash character won't appear in `authority`.
    match find_split3(s, b'/', b'?', b'#') {
        Some((authority, rest)) => (rest, Some(authority)),
        None => ("", Some(s)),
    }
}

/// Eats a string until the query, and returns that part (excluding `?` for
/// the query).
#[must_use]
fn until_query(i: &str) -> (&str, &str) {
    // `?` won't appear before the query part.
    match find_split2(i, b'?', b'#') {
        Some((before_query, rest)) => (rest, before_query),
        None => ("", i),
    }
}

/// Decomposes query and fragment, if available.
///
/// The string must start with `?`, or `#`, or be empty.
#[must_use]
fn decompose_query_and_fragment(i: &str) -> (Option<&str>, Option<&str>) {
    match i.as_bytes().first().copied() {
        None => (None, None),
        Some(b'?') => {
            let rest = &i[1..];
            match find_split_hole(rest, b'#') {
                Some((query, fragment)) => (Some(query), Some(fragment)),
                None => (Some(rest), None),
            }
        }
        Some(c) => {
            debug_assert_eq!(c, b'#');
            (None, Some(&i[1..]))
        }
    }
}

/// Decomposes the given valid reference.
#[must_use]
pub(crate) fn decompose(i: &str) -> RiReferenceComponents<'_> {
    let (i, scheme) = scheme_colon_opt(i);
    let (i, authority) = slash_slash_authority_opt(i);
    let (i, path) = until_query(i);
    let (query, fragment) = decompose_query_and_fragment(i);
    RiReferenceComponents {
        scheme,
        authority,
        path,
        query,
        fragment,
    }
}
