//! Reference implementation based on RFC 3986 section 5.
//!
//! This is a deliberately naive transcription of the pseudocode, decomposing
//! with its own parser, so that agreement with the production resolver is
//! meaningful.

/// Components of a reference.
struct Components<'a> {
    /// Scheme.
    scheme: Option<&'a str>,
    /// Authority.
    authority: Option<&'a str>,
    /// Path.
    path: &'a str,
    /// Query.
    query: Option<&'a str>,
    /// Fragment.
    fragment: Option<&'a str>,
}

/// Returns `true` if the candidate matches the `scheme` rule.
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Decomposes a reference into its five components.
fn decompose(i: &str) -> Components<'_> {
    // A colon inside a later path segment is not a scheme delimiter; the
    // `scheme` rule itself rejects such candidates, since they contain a
    // slash, question mark, or hash.
    let (scheme, rest) = match i.split_once(':') {
        Some((candidate, rest)) if is_scheme(candidate) => (Some(candidate), rest),
        _ => (None, i),
    };

    let (authority, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
            (Some(&after[..end]), &after[end..])
        }
        None => (None, rest),
    };

    let path_end = rest.find(&['?', '#'][..]).unwrap_or(rest.len());
    let (path, rest) = (&rest[..path_end], &rest[path_end..]);

    let (query, fragment) = match rest.strip_prefix('?') {
        Some(after) => match after.split_once('#') {
            Some((query, fragment)) => (Some(query), Some(fragment)),
            None => (Some(after), None),
        },
        None => match rest.strip_prefix('#') {
            Some(fragment) => (None, Some(fragment)),
            None => (None, None),
        },
    };

    Components {
        scheme,
        authority,
        path,
        query,
        fragment,
    }
}

/// Resolves the reference against the base.
///
/// See <https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.2>.
pub fn resolve(base: &str, reference: &str) -> String {
    let r = decompose(reference);
    let b = decompose(base);

    let t_scheme: &str;
    let t_authority: Option<&str>;
    let t_path: String;
    let t_query: Option<&str>;

    if let Some(r_scheme) = r.scheme {
        t_scheme = r_scheme;
        t_authority = r.authority;
        t_path = remove_dot_segments(r.path.into());
        t_query = r.query;
    } else {
        if r.authority.is_some() {
            t_authority = r.authority;
            t_path = remove_dot_segments(r.path.into());
            t_query = r.query;
        } else {
            if r.path.is_empty() {
                t_path = b.path.into();
                if r.query.is_some() {
                    t_query = r.query;
                } else {
                    t_query = b.query;
                }
            } else {
                if r.path.starts_with('/') {
                    t_path = remove_dot_segments(r.path.into());
                } else {
                    t_path = remove_dot_segments(merge(b.path, r.path, b.authority.is_some()));
                }
                t_query = r.query;
            }
            t_authority = b.authority;
        }
        t_scheme = b.scheme.expect("non-relative base must have a scheme");
    }
    let t_fragment: Option<&str> = r.fragment;

    recompose(t_scheme, t_authority, &t_path, t_query, t_fragment)
}

/// Merges the two paths.
///
/// See <https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.3>.
fn merge(base_path: &str, ref_path: &str, base_authority_defined: bool) -> String {
    if base_authority_defined && base_path.is_empty() {
        format!("/{}", ref_path)
    } else {
        let base_path_end = base_path.rfind('/').map_or(0, |s| s + 1);
        format!("{}{}", &base_path[..base_path_end], ref_path)
    }
}

/// Removes dot segments from the path.
///
/// See <https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4>.
fn remove_dot_segments(mut input: String) -> String {
    let mut output = String::new();
    while !input.is_empty() {
        if input.starts_with("../") {
            // 2A.
            input.drain(..3);
        } else if input.starts_with("./") {
            // 2A.
            input.drain(..2);
        } else if input.starts_with("/./") {
            // 2B.
            input.replace_range(..3, "/");
        } else if input == "/." {
            // 2B.
            input.replace_range(..2, "/");
        } else if input.starts_with("/../") {
            // 2C.
            input.replace_range(..4, "/");
            remove_last_segment_and_preceding_slash(&mut output);
        } else if input == "/.." {
            // 2C.
            input.replace_range(..3, "/");
            remove_last_segment_and_preceding_slash(&mut output);
        } else if input == "." {
            // 2D.
            input.drain(..1);
        } else if input == ".." {
            // 2D.
            input.drain(..2);
        } else {
            // 2E.
            let first_seg_end = if let Some(after_slash) = input.strip_prefix('/') {
                // `+1` is the length of the initial slash.
                after_slash
                    .find('/')
                    .map_or_else(|| input.len(), |pos| pos + 1)
            } else {
                input.find('/').unwrap_or(input.len())
            };
            output.extend(input.drain(..first_seg_end));
        }
    }

    output
}

/// Removes the last path segment and the preceding slash if any.
///
/// See <https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4>,
/// step 2C.
fn remove_last_segment_and_preceding_slash(output: &mut String) {
    match output.rfind('/') {
        Some(slash_pos) => {
            output.drain(slash_pos..);
        }
        None => output.clear(),
    }
}

/// Recomposes the components.
///
/// See <https://datatracker.ietf.org/doc/html/rfc3986#section-5.3>.
fn recompose(
    scheme: &str,
    authority: Option<&str>,
    path: &str,
    query: Option<&str>,
    fragment: Option<&str>,
) -> String {
    let mut result = String::new();

    result.push_str(scheme);
    result.push(':');
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
