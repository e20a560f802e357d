//! Shortest relative and root-relative forms.
//!
//! [`internalize`] produces the root-relative form of a reference when its
//! origin matches the base's, and [`relativize`] produces the shortest
//! dot-relative reference that resolves back to the same target. Both
//! resolve the reference against the base first, so they accept anything
//! [`resolve`][`crate::resolve::resolve`] accepts and fail the same way.
//!
//! Origin comparison is the scheme (case-insensitive) plus the authority
//! (exact) for hierarchical identifiers. Opaque identifiers — no authority —
//! compare by scheme alone, so `urn:isbn:0451450523` and `urn:example:1`
//! share an origin. That rule is deliberate: an opaque scheme has no
//! authority to compare, and its scheme-specific part is already the
//! shortest same-origin form.

use alloc::string::String;
use alloc::vec::Vec;

use crate::components::RiReferenceComponents;
use crate::normalize;
use crate::raw;
use crate::resolve::{self, Error};
use crate::spec::Spec;
use crate::types::RiIdentifier;
use crate::validate::Variant;

/// Returns the root-relative form of the reference against the base.
///
/// The reference is resolved against the base first. If the resolved target
/// shares the base's origin, the target's path, query, and fragment are
/// returned; otherwise the full normalized absolute target is returned
/// unchanged, since no shorter same-origin form can express it.
///
/// # Examples
///
/// ```
/// # #[derive(Debug)] struct Error;
/// # impl<S: iri_resolve::spec::Spec, T> From<iri_resolve::types::CreationError<S, T>> for Error {
/// #     fn from(_: iri_resolve::types::CreationError<S, T>) -> Self { Self } }
/// # impl From<iri_resolve::resolve::Error> for Error {
/// #     fn from(_: iri_resolve::resolve::Error) -> Self { Self } }
/// use iri_resolve::relative::internalize;
/// use iri_resolve::types::IriIdentifier;
/// use iri_resolve::validate::Variant;
///
/// let base = IriIdentifier::new("http://x/a/b/c", Variant::Absolute)?;
///
/// let reference = IriIdentifier::new("../d?q", Variant::Relative)?;
/// assert_eq!(internalize(&base, &reference)?, "/a/d?q");
///
/// // A target on another origin stays absolute.
/// let other = IriIdentifier::new("https://y/d", Variant::Relative)?;
/// assert_eq!(internalize(&base, &other)?, "https://y/d");
/// # Ok::<_, Error>(())
/// ```
pub fn internalize<S: Spec>(
    base: &RiIdentifier<S>,
    reference: &RiIdentifier<S>,
) -> Result<RiIdentifier<S>, Error> {
    let base = normalize::normalize::<S>(base.as_str(), Variant::Absolute)?;
    let reference = normalize::normalize::<S>(reference.as_str(), Variant::Relative)?;
    let target = resolve::resolve_normalized(&base, &reference)?;

    let b = RiReferenceComponents::from_trusted(&base);
    let t = RiReferenceComponents::from_trusted(&target);
    let rooted = if b.same_origin(&t) {
        Some(raw::compose_root_relative(t.path, t.query, t.fragment))
    } else {
        None
    };
    Ok(RiIdentifier::new_trusted(rooted.unwrap_or(target)))
}

/// Returns the shortest relative reference that resolves back to the target.
///
/// The reference is resolved against the base first. A target on another
/// origin is returned as the normalized absolute form; a same-origin opaque
/// target is returned as its scheme-specific part; a same-origin
/// hierarchical target becomes a dot-relative path.
///
/// # Examples
///
/// ```
/// # #[derive(Debug)] struct Error;
/// # impl<S: iri_resolve::spec::Spec, T> From<iri_resolve::types::CreationError<S, T>> for Error {
/// #     fn from(_: iri_resolve::types::CreationError<S, T>) -> Self { Self } }
/// # impl From<iri_resolve::resolve::Error> for Error {
/// #     fn from(_: iri_resolve::resolve::Error) -> Self { Self } }
/// use iri_resolve::relative::relativize;
/// use iri_resolve::types::IriIdentifier;
/// use iri_resolve::validate::Variant;
///
/// let base = IriIdentifier::new("http://x/a/b/c", Variant::Absolute)?;
///
/// let target = IriIdentifier::new("http://x/a/d", Variant::Relative)?;
/// assert_eq!(relativize(&base, &target)?, "../d");
///
/// // The result resolves back to the target.
/// let back = IriIdentifier::new("../d", Variant::Relative)?;
/// assert_eq!(back.resolve_against(&base)?, "http://x/a/d");
/// # Ok::<_, Error>(())
/// ```
pub fn relativize<S: Spec>(
    base: &RiIdentifier<S>,
    reference: &RiIdentifier<S>,
) -> Result<RiIdentifier<S>, Error> {
    let base = normalize::normalize::<S>(base.as_str(), Variant::Absolute)?;
    let reference = normalize::normalize::<S>(reference.as_str(), Variant::Relative)?;
    let target = resolve::resolve_normalized(&base, &reference)?;

    let b = RiReferenceComponents::from_trusted(&base);
    let t = RiReferenceComponents::from_trusted(&target);
    let shortened = if !b.same_origin(&t) {
        None
    } else if t.authority.is_none() {
        // Opaque target sharing the scheme: the scheme-specific part is
        // already the shortest same-origin form.
        Some(raw::compose_root_relative(t.path, t.query, t.fragment))
    } else {
        Some(relative_path(b.path, t.path, t.query, t.fragment))
    };
    Ok(RiIdentifier::new_trusted(shortened.unwrap_or(target)))
}

/// Computes the shortest dot-relative path from the base path to the target
/// path, with the target's query and fragment appended.
fn relative_path(
    base_path: &str,
    target_path: &str,
    query: Option<&str>,
    fragment: Option<&str>,
) -> String {
    let mut base_dirs: Vec<&str> = base_path.split('/').collect();
    // The final segment of the base names a resource, not a directory.
    base_dirs.pop();
    let target_segs: Vec<&str> = target_path.split('/').collect();

    // Longest shared directory prefix. The target's final segment never
    // takes part, so it survives into the emitted reference.
    let max_shared = base_dirs.len().min(target_segs.len() - 1);
    let mut shared = 0;
    while shared < max_shared && base_dirs[shared] == target_segs[shared] {
        shared += 1;
    }

    let mut parts: Vec<&str> = Vec::with_capacity(base_dirs.len() + target_segs.len() - 2 * shared);
    parts.resize(base_dirs.len() - shared, "..");
    parts.extend_from_slice(&target_segs[shared..]);
    let mut buf = parts.join("/");
    if buf.is_empty() {
        // An empty reference would be misread as "no reference".
        buf.push('.');
    }
    if let Some(query) = query {
        buf.push('?');
        buf.push_str(query);
    }
    if let Some(fragment) = fragment {
        buf.push('#');
        buf.push_str(fragment);
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs `relative_path` without query and fragment.
    fn rel(base: &str, target: &str) -> String {
        relative_path(base, target, None, None)
    }

    #[test]
    fn shortest_paths() {
        assert_eq!(rel("/a/b/c", "/a/d"), "../d");
        assert_eq!(rel("/a/b/c", "/a/b/d"), "d");
        assert_eq!(rel("/a/b/c", "/a/b/c"), "c");
        assert_eq!(rel("/a/b/c", "/x"), "../../x");
        assert_eq!(rel("/a/b/c/d", "/a/b"), "../../b");
        assert_eq!(rel("/a/b/c", "/a/b/c/d"), "c/d");
        assert_eq!(rel("", "/x/y"), "/x/y");
    }

    #[test]
    fn directory_targets() {
        assert_eq!(rel("/a/b/", "/a/b/"), ".");
        assert_eq!(rel("/a/b/c", "/a/b/"), ".");
        assert_eq!(rel("/a/b/", "/a/"), "../");
        assert_eq!(rel("/a/b/", "/a/b/c/"), "c/");
    }

    #[test]
    fn query_and_fragment_are_appended() {
        assert_eq!(relative_path("/a/b/c", "/a/d", Some("q"), None), "../d?q");
        assert_eq!(relative_path("/a/b/", "/a/b/", Some("q"), Some("f")), ".?q#f");
    }
}
