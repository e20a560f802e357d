//! Components of references.

use crate::parser::trusted as trusted_parser;

/// Components of a reference.
///
/// See <https://tools.ietf.org/html/rfc3986#section-5.2.2>.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RiReferenceComponents<'a> {
    /// Scheme.
    pub(crate) scheme: Option<&'a str>,
    /// Authority.
    ///
    /// Note that this can be `Some("")`.
    pub(crate) authority: Option<&'a str>,
    /// Path.
    pub(crate) path: &'a str,
    /// Query.
    pub(crate) query: Option<&'a str>,
    /// Fragment.
    pub(crate) fragment: Option<&'a str>,
}

impl<'a> RiReferenceComponents<'a> {
    /// Decomposes an already-validated reference.
    #[inline]
    #[must_use]
    pub(crate) fn from_trusted(i: &'a str) -> Self {
        trusted_parser::decompose(i)
    }

    /// Returns `true` if the two references share an origin.
    ///
    /// The origin of a hierarchical reference (authority present) is the
    /// scheme compared case-insensitively plus the authority compared
    /// exactly. A reference with no authority is opaque, and only its scheme
    /// takes part in the comparison. The scheme-only rule for opaque
    /// references is a deliberate simplification: widening it to a
    /// full-origin comparison would change internalize/relativize results
    /// for opaque schemes.
    #[must_use]
    pub(crate) fn same_origin(&self, other: &Self) -> bool {
        let scheme_matches = match (self.scheme, other.scheme) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            (None, None) => true,
            _ => false,
        };
        scheme_matches && self.authority == other.authority
    }
}
