//! Reference resolution.
//!
//! [`resolve`] combines an absolute base with a reference, following the
//! strict algorithm of [RFC 3986 section 5]: a reference with its own scheme
//! replaces the base entirely, a reference with an authority replaces
//! everything after the scheme, and a schemeless, authority-less reference
//! is merged into the base's path hierarchy.
//!
//! Both operands are re-validated and re-normalized before the algorithm
//! runs, so resolution can fail with a validation error even for
//! already-constructed identifiers — e.g. when the base was validated under
//! `Variant::Relative` and is not actually absolute.
//!
//! # Opaque bases
//!
//! A base without an authority (e.g. `urn:example:root`) has no path
//! hierarchy a relative reference could be merged into. Resolving a
//! schemeless reference against such a base fails with
//! [`ErrorKind::Unresolvable`]; callers decide whether to recover.
//!
//! # Excess `..` segments
//!
//! `..` segments that would climb above the root are clipped:
//! `../../../g` against `http://a/b/c/d;p?q` resolves to `http://a/g`, and
//! no error is raised. See the crate documentation for the rationale.
//!
//! [RFC 3986 section 5]: https://datatracker.ietf.org/doc/html/rfc3986#section-5

use core::fmt;

#[cfg(feature = "std")]
use std::error;

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;

use crate::components::RiReferenceComponents;
use crate::normalize::{self, remove_dot_segments, Error as NormalizeError};
use crate::parser::str::rfind;
use crate::raw;
use crate::spec::Spec;
use crate::types::RiIdentifier;
use crate::validate::Variant;

/// Resolution error.
///
/// This type is also returned by the internalize/relativize operations,
/// which resolve their reference as a first step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Inner error representation.
    repr: ErrorRepr,
}

/// Internal representation of `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ErrorRepr {
    /// An operand failed validation or normalization.
    Normalize(NormalizeError),
    /// A schemeless reference was combined with the contained opaque base.
    Unresolvable(String),
}

impl Error {
    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::Normalize(ref e) => match e.kind() {
                normalize::ErrorKind::Invalid => ErrorKind::Invalid,
                normalize::ErrorKind::Unrepresentable => ErrorKind::Unrepresentable,
            },
            ErrorRepr::Unresolvable(_) => ErrorKind::Unresolvable,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            ErrorRepr::Normalize(ref e) => e.fmt(f),
            ErrorRepr::Unresolvable(ref base) => write!(
                f,
                "cannot resolve a relative reference against the opaque base <{}>",
                base
            ),
        }
    }
}

impl From<ErrorRepr> for Error {
    #[inline]
    fn from(repr: ErrorRepr) -> Self {
        Self { repr }
    }
}

impl From<NormalizeError> for Error {
    #[inline]
    fn from(e: NormalizeError) -> Self {
        ErrorRepr::Normalize(e).into()
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.repr {
            ErrorRepr::Normalize(ref e) => Some(e),
            ErrorRepr::Unresolvable(_) => None,
        }
    }
}

/// Resolution error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An operand failed validation against its required variant.
    Invalid,
    /// The result cannot be written back out without changing meaning.
    Unrepresentable,
    /// A schemeless reference was combined with an opaque base.
    Unresolvable,
}

/// Resolves the reference against the absolute base.
///
/// # Examples
///
/// ```
/// # #[derive(Debug)] struct Error;
/// # impl<S: iri_resolve::spec::Spec, T> From<iri_resolve::types::CreationError<S, T>> for Error {
/// #     fn from(_: iri_resolve::types::CreationError<S, T>) -> Self { Self } }
/// # impl From<iri_resolve::resolve::Error> for Error {
/// #     fn from(_: iri_resolve::resolve::Error) -> Self { Self } }
/// use iri_resolve::resolve::resolve;
/// use iri_resolve::types::IriIdentifier;
/// use iri_resolve::validate::Variant;
///
/// let base = IriIdentifier::new("http://a/b/c/d;p?q", Variant::Absolute)?;
///
/// let reference = IriIdentifier::new("../g", Variant::Relative)?;
/// assert_eq!(resolve(&base, &reference)?, "http://a/b/g");
///
/// // A reference with its own scheme replaces the base entirely.
/// let absolute = IriIdentifier::new("g:h", Variant::Relative)?;
/// assert_eq!(resolve(&base, &absolute)?, "g:h");
/// # Ok::<_, Error>(())
/// ```
///
/// An opaque base cannot absorb path-relative references:
///
/// ```
/// # #[derive(Debug)] struct Error;
/// # impl<S: iri_resolve::spec::Spec, T> From<iri_resolve::types::CreationError<S, T>> for Error {
/// #     fn from(_: iri_resolve::types::CreationError<S, T>) -> Self { Self } }
/// use iri_resolve::resolve::{resolve, ErrorKind};
/// use iri_resolve::types::IriIdentifier;
/// use iri_resolve::validate::Variant;
///
/// let base = IriIdentifier::new("urn:example:root", Variant::Absolute)?;
///
/// let absolute = IriIdentifier::new("urn:example:other", Variant::Relative)?;
/// assert_eq!(resolve(&base, &absolute).expect("has its own scheme"), "urn:example:other");
///
/// let relative = IriIdentifier::new("relative/ref", Variant::Relative)?;
/// let err = resolve(&base, &relative).expect_err("nothing to merge into");
/// assert_eq!(err.kind(), ErrorKind::Unresolvable);
/// # Ok::<_, Error>(())
/// ```
pub fn resolve<S: Spec>(
    base: &RiIdentifier<S>,
    reference: &RiIdentifier<S>,
) -> Result<RiIdentifier<S>, Error> {
    resolve_str::<S>(base.as_str(), reference.as_str()).map(RiIdentifier::new_trusted)
}

/// Re-normalizes both operands and resolves the reference against the base.
pub(crate) fn resolve_str<S: Spec>(base: &str, reference: &str) -> Result<String, Error> {
    let base = normalize::normalize::<S>(base, Variant::Absolute)?;
    let reference = normalize::normalize::<S>(reference, Variant::Relative)?;
    resolve_normalized(&base, &reference)
}

/// Resolves an already-normalized reference against an already-normalized
/// absolute base.
///
/// See <https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.2>.
pub(crate) fn resolve_normalized(base: &str, reference: &str) -> Result<String, Error> {
    let r = RiReferenceComponents::from_trusted(reference);
    if r.scheme.is_some() {
        // A reference with its own scheme replaces the base entirely, and
        // was already normalized on its own.
        return Ok(reference.to_owned());
    }
    let b = RiReferenceComponents::from_trusted(base);
    if b.authority.is_none() {
        // An opaque base has no hierarchy to merge into.
        return Err(ErrorRepr::Unresolvable(base.to_owned()).into());
    }
    let (authority, path, query) = if r.authority.is_some() {
        (r.authority, remove_dot_segments(r.path), r.query)
    } else if r.path.is_empty() {
        (b.authority, b.path.to_owned(), r.query.or(b.query))
    } else if r.path.starts_with('/') {
        (b.authority, remove_dot_segments(r.path), r.query)
    } else {
        (b.authority, remove_dot_segments(&merge(b.path, r.path)), r.query)
    };
    Ok(raw::recompose(b.scheme, authority, &path, query, r.fragment))
}

/// Merges the reference path onto the base path's directory.
///
/// See <https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.3>.
/// The base is known to have an authority here.
fn merge(base_path: &str, ref_path: &str) -> String {
    if base_path.is_empty() {
        return format!("/{}", ref_path);
    }
    let dir_end = rfind(base_path.as_bytes(), b'/').map_or(0, |pos| pos + 1);
    format!("{}{}", &base_path[..dir_end], ref_path)
}

/// A resolver against the fixed base.
///
/// The base is validated and normalized once at construction, which is the
/// cheaper arrangement when many references are resolved against the same
/// base, e.g. a namespace table mapping term names to identifiers under a
/// common root.
///
/// # Examples
///
/// ```
/// # #[derive(Debug)] struct Error;
/// # impl<S: iri_resolve::spec::Spec, T> From<iri_resolve::types::CreationError<S, T>> for Error {
/// #     fn from(_: iri_resolve::types::CreationError<S, T>) -> Self { Self } }
/// # impl From<iri_resolve::resolve::Error> for Error {
/// #     fn from(_: iri_resolve::resolve::Error) -> Self { Self } }
/// use iri_resolve::resolve::FixedBaseResolver;
/// use iri_resolve::types::IriIdentifier;
/// use iri_resolve::validate::Variant;
///
/// let base = IriIdentifier::new("http://example.com/base/", Variant::Absolute)?;
/// let resolver = FixedBaseResolver::new(&base)?;
///
/// let reference = IriIdentifier::new("../there", Variant::Relative)?;
/// assert_eq!(resolver.resolve(&reference)?, "http://example.com/there");
/// # Ok::<_, Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FixedBaseResolver<S: Spec> {
    /// The normalized base.
    base: RiIdentifier<S>,
}

impl<S: Spec> FixedBaseResolver<S> {
    /// Creates a new resolver with the given base.
    pub fn new(base: &RiIdentifier<S>) -> Result<Self, Error> {
        let normalized = normalize::normalize::<S>(base.as_str(), Variant::Absolute)?;
        Ok(Self {
            base: RiIdentifier::new_trusted(normalized),
        })
    }

    /// Returns the base.
    #[must_use]
    pub fn base(&self) -> &RiIdentifier<S> {
        &self.base
    }

    /// Resolves the given reference against the fixed base.
    pub fn resolve(&self, reference: &RiIdentifier<S>) -> Result<RiIdentifier<S>, Error> {
        let reference = normalize::normalize::<S>(reference.as_str(), Variant::Relative)?;
        resolve_normalized(self.base.as_str(), &reference).map(RiIdentifier::new_trusted)
    }
}
