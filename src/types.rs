//! Validated resource identifier types.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

#[cfg(feature = "std")]
use std::error;

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::components::RiReferenceComponents;
use crate::normalize::{self, Error as NormalizeError};
use crate::relative;
use crate::resolve;
use crate::spec::{IriSpec, Spec, UriSpec};
use crate::validate::Variant;

/// A validated, normalized resource identifier.
///
/// The inner string is guaranteed to contain no forbidden characters and —
/// for forms with a scheme or a leading `/` — no unresolved dot segments.
/// Values are immutable; every operation that derives an identifier returns
/// a newly constructed one.
///
/// Use the [`UriIdentifier`] and [`IriIdentifier`] aliases rather than
/// naming the spec parameter directly.
pub struct RiIdentifier<S> {
    /// Inner string.
    inner: String,
    /// Spec.
    _spec: PhantomData<fn() -> S>,
}

/// A validated URI (ASCII-only), per RFC 3986.
pub type UriIdentifier = RiIdentifier<UriSpec>;

/// A validated IRI, per RFC 3987.
pub type IriIdentifier = RiIdentifier<IriSpec>;

impl<S: Spec> RiIdentifier<S> {
    /// Validates the string against the variant and normalizes it.
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_resolve::types::{IriIdentifier, UriIdentifier};
    /// use iri_resolve::validate::Variant;
    ///
    /// let absolute = IriIdentifier::new("http://a/b/c/../d", Variant::Absolute)?;
    /// assert_eq!(absolute, "http://a/b/d");
    ///
    /// // Dot segments of bare relative references are preserved.
    /// let relative = IriIdentifier::new("../g", Variant::Relative)?;
    /// assert_eq!(relative, "../g");
    ///
    /// // URIs reject non-ASCII characters.
    /// assert!(UriIdentifier::new("http://example.com/\u{3042}", Variant::Absolute).is_err());
    /// # Ok::<_, iri_resolve::types::CreationError<iri_resolve::spec::IriSpec, String>>(())
    /// ```
    pub fn new<T: Into<String>>(value: T, variant: Variant) -> Result<Self, CreationError<S, String>> {
        let value = value.into();
        match normalize::normalize::<S>(&value, variant) {
            Ok(normalized) => Ok(Self::new_trusted(normalized)),
            Err(e) => Err(CreationError::new(e, value)),
        }
    }

    /// Creates a new identifier from the output of a normalizing operation.
    ///
    /// # Precondition
    ///
    /// The given string must be the result of normalization, resolution, or
    /// relativization of validated operands.
    pub(crate) fn new_trusted(inner: String) -> Self {
        debug_assert!(
            crate::parser::validate::validate_chars::<S>(&inner, Variant::Relative).is_ok(),
            "[consistency] derived identifiers must contain no forbidden characters, but got {:?}",
            inner
        );
        Self {
            inner,
            _spec: PhantomData,
        }
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the inner string.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Returns the length of the identifier in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the identifier is the empty reference.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the scheme, if present.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        RiReferenceComponents::from_trusted(self.as_str()).scheme
    }

    /// Returns the authority, if present.
    ///
    /// Note that this can be `Some("")`, which is different from `None`.
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        RiReferenceComponents::from_trusted(self.as_str()).authority
    }

    /// Returns the path.
    #[must_use]
    pub fn path(&self) -> &str {
        RiReferenceComponents::from_trusted(self.as_str()).path
    }

    /// Returns the query, if present.
    ///
    /// The leading `?` is not included.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        RiReferenceComponents::from_trusted(self.as_str()).query
    }

    /// Returns the fragment, if present.
    ///
    /// The leading `#` is not included.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        RiReferenceComponents::from_trusted(self.as_str()).fragment
    }

    /// Returns `true` if the identifier has no authority component.
    ///
    /// An absolute identifier without authority (e.g. `urn:example:1`) is
    /// opaque: it has no path hierarchy to merge into, and only its scheme
    /// takes part in origin comparison.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.authority().is_none()
    }

    /// Resolves `self` as a reference against the given absolute base.
    ///
    /// Equivalent to [`resolve::resolve`]`(base, self)`.
    #[inline]
    pub fn resolve_against(&self, base: &Self) -> Result<Self, resolve::Error> {
        resolve::resolve(base, self)
    }

    /// Internalizes `self` against the given absolute base.
    ///
    /// Equivalent to [`relative::internalize`]`(base, self)`.
    #[inline]
    pub fn internalize_against(&self, base: &Self) -> Result<Self, resolve::Error> {
        relative::internalize(base, self)
    }

    /// Relativizes `self` against the given absolute base.
    ///
    /// Equivalent to [`relative::relativize`]`(base, self)`.
    #[inline]
    pub fn relativize_against(&self, base: &Self) -> Result<Self, resolve::Error> {
        relative::relativize(base, self)
    }
}

impl<S: Spec> Clone for RiIdentifier<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _spec: PhantomData,
        }
    }
}

impl<S: Spec> fmt::Debug for RiIdentifier<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RiIdentifier").field(&self.inner).finish()
    }
}

impl<S: Spec> fmt::Display for RiIdentifier<S> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl<S: Spec> PartialEq for RiIdentifier<S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<S: Spec> Eq for RiIdentifier<S> {}

impl<S: Spec> PartialOrd for RiIdentifier<S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Spec> Ord for RiIdentifier<S> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl<S: Spec> Hash for RiIdentifier<S> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<S: Spec> AsRef<str> for RiIdentifier<S> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<S: Spec> core::borrow::Borrow<str> for RiIdentifier<S> {
    #[inline]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<S: Spec> From<RiIdentifier<S>> for String {
    #[inline]
    fn from(v: RiIdentifier<S>) -> Self {
        v.inner
    }
}

/// Implements comparison against a plain string type.
macro_rules! impl_cmp {
    ($ty:ty) => {
        impl<S: Spec> PartialEq<$ty> for RiIdentifier<S> {
            #[inline]
            fn eq(&self, other: &$ty) -> bool {
                AsRef::<str>::as_ref(self) == AsRef::<str>::as_ref(other)
            }
        }
        impl<S: Spec> PartialEq<RiIdentifier<S>> for $ty {
            #[inline]
            fn eq(&self, other: &RiIdentifier<S>) -> bool {
                AsRef::<str>::as_ref(self) == AsRef::<str>::as_ref(other)
            }
        }
        impl<S: Spec> PartialOrd<$ty> for RiIdentifier<S> {
            #[inline]
            fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                AsRef::<str>::as_ref(self).partial_cmp(AsRef::<str>::as_ref(other))
            }
        }
        impl<S: Spec> PartialOrd<RiIdentifier<S>> for $ty {
            #[inline]
            fn partial_cmp(&self, other: &RiIdentifier<S>) -> Option<Ordering> {
                AsRef::<str>::as_ref(self).partial_cmp(AsRef::<str>::as_ref(other))
            }
        }
    };
}

impl_cmp!(str);
impl_cmp!(&str);
impl_cmp!(String);

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<S: Spec> Serialize for RiIdentifier<S> {
    #[inline]
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de, S: Spec> Deserialize<'de> for RiIdentifier<S> {
    /// Deserializes a string and validates it under [`Variant::Relative`],
    /// the accept-anything policy; a serialized identifier carries no
    /// variant tag. Callers wanting a stricter shape re-validate with
    /// [`RiIdentifier::new`].
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s, Variant::Relative).map_err(serde::de::Error::custom)
    }
}

/// Error on conversion into an identifier type.
///
/// The rejected source value is carried along and can be taken back with
/// [`CreationError::into_source`].
pub struct CreationError<S, T> {
    /// Source data.
    source: T,
    /// Error.
    error: NormalizeError,
    /// Spec.
    _spec: PhantomData<fn() -> S>,
}

impl<S: Spec, T> CreationError<S, T> {
    /// Returns the source data.
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_resolve::types::UriIdentifier;
    /// use iri_resolve::validate::Variant;
    ///
    /// let e = UriIdentifier::new("not absolute", Variant::Absolute)
    ///     .expect_err("whitespace is forbidden");
    /// assert_eq!(e.into_source(), "not absolute");
    /// ```
    #[must_use]
    pub fn into_source(self) -> T {
        self.source
    }

    /// Returns the normalization error.
    #[must_use]
    pub fn error(&self) -> NormalizeError {
        self.error
    }

    /// Creates a new `CreationError`.
    pub(crate) fn new(error: NormalizeError, source: T) -> Self {
        Self {
            source,
            error,
            _spec: PhantomData,
        }
    }
}

impl<S: Spec, T: fmt::Debug> fmt::Debug for CreationError<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreationError")
            .field("source", &self.source)
            .field("error", &self.error)
            .finish()
    }
}

impl<S: Spec, T: Clone> Clone for CreationError<S, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            error: self.error,
            _spec: PhantomData,
        }
    }
}

impl<S: Spec, T: fmt::Debug> fmt::Display for CreationError<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.error, self.source)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<S: Spec, T: fmt::Debug> error::Error for CreationError<S, T> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::normalize::ErrorKind;
    use crate::validate::ErrorKind as ValidateErrorKind;

    #[test]
    fn accessors() {
        let id = IriIdentifier::new("foo://user@example.com:8042/over/there?name=ferret#nose", Variant::Absolute)
            .expect("valid");
        assert_eq!(id.scheme(), Some("foo"));
        assert_eq!(id.authority(), Some("user@example.com:8042"));
        assert_eq!(id.path(), "/over/there");
        assert_eq!(id.query(), Some("name=ferret"));
        assert_eq!(id.fragment(), Some("nose"));
        assert!(!id.is_opaque());

        let urn = IriIdentifier::new("urn:example:1", Variant::Absolute).expect("valid");
        assert_eq!(urn.scheme(), Some("urn"));
        assert_eq!(urn.authority(), None);
        assert_eq!(urn.path(), "example:1");
        assert!(urn.is_opaque());
    }

    #[test]
    fn comparisons() {
        let a = UriIdentifier::new("/a/b", Variant::Internal).expect("valid");
        let b = UriIdentifier::new("/a/x/../b", Variant::Internal).expect("valid");
        assert_eq!(a, b, "normalization happens before comparison");
        assert_eq!(a, "/a/b");
        assert_eq!("/a/b", a);
        assert_eq!(a, String::from("/a/b"));
        assert!(a < UriIdentifier::new("/a/c", Variant::Internal).expect("valid"));
    }

    #[test]
    fn creation_error_context() {
        let e = UriIdentifier::new("a b", Variant::Relative).expect_err("whitespace");
        assert_eq!(e.error().kind(), ErrorKind::Invalid);
        let inner = e.error().validation_error().expect("validation failure");
        assert_eq!(inner.kind(), ValidateErrorKind::ForbiddenCharacter);
        assert_eq!(inner.position(), Some(1));
        assert_eq!(e.into_source(), "a b");

        let e = UriIdentifier::new("foo:.///bar", Variant::Absolute).expect_err("unrepresentable");
        assert_eq!(e.error().kind(), ErrorKind::Unrepresentable);
        assert_eq!(e.error().validation_error(), None);
    }
}
