//! Validators.

use core::fmt;

#[cfg(feature = "std")]
use std::error;

use crate::parser;
use crate::spec::Spec;

/// Validation variant: the acceptance policy a string is checked against.
///
/// The variant is a property of validation, not of the resulting value. A
/// reference accepted under [`Variant::Relative`] may well be absolute;
/// operations that need a specific shape re-validate their operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// A scheme followed by a non-empty scheme-specific part.
    Absolute,
    /// A root-relative path beginning with `/`, or an opaque form with a
    /// scheme.
    Internal,
    /// Any reference: absolute, internal, or a bare relative path.
    Relative,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Absolute => "absolute",
            Variant::Internal => "internal",
            Variant::Relative => "relative",
        };
        f.write_str(name)
    }
}

/// Resource identifier validation error.
// Note that this type should implement `Copy` trait.
// To return additional non-`Copy` data as an error, use wrapper type
// (as `types::CreationError` carries the source value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// Variant the rejected string was validated against.
    variant: Variant,
    /// Inner error representation.
    repr: ErrorRepr,
}

/// Internal representation of `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorRepr {
    /// A character from the excluded set (or outside ASCII for URIs), at the
    /// given byte position.
    ForbiddenCharacter(usize),
    /// The string does not have the shape the variant requires.
    MismatchedVariant,
}

impl Error {
    /// Creates an error for a forbidden character at the given byte position.
    #[inline]
    pub(crate) fn forbidden_character(variant: Variant, position: usize) -> Self {
        Self {
            variant,
            repr: ErrorRepr::ForbiddenCharacter(position),
        }
    }

    /// Creates an error for a string that does not match the variant.
    #[inline]
    pub(crate) fn mismatched_variant(variant: Variant) -> Self {
        Self {
            variant,
            repr: ErrorRepr::MismatchedVariant,
        }
    }

    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::ForbiddenCharacter(_) => ErrorKind::ForbiddenCharacter,
            ErrorRepr::MismatchedVariant => ErrorKind::MismatchedVariant,
        }
    }

    /// Returns the variant the rejected string was validated against.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the byte position of the forbidden character, if that is what
    /// was rejected.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self.repr {
            ErrorRepr::ForbiddenCharacter(position) => Some(position),
            ErrorRepr::MismatchedVariant => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            ErrorRepr::ForbiddenCharacter(position) => write!(
                f,
                "forbidden character at byte {} in {} resource identifier",
                position, self.variant
            ),
            ErrorRepr::MismatchedVariant => write!(
                f,
                "string does not match the {} identifier variant",
                self.variant
            ),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl error::Error for Error {}

/// Validation error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character from the excluded set (or outside ASCII for URIs) is
    /// present.
    ForbiddenCharacter,
    /// The string does not have the shape the requested variant requires.
    MismatchedVariant,
}

/// Validates an absolute identifier: a scheme and a non-empty
/// scheme-specific part.
///
/// # Examples
///
/// ```
/// use iri_resolve::spec::{IriSpec, UriSpec};
/// use iri_resolve::validate;
///
/// assert!(validate::absolute::<UriSpec>("http://example.com/a").is_ok());
/// assert!(validate::absolute::<UriSpec>("urn:example:1").is_ok());
///
/// // The scheme-specific part must not be empty.
/// assert!(validate::absolute::<UriSpec>("scheme:").is_err());
/// // A scheme is required.
/// assert!(validate::absolute::<IriSpec>("a/b/c").is_err());
/// ```
pub fn absolute<S: Spec>(s: &str) -> Result<(), Error> {
    parser::validate::validate_variant::<S>(s, Variant::Absolute)
}

/// Validates an internal identifier: a root-relative path beginning with
/// `/`, or an opaque form with a scheme.
///
/// # Examples
///
/// ```
/// use iri_resolve::spec::UriSpec;
/// use iri_resolve::validate;
///
/// assert!(validate::internal::<UriSpec>("/a/b?q").is_ok());
/// assert!(validate::internal::<UriSpec>("urn:example:1").is_ok());
/// assert!(validate::internal::<UriSpec>("a/b").is_err());
/// ```
pub fn internal<S: Spec>(s: &str) -> Result<(), Error> {
    parser::validate::validate_variant::<S>(s, Variant::Internal)
}

/// Validates a relative reference. Any of the three forms is accepted, so
/// this only rejects forbidden characters.
///
/// # Examples
///
/// ```
/// use iri_resolve::spec::{IriSpec, UriSpec};
/// use iri_resolve::validate;
///
/// assert!(validate::relative::<UriSpec>("../g").is_ok());
/// assert!(validate::relative::<UriSpec>("http://example.com/").is_ok());
///
/// // Whitespace is always rejected.
/// assert!(validate::relative::<UriSpec>("a b").is_err());
/// // Non-ASCII characters are IRI-only.
/// assert!(validate::relative::<UriSpec>("r\u{E9}sum\u{E9}").is_err());
/// assert!(validate::relative::<IriSpec>("r\u{E9}sum\u{E9}").is_ok());
/// ```
pub fn relative<S: Spec>(s: &str) -> Result<(), Error> {
    parser::validate::validate_variant::<S>(s, Variant::Relative)
}

/// Validates the string against the given variant.
pub fn variant<S: Spec>(s: &str, variant: Variant) -> Result<(), Error> {
    parser::validate::validate_variant::<S>(s, variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::spec::UriSpec;

    #[test]
    fn error_context() {
        let e = absolute::<UriSpec>("a b").expect_err("whitespace is forbidden");
        assert_eq!(e.kind(), ErrorKind::ForbiddenCharacter);
        assert_eq!(e.variant(), Variant::Absolute);
        assert_eq!(e.position(), Some(1));

        let e = internal::<UriSpec>("a/b").expect_err("no scheme, no leading slash");
        assert_eq!(e.kind(), ErrorKind::MismatchedVariant);
        assert_eq!(e.variant(), Variant::Internal);
        assert_eq!(e.position(), None);
    }

    #[test]
    fn character_check_runs_first() {
        // Both checks would fail; the character check is reported.
        let e = absolute::<UriSpec>("a b").expect_err("should fail");
        assert_eq!(e.kind(), ErrorKind::ForbiddenCharacter);
    }
}
