//! Normalization.
//!
//! Normalization validates a string against its requested variant and
//! removes dot segments eagerly for every form that can stand alone, i.e.
//! anything with a scheme or a leading `/`. Dot segments of bare relative
//! references are preserved: they are meaningful only once the reference is
//! combined with a base, and removing them early would discard the
//! information needed to climb out of the base's last path segment.
//!
//! `..` segments that would climb above the root are clipped, as the
//! `remove_dot_segments` algorithm of [RFC 3986 section 5.2.4] specifies:
//! `/a/../../b` normalizes to `/b` and no error is raised.
//!
//! # Normalization of authority-less identifiers can fail
//!
//! `foo:.///bar` would normalize to scheme `foo`, no authority, and path
//! `//bar`. An identifier without authority (note that this is different
//! from "with empty authority") cannot have a path starting with `//`,
//! since it is ambiguous: `foo://bar` is decomposed as scheme `foo`,
//! authority `bar`, and empty path, which is a different identifier. Such
//! inputs are rejected with [`ErrorKind::Unrepresentable`].
//!
//! [RFC 3986 section 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4

use core::fmt;

#[cfg(feature = "std")]
use std::error;

use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::components::RiReferenceComponents;
use crate::parser::str::{find, rfind};
use crate::parser::validate::{split_scheme, validate_variant};
use crate::raw;
use crate::spec::Spec;
use crate::validate::{Error as ValidateError, Variant};

/// Normalization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// Inner error representation.
    repr: ErrorRepr,
}

/// Internal representation of `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorRepr {
    /// The input failed validation.
    Validate(ValidateError),
    /// The normalized result cannot be written back out without changing
    /// meaning (authority-less path starting with `//`).
    Unrepresentable,
}

impl Error {
    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::Validate(_) => ErrorKind::Invalid,
            ErrorRepr::Unrepresentable => ErrorKind::Unrepresentable,
        }
    }

    /// Returns the underlying validation error, if that is what failed.
    #[must_use]
    pub fn validation_error(&self) -> Option<ValidateError> {
        match self.repr {
            ErrorRepr::Validate(e) => Some(e),
            ErrorRepr::Unrepresentable => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            ErrorRepr::Validate(e) => e.fmt(f),
            ErrorRepr::Unrepresentable => {
                f.write_str("normalization failed: authority-less path would begin with \"//\"")
            }
        }
    }
}

impl From<ErrorRepr> for Error {
    #[inline]
    fn from(repr: ErrorRepr) -> Self {
        Self { repr }
    }
}

impl From<ValidateError> for Error {
    #[inline]
    fn from(e: ValidateError) -> Self {
        ErrorRepr::Validate(e).into()
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.repr {
            ErrorRepr::Validate(ref e) => Some(e),
            ErrorRepr::Unrepresentable => None,
        }
    }
}

/// Normalization error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input failed validation against the requested variant.
    Invalid,
    /// The normalized result cannot be represented.
    Unrepresentable,
}

/// Validates the string against the variant and normalizes it.
pub(crate) fn normalize<S: Spec>(i: &str, variant: Variant) -> Result<String, Error> {
    validate_variant::<S>(i, variant)?;
    normalize_validated(i)
}

/// Normalizes an already-validated reference.
pub(crate) fn normalize_validated(i: &str) -> Result<String, Error> {
    if split_scheme(i).is_none() && !i.starts_with('/') {
        // Bare relative reference: dot segments are kept unresolved.
        return Ok(i.to_owned());
    }
    let c = RiReferenceComponents::from_trusted(i);
    let path = remove_dot_segments(c.path);
    if c.authority.is_none() && path.starts_with("//") {
        return Err(ErrorRepr::Unrepresentable.into());
    }
    Ok(raw::recompose(c.scheme, c.authority, &path, c.query, c.fragment))
}

/// Removes dot segments from the path.
///
/// See <https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4>.
/// `..` segments that would climb above the root are discarded.
pub(crate) fn remove_dot_segments(mut input: &str) -> String {
    let mut output = String::new();
    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            // 2A.
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            // 2A.
            input = rest;
        } else if input.starts_with("/./") {
            // 2B.
            input = &input[2..];
        } else if input == "/." {
            // 2B.
            input = "/";
        } else if input.starts_with("/../") {
            // 2C.
            input = &input[3..];
            pop_last_segment(&mut output);
        } else if input == "/.." {
            // 2C.
            input = "/";
            pop_last_segment(&mut output);
        } else if input == "." || input == ".." {
            // 2D.
            input = "";
        } else {
            // 2E.
            let seg_end = match input.strip_prefix('/') {
                Some(after_slash) => find(after_slash.as_bytes(), b'/')
                    .map_or(input.len(), |pos| pos + 1),
                None => find(input.as_bytes(), b'/').map_or(input.len(), |pos| pos),
            };
            output.push_str(&input[..seg_end]);
            input = &input[seg_end..];
        }
    }
    output
}

/// Removes the last path segment and the preceding slash if any.
///
/// See <https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4>,
/// step 2C.
fn pop_last_segment(output: &mut String) {
    match rfind(output.as_bytes(), b'/') {
        Some(slash_pos) => output.truncate(slash_pos),
        None => output.clear(),
    }
}
