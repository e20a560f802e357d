//! Validating parsers for non-trusted (possibly invalid) input.

use crate::parser::char;
use crate::parser::str::find_split4_hole;
use crate::spec::Spec;
use crate::validate::{Error, Variant};

/// Returns `Ok(())` if every character of the string is allowed by the spec.
pub(crate) fn validate_chars<S: Spec>(i: &str, variant: Variant) -> Result<(), Error> {
    match i
        .char_indices()
        .find(|&(_, c)| char::is_excluded(c) || (!c.is_ascii() && !S::ALLOWS_NONASCII))
    {
        Some((position, _)) => Err(Error::forbidden_character(variant, position)),
        None => Ok(()),
    }
}

/// Returns `true` if the string matches `scheme`.
fn is_scheme(i: &str) -> bool {
    match i.as_bytes().split_first() {
        Some((first, rest)) => {
            first.is_ascii_alphabetic() && rest.iter().all(|&b| char::is_ascii_scheme_continue(b))
        }
        None => false,
    }
}

/// Splits a leading `scheme ":"` off the reference, if one is present.
///
/// Returns `None` for references whose colon appears after a slash, question
/// mark, or hash (e.g. `./a:b`), and for colon-led strings whose candidate
/// does not match the `scheme` rule (e.g. `1a:b`); both are path colons, not
/// scheme delimiters.
pub(crate) fn split_scheme(i: &str) -> Option<(&str, &str)> {
    match find_split4_hole(i, b':', b'/', b'?', b'#') {
        Some((scheme, b':', rest)) if is_scheme(scheme) => Some((scheme, rest)),
        _ => None,
    }
}

/// Returns `Ok(())` if the string satisfies the requested variant.
pub(crate) fn validate_variant<S: Spec>(i: &str, variant: Variant) -> Result<(), Error> {
    validate_chars::<S>(i, variant)?;
    let accepted = match variant {
        Variant::Absolute => matches!(split_scheme(i), Some((_, rest)) if !rest.is_empty()),
        Variant::Internal => split_scheme(i).is_some() || i.starts_with('/'),
        Variant::Relative => true,
    };
    if accepted {
        Ok(())
    } else {
        Err(Error::mismatched_variant(variant))
    }
}
