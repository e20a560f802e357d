//! Resolution engine for [RFC 3986] URIs and [RFC 3987] IRIs.
//!
//! This crate validates, normalizes, resolves, internalizes, and relativizes
//! resource identifier strings. It has no extra knowledge about protocols:
//! the authority component is treated opaquely, and no percent-encoding or
//! IDNA processing is performed.
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//! [RFC 3987]: https://tools.ietf.org/html/rfc3987
//!
//! # Variants
//!
//! A string is validated against a requested [`Variant`][`validate::Variant`]:
//!
//! * `Absolute`: a scheme followed by a non-empty scheme-specific part,
//!   e.g. `http://example.com/a` or `urn:example:1`.
//! * `Internal`: a root-relative path beginning with `/`, or (for opaque
//!   schemes) any form with a scheme.
//! * `Relative`: any reference, including the two forms above and bare
//!   relative paths such as `../sibling`.
//!
//! Validation is the only entry point: [`types::RiIdentifier`] values are
//! constructed once and immutable afterwards, so every operation can trust
//! that its operands contain no forbidden characters and (for absolute and
//! root-relative forms) no unresolved dot segments.
//!
//! ```
//! # #[derive(Debug)] struct Error;
//! # #[cfg(feature = "alloc")]
//! # impl<S: iri_resolve::spec::Spec, T> From<iri_resolve::types::CreationError<S, T>> for Error {
//! #     fn from(_: iri_resolve::types::CreationError<S, T>) -> Self { Self } }
//! # #[cfg(feature = "alloc")] {
//! use iri_resolve::types::IriIdentifier;
//! use iri_resolve::validate::Variant;
//!
//! let id = IriIdentifier::new("/a/b/../c", Variant::Internal)?;
//! assert_eq!(id, "/a/c");
//! # }
//! # Ok::<_, Error>(())
//! ```
//!
//! # `std` and `alloc` support
//!
//! This crate supports `no_std` usage.
//!
//! * `alloc` feature:
//!     + Std library or `alloc` crate is required.
//!     + This feature enables everything that constructs new identifier
//!       values, i.e. the `types`, `normalize`, `resolve`, `relative`, and
//!       `problem` modules.
//! * `std` feature (**enabled by default**):
//!     + Std library is required.
//!     + This automatically enables `alloc` feature.
//!     + The feature lets the crate utilize std-specific stuff, such as the
//!       `std::error::Error` trait.
//! * Without neither of them:
//!     + Only the validators in the `validate` module are available.
//!
//! # Rationale
//!
//! ## Dot segments are removed eagerly, except for bare relative references
//!
//! `/a/b/../c` can be normalized to `/a/c` on its own, and `Absolute` and
//! `Internal` identifiers are never combined with anything else, so their
//! dot segments are removed at construction time. A bare relative reference
//! such as `../g` is different: removing its `..` before resolution would
//! silently discard the information needed to climb out of the base's last
//! path segment, so normalization of bare relative references is a no-op
//! beyond the character checks.
//!
//! ## Excess `..` segments are clipped to the root
//!
//! Resolving `../../../g` against `http://a/b/c/d;p?q` yields `http://a/g`:
//! `..` segments that would climb above the root are silently discarded, as
//! the `remove_dot_segments` algorithm of RFC 3986 section 5.2.4 specifies
//! and as common URL libraries behave. No error is raised for this case, so
//! resolution is total for any syntactically valid hierarchical input.
//!
//! ## Normalization of authority-less identifiers can fail
//!
//! `foo:.///bar` would normalize to scheme `foo`, no authority, and path
//! `//bar`. That combination cannot be written back out: the string
//! `foo://bar` is decomposed as scheme `foo`, authority `bar`, and empty
//! path, which is a different identifier. Such normalization results are
//! rejected with [`normalize::ErrorKind::Unrepresentable`] instead of being
//! reinterpreted.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub(crate) mod components;
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod normalize;
pub(crate) mod parser;
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod problem;
#[cfg(feature = "alloc")]
pub(crate) mod raw;
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod relative;
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod resolve;
pub mod spec;
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod types;
pub mod validate;
