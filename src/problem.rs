//! Problem details for error reporting.
//!
//! [`Problem`] is the data shape handed to error-reporting layers, modeled
//! after [RFC 7807] Problem Details. This crate only ever populates the
//! `detail` member (a human-readable message); the HTTP-specific members
//! (`status`, `title`, `type`, `instance`) and the structured `report`
//! payload are filled in by the layer that wraps network responses.
//!
//! [RFC 7807]: https://datatracker.ietf.org/doc/html/rfc7807

use core::fmt;

use alloc::string::{String, ToString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RFC 7807 problem details record.
///
/// Every member is optional, and absent members are skipped on
/// serialization. `R` is the type of the structured `report` payload
/// attached by the reporting layer; this crate never constructs one itself.
///
/// # Examples
///
/// ```
/// use iri_resolve::problem::Problem;
/// use iri_resolve::types::UriIdentifier;
/// use iri_resolve::validate::Variant;
///
/// let err = UriIdentifier::new("a/b", Variant::Internal)
///     .expect_err("neither scheme nor leading slash");
/// let problem: Problem = Problem::from_error(&err)
///     .with_status(422)
///     .with_title("invalid identifier");
///
/// assert_eq!(problem.status(), Some(422));
/// assert!(problem.detail().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Problem<R = ()> {
    /// HTTP status code, if the problem was produced by a response.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    status: Option<u16>,
    /// Short, human-readable summary of the problem type.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    title: Option<String>,
    /// Identifier of the problem type.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", skip_serializing_if = "Option::is_none")
    )]
    type_uri: Option<String>,
    /// Identifier of the specific occurrence.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    instance: Option<String>,
    /// Human-readable explanation of this occurrence.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    detail: Option<String>,
    /// Structured payload attached by the reporting layer.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    report: Option<R>,
}

impl<R> Default for Problem<R> {
    fn default() -> Self {
        Self {
            status: None,
            title: None,
            type_uri: None,
            instance: None,
            detail: None,
            report: None,
        }
    }
}

impl<R> Problem<R> {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record whose `detail` is the given error's message.
    #[must_use]
    pub fn from_error<E: fmt::Display>(error: &E) -> Self {
        Self {
            detail: Some(error.to_string()),
            ..Self::default()
        }
    }

    /// Sets the HTTP status code.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the summary of the problem type.
    #[must_use]
    pub fn with_title<T: Into<String>>(mut self, title: T) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the identifier of the problem type.
    #[must_use]
    pub fn with_type_uri<T: Into<String>>(mut self, type_uri: T) -> Self {
        self.type_uri = Some(type_uri.into());
        self
    }

    /// Sets the identifier of the specific occurrence.
    #[must_use]
    pub fn with_instance<T: Into<String>>(mut self, instance: T) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Sets the human-readable explanation.
    #[must_use]
    pub fn with_detail<T: Into<String>>(mut self, detail: T) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attaches the structured payload.
    #[must_use]
    pub fn with_report(mut self, report: R) -> Self {
        self.report = Some(report);
        self
    }

    /// Returns the HTTP status code, if set.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the summary of the problem type, if set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the identifier of the problem type, if set.
    #[must_use]
    pub fn type_uri(&self) -> Option<&str> {
        self.type_uri.as_deref()
    }

    /// Returns the identifier of the specific occurrence, if set.
    #[must_use]
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// Returns the human-readable explanation, if set.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Returns the structured payload, if set.
    #[must_use]
    pub fn report(&self) -> Option<&R> {
        self.report.as_ref()
    }
}
