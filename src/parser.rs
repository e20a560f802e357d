//! Parsers.

pub(crate) mod char;
pub(crate) mod str;
#[cfg(feature = "alloc")]
pub(crate) mod trusted;
pub(crate) mod validate;
