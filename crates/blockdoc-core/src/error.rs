//! Error types.
//!
//! Converting between Markdown and blocks never fails. Errors only arise at
//! the edges: decoding stored JSON and validating reflection submissions.

use thiserror::Error;

/// Errors raised by storage decoding and document validation.
#[derive(Debug, Error)]
pub enum Error {
    /// Stored content was not valid Portable Text JSON.
    #[error("invalid stored content: {0}")]
    Json(#[from] serde_json::Error),

    /// A required submission field was absent or blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The date was not a `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl Error {
    /// Name of the offending submission field, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::MissingField(field) => Some(*field),
            Error::InvalidDate(_) => Some("date"),
            Error::Json(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
