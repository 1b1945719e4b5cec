//! Moderation record errors

use std::fmt;

use thiserror::Error;

/// Broad category of a [`ModerationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A supplied value did not satisfy a record's field contract
    Validation,
    /// A record type's own field table is misconfigured
    Schema,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Schema => write!(f, "schema"),
        }
    }
}

/// Errors that can occur while building a moderation record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModerationError {
    /// A field received a value of the wrong type
    #[error("Invalid value for `{field}`: expected {expected}, found {found}")]
    InvalidType {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// A field that the record does not declare was supplied
    #[error("Unknown field `{field}` for {record}")]
    UnknownField { record: &'static str, field: String },

    /// The payload was not a key/value object
    #[error("Expected an object for {record}, found {found}")]
    NotAnObject { record: &'static str, found: String },

    /// The payload could not be decoded at all
    #[error("Malformed payload for {record}: {reason}")]
    MalformedPayload { record: &'static str, reason: String },

    /// The record's field table is inconsistent
    #[error("Invalid schema for {record}: {reason}")]
    InvalidSchema { record: &'static str, reason: String },
}

impl ModerationError {
    /// Create an invalid type error
    pub fn invalid_type(
        field: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected,
            found: found.into(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(record: &'static str, field: impl Into<String>) -> Self {
        Self::UnknownField {
            record,
            field: field.into(),
        }
    }

    /// Create a schema error
    pub fn invalid_schema(record: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            record,
            reason: reason.into(),
        }
    }

    /// Which of the two error categories this error belongs to
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. }
            | Self::UnknownField { .. }
            | Self::NotAnObject { .. }
            | Self::MalformedPayload { .. } => ErrorKind::Validation,
            Self::InvalidSchema { .. } => ErrorKind::Schema,
        }
    }

    /// Name of the offending field, if the error concerns a single field
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidType { field, .. } | Self::UnknownField { field, .. } => {
                Some(field.as_str())
            },
            Self::NotAnObject { .. }
            | Self::MalformedPayload { .. }
            | Self::InvalidSchema { .. } => None,
        }
    }
}

/// Result alias for moderation record operations
pub type Result<T> = std::result::Result<T, ModerationError>;
