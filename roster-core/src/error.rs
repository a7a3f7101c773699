//! Error types for roster parsing and the player list cipher.

use thiserror::Error;

/// Broad classification of a [`RosterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed CSV input or a name that cannot be written as CSV.
    Format,
    /// A bad argument to the cipher (empty password, non-base64 text).
    InvalidArgument,
}

/// The error type for every fallible operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A data row did not split into exactly a name and a skill level.
    #[error(
        "error on line {line}: invalid CSV format - each line must have name and skill level, found {fields} field(s)\nline content: {content}"
    )]
    FieldCount {
        line: usize,
        fields: usize,
        content: String,
    },

    /// The second field of a row is not one of the declared skill level names.
    #[error("error on line {line}: invalid skill level '{value}'\nline content: {content}")]
    UnknownSkillLevel {
        line: usize,
        value: String,
        content: String,
    },

    /// A name with an odd number of `"` characters can't be quoted unambiguously.
    #[error("name contains an unterminated quote: {name}")]
    UnterminatedQuote { name: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::FieldCount { .. }
            | RosterError::UnknownSkillLevel { .. }
            | RosterError::UnterminatedQuote { .. } => ErrorKind::Format,
            RosterError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    /// 1-based data line the error refers to, if it came from a CSV row.
    pub fn line(&self) -> Option<usize> {
        match self {
            RosterError::FieldCount { line, .. } | RosterError::UnknownSkillLevel { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        RosterError::InvalidArgument(msg.into())
    }
}

/// A convenience `Result` type alias using the crate's `RosterError` type.
pub type Result<T> = std::result::Result<T, RosterError>;
