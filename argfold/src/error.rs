//! Error types produced while scanning arguments.

use thiserror::Error;

/// Convenient alias for results returned by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that terminate a parse.
///
/// The `Display` output of each variant is the message a command-line tool
/// would show its user. Validator rejections are surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A lone `-` appeared where a name was expected.
    #[error("- is not a valid flag or option name")]
    LoneDash,

    /// A name has no handler in the [`crate::Spec`].
    #[error("{name} is unrecognized")]
    Unrecognized {
        /// Name as it appeared, or as expanded from a short cluster.
        name: String,
    },

    /// An option was the last argument, leaving nothing to consume.
    #[error("{name} requires a value")]
    MissingValue {
        /// Option name that was left without a value.
        name: String,
    },

    /// An option's validator refused the supplied value.
    #[error("{message}")]
    Rejected {
        /// Option name whose validator failed.
        name: String,
        /// Raw value handed to the validator.
        value: String,
        /// Message returned by the validator.
        message: String,
    },
}

impl ParseError {
    /// Returns the flag or option name that caused the failure, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use argfold::ParseError;
    ///
    /// let err = ParseError::MissingValue { name: "--email".into() };
    /// assert_eq!(err.name(), Some("--email"));
    /// assert_eq!(ParseError::LoneDash.name(), None);
    /// ```
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::LoneDash => None,
            Self::Unrecognized { name }
            | Self::MissingValue { name }
            | Self::Rejected { name, .. } => Some(name),
        }
    }
}
