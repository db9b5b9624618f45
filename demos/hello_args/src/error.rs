//! Error types for the `hello_args` demo.
//!
//! `HelloArgsError` wraps argument parsing failures alongside local
//! validation issues so `main` renders one concise diagnostic.
use std::io;

use argfold::ParseError;
use thiserror::Error;

/// Convenience alias for fallible demo operations.
pub type Result<T> = std::result::Result<T, HelloArgsError>;

/// Errors raised by the demo.
#[derive(Debug, Error)]
pub enum HelloArgsError {
    /// The command line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Parsed options were inconsistent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Writing the greeting failed.
    #[error("failed to write greeting: {0}")]
    Io(#[from] io::Error),
}

/// Validation issues detected after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Mutually exclusive delivery modes were enabled simultaneously.
    #[error("cannot combine --excited with --quiet")]
    ConflictingDeliveryModes,
    /// A recipient collapsed to nothing after trimming.
    #[error("recipients must contain visible characters (index {0})")]
    BlankRecipient(usize),
}
