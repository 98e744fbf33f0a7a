//! Parse error types for authored answer values.

use thiserror::Error;

/// An error that occurred while parsing an authored value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A syntax error at a 1-based column of the input.
    #[error("syntax error at column {column}: {message}")]
    Syntax { column: usize, message: String },

    /// The input ended (or was blank) where a value was expected.
    #[error("unexpected end of input at column {column}")]
    UnexpectedEof { column: usize },

    /// The text parsed but does not describe a valid value.
    #[error("invalid value: {message}")]
    Invalid { message: String },
}
