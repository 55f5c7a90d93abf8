//! Error types for parsing profile databases.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while reading a profile database.

use crate::model::IndexError;
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use std::error::Error;
use std::fmt;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while parsing a profile database.
#[derive(PartialEq, Debug, Clone, thiserror::Error)]
pub enum ParsingErrorType {
    /// Reading the input failed.
    #[error("IO error - {0}")]
    IoError(String),
    /// Input ended before all expected data was read.
    #[error("Unexpected end of file")]
    UnexpectedEof,
    /// A count or number of occurrences is not a non-negative integer.
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
    /// A parsed person could not be added to the index.
    #[error("Invalid entry")]
    InvalidEntry(#[source] IndexError),
    /// Content follows the last announced person (strict mode only).
    #[error("Unexpected content after last profile")]
    TrailingContent,
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (position and following bytes).
#[derive(Debug)]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: Option<usize>,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser<S: ByteSource>(kind: ParsingErrorType, parser: &ByteParser<S>) -> Self {
        Self {
            kind,
            position: Some(parser.position()),
            context: parser.lookahead_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for UnexpectedEof
    pub fn unexpected_eof<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::UnexpectedEof, parser)
    }

    /// Convenience constructor for InvalidNumber
    pub fn invalid_number<S: ByteSource>(parser: &ByteParser<S>, token: String) -> Self {
        Self::from_parser(ParsingErrorType::InvalidNumber(token), parser)
    }

    /// Convenience constructor for InvalidEntry
    pub fn invalid_entry<S: ByteSource>(parser: &ByteParser<S>, err: IndexError) -> Self {
        Self::from_parser(ParsingErrorType::InvalidEntry(err), parser)
    }

    /// Convenience constructor for TrailingContent
    pub fn trailing_content<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::TrailingContent, parser)
    }

    /// Create a ParsingError without parser context (e.g. for IO errors)
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self {
            kind,
            position: None,
            context: String::new(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the byte position where the error occurred, if known
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Get up to 50 bytes of input following the error position
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(position) = self.position {
            write!(f, " at position {position}")?;
        }

        if !self.context.is_empty() {
            write!(f, "\n  Context (next {} bytes): {}", self.context.len(), self.context)?;
        }

        Ok(())
    }
}

impl Error for ParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.kind.source()
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        Self::without_context(ParsingErrorType::IoError(err.to_string()))
    }
}
