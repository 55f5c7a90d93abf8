//! Low-level byte-by-byte parser for ASCII text.
//!
//! This module provides [ByteParser] for parsing line- and token-based text
//! formats, with support for peeking, consuming, reading whole lines,
//! whitespace-separated tokens and unsigned numbers. Used as the foundation
//! of the [database parser](crate::database).

use crate::parser::byte_source::ByteSource;
use crate::parser::in_memory_byte_source::InMemoryByteSource;
use crate::parser::parsing_error::ParsingError;
use std::path::Path;

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte parser for ASCII text.
///
/// [ByteParser] operates on a [ByteSource] and assumes ASCII encoding
/// (other bytes are passed through lossily). Besides primitive peek and
/// consume operations it offers [`parse_line()`](ByteParser::parse_line),
/// [`parse_token()`](ByteParser::parse_token) and
/// [`parse_number()`](ByteParser::parse_number).
///
/// # Example
/// ```
/// use strdb::parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("AGATAGAT\n2\nJane Doe");
/// assert_eq!(parser.parse_line()?, "AGATAGAT");
/// assert_eq!(parser.parse_number()?, 2);
/// assert_eq!(parser.parse_token()?, "Jane");
/// assert_eq!(parser.parse_token()?, "Doe");
/// assert!(parser.is_eof());
/// # Ok::<(), strdb::parser::ParsingError>(())
/// ```
pub struct ByteParser<S: ByteSource> {
    source: S,
}

impl ByteParser<InMemoryByteSource> {
    /// Parser over a copy of `input`.
    pub fn for_str(input: &str) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.as_bytes().to_vec()))
    }

    /// Parser over the contents of the file at `path`, read at once.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::new(InMemoryByteSource::from_file(path)?))
    }
}

impl<S: ByteSource> ByteParser<S> {
    /// Parser reading from `source`, starting at its current position.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the next byte without consuming it, `None` at end of input.
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.source.peek()
    }

    /// Consumes and returns the next byte, `None` at end of input.
    #[inline(always)]
    pub fn next_byte(&mut self) -> Option<u8> {
        self.source.next_byte()
    }

    /// Consumes spaces, tabs, line feeds and carriage returns.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.next_byte();
        }
    }

    /// Consumes the next byte only if it is `expected`.
    ///
    /// # Returns
    /// Whether the byte was consumed.
    pub fn consume_if(&mut self, expected: u8) -> bool {
        let matched = self.peek() == Some(expected);
        if matched {
            self.next_byte();
        }
        matched
    }

    /// Advances to the next occurrence of `target`, stopping right before it
    /// ([ConsumeMode::Exclusive]) or right after it ([ConsumeMode::Inclusive]).
    ///
    /// # Returns
    /// `false` if the input ended without `target`; the parser is then at
    /// the end of input.
    pub fn consume_until(&mut self, target: u8, mode: ConsumeMode) -> bool {
        while let Some(b) = self.peek() {
            if b == target {
                if mode == ConsumeMode::Inclusive {
                    self.next_byte();
                }
                return true;
            }
            self.next_byte();
        }

        false
    }

    /// Whether all input was consumed.
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    /// Byte offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Moves to byte offset `pos` (at most the end of input).
    pub fn set_position(&mut self, pos: usize) {
        self.source.set_position(pos);
    }

    /// Returns up to `len` upcoming bytes as string, without consuming them.
    /// Used as context in error messages; non-UTF-8 bytes become `U+FFFD`.
    pub fn lookahead_string(&self, len: usize) -> String {
        String::from_utf8_lossy(self.source.lookahead(len)).into_owned()
    }

    /// Parses the rest of the current line and consumes the line break.
    ///
    /// Both `\n` and `\r\n` line endings are accepted; the line ending is not
    /// part of the result. The last line of the input needs no line ending.
    ///
    /// # Errors
    /// Returns [UnexpectedEof](crate::parser::ParsingErrorType::UnexpectedEof)
    /// if the parser is already at the end of the input.
    pub fn parse_line(&mut self) -> Result<String, ParsingError> {
        if self.is_eof() {
            return Err(ParsingError::unexpected_eof(self));
        }

        let start = self.position();
        self.consume_until(b'\n', ConsumeMode::Exclusive);
        let mut line = self.lossy_string_from(start);
        self.consume_if(b'\n');

        if line.ends_with('\r') {
            line.pop();
        }

        Ok(line)
    }

    /// Parses the next whitespace-separated token, skipping leading whitespace.
    ///
    /// # Errors
    /// Returns [UnexpectedEof](crate::parser::ParsingErrorType::UnexpectedEof)
    /// if only whitespace is left.
    pub fn parse_token(&mut self) -> Result<String, ParsingError> {
        self.skip_whitespace();
        if self.is_eof() {
            return Err(ParsingError::unexpected_eof(self));
        }

        let start = self.position();
        while let Some(b) = self.peek() {
            if is_whitespace(b) {
                break;
            }
            self.next_byte();
        }

        Ok(self.lossy_string_from(start))
    }

    /// Parses the next token as an unsigned decimal number.
    ///
    /// # Errors
    /// * [UnexpectedEof](crate::parser::ParsingErrorType::UnexpectedEof)
    ///   if no token is left
    /// * [InvalidNumber](crate::parser::ParsingErrorType::InvalidNumber)
    ///   if the token is not a non-negative integer; the error then points
    ///   at the start of the token
    pub fn parse_number(&mut self) -> Result<usize, ParsingError> {
        self.skip_whitespace();
        let start = self.position();
        let token = self.parse_token()?;

        token.parse::<usize>().map_err(|_| {
            self.set_position(start);
            ParsingError::invalid_number(self, token)
        })
    }

    /// Returns the bytes from `start` to the current position as string.
    fn lossy_string_from(&self, start: usize) -> String {
        let bytes = self.source.slice_from(start).unwrap_or(&[]);
        String::from_utf8_lossy(bytes).into_owned()
    }
}

#[inline(always)]
fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r'
}

/// Where [`ByteParser::consume_until()`] stops relative to its target.
///
/// # Examples
/// ```
/// use strdb::parser::byte_parser::{ByteParser, ConsumeMode};
///
/// let mut parser = ByteParser::for_str("3\nJane Doe");
///
/// parser.consume_until(b'\n', ConsumeMode::Exclusive);
/// assert_eq!(parser.peek(), Some(b'\n'));
///
/// parser.consume_until(b' ', ConsumeMode::Inclusive);
/// assert_eq!(parser.peek(), Some(b'D'));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConsumeMode {
    /// Stop after the target.
    Inclusive,
    /// Stop before the target.
    Exclusive,
}
