//! Basic low-level byte parser functionality.
//!
//! Provides the [ByteParser] the [database parser](crate::database) is built
//! on, its [byte source](byte_source::ByteSource) abstraction and the
//! [ParsingError] reported for malformed input.

pub mod byte_parser;
pub mod byte_source;
pub mod in_memory_byte_source;
pub mod parsing_error;

pub use byte_parser::ByteParser;
pub use parsing_error::{ParsingError, ParsingErrorType};
