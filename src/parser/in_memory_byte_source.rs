//! In-memory implementation of byte source for parsing.

use crate::parser::byte_source::ByteSource;
use std::fs;
use std::path::Path;

// =#========================================================================#=
// IN MEMORY BYTE SOURCE
// =#========================================================================#=
/// An in-memory byte source that owns its data.
///
/// Profile databases are small enough to be read entirely into memory.
pub struct InMemoryByteSource {
    /// The owned byte data being parsed
    input: Vec<u8>,
    /// Current position in the byte slice
    pos: usize,
}

impl InMemoryByteSource {
    /// Creates a new in-memory byte source from a Vec of bytes.
    ///
    /// # Arguments
    /// * `bytes` - The byte vector to parse
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            input: bytes,
            pos: 0,
        }
    }

    /// Reads the entire file at `path` into a new byte source.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::from_vec(fs::read(path)?))
    }
}

impl ByteSource for InMemoryByteSource {
    #[inline(always)]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[inline(always)]
    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.input.len());
    }

    fn slice_from(&self, start: usize) -> Option<&[u8]> {
        if start <= self.pos && self.pos <= self.input.len() {
            Some(&self.input[start..self.pos])
        } else {
            None
        }
    }

    fn lookahead(&self, len: usize) -> &[u8] {
        let end = self.pos.saturating_add(len).min(self.input.len());
        &self.input[self.pos..end]
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }
}
