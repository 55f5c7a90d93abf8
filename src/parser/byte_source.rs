//! Cursor over the raw bytes of a profile database.
//!
//! The [ByteSource] trait is what the [ByteParser](crate::parser::ByteParser)
//! reads from. [InMemoryByteSource](crate::parser::in_memory_byte_source::InMemoryByteSource)
//! is the only implementation, since databases are read whole.

// =#========================================================================#=
// BYTE SOURCE (Trait)
// =#========================================================================#=
/// A sequence of bytes with a movable cursor.
pub trait ByteSource {
    /// Returns the byte under the cursor, `None` at the end of input.
    fn peek(&self) -> Option<u8>;

    /// Returns the byte under the cursor and moves the cursor past it.
    fn next_byte(&mut self) -> Option<u8>;

    /// Byte offset of the cursor.
    fn position(&self) -> usize;

    /// Moves the cursor to `pos`. Offsets beyond the input move it to the end.
    fn set_position(&mut self, pos: usize);

    /// Returns the bytes from `start` up to the cursor (exclusive), or `None`
    /// if `start` lies after the cursor.
    fn slice_from(&self, start: usize) -> Option<&[u8]>;

    /// Returns up to `len` bytes starting at the cursor without moving it.
    fn lookahead(&self, len: usize) -> &[u8];

    /// Whether the cursor is at the end of input.
    fn is_eof(&self) -> bool {
        self.peek().is_none()
    }
}
