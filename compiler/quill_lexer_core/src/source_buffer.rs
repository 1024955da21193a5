//! Owned copy of the source with a trailing NUL sentinel.
//!
//! Scanning reads `buf[pos]` without checking `pos` against the length:
//! the byte after the last source byte is always `0x00`, and the buffer is
//! zero-padded to a whole number of 64-byte blocks so `peek()` stays in
//! bounds too.

use crate::Cursor;

const CACHE_LINE: usize = 64;

/// Source bytes followed by at least one `0x00`, padded to a multiple of
/// [`CACHE_LINE`].
///
/// ```text
/// | source bytes ... | 00 | 00 00 ... |
///                    ^ source_len
/// ```
///
/// A `0x00` inside the source is kept. [`Cursor::is_eof`] uses the
/// position, not the byte, to tell it apart from the sentinel.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded buffer.
    ///
    /// Offsets are `u32`; anything past `u32::MAX - 1` bytes is not
    /// scanned. `quill_lexer::lex` rejects such sources before they get
    /// here.
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let bytes = &bytes[..bytes.len().min(u32::MAX as usize - 1)];

        let padded_len = (bytes.len() + 1).next_multiple_of(CACHE_LINE);
        let mut buf = Vec::with_capacity(padded_len);
        buf.extend_from_slice(bytes);
        buf.resize(padded_len, 0);

        SourceBuffer {
            source_len: u32::try_from(bytes.len()).unwrap_or(u32::MAX - 1),
            buf,
        }
    }

    /// The scanned bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// A cursor at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }
}
