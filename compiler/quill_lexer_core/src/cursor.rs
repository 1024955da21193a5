//! Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Reading past the last source byte yields the `0x00` sentinel, so the
//! scanner can dispatch on `current()` without length checks. A `0x00`
//! read before `source_len` is an interior NUL, one read at `source_len`
//! is end of input; [`Cursor::is_eof`] decides which.

use std::ops::Range;

/// Position saved by [`Cursor::mark`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mark(u32);

impl Mark {
    #[inline]
    pub fn pos(self) -> u32 {
        self.0
    }
}

/// Forward-only reader. `Copy`, so saving a position is a plain copy.
///
/// Relies on `buf[source_len..]` being all `0x00`, which
/// [`SourceBuffer`](crate::SourceBuffer) guarantees.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert_eq!(buf.get(source_len as usize), Some(&0), "missing sentinel");
        Cursor {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte under the cursor; `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let width = Self::utf8_char_width(self.current()) as usize;
        let bytes = self.rest().get(..width)?;
        std::str::from_utf8(bytes).ok()?.chars().next()
    }

    #[inline]
    fn byte_at(&self, index: u32) -> u8 {
        self.buf.get(index as usize).copied().unwrap_or(0)
    }

    /// Step one byte. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Step `n` bytes, clamped to end of input.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    /// Offsets consumed since `mark`.
    #[inline]
    pub fn span_since(&self, mark: Mark) -> Range<u32> {
        debug_assert!(mark.0 <= self.pos, "mark is ahead of the cursor");
        mark.0..self.pos
    }

    /// Remaining source bytes, sentinel excluded.
    #[inline]
    fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Move to the offset a search over [`rest`](Self::rest) found,
    /// or to end of input when the search found nothing.
    #[inline]
    fn jump(&mut self, found: Option<usize>) {
        self.pos = match found {
            // Bounded by rest().len(), which fits in u32.
            Some(offset) => self.pos.saturating_add(u32::try_from(offset).unwrap_or(u32::MAX)),
            None => self.source_len,
        }
        .min(self.source_len);
    }

    /// Consume bytes while `pred` holds, stopping at end of input.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        let taken = self.rest().iter().take_while(|&&b| pred(b)).count();
        self.jump(Some(taken));
    }

    /// Width in bytes of the UTF-8 sequence that `lead` starts. Stray
    /// continuation and invalid bytes count as 1.
    #[inline]
    pub fn utf8_char_width(lead: u8) -> u32 {
        match lead.leading_ones() {
            2 => 2,
            3 => 3,
            4 if lead <= 0xF7 => 4,
            _ => 1,
        }
    }

    /// Consume one whole character.
    #[inline]
    pub fn advance_char(&mut self) {
        self.advance_n(Self::utf8_char_width(self.current()));
    }

    /// Consume spaces, tabs, vertical tabs and form feeds.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | 0x0B | 0x0C));
    }

    /// Move to the next `\n` or `\r`, or to end of input.
    pub fn eat_until_newline_or_eof(&mut self) {
        let found = memchr::memchr2(b'\n', b'\r', self.rest());
        self.jump(found);
    }

    /// Move to the next byte that can end a raw identifier and return it:
    /// `` ` ``, `\n`, `\r`, or `0x00`. Returns `0x00` at end of input as
    /// well; check [`is_eof`](Self::is_eof).
    ///
    /// None of these bytes occurs inside a multi-byte UTF-8 sequence, so
    /// the cursor stays on a character boundary.
    pub fn skip_to_raw_ident_delim(&mut self) -> u8 {
        let rest = self.rest();
        let line_or_tick = memchr::memchr3(b'`', b'\n', b'\r', rest);
        let nul = memchr::memchr(0, rest);
        let found = match (line_or_tick, nul) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.jump(found);
        self.current()
    }
}

#[cfg(test)]
mod tests;
