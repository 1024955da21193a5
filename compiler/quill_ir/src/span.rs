//! Byte-offset spans.
//!
//! A [`Span`] is a half-open `start..end` range of byte offsets into the
//! text handed to the lexer. Offsets are `u32`, so a single source text is
//! limited to 4 GiB. Lines and columns are looked up on demand through
//! `quill_diagnostic::span_utils::LineOffsetTable`.

use std::fmt;
use std::ops::Range;

/// A `usize` range that does not fit in a [`Span`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    #[error("span start {0} does not fit in a u32 offset")]
    StartTooLarge(usize),
    #[error("span end {0} does not fit in a u32 offset")]
    EndTooLarge(usize),
}

/// `start..end` in bytes. Ordering is by `start`, then `end`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span::new(offset, offset)
    }

    /// Narrow a `usize` range, as produced by slicing, to a span.
    pub fn try_from_range(range: Range<usize>) -> Result<Self, SpanError> {
        let Ok(start) = u32::try_from(range.start) else {
            return Err(SpanError::StartTooLarge(range.start));
        };
        let Ok(end) = u32::try_from(range.end) else {
            return Err(SpanError::EndTooLarge(range.end));
        };
        Ok(Span::new(start, end))
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// `true` if `offset` lies in `start..end`. Never true for an empty span.
    #[inline]
    pub const fn contains(self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// The span as a range for slicing the source.
    #[inline]
    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.to_range()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

const _: () = assert!(std::mem::size_of::<Span>() == 8);
