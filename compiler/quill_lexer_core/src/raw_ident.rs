//! Backtick-delimited raw identifier scanning.
//!
//! A raw identifier is a single line of text between two backticks. The
//! scanner commits the moment it sees the opening backtick: whatever it
//! consumes belongs to this attempt, and the caller must not re-lex it as
//! something else. Content is opaque here. Backslashes are ordinary bytes,
//! and only the validator in `quill_lexer` decides whether the content is
//! acceptable.

use crate::cursor::Cursor;

/// Why the raw identifier scanner stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// Closing backtick found before any line end.
    ClosedSameLine,
    /// `\n` or `\r` reached first. The line terminator is not consumed.
    UnterminatedAtNewline,
    /// End of input reached first.
    UnterminatedAtEof,
    /// An interior NUL reached first. The NUL is not consumed.
    TerminatedAtForbiddenControlChar,
}

impl Termination {
    /// Returns `true` only for [`Termination::ClosedSameLine`].
    #[inline]
    pub fn is_closed(self) -> bool {
        matches!(self, Termination::ClosedSameLine)
    }
}

/// Byte offsets captured by one scan attempt.
///
/// `start` is the opening backtick. `content_start..content_end` is the
/// text after it up to the stopping point. `end` is one past the closing
/// backtick when closed, otherwise equal to `content_end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawIdentScan {
    pub start: u32,
    pub content_start: u32,
    pub content_end: u32,
    pub end: u32,
    pub termination: Termination,
}

impl RawIdentScan {
    /// Total bytes consumed by the attempt.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Always `false`: the opening backtick is consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.termination.is_closed()
    }

    /// Byte length of the content.
    #[inline]
    pub fn content_len(&self) -> u32 {
        self.content_end - self.content_start
    }
}

/// Scan a raw identifier starting at the opening backtick under `cursor`.
///
/// Leaves the cursor after the closing backtick, or on the line
/// terminator / NUL / EOF that stopped the scan.
pub fn scan_raw_ident(cursor: &mut Cursor<'_>) -> RawIdentScan {
    debug_assert_eq!(cursor.current(), b'`', "scan_raw_ident must start on a backtick");
    let start = cursor.mark();
    cursor.advance();
    let content = cursor.mark();

    let termination = match cursor.skip_to_raw_ident_delim() {
        b'`' => Termination::ClosedSameLine,
        b'\n' | b'\r' => Termination::UnterminatedAtNewline,
        _ if cursor.is_eof() => Termination::UnterminatedAtEof,
        _ => Termination::TerminatedAtForbiddenControlChar,
    };
    let content_span = cursor.span_since(content);

    if termination.is_closed() {
        cursor.advance();
    }

    RawIdentScan {
        start: start.pos(),
        content_start: content_span.start,
        content_end: content_span.end,
        end: cursor.pos(),
        termination,
    }
}
