//! Splits source into `(RawTag, len)` pairs.
//!
//! Only raw identifiers are scanned precisely. Everything else gets a
//! coarse class (identifier, number, string, operator run, punctuation,
//! trivia) so raw identifiers can be found in context. `next_token`
//! matches on the current byte, and `0x00` covers both end of input and
//! interior NULs.

use crate::char_class::{
    is_ident_continue, is_operator_byte, is_unicode_ident_continue, is_unicode_ident_start,
};
use crate::cursor::Cursor;
use crate::raw_ident::scan_raw_ident;
use crate::tag::{RawTag, RawToken};

/// Scanner state: just the cursor.
///
/// Problems become tags such as [`RawTag::InvalidByte`]; scanning never
/// fails. The lengths of all tokens up to `Eof` sum to the source length.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Scan one token. At end of input this keeps returning a zero-length
    /// `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' | 0x0B | 0x0C => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.single(start, RawTag::Newline),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'`' => self.raw_identifier(start),
            b'/' if self.cursor.peek() == b'/' => self.line_comment(start),
            b'/' | b'=' | b'-' | b'+' | b'!' | b'*' | b'%' | b'<' | b'>' | b'&' | b'|' | b'^'
            | b'~' | b'?' | b'.' => self.operator(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b':' => self.single(start, RawTag::Colon),
            b';' => self.single(start, RawTag::Semicolon),
            b'@' => self.single(start, RawTag::At),
            b'#' => self.single(start, RawTag::Hash),
            b'$' => self.single(start, RawTag::Dollar),
            b'\\' => self.single(start, RawTag::Backslash),
            // Remaining control characters, quote, DEL
            1..=8 | 14..=31 | b'\'' | 127 => self.single(start, RawTag::InvalidByte),
            128..=255 => self.non_ascii(start),
        }
    }

    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ───────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            self.cursor.advance();
            self.token(start, RawTag::InteriorNull)
        }
    }

    // ─── Whitespace & Newlines ─────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
        }
        self.token(start, RawTag::Newline)
    }

    fn line_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance_n(2);
        self.cursor.eat_until_newline_or_eof();
        self.token(start, RawTag::LineComment)
    }

    // ─── Identifiers & Literals ────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        loop {
            self.cursor.eat_while(is_ident_continue);
            match self.cursor.current_char() {
                Some(c) if is_unicode_ident_continue(c) => self.cursor.advance_char(),
                _ => break,
            }
        }
        self.token(start, RawTag::Ident)
    }

    fn non_ascii(&mut self, start: u32) -> RawToken {
        match self.cursor.current_char() {
            Some(c) if is_unicode_ident_start(c) => self.identifier(start),
            _ => self.invalid_char(start),
        }
    }

    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        loop {
            self.cursor.eat_while(is_ident_continue);
            // `1.5` continues; `1..<5` does not
            if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
                self.cursor.advance();
            } else {
                break;
            }
        }
        self.token(start, RawTag::Number)
    }

    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        loop {
            self.cursor
                .eat_while(|b| !matches!(b, b'"' | b'\\' | b'\n' | b'\r' | 0));
            match self.cursor.current() {
                b'"' => {
                    self.cursor.advance();
                    return self.token(start, RawTag::String);
                }
                b'\\' if !matches!(self.cursor.peek(), b'\n' | b'\r' | 0) => {
                    self.cursor.advance();
                    self.cursor.advance_char();
                }
                b'\\' => self.cursor.advance(),
                _ => return self.token(start, RawTag::UnterminatedString),
            }
        }
    }

    fn raw_identifier(&mut self, start: u32) -> RawToken {
        let scan = scan_raw_ident(&mut self.cursor);
        debug_assert_eq!(scan.start, start);
        RawToken {
            tag: RawTag::RawIdent(scan.termination),
            len: scan.len(),
        }
    }

    // ─── Operators & Punctuation ───────────────────────────────

    /// Maximal run of operator bytes. A `//` inside the run starts a
    /// comment, so the run stops before it.
    fn operator(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        while is_operator_byte(self.cursor.current())
            && !(self.cursor.current() == b'/' && self.cursor.peek() == b'/')
        {
            self.cursor.advance();
        }
        self.token(start, RawTag::Operator)
    }

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    // ─── Errors ────────────────────────────────────────────────

    fn invalid_char(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(start, RawTag::InvalidByte)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Convenience: scan a whole source string into raw tokens (excluding Eof).
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}
