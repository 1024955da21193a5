//! Turns raw scanner tags into [`TokenKind`]s.
//!
//! Punctuation and operators map one to one. Plain identifiers go through
//! the keyword table. Closed raw identifiers have their content validated,
//! recording a [`LexError`] when a rule fails. Unfinished raw identifiers
//! and stray bytes become `TokenKind::Unknown` and are left to
//! [`recovery`](crate::recovery).

use quill_ir::{RawIdentValidity, Span, TokenKind};
use quill_lexer_core::RawTag;
use tracing::trace;

use crate::keywords::{KeywordClass, KeywordTable};
use crate::lex_error::LexError;
use crate::validate::validate_raw_ident;

/// Per-source cooking state. Errors accumulate across `cook()` calls; the
/// two flags describe only the most recent one.
pub(crate) struct TokenCooker<'src, 'k> {
    source: &'src str,
    keywords: &'k KeywordTable,
    errors: Vec<LexError>,
    /// Set when the current `cook()` produced an error or unknown text.
    had_error: bool,
    /// Set when the current `cook()` resolved a contextual keyword.
    contextual_kw: bool,
}

impl<'src, 'k> TokenCooker<'src, 'k> {
    pub(crate) fn new(source: &'src str, keywords: &'k KeywordTable) -> Self {
        Self {
            source,
            keywords,
            errors: Vec::new(),
            had_error: false,
            contextual_kw: false,
        }
    }

    pub(crate) fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Becomes `TokenFlags::HAS_ERROR` on the cooked token.
    pub(crate) fn last_cook_had_error(&self) -> bool {
        self.had_error
    }

    /// Becomes `TokenFlags::CONTEXTUAL_KW` on the cooked token.
    pub(crate) fn last_cook_was_contextual_kw(&self) -> bool {
        self.contextual_kw
    }

    /// Kind of the token at `offset..offset + len`. Trivia and `Eof` never
    /// reach here.
    pub(crate) fn cook(&mut self, tag: RawTag, offset: u32, len: u32) -> TokenKind {
        self.had_error = false;
        self.contextual_kw = false;
        debug_assert!(!tag.is_trivia(), "trivia reached cook(): {tag:?}");

        if tag.is_error() {
            if let RawTag::RawIdent(termination) = tag {
                trace!(offset, ?termination, "unfinished raw identifier");
            }
            return self.unknown();
        }

        match tag {
            RawTag::Ident => self.cook_ident(offset, len),
            RawTag::RawIdent(_) => self.cook_raw_ident(offset, len),
            RawTag::Number => TokenKind::Number,
            RawTag::String => TokenKind::String,
            RawTag::Operator => TokenKind::Operator,

            RawTag::LeftParen => TokenKind::LParen,
            RawTag::RightParen => TokenKind::RParen,
            RawTag::LeftBracket => TokenKind::LBracket,
            RawTag::RightBracket => TokenKind::RBracket,
            RawTag::LeftBrace => TokenKind::LBrace,
            RawTag::RightBrace => TokenKind::RBrace,
            RawTag::Comma => TokenKind::Comma,
            RawTag::Colon => TokenKind::Colon,
            RawTag::Semicolon => TokenKind::Semicolon,
            RawTag::At => TokenKind::At,
            RawTag::Hash => TokenKind::Hash,
            RawTag::Dollar => TokenKind::Dollar,
            RawTag::Backslash => TokenKind::Backslash,

            RawTag::Newline => TokenKind::Newline,

            RawTag::Eof => {
                debug_assert!(false, "Eof reached cook()");
                TokenKind::Eof
            }

            // error tags returned above, trivia asserted
            RawTag::UnterminatedString
            | RawTag::InvalidByte
            | RawTag::InteriorNull
            | RawTag::Whitespace
            | RawTag::LineComment => self.unknown(),
        }
    }

    #[inline]
    fn unknown(&mut self) -> TokenKind {
        self.had_error = true;
        TokenKind::Unknown
    }

    fn cook_ident(&mut self, offset: u32, len: u32) -> TokenKind {
        let text = slice_source(self.source, offset, len);
        match self.keywords.classify(text) {
            Some(KeywordClass::Reserved) => TokenKind::Keyword,
            Some(KeywordClass::Contextual) => {
                self.contextual_kw = true;
                TokenKind::Ident
            }
            None => TokenKind::Ident,
        }
    }

    /// Validate the content of a closed raw identifier. The keyword table
    /// is never consulted: escaping always yields an identifier.
    fn cook_raw_ident(&mut self, offset: u32, len: u32) -> TokenKind {
        // Content excludes the two backticks.
        let content = slice_source(self.source, offset + 1, len.saturating_sub(2));
        let validity = validate_raw_ident(content);
        if let Some(err) = LexError::from_validity(span(offset, len), content, validity) {
            trace!(offset, ?validity, "rejected raw identifier");
            self.errors.push(err);
            self.had_error = true;
        }
        debug_assert!(
            validity.is_valid() || self.had_error,
            "invalid raw identifier without an error"
        );
        TokenKind::RawIdent(validity)
    }
}

/// Slice the source for a token. Token boundaries from the raw scanner
/// always fall on character boundaries.
#[inline]
fn slice_source(source: &str, offset: u32, len: u32) -> &str {
    let start = offset as usize;
    let end = start + len as usize;
    debug_assert!(
        source.get(start..end).is_some(),
        "token {start}..{end} is not on char boundaries"
    );
    source.get(start..end).unwrap_or_default()
}

/// `offset..offset + len`.
#[inline]
pub(crate) fn span(offset: u32, len: u32) -> Span {
    Span::new(offset, offset + len)
}

/// `RawIdentValidity` carried by a cooked token, if it is a raw identifier.
#[inline]
pub(crate) fn raw_ident_validity(kind: TokenKind) -> Option<RawIdentValidity> {
    match kind {
        TokenKind::RawIdent(validity) => Some(validity),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
