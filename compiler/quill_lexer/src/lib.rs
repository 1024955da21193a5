//! Lexer for Quill.
//!
//! Drives the raw scanner from `quill_lexer_core`, cooks each raw token
//! into a [`TokenKind`], and collects the errors found along the way.
//!
//! ```text
//! source → SourceBuffer → RawScanner → (RawTag, len)
//!        → TokenCooker → TokenList + Vec<LexError>
//!        → recovery::extraneous_code → Vec<Diagnostic>
//! ```
//!
//! Backtick-escaped (raw) identifiers are validated here; anything the
//! scanner could not finish becomes [`TokenKind::Unknown`] and is reported
//! once per region as extraneous code.

mod cooker;
pub mod keywords;
pub mod lex_error;
mod raw_identifier;
pub mod recovery;
mod render;
pub mod validate;

use quill_diagnostic::span_utils::LineOffsetTable;
use quill_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue};
use quill_ir::{Span, Token, TokenFlags, TokenKind, TokenList};
use quill_lexer_core::{RawScanner, RawTag, SourceBuffer};

use crate::cooker::{raw_ident_validity, span, TokenCooker};

pub use keywords::{KeywordClass, KeywordTable};
pub use lex_error::{LexError, LexErrorKind, LexReplacement, LexSuggestion};
pub use quill_ir::SpanError;
pub use raw_identifier::RawIdentifierToken;
pub use render::render_lex_error;
pub use validate::validate_raw_ident;

/// Options for a single [`lex`] call.
#[derive(Copy, Clone, Debug)]
pub struct LexOptions<'k> {
    /// Words treated as keywords when they appear unescaped.
    pub keywords: &'k KeywordTable,
    /// Applied when diagnostics are reported.
    pub diagnostics: DiagnosticConfig,
}

impl Default for LexOptions<'_> {
    fn default() -> Self {
        LexOptions {
            keywords: KeywordTable::standard(),
            diagnostics: DiagnosticConfig::default(),
        }
    }
}

impl<'k> LexOptions<'k> {
    pub fn with_keywords(mut self, keywords: &'k KeywordTable) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: DiagnosticConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

/// Everything produced by lexing one source text.
#[derive(Clone, Debug)]
pub struct LexOutput<'src> {
    source: &'src str,
    /// Cooked tokens, always ending with `Eof`.
    pub tokens: TokenList,
    /// Raw identifier content errors, in source order.
    pub errors: Vec<LexError>,
    /// One diagnostic per region of text that could not be lexed.
    pub extraneous: Vec<Diagnostic>,
    pub lines: LineOffsetTable,
    config: DiagnosticConfig,
}

impl<'src> LexOutput<'src> {
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// All diagnostics in source order, truncated to the configured error
    /// limit.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut queue = DiagnosticQueue::with_config(self.config);
        queue.extend(self.errors.iter().map(render_lex_error));
        queue.extend(self.extraneous.iter().cloned());
        queue.flush()
    }

    /// Raw identifier tokens, valid or not, in source order.
    pub fn raw_identifiers(&self) -> impl Iterator<Item = RawIdentifierToken<'src>> + '_ {
        let source = self.source;
        self.tokens
            .iter()
            .filter_map(move |token| RawIdentifierToken::from_token(source, token))
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || !self.extraneous.is_empty()
    }

    /// 1-based line and column of a byte offset.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        self.lines.offset_to_line_col(self.source, offset)
    }
}

/// Lex `source` into tokens and errors.
///
/// Problems inside the source are recorded in the output and lexing
/// continues with the next token. The only failure is a source of
/// `u32::MAX` bytes or more, which `u32` offsets cannot address.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex<'src>(
    source: &'src str,
    options: &LexOptions<'_>,
) -> Result<LexOutput<'src>, SpanError> {
    // The end-of-input sentinel sits one past the last byte and needs an
    // offset too.
    let extent = Span::try_from_range(0..source.len() + 1)?;
    let buffer = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buffer.cursor());
    let mut cooker = TokenCooker::new(source, options.keywords);
    let mut tokens = TokenList::with_capacity(source.len() / 4 + 1);

    let mut offset: u32 = 0;
    let mut pending = TokenFlags::from_bits(TokenFlags::LINE_START);

    loop {
        let raw = scanner.next_token();
        match raw.tag {
            RawTag::Whitespace => pending.set(TokenFlags::SPACE_BEFORE),
            RawTag::LineComment => pending.set(TokenFlags::TRIVIA_BEFORE),
            RawTag::Eof => {
                tokens.push_with_flags(Token::new(TokenKind::Eof, span(offset, 0)), pending);
                break;
            }
            tag => {
                let kind = cooker.cook(tag, offset, raw.len);
                let mut flags = pending;
                if cooker.last_cook_had_error() {
                    flags.set(TokenFlags::HAS_ERROR);
                }
                if cooker.last_cook_was_contextual_kw() {
                    flags.set(TokenFlags::CONTEXTUAL_KW);
                }
                if raw_ident_validity(kind).is_some() {
                    flags.set(TokenFlags::RAW_IDENT);
                }
                tokens.push_with_flags(Token::new(kind, span(offset, raw.len)), flags);

                pending = if kind == TokenKind::Newline {
                    TokenFlags::from_bits(TokenFlags::NEWLINE_BEFORE | TokenFlags::LINE_START)
                } else {
                    TokenFlags::EMPTY
                };
            }
        }
        offset += raw.len;
    }

    debug_assert_eq!(offset + 1, extent.end, "tokens must cover the source");

    let extraneous = recovery::extraneous_code(source, &tokens);
    Ok(LexOutput {
        source,
        tokens,
        errors: cooker.into_errors(),
        extraneous,
        lines: LineOffsetTable::build(source),
        config: options.diagnostics,
    })
}

/// Lex with the standard keyword table and no error limit.
pub fn lex_default(source: &str) -> Result<LexOutput<'_>, SpanError> {
    lex(source, &LexOptions::default())
}
