//! Cooked tokens handed from the lexer to the parser.

use std::fmt;

use crate::Span;

/// Outcome of validating the content of a closed raw identifier.
///
/// `Valid` is the only accepted state; every other variant names the
/// single content rule that rejected the identifier. When content breaks
/// several rules, the validator reports the first in declaration order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RawIdentValidity {
    Valid,
    /// `` `` `` -- nothing between the backticks.
    Empty,
    /// Only whitespace between the backticks.
    AllWhitespace,
    /// At least one `\` between the backticks.
    ContainsBackslash,
    /// Every character is an operator character.
    OperatorCharsOnly,
}

impl RawIdentValidity {
    #[inline]
    pub const fn is_valid(self) -> bool {
        matches!(self, RawIdentValidity::Valid)
    }
}

/// Token kinds produced by the cooking layer.
///
/// Trivia (whitespace and comments) never appears as a token; it is
/// recorded in the following token's [`TokenFlags`]. Newlines are kept
/// because the top-level recovery works line by line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Plain identifier, possibly a contextual keyword (see
    /// [`TokenFlags::CONTEXTUAL_KW`]).
    Ident,
    /// Backtick-escaped identifier. Never a keyword of any kind.
    RawIdent(RawIdentValidity),
    /// Reserved keyword.
    Keyword,
    Number,
    String,
    /// Maximal run of operator characters.
    Operator,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Semicolon,
    At,
    Hash,
    Dollar,
    Backslash,
    /// Text the lexer could not turn into a token: the remains of an
    /// unterminated raw identifier, interior NUL bytes, stray bytes.
    Unknown,
    Newline,
    Eof,
}

impl TokenKind {
    /// Returns `true` for both plain and raw identifiers.
    #[inline]
    pub const fn is_identifier(self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::RawIdent(_))
    }

    /// Human-readable name used in diagnostics and debug dumps.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::RawIdent(_) => "raw identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Number => "number",
            TokenKind::String => "string literal",
            TokenKind::Operator => "operator",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::At => "`@`",
            TokenKind::Hash => "`#`",
            TokenKind::Dollar => "`$`",
            TokenKind::Backslash => "`\\`",
            TokenKind::Unknown => "unknown text",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its source location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// What came before a token, and what the lexer learned about it.
///
/// One byte per token, stored alongside it in a [`TokenList`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TokenFlags(u8);

impl TokenFlags {
    /// Spaces or tabs directly before.
    pub const SPACE_BEFORE: u8 = 1 << 0;
    /// First token after a line break.
    pub const NEWLINE_BEFORE: u8 = 1 << 1;
    /// A `//` comment was skipped before it.
    pub const TRIVIA_BEFORE: u8 = 1 << 2;
    /// Nothing but trivia before it on its line.
    pub const LINE_START: u8 = 1 << 3;
    /// Rejected raw identifier, or text that could not be lexed.
    pub const HAS_ERROR: u8 = 1 << 4;
    /// Token was written between backticks.
    pub const RAW_IDENT: u8 = 1 << 5;
    /// Identifier text is a contextual keyword in the active keyword table.
    /// Never set together with `RAW_IDENT`.
    pub const CONTEXTUAL_KW: u8 = 1 << 6;

    pub const EMPTY: Self = TokenFlags(0);

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        TokenFlags(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// `true` if any bit of `flag` is set.
    #[inline]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    #[inline]
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    #[inline]
    pub const fn has_space_before(self) -> bool {
        self.contains(Self::SPACE_BEFORE)
    }

    #[inline]
    pub const fn has_newline_before(self) -> bool {
        self.contains(Self::NEWLINE_BEFORE)
    }

    #[inline]
    pub const fn is_line_start(self) -> bool {
        self.contains(Self::LINE_START)
    }

    #[inline]
    pub const fn has_error(self) -> bool {
        self.contains(Self::HAS_ERROR)
    }

    #[inline]
    pub const fn is_raw_ident(self) -> bool {
        self.contains(Self::RAW_IDENT)
    }

    #[inline]
    pub const fn is_contextual_kw(self) -> bool {
        self.contains(Self::CONTEXTUAL_KW)
    }
}

impl fmt::Debug for TokenFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(u8, &str); 7] = [
            (TokenFlags::SPACE_BEFORE, "SPACE_BEFORE"),
            (TokenFlags::NEWLINE_BEFORE, "NEWLINE_BEFORE"),
            (TokenFlags::TRIVIA_BEFORE, "TRIVIA_BEFORE"),
            (TokenFlags::LINE_START, "LINE_START"),
            (TokenFlags::HAS_ERROR, "HAS_ERROR"),
            (TokenFlags::RAW_IDENT, "RAW_IDENT"),
            (TokenFlags::CONTEXTUAL_KW, "CONTEXTUAL_KW"),
        ];
        let mut set = f.debug_set();
        for (bit, name) in NAMES {
            if self.contains(bit) {
                set.entry(&format_args!("{name}"));
            }
        }
        set.finish()
    }
}

const _: () = assert!(std::mem::size_of::<TokenFlags>() == 1);

/// A list of tokens with a parallel array of per-token flags.
///
/// `flags[i]` describes the trivia context of `tokens[i]`.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
    flags: Vec<TokenFlags>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            flags: Vec::with_capacity(capacity),
        }
    }

    /// Append a token with its flags.
    #[inline]
    pub fn push_with_flags(&mut self, token: Token, flags: TokenFlags) {
        self.tokens.push(token);
        self.flags.push(flags);
    }

    /// Append a token with no flags set.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.push_with_flags(token, TokenFlags::EMPTY);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Flags for the token at `index`, or `EMPTY` when out of range.
    #[inline]
    pub fn flags(&self, index: usize) -> TokenFlags {
        self.flags.get(index).copied().unwrap_or(TokenFlags::EMPTY)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Iterate tokens together with their flags.
    pub fn iter_with_flags(&self) -> impl Iterator<Item = (&Token, TokenFlags)> + '_ {
        self.tokens.iter().zip(self.flags.iter().copied())
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Kinds only, in order. Handy for assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
