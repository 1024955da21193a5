//! Raw token tags produced by the scanner.

use crate::raw_ident::Termination;

/// Kind of a raw token.
///
/// Non-raw-identifier text is classified coarsely; the scanner only needs
/// to know where each token ends so that a backtick is never mistaken for
/// the middle of something else. Error conditions are tags, not `Err`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    // === Identifiers & Literals ===
    /// ASCII letters, digits and `_`, or XID characters that are not
    /// operator characters. Cannot start with a digit.
    Ident,
    /// Backtick-delimited identifier, tagged with why scanning stopped.
    RawIdent(Termination),
    /// Digit run, including `_`, letters and `.digit` continuations.
    Number,
    /// `"..."` closed on the same line.
    String,
    /// `"...` that hit a line end or EOF.
    UnterminatedString,

    // === Operators ===
    /// Maximal run of operator bytes (`+`, `->`, `==`, `...`).
    Operator,

    // === Delimiters & Punctuation ===
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Comma,
    Colon,
    Semicolon,
    At,
    Hash,
    Dollar,
    Backslash,

    // === Trivia ===
    /// Spaces, tabs, vertical tabs and form feeds.
    Whitespace,
    /// `\n`, `\r\n`, or a lone `\r`.
    Newline,
    /// `// ...` up to (not including) the line end.
    LineComment,

    // === Errors ===
    /// Control character, `'`, or a non-ASCII character that cannot start
    /// an identifier, outside any literal.
    InvalidByte,
    /// NUL byte inside the source content.
    InteriorNull,

    // === Control ===
    Eof,
}

impl RawTag {
    /// Whitespace and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, RawTag::Whitespace | RawTag::LineComment)
    }

    /// Tags the cooking layer must treat as unusable text.
    #[inline]
    pub fn is_error(self) -> bool {
        match self {
            RawTag::RawIdent(termination) => !termination.is_closed(),
            RawTag::UnterminatedString | RawTag::InvalidByte | RawTag::InteriorNull => true,
            _ => false,
        }
    }
}

/// A raw token: tag plus byte length. The start offset is implied by the
/// sum of preceding lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
