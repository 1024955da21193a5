//! Keyword resolution for the cooking layer.
//!
//! Two classes of keyword:
//! 1. **Reserved keywords**: always lexed as [`TokenKind::Keyword`](quill_ir::TokenKind::Keyword)
//! 2. **Contextual keywords**: lexed as identifiers flagged with
//!    [`TokenFlags::CONTEXTUAL_KW`](quill_ir::TokenFlags::CONTEXTUAL_KW);
//!    the parser decides per position whether the word acts as a keyword
//!
//! The table is an immutable value passed in through
//! [`LexOptions`](crate::LexOptions). Backtick-escaped identifiers never
//! consult it.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// How a word is treated when it appears unescaped.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum KeywordClass {
    Reserved,
    Contextual,
}

const STANDARD_RESERVED: &[&str] = &[
    "associatedtype",
    "as",
    "break",
    "case",
    "catch",
    "class",
    "continue",
    "default",
    "defer",
    "deinit",
    "do",
    "else",
    "enum",
    "extension",
    "fallthrough",
    "false",
    "fileprivate",
    "for",
    "func",
    "guard",
    "if",
    "import",
    "in",
    "init",
    "inout",
    "internal",
    "is",
    "let",
    "nil",
    "operator",
    "precedencegroup",
    "private",
    "protocol",
    "public",
    "repeat",
    "rethrows",
    "return",
    "Self",
    "self",
    "static",
    "struct",
    "subscript",
    "super",
    "switch",
    "throw",
    "throws",
    "true",
    "try",
    "typealias",
    "var",
    "where",
    "while",
];

const STANDARD_CONTEXTUAL: &[&str] = &[
    "async",
    "await",
    "convenience",
    "didSet",
    "dynamic",
    "final",
    "get",
    "indirect",
    "infix",
    "lazy",
    "left",
    "mutating",
    "none",
    "nonmutating",
    "open",
    "optional",
    "override",
    "postfix",
    "prefix",
    "required",
    "right",
    "set",
    "some",
    "unowned",
    "weak",
    "willSet",
];

static STANDARD: OnceLock<KeywordTable> = OnceLock::new();

/// Read-only mapping from identifier text to [`KeywordClass`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordTable {
    words: FxHashMap<Box<str>, KeywordClass>,
}

impl KeywordTable {
    /// Build a table. A word listed in both sets is reserved.
    pub fn new<'a>(
        reserved: impl IntoIterator<Item = &'a str>,
        contextual: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut words: FxHashMap<Box<str>, KeywordClass> = FxHashMap::default();
        for word in reserved {
            words.insert(Box::from(word), KeywordClass::Reserved);
        }
        for word in contextual {
            words
                .entry(Box::from(word))
                .or_insert(KeywordClass::Contextual);
        }
        KeywordTable { words }
    }

    /// The language's own keyword table, built on first use.
    pub fn standard() -> &'static KeywordTable {
        STANDARD.get_or_init(|| {
            KeywordTable::new(
                STANDARD_RESERVED.iter().copied(),
                STANDARD_CONTEXTUAL.iter().copied(),
            )
        })
    }

    /// Classify `text`, or `None` for an ordinary identifier.
    #[inline]
    pub fn classify(&self, text: &str) -> Option<KeywordClass> {
        self.words.get(text).copied()
    }

    /// Number of words in the table.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
