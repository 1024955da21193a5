//! Read-only view of a cooked raw identifier token.

use std::fmt;

use quill_ir::{RawIdentValidity, Span, Token};

use crate::cooker::raw_ident_validity;

/// A raw identifier as it appears in source.
///
/// `raw` is the text between the backticks. Raw identifiers have no escape
/// sequences, so [`value`](Self::value) is the same text.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RawIdentifierToken<'src> {
    raw: &'src str,
    span: Span,
    validity: RawIdentValidity,
}

impl<'src> RawIdentifierToken<'src> {
    /// View `token` as a raw identifier. Returns `None` for any other token
    /// kind, or when the span does not slice `source`.
    pub fn from_token(source: &'src str, token: &Token) -> Option<Self> {
        let validity = raw_ident_validity(token.kind)?;
        let start = token.span.start as usize + 1;
        let end = (token.span.end as usize).checked_sub(1)?;
        let raw = source.get(start..end)?;
        Some(RawIdentifierToken {
            raw,
            span: token.span,
            validity,
        })
    }

    /// Text between the backticks.
    pub fn raw(&self) -> &'src str {
        self.raw
    }

    /// The identifier this token names.
    pub fn value(&self) -> &'src str {
        self.raw
    }

    /// Span of the whole token, backticks included.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn validity(&self) -> RawIdentValidity {
        self.validity
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    /// Source text that reproduces this token.
    pub fn to_source(&self) -> String {
        format!("`{}`", self.raw)
    }
}

impl fmt::Display for RawIdentifierToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.raw)
    }
}
