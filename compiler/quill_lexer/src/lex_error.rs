//! Errors recorded while cooking raw identifiers.
//!
//! Each [`LexError`] carries the offending span, the rule that failed and
//! any fixes worth offering. Only closed raw identifiers whose content breaks a rule produce a
//! `LexError`. Text the scanner could not finish is left to
//! [`recovery`](crate::recovery).

use quill_diagnostic::Applicability;
use quill_ir::{RawIdentValidity, Span};

use crate::validate::validate_raw_ident;

/// A raw identifier whose content breaks a rule.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// The whole raw identifier, backticks included, so it starts at the
    /// opening backtick.
    pub span: Span,
    pub kind: LexErrorKind,
    /// Rendered in ascending `priority`.
    pub suggestions: Vec<LexSuggestion>,
}

/// Which content rule failed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// `` `` `` with nothing inside.
    EmptyRawIdent,
    /// Only whitespace between the backticks.
    WhitespaceRawIdent,
    /// A `\` between the backticks.
    BackslashInRawIdent,
    /// Only operator characters between the backticks.
    OperatorOnlyRawIdent,
}

/// A possible fix.
///
/// Rendering maps this to `quill_diagnostic::Suggestion`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexSuggestion {
    pub message: String,
    /// Set when the fix is a concrete edit.
    pub replacement: Option<LexReplacement>,
    /// `0` is the most likely fix.
    pub priority: u8,
}

/// Replace `span` with `text`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexReplacement {
    pub span: Span,
    pub text: String,
    pub applicability: Applicability,
}

impl LexSuggestion {
    /// Advice with no edit attached.
    pub fn text(message: impl Into<String>, priority: u8) -> Self {
        Self {
            message: message.into(),
            replacement: None,
            priority,
        }
    }

    /// Advice backed by an edit.
    pub fn replace(
        message: impl Into<String>,
        span: Span,
        text: impl Into<String>,
        applicability: Applicability,
        priority: u8,
    ) -> Self {
        Self {
            message: message.into(),
            replacement: Some(LexReplacement {
                span,
                text: text.into(),
                applicability,
            }),
            priority,
        }
    }
}

impl LexError {
    /// Create an empty raw identifier error.
    #[cold]
    pub fn empty_raw_ident(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::EmptyRawIdent,
            suggestions: vec![LexSuggestion::text(
                "write the identifier between the backticks",
                0,
            )],
        }
    }

    /// Create a whitespace-only raw identifier error.
    #[cold]
    pub fn whitespace_raw_ident(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::WhitespaceRawIdent,
            suggestions: vec![LexSuggestion::text(
                "a raw identifier needs at least one non-whitespace character",
                0,
            )],
        }
    }

    /// Create a backslash-in-raw-identifier error.
    ///
    /// Offers the content with backslashes removed when that content is
    /// itself a valid raw identifier.
    #[cold]
    pub fn backslash_in_raw_ident(span: Span, content: &str) -> Self {
        let stripped: String = content.chars().filter(|&c| c != '\\').collect();
        let suggestion = if validate_raw_ident(&stripped).is_valid() {
            LexSuggestion::replace(
                "remove the backslashes",
                span,
                format!("`{stripped}`"),
                Applicability::MachineApplicable,
                0,
            )
        } else {
            LexSuggestion::text("raw identifiers have no escape sequences", 1)
        };
        Self {
            span,
            kind: LexErrorKind::BackslashInRawIdent,
            suggestions: vec![suggestion],
        }
    }

    /// Create an operator-only raw identifier error.
    #[cold]
    pub fn operator_only_raw_ident(span: Span, content: &str) -> Self {
        Self {
            span,
            kind: LexErrorKind::OperatorOnlyRawIdent,
            suggestions: vec![LexSuggestion::replace(
                "to refer to the operator, write it without backticks",
                span,
                content,
                Applicability::MaybeIncorrect,
                1,
            )],
        }
    }

    /// Build the error for a failed content rule; `None` for `Valid`.
    pub fn from_validity(span: Span, content: &str, validity: RawIdentValidity) -> Option<Self> {
        match validity {
            RawIdentValidity::Valid => None,
            RawIdentValidity::Empty => Some(Self::empty_raw_ident(span)),
            RawIdentValidity::AllWhitespace => Some(Self::whitespace_raw_ident(span)),
            RawIdentValidity::ContainsBackslash => {
                Some(Self::backslash_in_raw_ident(span, content))
            }
            RawIdentValidity::OperatorCharsOnly => {
                Some(Self::operator_only_raw_ident(span, content))
            }
        }
    }
}
