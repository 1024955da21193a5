//! Rendering of lexer errors into diagnostics.

use quill_diagnostic::{Diagnostic, ErrorCode, Suggestion};

use crate::lex_error::{LexError, LexErrorKind};

/// Render a `LexError` into a `Diagnostic` with its error code, message,
/// label and suggestions.
///
/// The primary label covers the whole raw identifier, so the diagnostic is
/// anchored at the opening backtick.
#[cold]
pub fn render_lex_error(err: &LexError) -> Diagnostic {
    let span = err.span;
    let mut diag = match err.kind {
        LexErrorKind::EmptyRawIdent => Diagnostic::error(ErrorCode::E0101)
            .with_message("a raw identifier cannot be empty")
            .with_label(span, "empty raw identifier"),

        LexErrorKind::WhitespaceRawIdent => Diagnostic::error(ErrorCode::E0102)
            .with_message("a raw identifier cannot be entirely whitespace")
            .with_label(span, "only whitespace between the backticks"),

        LexErrorKind::BackslashInRawIdent => Diagnostic::error(ErrorCode::E0103)
            .with_message("a raw identifier cannot contain backslashes")
            .with_label(span, "contains `\\`"),

        LexErrorKind::OperatorOnlyRawIdent => Diagnostic::error(ErrorCode::E0104)
            .with_message("a raw identifier cannot contain only operator characters")
            .with_label(span, "only operator characters between the backticks"),
    };

    let mut suggestions: Vec<_> = err.suggestions.iter().collect();
    suggestions.sort_by_key(|s| s.priority);
    for suggestion in suggestions {
        diag = match &suggestion.replacement {
            Some(replacement) => diag.with_structured_suggestion(Suggestion::new(
                suggestion.message.clone(),
                replacement.span,
                replacement.text.clone(),
                replacement.applicability,
            )),
            None => diag.with_suggestion(suggestion.message.clone()),
        };
    }

    diag
}
