//! The [`Diagnostic`] value and the labels and edits attached to it.
//!
//! Every diagnostic the lexer reports is an error; there is no warning
//! level.

use std::fmt;

use quill_ir::Span;

use crate::ErrorCode;

/// How safely a [`Suggestion`] can be applied without a human looking at it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Applicability {
    /// Applying the edit always yields the intended code.
    MachineApplicable,
    /// The edit compiles but may not be what the author meant.
    MaybeIncorrect,
}

/// Replace the text at `span` with `snippet`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Substitution {
    pub span: Span,
    pub snippet: String,
}

/// An edit offered alongside a diagnostic.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Suggestion {
    pub message: String,
    pub substitutions: Vec<Substitution>,
    pub applicability: Applicability,
}

impl Suggestion {
    pub fn new(
        message: impl Into<String>,
        span: Span,
        snippet: impl Into<String>,
        applicability: Applicability,
    ) -> Self {
        let substitution = Substitution {
            span,
            snippet: snippet.into(),
        };
        Suggestion {
            message: message.into(),
            substitutions: vec![substitution],
            applicability,
        }
    }
}

/// A message attached to a span. The first label is the primary one.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// One reported problem.
///
/// Diagnostics are plain data. They are sorted by [`anchor`](Self::anchor)
/// when queued, and [`Display`](fmt::Display) gives a compact plain-text
/// form; any richer rendering belongs to the caller.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "a diagnostic that is built but never queued is lost"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    /// Free-form help lines.
    pub suggestions: Vec<String>,
    /// Help that carries a concrete edit.
    pub structured_suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
            structured_suggestions: Vec::new(),
        }
    }

    pub fn with_message(self, message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            ..self
        }
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, help: impl Into<String>) -> Self {
        self.suggestions.push(help.into());
        self
    }

    pub fn with_structured_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.structured_suggestions.push(suggestion);
        self
    }

    /// Span of the first label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.first().map(|label| label.span)
    }

    /// Byte offset the diagnostic is anchored at: the start of its
    /// primary span, or 0 when it has none.
    pub fn anchor(&self) -> u32 {
        self.primary_span().map_or(0, |span| span.start)
    }

    fn help_lines(&self) -> impl Iterator<Item = &str> {
        self.suggestions.iter().map(String::as_str).chain(
            self.structured_suggestions
                .iter()
                .map(|suggestion| suggestion.message.as_str()),
        )
    }
}

/// ```text
/// error [E0101]: a raw identifier cannot be empty
///   --> 4..6: empty raw identifier
///   = help: write the identifier between the backticks
/// ```
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error [{}]: {}", self.code, self.message)?;
        for (i, label) in self.labels.iter().enumerate() {
            let arrow = if i == 0 { "-->" } else { "   " };
            write!(f, "\n  {arrow} {}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for help in self.help_lines() {
            write!(f, "\n  = help: {help}")?;
        }
        Ok(())
    }
}
