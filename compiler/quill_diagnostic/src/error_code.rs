//! Stable codes identifying each kind of diagnostic.

use std::fmt;

/// Error codes for lexer and top-level recovery diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser-level errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Raw identifier with nothing between the backticks
    E0101,
    /// Raw identifier made only of whitespace
    E0102,
    /// Backslash inside a raw identifier
    E0103,
    /// Raw identifier made only of operator characters
    E0104,

    // Parser Errors (E1xxx)
    /// Extraneous code at top level
    E1001,
}

impl ErrorCode {
    /// Get the numeric code as a string (e.g., "E0101").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0101 => "E0101",
            ErrorCode::E0102 => "E0102",
            ErrorCode::E0103 => "E0103",
            ErrorCode::E0104 => "E0104",
            ErrorCode::E1001 => "E1001",
        }
    }

    /// One-line explanation of the code. Also the message of diagnostics
    /// that need no further detail.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0101 => "raw identifier is empty",
            ErrorCode::E0102 => "raw identifier contains only whitespace",
            ErrorCode::E0103 => "raw identifier contains a backslash",
            ErrorCode::E0104 => "raw identifier contains only operator characters",
            ErrorCode::E1001 => "extraneous code at top level",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
