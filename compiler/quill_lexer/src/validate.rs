//! Content rules for closed raw identifiers.
//!
//! Rules are checked in a fixed order and the first failure wins:
//!
//! 1. empty
//! 2. only whitespace (`char::is_whitespace`, so U+2000 counts)
//! 3. contains `\`
//! 4. only operator characters
//!
//! Control characters other than NUL are accepted; NUL never reaches the
//! validator because the scanner stops on it.

use quill_ir::RawIdentValidity;
use quill_lexer_core::char_class::is_operator_char;

/// Classify the text between a raw identifier's backticks.
pub fn validate_raw_ident(content: &str) -> RawIdentValidity {
    if content.is_empty() {
        RawIdentValidity::Empty
    } else if content.chars().all(char::is_whitespace) {
        RawIdentValidity::AllWhitespace
    } else if content.contains('\\') {
        RawIdentValidity::ContainsBackslash
    } else if content.chars().all(is_operator_char) {
        RawIdentValidity::OperatorCharsOnly
    } else {
        RawIdentValidity::Valid
    }
}
