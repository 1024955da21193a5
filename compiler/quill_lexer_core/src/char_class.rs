//! Character classes shared by the raw scanner and the cooking layer.
//!
//! Operator characters follow the operator-head and operator-character
//! productions of the grammar: a fixed ASCII set plus a list of Unicode
//! symbol blocks and combining marks. `@`, `#`, `$`, `:` and `` ` `` are
//! punctuation, not operator characters.
//!
//! Plain identifiers are ASCII words plus Unicode XID characters that are
//! not operator characters.

use unicode_ident::{is_xid_continue, is_xid_start};

/// Returns `true` for ASCII bytes that can appear in an operator.
#[inline]
pub fn is_operator_byte(b: u8) -> bool {
    matches!(
        b,
        b'/' | b'='
            | b'-'
            | b'+'
            | b'!'
            | b'*'
            | b'%'
            | b'<'
            | b'>'
            | b'&'
            | b'|'
            | b'^'
            | b'~'
            | b'?'
            | b'.'
    )
}

/// Returns `true` if `c` may appear in an operator token.
pub fn is_operator_char(c: char) -> bool {
    match u8::try_from(c) {
        Ok(b) if b.is_ascii() => is_operator_byte(b),
        _ => is_operator_head(c) || is_operator_continuation(c),
    }
}

/// Unicode code points that may start an operator.
fn is_operator_head(c: char) -> bool {
    matches!(
        c,
        '\u{00A1}'..='\u{00A7}'
            | '\u{00A9}'
            | '\u{00AB}'
            | '\u{00AC}'
            | '\u{00AE}'
            | '\u{00B0}'..='\u{00B1}'
            | '\u{00B6}'
            | '\u{00BB}'
            | '\u{00BF}'
            | '\u{00D7}'
            | '\u{00F7}'
            | '\u{2016}'..='\u{2017}'
            | '\u{2020}'..='\u{2027}'
            | '\u{2030}'..='\u{203E}'
            | '\u{2041}'..='\u{2053}'
            | '\u{2055}'..='\u{205E}'
            | '\u{2190}'..='\u{23FF}'
            | '\u{2500}'..='\u{2775}'
            | '\u{2794}'..='\u{2BFF}'
            | '\u{2E00}'..='\u{2E7F}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3020}'
            | '\u{3030}'
    )
}

/// Combining marks that may continue an operator.
fn is_operator_continuation(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE00}'..='\u{FE0F}'
            | '\u{FE20}'..='\u{FE2F}'
            | '\u{E0100}'..='\u{E01EF}'
    )
}

/// Continuation byte of a plain identifier.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Non-ASCII character that may start a plain identifier.
pub fn is_unicode_ident_start(c: char) -> bool {
    !c.is_ascii() && is_xid_start(c) && !is_operator_char(c)
}

/// Non-ASCII character that may continue a plain identifier. Combining
/// marks in the operator set continue operators, not identifiers.
pub fn is_unicode_ident_continue(c: char) -> bool {
    !c.is_ascii() && is_xid_continue(c) && !is_operator_char(c)
}

#[cfg(test)]
mod tests;
