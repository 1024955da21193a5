use super::*;

#[test]
fn ascii_operator_set() {
    for c in "/=-+!*%<>&|^~?.".chars() {
        assert!(is_operator_char(c), "{c:?} should be an operator char");
    }
}

#[test]
fn punctuation_is_not_operator() {
    for c in "@#$:`,;()[]{}\\\"' _aZ09".chars() {
        assert!(!is_operator_char(c), "{c:?} should not be an operator char");
    }
}

#[test]
fn unicode_operator_heads() {
    for c in ['\u{00D7}', '\u{00F7}', '\u{2190}', '\u{2260}', '\u{25CF}', '\u{3008}'] {
        assert!(is_operator_char(c), "{:04X}", c as u32);
    }
}

#[test]
fn combining_marks_continue_operators() {
    assert!(is_operator_char('\u{0301}'));
    assert!(is_operator_char('\u{FE0F}'));
    assert!(is_operator_char('\u{E0100}'));
}

#[test]
fn letters_and_spaces_are_not_operators() {
    for c in ['é', 'λ', '\u{2000}', '\u{3000}', '😀'] {
        assert!(!is_operator_char(c), "{:04X}", c as u32);
    }
}

#[test]
fn ident_bytes() {
    assert!(is_ident_continue(b'_'));
    assert!(is_ident_continue(b'1'));
    assert!(!is_ident_continue(b'`'));
    assert!(!is_ident_continue(0));
}

#[test]
fn unicode_letters_start_identifiers() {
    for c in ['é', 'π', 'λ', 'Ж', '漢'] {
        assert!(is_unicode_ident_start(c), "{c:?}");
        assert!(is_unicode_ident_continue(c), "{c:?}");
    }
}

#[test]
fn ascii_is_left_to_the_byte_classes() {
    assert!(!is_unicode_ident_start('a'));
    assert!(!is_unicode_ident_continue('_'));
}

#[test]
fn operator_chars_never_join_identifiers() {
    // U+0301 is XID_Continue but also an operator continuation
    assert!(!is_unicode_ident_continue('\u{0301}'));
    for c in ['\u{00D7}', '\u{2260}', '\u{2000}', '😀'] {
        assert!(!is_unicode_ident_start(c), "{:04X}", c as u32);
        assert!(!is_unicode_ident_continue(c), "{:04X}", c as u32);
    }
}
