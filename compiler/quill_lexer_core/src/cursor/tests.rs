use super::*;
use crate::SourceBuffer;

// navigation

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_never_passes_eof() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    for _ in 0..10 {
        cursor.advance();
    }
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), 0);

    cursor.advance_n(100);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn peek_near_end_returns_sentinel() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.peek(), b'b');
    cursor.advance();
    assert_eq!(cursor.peek(), 0);
}

// marks

#[test]
fn span_since_mark_covers_consumed_bytes() {
    let buf = SourceBuffer::new("let `x`");
    let mut cursor = buf.cursor();
    cursor.advance_n(4);
    let mark = cursor.mark();
    assert_eq!(mark.pos(), 4);
    cursor.advance_n(3);
    assert_eq!(cursor.span_since(mark), 4..7);
}

#[test]
fn span_since_fresh_mark_is_empty() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    let mark = cursor.mark();
    assert!(cursor.span_since(mark).is_empty());
}

// utf-8

#[test]
fn utf8_width_from_leading_byte() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
}

#[test]
fn advance_char_skips_whole_code_point() {
    let buf = SourceBuffer::new("\u{2000}x");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn current_char_decodes_multibyte() {
    let buf = SourceBuffer::new("é\u{2000}");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current_char(), Some('é'));
    cursor.advance_char();
    assert_eq!(cursor.current_char(), Some('\u{2000}'));
    cursor.advance_char();
    assert_eq!(cursor.current_char(), None);
}

#[test]
fn eat_whitespace_stops_at_newline() {
    let buf = SourceBuffer::new(" \t\u{b}\u{c} \nx");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_handles_cr_and_eof() {
    let buf = SourceBuffer::new("// note\r\nx");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\r');

    let buf = SourceBuffer::new("// trailing");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

// raw identifier delimiters

#[test]
fn skip_to_raw_ident_delim_finds_backtick() {
    let buf = SourceBuffer::new("abc def`rest");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_raw_ident_delim(), b'`');
    assert_eq!(cursor.pos(), 7);
}

#[test]
fn skip_to_raw_ident_delim_finds_earliest_of_all_needles() {
    let cases: [(&str, u8, u32); 4] = [
        ("ab\ncd`", b'\n', 2),
        ("ab\r\n`", b'\r', 2),
        ("a\0b`", 0, 1),
        ("a\u{7f}b`", b'`', 3),
    ];
    for (source, byte, pos) in cases {
        let buf = SourceBuffer::new(source);
        let mut cursor = buf.cursor();
        assert_eq!(cursor.skip_to_raw_ident_delim(), byte, "{source:?}");
        assert_eq!(cursor.pos(), pos, "{source:?}");
    }
}

#[test]
fn skip_to_raw_ident_delim_nul_is_not_eof() {
    let buf = SourceBuffer::new("x\0");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_raw_ident_delim(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn skip_to_raw_ident_delim_runs_to_eof() {
    let buf = SourceBuffer::new("no closing tick");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_raw_ident_delim(), 0);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 15);
}

#[test]
fn skip_to_raw_ident_delim_ignores_multibyte_content() {
    // U+2000 is E2 80 80; none of those bytes is a delimiter.
    let buf = SourceBuffer::new("\u{2000}\u{1F600}`");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_raw_ident_delim(), b'`');
    assert_eq!(cursor.pos(), 7);
}
