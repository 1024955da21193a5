use super::*;
use quill_lexer_core::Termination;
use crate::lex_error::LexErrorKind;
use pretty_assertions::assert_eq;

/// Cook the single raw token that spans the whole source.
fn cook_one(source: &str, tag: RawTag) -> (TokenKind, TokenCooker<'_, 'static>) {
    let mut cooker = TokenCooker::new(source, KeywordTable::standard());
    let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
    let kind = cooker.cook(tag, 0, len);
    (kind, cooker)
}

#[test]
fn reserved_word_is_keyword() {
    let (kind, cooker) = cook_one("protocol", RawTag::Ident);
    assert_eq!(kind, TokenKind::Keyword);
    assert!(!cooker.last_cook_was_contextual_kw());
}

#[test]
fn contextual_word_is_flagged_ident() {
    let (kind, cooker) = cook_one("get", RawTag::Ident);
    assert_eq!(kind, TokenKind::Ident);
    assert!(cooker.last_cook_was_contextual_kw());
}

#[test]
fn plain_identifier() {
    let (kind, cooker) = cook_one("Type", RawTag::Ident);
    assert_eq!(kind, TokenKind::Ident);
    assert!(!cooker.last_cook_was_contextual_kw());
    assert!(!cooker.last_cook_had_error());
}

#[test]
fn escaped_keyword_is_valid_raw_ident() {
    for source in ["`protocol`", "`get`", "`Self`"] {
        let (kind, cooker) = cook_one(source, RawTag::RawIdent(Termination::ClosedSameLine));
        assert_eq!(kind, TokenKind::RawIdent(RawIdentValidity::Valid), "{source}");
        assert!(!cooker.last_cook_was_contextual_kw(), "{source}");
        assert!(cooker.into_errors().is_empty(), "{source}");
    }
}

#[test]
fn invalid_raw_ident_records_one_error() {
    let (kind, cooker) = cook_one("`+`", RawTag::RawIdent(Termination::ClosedSameLine));
    assert_eq!(kind, TokenKind::RawIdent(RawIdentValidity::OperatorCharsOnly));
    assert!(cooker.last_cook_had_error());
    let errors = cooker.into_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::OperatorOnlyRawIdent);
    assert_eq!(errors[0].span, Span::new(0, 3));
}

#[test]
fn raw_ident_offset_into_source() {
    let source = "let `` = 5";
    let mut cooker = TokenCooker::new(source, KeywordTable::standard());
    let kind = cooker.cook(RawTag::RawIdent(Termination::ClosedSameLine), 4, 2);
    assert_eq!(kind, TokenKind::RawIdent(RawIdentValidity::Empty));
    let errors = cooker.into_errors();
    assert_eq!(errors[0].span, Span::new(4, 6));
}

#[test]
fn unfinished_raw_ident_is_unknown_without_error() {
    for termination in [
        Termination::UnterminatedAtNewline,
        Termination::UnterminatedAtEof,
        Termination::TerminatedAtForbiddenControlChar,
    ] {
        let (kind, cooker) = cook_one("`abc", RawTag::RawIdent(termination));
        assert_eq!(kind, TokenKind::Unknown);
        assert!(cooker.last_cook_had_error());
        assert!(cooker.into_errors().is_empty());
    }
}

#[test]
fn stray_bytes_are_unknown() {
    let (kind, _) = cook_one("\0", RawTag::InteriorNull);
    assert_eq!(kind, TokenKind::Unknown);
    let (kind, _) = cook_one("'", RawTag::InvalidByte);
    assert_eq!(kind, TokenKind::Unknown);
}

#[test]
fn flags_reset_between_cooks() {
    let source = "get x";
    let mut cooker = TokenCooker::new(source, KeywordTable::standard());
    cooker.cook(RawTag::Ident, 0, 3);
    assert!(cooker.last_cook_was_contextual_kw());
    cooker.cook(RawTag::Ident, 4, 1);
    assert!(!cooker.last_cook_was_contextual_kw());
}

#[test]
fn custom_keyword_table() {
    let table = KeywordTable::new(["fn"], ["get"]);
    let mut cooker = TokenCooker::new("fn protocol", &table);
    assert_eq!(cooker.cook(RawTag::Ident, 0, 2), TokenKind::Keyword);
    assert_eq!(cooker.cook(RawTag::Ident, 3, 8), TokenKind::Ident);
}

#[test]
fn punctuation_maps_directly() {
    let (kind, _) = cook_one("@", RawTag::At);
    assert_eq!(kind, TokenKind::At);
    let (kind, _) = cook_one("\\", RawTag::Backslash);
    assert_eq!(kind, TokenKind::Backslash);
    let (kind, _) = cook_one("+=", RawTag::Operator);
    assert_eq!(kind, TokenKind::Operator);
}

#[test]
fn raw_ident_validity_helper() {
    assert_eq!(
        raw_ident_validity(TokenKind::RawIdent(RawIdentValidity::Empty)),
        Some(RawIdentValidity::Empty)
    );
    assert_eq!(raw_ident_validity(TokenKind::Ident), None);
}
