//! Top-level recovery for text the lexer could not tokenize.
//!
//! An unfinished raw identifier hands its opening backtick and whatever
//! it consumed back as [`TokenKind::Unknown`], together with any stray
//! bytes. Rather than one diagnostic per fragment, fragments are grouped
//! into regions: a region starts at the first `Unknown` token and
//! continues across following lines that also contain an `Unknown` token.
//! A line without one closes the region. Each region is reported once as
//! extraneous code.

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{Span, TokenKind, TokenList};
use tracing::debug;

/// Group `Unknown` tokens into regions of extraneous code.
pub fn extraneous_regions(tokens: &TokenList) -> Vec<Span> {
    let mut regions = Vec::new();
    let mut current: Option<Span> = None;
    let mut line_has_unknown = false;

    for token in tokens {
        match token.kind {
            TokenKind::Unknown => {
                current = Some(current.map_or(token.span, |region| region.merge(token.span)));
                line_has_unknown = true;
            }
            TokenKind::Newline | TokenKind::Eof => {
                if !line_has_unknown {
                    regions.extend(current.take());
                }
                line_has_unknown = false;
            }
            _ => {}
        }
    }
    regions.extend(current);
    regions
}

/// One "extraneous code at top level" diagnostic per region, anchored at
/// the region start.
pub fn extraneous_code(source: &str, tokens: &TokenList) -> Vec<Diagnostic> {
    extraneous_regions(tokens)
        .into_iter()
        .map(|region| {
            debug!(start = region.start, end = region.end, "extraneous code");
            extraneous_code_diagnostic(source, region)
        })
        .collect()
}

#[cold]
fn extraneous_code_diagnostic(source: &str, region: Span) -> Diagnostic {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message(ErrorCode::E1001.description())
        .with_label(region, "could not be lexed");
    if source.as_bytes().get(region.start as usize) == Some(&b'`') {
        diag.with_note(
            "a raw identifier must be closed by a backtick on the same line \
             and cannot contain a NUL character",
        )
    } else {
        diag
    }
}
