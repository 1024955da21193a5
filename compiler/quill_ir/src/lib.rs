//! Core data types shared between the Quill lexer and its consumers.
//!
//! Everything here is plain data: byte-offset [`Span`]s, the cooked
//! [`Token`] stream, and per-token [`TokenFlags`]. No crate in this
//! module graph owns the source text; spans index into a buffer owned
//! by whoever drives the lexer.

mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{RawIdentValidity, Token, TokenFlags, TokenKind, TokenList};
