//! Low-level scanning primitives for Quill source text.
//!
//! This crate turns bytes into `(RawTag, len)` pairs. It knows where
//! tokens start and stop and why a backtick-delimited raw identifier
//! stopped, but it does not classify keywords, validate raw identifier
//! content, or build diagnostics. That work belongs to `quill_lexer`.
//!
//! ```text
//! SourceBuffer -> Cursor -> RawScanner -> (RawTag, len)
//!                              |
//!                              +-- raw_ident::scan_raw_ident on '`'
//! ```

pub mod char_class;
mod cursor;
pub mod raw_ident;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::{Cursor, Mark};
pub use raw_ident::{RawIdentScan, Termination};
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
