//! Diagnostics for the Quill front end.
//!
//! A [`Diagnostic`] pairs an [`ErrorCode`] and message with the spans it is
//! about and any help the lexer can offer. Diagnostics are collected in a
//! [`queue::DiagnosticQueue`], which hands them back in source order.

mod diagnostic;
mod error_code;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Applicability, Diagnostic, Label, Substitution, Suggestion};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
