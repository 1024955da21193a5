use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;
use quill_ir::Span;

fn error_at(code: ErrorCode, start: u32, message: &str) -> Diagnostic {
    Diagnostic::error(code)
        .with_message(message)
        .with_label(Span::new(start, start + 1), "here")
}

fn messages(diags: &[Diagnostic]) -> Vec<&str> {
    diags.iter().map(|d| d.message.as_str()).collect()
}

#[test]
fn test_flush_sorts_by_anchor() {
    let mut queue = DiagnosticQueue::new();
    queue.add(error_at(ErrorCode::E1001, 20, "third"));
    queue.add(error_at(ErrorCode::E0101, 0, "first"));
    queue.add(error_at(ErrorCode::E0104, 10, "second"));

    let flushed = queue.flush();
    assert_eq!(messages(&flushed), vec!["first", "second", "third"]);
    assert!(queue.is_empty());
}

#[test]
fn test_flush_is_stable_for_equal_anchors() {
    let mut queue = DiagnosticQueue::new();
    queue.add(error_at(ErrorCode::E1001, 5, "b"));
    queue.add(error_at(ErrorCode::E0101, 5, "c"));
    queue.add(error_at(ErrorCode::E0101, 1, "a"));

    assert_eq!(messages(&queue.flush()), vec!["a", "b", "c"]);
}

#[test]
fn test_unlimited_by_default() {
    let mut queue = DiagnosticQueue::new();
    for i in 0..50 {
        queue.add(error_at(ErrorCode::E0101, i, "e"));
    }
    assert_eq!(queue.flush().len(), 50);
}

#[test]
fn test_error_limit_truncates_report_only() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::with_error_limit(2));
    queue.add(error_at(ErrorCode::E0101, 30, "d"));
    queue.add(error_at(ErrorCode::E0101, 0, "a"));
    queue.add(error_at(ErrorCode::E0101, 10, "b"));
    queue.add(error_at(ErrorCode::E0101, 20, "c"));

    assert_eq!(queue.len(), 4);

    // The limit keeps the earliest errors in source order.
    assert_eq!(messages(&queue.flush()), vec!["a", "b"]);
    assert!(queue.is_empty());
}

#[test]
fn test_extend_keeps_everything() {
    let mut queue = DiagnosticQueue::new();
    queue.extend([
        error_at(ErrorCode::E0102, 8, "x"),
        error_at(ErrorCode::E0103, 2, "y"),
    ]);
    assert_eq!(queue.len(), 2);
    assert_eq!(messages(&queue.flush()), vec!["y", "x"]);
}

#[test]
fn test_flush_empties_queue() {
    let mut queue = DiagnosticQueue::new();
    queue.add(error_at(ErrorCode::E0101, 0, "a"));
    assert_eq!(queue.flush().len(), 1);
    assert!(queue.flush().is_empty());
}

#[test]
fn test_config_constructors() {
    assert_eq!(DiagnosticConfig::default().error_limit, 0);
    assert_eq!(DiagnosticConfig::with_error_limit(3).error_limit, 3);
}
