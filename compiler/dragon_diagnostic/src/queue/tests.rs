use pretty_assertions::assert_eq;

use dragon_ir::Span;

use super::*;

fn error_at(start: u32, message: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E5001)
        .with_message(message)
        .with_label(Span::new(start, start + 1), "here")
}

#[test]
fn test_flush_orders_by_span() {
    let mut queue = DiagnosticQueue::new();
    queue.add(error_at(20, "second"));
    queue.add(error_at(5, "first"));

    let messages: Vec<String> = queue.flush().into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["first".to_string(), "second".to_string()]);
    assert!(queue.is_empty());
    assert!(!queue.has_errors());
}

#[test]
fn test_deduplicates_identical_diagnostics() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(error_at(1, "same")));
    assert!(!queue.add(error_at(1, "same")));
    assert_eq!(queue.error_count(), 1);
}

#[test]
fn test_unlimited_keeps_duplicates() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    assert!(queue.add(error_at(1, "same")));
    assert!(queue.add(error_at(1, "same")));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_error_limit_reports_overflow() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: true,
    });
    for i in 0..5 {
        queue.add(error_at(i, &format!("error {i}")));
    }
    assert!(queue.limit_reached());

    let flushed = queue.flush();
    assert_eq!(flushed.len(), 3);
    let last = &flushed[2];
    assert_eq!(last.code, ErrorCode::E9002);
    assert_eq!(last.message, "3 more errors not shown");
}

#[test]
fn test_warnings_do_not_count_against_limit() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 1,
        deduplicate: false,
    });
    queue.add(error_at(0, "error"));
    assert!(queue.add(Diagnostic::warning(ErrorCode::E9002).with_message("warn")));
    assert_eq!(queue.warning_count(), 1);
    assert_eq!(queue.error_count(), 1);
}
