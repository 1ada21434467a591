use std::collections::HashMap;

use pretty_assertions::assert_eq;
use tmpl_diagnostic::{CollectingSink, NullSink};

use super::*;

fn letters() -> Value {
    Value::wrap(vec!["a", "b", "c"])
}

#[test]
fn len_of_containers() {
    let sink = CollectingSink::new();
    assert_eq!(letters().len(&sink), 3);
    assert_eq!(
        Value::wrap(HashMap::from([(1i64, "x"), (2, "y")])).len(&sink),
        2
    );
    assert_eq!(Value::wrap("").len(&sink), 0);
    assert!(sink.is_empty());
}

#[test]
fn len_of_text_counts_code_points() {
    let sink = CollectingSink::new();
    assert_eq!(Value::wrap("héllo").len(&sink), 5);
    assert_eq!(Value::wrap("日本語").len(&sink), 3);
}

#[test]
fn len_of_unsupported_kind_reports() {
    let sink = CollectingSink::new();
    assert_eq!(Value::wrap(10i64).len(&sink), 0);
    assert_eq!(
        sink.take(),
        vec![Diagnostic::unsupported(Operation::Len, "int")]
    );
}

#[test]
fn can_slice_kinds() {
    assert!(letters().can_slice());
    assert!(Value::wrap("abc").can_slice());
    assert!(!Value::wrap(HashMap::<String, i64>::new()).can_slice());
    assert!(!Value::wrap(1i64).can_slice());
    assert!(!Value::nil().can_slice());
}

#[test]
fn index_sequence() {
    let sink = CollectingSink::new();
    assert_eq!(letters().index(0, &sink), Value::wrap("a"));
    assert_eq!(letters().index(2, &sink), Value::wrap("c"));
    assert!(letters().index(3, &sink).is_nil());
    assert!(letters().index(100, &sink).is_nil());
    assert!(sink.is_empty(), "past-the-end is not a diagnostic");
}

#[test]
fn index_text_by_code_point() {
    let sink = CollectingSink::new();
    assert_eq!(Value::wrap("日本語").index(1, &sink), Value::wrap("本"));
    assert_eq!(Value::wrap("abc").index(3, &sink), Value::wrap(""));
    assert!(sink.is_empty());
}

#[test]
fn index_unsupported_kind_reports() {
    let sink = CollectingSink::new();
    let result = Value::wrap(1.5f64).index(0, &sink);
    assert_eq!(result, Value::wrap(RawValue::seq(Vec::new())));
    assert_eq!(
        sink.take(),
        vec![Diagnostic::unsupported(Operation::Index, "float")]
    );
}

#[test]
fn slice_sequence() {
    let sink = CollectingSink::new();
    assert_eq!(letters().slice(1, 3, &sink), Value::wrap(vec!["b", "c"]));
    assert_eq!(letters().slice(0, 0, &sink), Value::wrap(Vec::<&str>::new()));
    assert_eq!(letters().slice(3, 3, &sink), Value::wrap(Vec::<&str>::new()));
}

#[test]
fn slice_text_by_code_point() {
    let sink = CollectingSink::new();
    assert_eq!(Value::wrap("héllo").slice(1, 4, &sink), Value::wrap("éll"));
    assert_eq!(Value::wrap("abc").slice(0, 3, &sink), Value::wrap("abc"));
}

#[test]
fn slice_leaves_source_untouched() {
    let sink = CollectingSink::new();
    let source = letters();
    let _ = source.slice(0, 1, &sink);
    assert_eq!(source, letters());
}

#[test]
#[should_panic(expected = "out of range")]
fn slice_past_end_panics() {
    let _ = letters().slice(1, 4, &NullSink);
}

#[test]
#[should_panic]
fn slice_inverted_range_panics() {
    let _ = Value::wrap("abc").slice(2, 1, &NullSink);
}

#[test]
fn slice_unsupported_kind_reports() {
    let sink = CollectingSink::new();
    let result = Value::wrap(true).slice(0, 1, &sink);
    assert_eq!(result, Value::wrap(RawValue::seq(Vec::new())));
    assert_eq!(
        sink.take(),
        vec![Diagnostic::unsupported(Operation::Slice, "bool")]
    );
}
