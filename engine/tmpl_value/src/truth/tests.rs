use std::collections::HashMap;

use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use tmpl_diagnostic::CollectingSink;

use super::*;
use crate::HostObject;

#[derive(Debug)]
struct Socket;

impl HostObject for Socket {
    fn type_name(&self) -> &'static str {
        "Socket"
    }
}

fn empty_map() -> Value {
    Value::wrap(HashMap::<String, i64>::new())
}

#[test]
fn truthiness_of_numbers() {
    let sink = CollectingSink::new();
    assert!(!Value::wrap(0i64).is_true(&sink));
    assert!(Value::wrap(5i64).is_true(&sink));
    assert!(Value::wrap(-1i64).is_true(&sink));
    assert!(!Value::wrap(0u32).is_true(&sink));
    assert!(Value::wrap(3u32).is_true(&sink));
    assert!(!Value::wrap(0.0f64).is_true(&sink));
    assert!(Value::wrap(0.25f64).is_true(&sink));
    assert!(sink.is_empty());
}

#[test]
fn truthiness_of_containers() {
    let sink = CollectingSink::new();
    assert!(!Value::wrap("").is_true(&sink));
    assert!(Value::wrap("x").is_true(&sink));
    assert!(!Value::wrap(Vec::<i64>::new()).is_true(&sink));
    assert!(Value::wrap(vec![0i64]).is_true(&sink));
    assert!(!empty_map().is_true(&sink));
    assert!(Value::wrap(HashMap::from([("k".to_string(), 0i64)])).is_true(&sink));
    assert!(sink.is_empty());
}

#[test]
fn truthiness_of_bool_record_and_time() {
    let sink = CollectingSink::new();
    assert!(Value::wrap(true).is_true(&sink));
    assert!(!Value::wrap(false).is_true(&sink));
    let empty_record = RawValue::record("Empty", Vec::<(&str, i64)>::new());
    assert!(Value::wrap(empty_record).is_true(&sink));
    assert!(Value::wrap(DateTime::<Utc>::default()).is_true(&sink));
    assert!(sink.is_empty());
}

#[test]
fn truthiness_of_unsupported_kinds_reports() {
    let sink = CollectingSink::new();
    assert!(!Value::nil().is_true(&sink));
    assert!(!Value::wrap(RawValue::host(Socket)).is_true(&sink));
    assert_eq!(
        sink.take(),
        vec![
            Diagnostic::unsupported(Operation::IsTrue, "nil"),
            Diagnostic::unsupported(Operation::IsTrue, "Socket"),
        ]
    );
}

#[test]
fn negate_integers() {
    let sink = CollectingSink::new();
    assert_eq!(Value::wrap(5i64).negate(&sink), Value::wrap(0i64));
    assert_eq!(Value::wrap(0i64).negate(&sink), Value::wrap(1i64));
    assert_eq!(Value::wrap(9u8).negate(&sink), Value::wrap(0i64));
    assert_eq!(Value::wrap(0u8).negate(&sink), Value::wrap(1i64));
}

#[test]
fn negate_floats_keeps_one_point_one() {
    let sink = CollectingSink::new();
    assert_eq!(Value::wrap(2.5f64).negate(&sink), Value::wrap(0.0f64));
    assert_eq!(Value::wrap(0.0f64).negate(&sink), Value::wrap(1.1f64));
    assert_ne!(Value::wrap(0.0f64).negate(&sink), Value::wrap(1.0f64));
}

#[test]
fn negate_containers_is_boolean_emptiness() {
    let sink = CollectingSink::new();
    assert_eq!(Value::wrap("").negate(&sink), Value::wrap(true));
    assert_eq!(Value::wrap("a").negate(&sink), Value::wrap(false));
    assert_eq!(Value::wrap(vec![1i64]).negate(&sink), Value::wrap(false));
    assert_eq!(empty_map().negate(&sink), Value::wrap(true));
}

#[test]
fn negate_bool_record_time() {
    let sink = CollectingSink::new();
    assert_eq!(Value::wrap(true).negate(&sink), Value::wrap(false));
    assert_eq!(Value::wrap(false).negate(&sink), Value::wrap(true));
    let record = RawValue::record("R", [("a", 1i64)]);
    assert_eq!(Value::wrap(record).negate(&sink), Value::wrap(false));
    assert_eq!(
        Value::wrap(DateTime::<Utc>::default()).negate(&sink),
        Value::wrap(false)
    );
    assert!(sink.is_empty());
}

#[test]
fn negate_unsupported_reports_and_is_true() {
    let sink = CollectingSink::new();
    assert_eq!(Value::nil().negate(&sink), Value::wrap(true));
    assert_eq!(
        sink.take(),
        vec![Diagnostic::unsupported(Operation::Negate, "nil")]
    );
}

#[test]
fn negate_returns_new_unsafe_value() {
    let sink = CollectingSink::new();
    let original = Value::wrap_safe(3i64);
    let negated = original.negate(&sink);
    assert!(!negated.is_safe());
    assert_eq!(original, Value::wrap_safe(3i64));
}

#[test]
fn double_negation_matches_truthiness() {
    let sink = CollectingSink::new();
    let values = [
        Value::wrap(0i64),
        Value::wrap(4i64),
        Value::wrap(0.0f64),
        Value::wrap(1.5f64),
        Value::wrap(""),
        Value::wrap("z"),
        Value::wrap(true),
        Value::wrap(false),
    ];
    for value in values {
        assert_eq!(
            value.negate(&sink).negate(&sink).is_true(&sink),
            value.is_true(&sink),
            "{value:?}"
        );
    }
}
