//! End-to-end behavior of values as templates observe them.
//!
//! Each test drives the public API the way an evaluator would: wrap host
//! data, run the operation, read results through a sink.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use tmpl_value::{CollectingSink, Diagnostic, NullSink, Operation, RawValue, Value};

fn visit_keys(value: &Value, reverse: bool, sorted: bool) -> Vec<String> {
    let mut keys = Vec::new();
    value.iterate_order(
        |_, _, key, _| {
            keys.push(key.to_text(&NullSink));
            true
        },
        || {},
        reverse,
        sorted,
        &NullSink,
    );
    keys
}

#[test]
fn integer_one_equals_float_one() {
    assert!(Value::wrap(1i64).equal_value_to(&Value::wrap(1.0f64)));
    assert!(Value::wrap(1.0f64).equal_value_to(&Value::wrap(1i64)));
    assert!(!Value::wrap(1i64).equal_value_to(&Value::wrap(1.5f64)));
}

#[test]
fn text_containment_is_case_sensitive() {
    let sink = CollectingSink::new();
    assert!(Value::wrap("Hello, World!").contains(&Value::wrap("World"), &sink));
    assert!(!Value::wrap("Hello").contains(&Value::wrap("world"), &sink));
    assert!(sink.is_empty());
}

#[test]
fn truthiness_laws() {
    let sink = CollectingSink::new();
    assert!(!Value::wrap(0i64).is_true(&sink));
    assert!(Value::wrap(5i64).is_true(&sink));
    assert!(!Value::wrap("").is_true(&sink));
    assert!(!Value::wrap(Vec::<i64>::new()).is_true(&sink));
    let empty_record = RawValue::record("Empty", Vec::<(&str, i64)>::new());
    assert!(Value::wrap(empty_record).is_true(&sink));
    assert!(sink.is_empty());
}

#[test]
fn negation_is_asymmetric_for_floats() {
    let sink = CollectingSink::new();
    assert_eq!(Value::wrap(5i64).negate(&sink), Value::wrap(0i64));
    assert_eq!(Value::wrap(0i64).negate(&sink), Value::wrap(1i64));
    assert_eq!(Value::wrap(2.5f64).negate(&sink), Value::wrap(0.0f64));
    assert_eq!(Value::wrap(0.0f64).negate(&sink), Value::wrap(1.1f64));
}

#[test]
fn empty_iteration_calls_on_empty_exactly_once() {
    for empty in [
        Value::wrap(Vec::<i64>::new()),
        Value::wrap(HashMap::<String, i64>::new()),
        Value::wrap(""),
    ] {
        let mut visits = 0;
        let mut empties = 0;
        empty.iterate(
            |_, _, _, _| {
                visits += 1;
                true
            },
            || empties += 1,
            &NullSink,
        );
        assert_eq!((visits, empties), (0, 1), "{empty:?}");
    }
}

#[test]
fn sorted_mapping_visits_keys_in_order() {
    let map = Value::wrap(HashMap::from([("b".to_string(), 2i64), ("a".to_string(), 1)]));
    assert_eq!(visit_keys(&map, false, true), vec!["a", "b"]);
}

#[test]
fn sorted_reverse_sequence_descends() {
    let xs = Value::wrap(vec![3i64, 1, 2]);
    assert_eq!(visit_keys(&xs, true, true), vec!["3", "2", "1"]);
}

#[test]
fn visit_returning_false_stops_after_one_call() {
    let mut visits = 0;
    let mut empties = 0;
    Value::wrap(vec![1i64, 2, 3]).iterate(
        |_, _, _, _| {
            visits += 1;
            false
        },
        || empties += 1,
        &NullSink,
    );
    assert_eq!(visits, 1);
    assert_eq!(empties, 0);
}

#[test]
fn mapping_contains_with_foreign_key_kind_is_false() {
    let sink = CollectingSink::new();
    let by_name = Value::wrap(HashMap::from([("1".to_string(), true)]));
    assert!(!by_name.contains(&Value::wrap(1i64), &sink));
    assert!(!by_name.contains(&Value::wrap(1.0f64), &sink));
    assert!(sink.is_empty());
}

#[test]
fn loop_body_sees_index_and_count() {
    let mut seen = Vec::new();
    Value::wrap(vec!["x", "y"]).iterate(
        |idx, count, item, mapped| {
            seen.push((idx, count, item.to_text(&NullSink), mapped.is_none()));
            true
        },
        || {},
        &NullSink,
    );
    assert_eq!(
        seen,
        vec![(0, 2, "x".to_string(), true), (1, 2, "y".to_string(), true)]
    );
}

#[test]
fn degraded_operations_report_and_continue() {
    let sink = CollectingSink::new();
    let record = Value::wrap(RawValue::record("Order", [("id", 7i64)]));

    let rendered = format!("{}|{}", record.to_text(&sink), record.len(&sink));
    assert_eq!(rendered, "<Order Value>|0");
    assert_eq!(
        sink.take(),
        vec![
            Diagnostic::unsupported(Operation::ToText, "record"),
            Diagnostic::unsupported(Operation::Len, "record"),
        ]
    );
}

#[test]
fn diagnostic_messages_name_method_and_type() {
    let sink = CollectingSink::new();
    let _ = Value::nil().to_integer(&sink);
    let messages: Vec<String> = sink.take().iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec!["Value::to_integer() not available for type: nil".to_string()]
    );
}

#[test]
fn slicing_and_indexing_agree() {
    let sink = CollectingSink::new();
    let word = Value::wrap("größe");
    assert!(word.can_slice());
    let n = word.len(&sink);
    assert_eq!(n, 5);
    for i in 0..n {
        assert_eq!(word.slice(i, i + 1, &sink), word.index(i, &sink));
    }
}

#[cfg(feature = "json")]
#[test]
fn json_context_renders_through_templates() {
    let sink = CollectingSink::new();
    let ctx = Value::wrap(serde_json::json!({ "user": "ann", "items": [3, 1, 2] }));
    assert!(ctx.contains(&Value::wrap("user"), &sink));
    let mut keys = Vec::new();
    ctx.iterate_order(
        |_, _, key, value| {
            keys.push(key.to_text(&sink));
            assert!(value.is_some());
            true
        },
        || {},
        false,
        true,
        &sink,
    );
    assert_eq!(keys, vec!["items", "user"]);
    assert!(sink.is_empty());
}
