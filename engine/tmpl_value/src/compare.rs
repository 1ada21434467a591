//! Equality, containment and the ordering shared by sorted iteration.

use std::cmp::Ordering;
use std::sync::Arc;

use tmpl_diagnostic::{Diagnostic, DiagnosticSink, Operation};

use crate::coerce::number_as_f64;
use crate::value::{MapKey, RawValue, RecordValue, Value};

/// Absolute tolerance for numeric equality.
pub const EPSILON: f64 = 1e-9;

impl Value {
    /// Template equality (`==`).
    ///
    /// Numbers of either family compare as floats within [`EPSILON`],
    /// timestamps by instant. Nil equals nothing, not even nil. Remaining
    /// kinds use native equality where it exists; sequences and mappings
    /// have none and are never equal.
    pub fn equal_value_to(&self, other: &Value) -> bool {
        if let (Some(a), Some(b)) = (number_as_f64(self.raw()), number_as_f64(other.raw())) {
            return (a - b) < EPSILON && (b - a) < EPSILON;
        }
        if let (RawValue::Time(a), RawValue::Time(b)) = (self.raw(), other.raw()) {
            return a == b;
        }
        if self.is_nil() || other.is_nil() {
            return false;
        }
        native_eq(self.raw(), other.raw()).unwrap_or(false)
    }

    /// Membership test (`in`).
    ///
    /// - record: a field named `other.to_text()` exists
    /// - mapping: `other` is a key, looked up only for int and text keys
    /// - text: `other.to_text()` is a substring
    /// - sequence: some item is [`equal_value_to`](Value::equal_value_to) `other`
    /// - timestamp: never
    ///
    /// Other kinds report a diagnostic and return `false`.
    pub fn contains(&self, other: &Value, sink: &dyn DiagnosticSink) -> bool {
        match self.raw() {
            RawValue::Record(record) => record.has_field(&other.to_text(sink)),
            RawValue::Time(_) => false,
            RawValue::Map(map) => {
                if other.is_nil() || other.kind() != map.key_kind() {
                    return false;
                }
                match other.raw() {
                    RawValue::Int(n) => map.contains_key(&MapKey::Int(*n)),
                    RawValue::Str(s) => map.contains_key(&MapKey::Str(s.clone())),
                    _ => {
                        sink.report(Diagnostic::unsupported_lookup(
                            Operation::Contains,
                            other.type_name(),
                        ));
                        false
                    }
                }
            }
            RawValue::Str(s) => s.contains(other.to_text(sink).as_str()),
            RawValue::Seq(items) => items
                .iter()
                .any(|item| Value::wrap(item.clone()).equal_value_to(other)),
            _ => {
                sink.report(Diagnostic::unsupported(Operation::Contains, self.type_name()));
                false
            }
        }
    }
}

/// Native equality, or `None` when either side has none.
#[allow(clippy::float_cmp, reason = "floats are compared with tolerance before this point")]
fn native_eq(a: &RawValue, b: &RawValue) -> Option<bool> {
    match (a, b) {
        (RawValue::Seq(_) | RawValue::Map(_), _) | (_, RawValue::Seq(_) | RawValue::Map(_)) => None,
        (RawValue::Record(a), RawValue::Record(b)) => records_eq(a, b),
        (RawValue::Record(a), _) => comparable_record(a).then_some(false),
        (_, RawValue::Record(b)) => comparable_record(b).then_some(false),
        (RawValue::Nil, RawValue::Nil) => Some(true),
        (RawValue::Bool(a), RawValue::Bool(b)) => Some(a == b),
        (RawValue::Int(a), RawValue::Int(b)) => Some(a == b),
        (RawValue::Uint(a), RawValue::Uint(b)) => Some(a == b),
        (RawValue::Float(a), RawValue::Float(b)) => Some(a == b),
        (RawValue::Str(a), RawValue::Str(b)) => Some(a == b),
        (RawValue::Time(a), RawValue::Time(b)) => Some(a == b),
        (RawValue::Host(a), RawValue::Host(b)) => Some(Arc::ptr_eq(a, b)),
        _ => Some(false),
    }
}

fn records_eq(a: &RecordValue, b: &RecordValue) -> Option<bool> {
    if !comparable_record(a) || !comparable_record(b) {
        return None;
    }
    if a.type_name() != b.type_name() || a.len() != b.len() {
        return Some(false);
    }
    let equal = a
        .fields()
        .zip(b.fields())
        .all(|((na, va), (nb, vb))| na == nb && native_eq(va, vb) == Some(true));
    Some(equal)
}

/// A record has native equality only if every field does.
fn comparable_record(record: &RecordValue) -> bool {
    record.fields().all(|(_, value)| match value {
        RawValue::Seq(_) | RawValue::Map(_) => false,
        RawValue::Record(inner) => comparable_record(inner),
        _ => true,
    })
}

/// Ordering used by sorted iteration.
///
/// Two integers (signed or unsigned) compare numerically, as do two floats.
/// Every other pairing compares the text forms lexicographically, so the
/// ordering is not transitive across kinds.
pub fn compare(a: &Value, b: &Value, sink: &dyn DiagnosticSink) -> Ordering {
    match (a.raw(), b.raw()) {
        (RawValue::Float(x), RawValue::Float(y)) => x.total_cmp(y),
        (x, y) if x.kind().is_integer() && y.kind().is_integer() => {
            integer_wide(x).cmp(&integer_wide(y))
        }
        _ => a.to_text(sink).cmp(&b.to_text(sink)),
    }
}

fn integer_wide(raw: &RawValue) -> i128 {
    match raw {
        RawValue::Int(n) => i128::from(*n),
        RawValue::Uint(n) => i128::from(*n),
        _ => 0,
    }
}

/// Stable merge sort.
///
/// Unlike `slice::sort_by`, this never panics when `cmp` is not a total
/// order; an inconsistent comparator only yields an unspecified permutation.
pub(crate) fn merge_sort_by<T, F>(mut items: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, cmp);
    let right = merge_sort_by(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut next_left = left.next();
    let mut next_right = right.next();
    loop {
        match (next_left.take(), next_right.take()) {
            (Some(l), Some(r)) => {
                // Ties keep the left element first.
                if cmp(&r, &l) == Ordering::Less {
                    merged.push(r);
                    next_left = Some(l);
                    next_right = right.next();
                } else {
                    merged.push(l);
                    next_left = left.next();
                    next_right = Some(r);
                }
            }
            (Some(l), None) => {
                merged.push(l);
                merged.extend(left);
                break;
            }
            (None, Some(r)) => {
                merged.push(r);
                merged.extend(right);
                break;
            }
            (None, None) => break,
        }
    }
    merged
}
