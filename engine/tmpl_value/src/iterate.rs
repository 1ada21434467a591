//! The `for` loop protocol.
//!
//! A container is snapshotted before the first visit, so the callback sees a
//! fixed element count. `visit` receives `(index, count, key_or_item,
//! mapped_value)`; `mapped_value` is `Some` only for mappings. Returning
//! `false` from `visit` ends the loop.

use tmpl_diagnostic::{Diagnostic, DiagnosticSink, Operation};

use crate::compare::{compare, merge_sort_by};
use crate::value::{RawValue, Value};

impl Value {
    /// Iterate in natural order. See [`Value::iterate_order`].
    pub fn iterate<V, E>(&self, visit: V, on_empty: E, sink: &dyn DiagnosticSink)
    where
        V: FnMut(usize, usize, Value, Option<Value>) -> bool,
        E: FnOnce(),
    {
        self.iterate_order(visit, on_empty, false, false, sink);
    }

    /// Iterate, optionally sorted by [`compare`] and/or reversed.
    ///
    /// - mapping: visits keys with their values. `sorted` orders keys
    ///   (descending with `reverse`); unsorted order is unspecified and
    ///   `reverse` alone does nothing.
    /// - sequence: visits items. `sorted` orders them (descending with
    ///   `reverse`); otherwise `reverse` reverses.
    /// - text: visits code points as one-character text. `sorted` orders by
    ///   scalar value, then `reverse` reverses.
    ///
    /// `on_empty` runs once, instead of any visit, for an empty container or
    /// a kind that cannot be iterated (which also reports a diagnostic).
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(kind = self.type_name(), reverse = reverse, sorted = sorted)
    )]
    pub fn iterate_order<V, E>(
        &self,
        mut visit: V,
        on_empty: E,
        reverse: bool,
        sorted: bool,
        sink: &dyn DiagnosticSink,
    ) where
        V: FnMut(usize, usize, Value, Option<Value>) -> bool,
        E: FnOnce(),
    {
        match self.raw() {
            RawValue::Map(map) => {
                let mut entries: Vec<(Value, Value)> = map
                    .iter()
                    .map(|(key, value)| (Value::wrap(key.to_raw()), Value::wrap(value.clone())))
                    .collect();
                if entries.is_empty() {
                    on_empty();
                    return;
                }
                if sorted {
                    let mut by_key = |(a, _): &(Value, Value), (b, _): &(Value, Value)| {
                        let ord = compare(a, b, sink);
                        if reverse { ord.reverse() } else { ord }
                    };
                    entries = merge_sort_by(entries, &mut by_key);
                }
                let count = entries.len();
                for (idx, (key, value)) in entries.into_iter().enumerate() {
                    if !visit(idx, count, key, Some(value)) {
                        return;
                    }
                }
            }
            RawValue::Seq(items) => {
                let mut items: Vec<Value> = items.iter().cloned().map(Value::wrap).collect();
                if items.is_empty() {
                    on_empty();
                    return;
                }
                if sorted {
                    items = merge_sort_by(items, &mut |a: &Value, b: &Value| {
                        let ord = compare(a, b, sink);
                        if reverse { ord.reverse() } else { ord }
                    });
                } else if reverse {
                    items.reverse();
                }
                visit_items(items, &mut visit);
            }
            RawValue::Str(s) => {
                let mut chars: Vec<char> = s.chars().collect();
                if chars.is_empty() {
                    on_empty();
                    return;
                }
                if sorted {
                    // `sort` is stable; `char` ordering is by scalar value.
                    chars.sort();
                }
                if reverse {
                    chars.reverse();
                }
                let items = chars.into_iter().map(Value::wrap).collect();
                visit_items(items, &mut visit);
            }
            _ => {
                sink.report(Diagnostic::unsupported(Operation::Iterate, self.type_name()));
                on_empty();
            }
        }
    }
}

fn visit_items<V>(items: Vec<Value>, visit: &mut V)
where
    V: FnMut(usize, usize, Value, Option<Value>) -> bool,
{
    let count = items.len();
    for (idx, item) in items.into_iter().enumerate() {
        if !visit(idx, count, item, None) {
            return;
        }
    }
}
