//! Length, indexing and slicing.
//!
//! Text is addressed by Unicode code point, never by byte.

use tmpl_diagnostic::{Diagnostic, DiagnosticSink, Operation};

use crate::value::{RawValue, Value};

impl Value {
    /// Element count of a sequence or mapping, code-point count of text.
    pub fn len(&self, sink: &dyn DiagnosticSink) -> usize {
        match self.raw() {
            RawValue::Seq(items) => items.len(),
            RawValue::Map(map) => map.len(),
            RawValue::Str(s) => s.chars().count(),
            _ => {
                sink.report(Diagnostic::unsupported(Operation::Len, self.type_name()));
                0
            }
        }
    }

    /// Whether [`Value::slice`] and [`Value::index`] apply to this value.
    pub fn can_slice(&self) -> bool {
        matches!(self.raw(), RawValue::Seq(_) | RawValue::Str(_))
    }

    /// The `i`-th element of a sequence, or the `i`-th code point of text.
    ///
    /// Past the end, a sequence yields nil and text yields `""`. Other kinds
    /// report a diagnostic and yield an empty sequence.
    pub fn index(&self, i: usize, sink: &dyn DiagnosticSink) -> Value {
        match self.raw() {
            RawValue::Seq(items) => items
                .get(i)
                .map_or_else(Value::nil, |item| Value::wrap(item.clone())),
            RawValue::Str(s) => {
                Value::wrap(s.chars().nth(i).map(String::from).unwrap_or_default())
            }
            _ => {
                sink.report(Diagnostic::unsupported(Operation::Index, self.type_name()));
                Value::wrap(RawValue::seq(Vec::new()))
            }
        }
    }

    /// The subsequence or substring `[i, j)`.
    ///
    /// Other kinds report a diagnostic and yield an empty sequence.
    ///
    /// # Panics
    ///
    /// Panics if `i > j` or `j` exceeds the length. Bounds are the caller's
    /// responsibility; gate on [`Value::can_slice`] and [`Value::len`].
    pub fn slice(&self, i: usize, j: usize, sink: &dyn DiagnosticSink) -> Value {
        match self.raw() {
            RawValue::Seq(items) => Value::wrap(RawValue::seq(items[i..j].to_vec())),
            RawValue::Str(s) => {
                let chars: Vec<char> = s.chars().collect();
                Value::wrap(chars[i..j].iter().collect::<String>())
            }
            _ => {
                sink.report(Diagnostic::unsupported(Operation::Slice, self.type_name()));
                Value::wrap(RawValue::seq(Vec::new()))
            }
        }
    }
}

#[cfg(test)]
mod tests;
