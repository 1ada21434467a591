//! Truthiness and logical negation.

use tmpl_diagnostic::{Diagnostic, DiagnosticSink, Operation};

use crate::value::{RawValue, Value};

impl Value {
    /// Python-style truthiness.
    ///
    /// Returns `true` for:
    ///
    /// - nonzero integers and floats
    /// - non-empty sequences, mappings and text
    /// - `true`
    /// - records and timestamps (structured values are always true)
    ///
    /// Nil and host objects report a diagnostic and are `false`.
    pub fn is_true(&self, sink: &dyn DiagnosticSink) -> bool {
        match self.raw() {
            RawValue::Int(n) => *n != 0,
            RawValue::Uint(n) => *n != 0,
            RawValue::Float(f) => *f != 0.0,
            RawValue::Str(s) => !s.is_empty(),
            RawValue::Seq(items) => !items.is_empty(),
            RawValue::Map(map) => !map.is_empty(),
            RawValue::Bool(b) => *b,
            RawValue::Record(_) | RawValue::Time(_) => true,
            RawValue::Nil | RawValue::Host(_) => {
                sink.report(Diagnostic::unsupported(Operation::IsTrue, self.type_name()));
                false
            }
        }
    }

    /// Logical complement, used by `not`. Evaluate the result with
    /// [`Value::is_true`].
    ///
    /// The encoding depends on the kind:
    ///
    /// - integers: nonzero → `0`, zero → `1`
    /// - floats: nonzero → `0.0`, zero → `1.1`
    /// - sequences, mappings, text: boolean "is empty"
    /// - booleans: the complement
    /// - records and timestamps: `false`
    /// - nil and host objects: diagnostic, then `true`
    pub fn negate(&self, sink: &dyn DiagnosticSink) -> Value {
        match self.raw() {
            RawValue::Int(_) | RawValue::Uint(_) => {
                if self.is_true(sink) {
                    Value::wrap(0i64)
                } else {
                    Value::wrap(1i64)
                }
            }
            RawValue::Float(f) => {
                if *f == 0.0 {
                    // 1.1, not 1.0: existing templates may print this value.
                    Value::wrap(1.1f64)
                } else {
                    Value::wrap(0.0f64)
                }
            }
            RawValue::Str(s) => Value::wrap(s.is_empty()),
            RawValue::Seq(items) => Value::wrap(items.is_empty()),
            RawValue::Map(map) => Value::wrap(map.is_empty()),
            RawValue::Bool(b) => Value::wrap(!*b),
            RawValue::Record(_) | RawValue::Time(_) => Value::wrap(false),
            RawValue::Nil | RawValue::Host(_) => {
                sink.report(Diagnostic::unsupported(Operation::Negate, self.type_name()));
                Value::wrap(true)
            }
        }
    }
}

#[cfg(test)]
mod tests;
