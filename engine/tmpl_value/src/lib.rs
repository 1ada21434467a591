//! Dynamic runtime values for the template engine.
//!
//! Template expressions operate on data whose kind is known only at render
//! time. This crate provides:
//! - The value type (`Value`, `RawValue`, `Heap`, `MapValue`, `RecordValue`)
//! - Coercions to text, integer, float, boolean and timestamp
//! - Truthiness and negation, as used by `if` and `not`
//! - Length, indexing and slicing
//! - Equality with numeric tolerance, and membership (`in`)
//! - The `for` loop protocol with sorted/reversed ordering
//!
//! # Degradation
//!
//! Operations never fail. When a kind does not support an operation, a
//! [`Diagnostic`] goes to the [`DiagnosticSink`] passed in by the caller
//! and the operation returns a documented fallback. The one exception is
//! [`Value::slice`], which panics on an invalid range.

mod access;
mod coerce;
mod compare;
mod iterate;
mod truth;
mod value;

pub use compare::{compare, EPSILON};
pub use value::{
    Heap, HostObject, Kind, MapKey, MapKeyType, MapValue, RawValue, RecordLayout, RecordValue,
    Timestamp, Value,
};

pub use tmpl_diagnostic::{
    CollectingSink, Diagnostic, DiagnosticSink, NullSink, Operation, TracingSink,
};
