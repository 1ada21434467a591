//! Runtime values for template evaluation.
//!
//! # Two Layers
//!
//! - [`RawValue`]: the closed set of data kinds a template can see. Kind
//!   dispatch is an exhaustive `match` over this enum.
//! - [`Value`]: one `RawValue` plus the `safe` marker read by the output
//!   escaping layer. This is what the evaluator, filters and tags pass around.
//!
//! # Heap Enforcement
//!
//! Heap payloads (text, sequences, mapping entries, record fields) live
//! behind [`Heap<T>`], whose constructor is private to this module. All
//! heap values are built through `RawValue` factories or `From` impls:
//!
//! ```text
//! let s = RawValue::string("hello");            // OK
//! let xs = RawValue::seq(vec![RawValue::Int(1)]); // OK
//! let v = Value::wrap(vec![1, 2, 3]);           // OK
//! ```
//!
//! # Immutability
//!
//! A `Value` never changes after construction. Operations that look like
//! transformations (`negate`, `slice`, `index`, iteration) return new
//! values; payloads are shared, never aliased mutably.
//!
//! # Indirection
//!
//! Host references are resolved when the value is built: `Option<T>`
//! becomes the pointee or `Nil`, `Box<T>` becomes the pointee. Every
//! predicate and coercion therefore sees the resolved datum directly.

mod convert;
mod heap;
mod host;
mod map;
mod record;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use tmpl_diagnostic::TracingSink;

pub use heap::Heap;
pub use host::HostObject;
pub use map::{MapKey, MapKeyType, MapValue};
pub use record::{RecordLayout, RecordValue};

/// The host timestamp type.
pub type Timestamp = DateTime<FixedOffset>;

/// Classification of a resolved value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Bool,
    Int,
    Uint,
    Float,
    Str,
    Time,
    Seq,
    Map,
    Record,
    Host,
}

impl Kind {
    /// Name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Str => "string",
            Kind::Time => "time",
            Kind::Seq => "sequence",
            Kind::Map => "mapping",
            Kind::Record => "record",
            Kind::Host => "host",
        }
    }

    /// Signed or unsigned integer.
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, Kind::Int | Kind::Uint)
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Kind::Float)
    }

    /// Integer family or float family; the two are disjoint.
    #[inline]
    pub const fn is_number(self) -> bool {
        self.is_integer() || self.is_float()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A datum of one of the fixed template kinds.
#[derive(Clone)]
pub enum RawValue {
    /// Absent value. Distinct from `""`, `0` and empty containers.
    Nil,
    Bool(bool),
    /// Signed integer family (all widths widen to `i64`).
    Int(i64),
    /// Unsigned integer family (all widths widen to `u64`).
    Uint(u64),
    /// Float family (`f32` widens to `f64`).
    Float(f64),
    Str(Heap<str>),
    Time(Timestamp),
    Seq(Heap<Vec<RawValue>>),
    Map(MapValue),
    Record(RecordValue),
    /// Opaque host object; the "other" kind.
    Host(Arc<dyn HostObject>),
}

// Factory Methods (ONLY way to construct heap values)

impl RawValue {
    /// Create a text value.
    #[inline]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        RawValue::Str(Heap::from_text(s))
    }

    /// Create a sequence value.
    #[inline]
    pub fn seq(items: Vec<RawValue>) -> Self {
        RawValue::Seq(Heap::new(items))
    }

    /// Create a record value from its type name and fields.
    pub fn record<N, V>(type_name: impl Into<Arc<str>>, fields: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<Arc<str>>,
        V: Into<RawValue>,
    {
        RawValue::Record(RecordValue::new(type_name, fields))
    }

    /// Wrap a host object.
    #[inline]
    pub fn host(object: impl HostObject + 'static) -> Self {
        RawValue::Host(Arc::new(object))
    }
}

impl RawValue {
    pub fn kind(&self) -> Kind {
        match self {
            RawValue::Nil => Kind::Nil,
            RawValue::Bool(_) => Kind::Bool,
            RawValue::Int(_) => Kind::Int,
            RawValue::Uint(_) => Kind::Uint,
            RawValue::Float(_) => Kind::Float,
            RawValue::Str(_) => Kind::Str,
            RawValue::Time(_) => Kind::Time,
            RawValue::Seq(_) => Kind::Seq,
            RawValue::Map(_) => Kind::Map,
            RawValue::Record(_) => Kind::Record,
            RawValue::Host(_) => Kind::Host,
        }
    }

    /// Kind name for diagnostics; host objects report their own name.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Host(object) => object.type_name(),
            other => other.kind().name(),
        }
    }
}

/// A template runtime value: one datum plus the output-safety marker.
#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    raw: RawValue,
    safe: bool,
}

impl Value {
    /// Wrap host data. The result is subject to output escaping.
    #[inline]
    pub fn wrap(raw: impl Into<RawValue>) -> Self {
        Value {
            raw: raw.into(),
            safe: false,
        }
    }

    /// Wrap host data that the escaping layer must leave untouched.
    #[inline]
    pub fn wrap_safe(raw: impl Into<RawValue>) -> Self {
        Value {
            raw: raw.into(),
            safe: true,
        }
    }

    #[inline]
    pub fn nil() -> Self {
        Value::wrap(RawValue::Nil)
    }

    /// Whether output escaping must skip this value.
    #[inline]
    pub fn is_safe(&self) -> bool {
        self.safe
    }

    /// The wrapped datum.
    #[inline]
    pub fn raw(&self) -> &RawValue {
        &self.raw
    }

    #[inline]
    pub fn into_raw(self) -> RawValue {
        self.raw
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.raw.kind()
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.raw.type_name()
    }

    // Kind predicates

    pub fn is_string(&self) -> bool {
        matches!(self.raw, RawValue::Str(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.raw, RawValue::Bool(_))
    }

    pub fn is_float(&self) -> bool {
        self.kind().is_float()
    }

    pub fn is_integer(&self) -> bool {
        self.kind().is_integer()
    }

    pub fn is_number(&self) -> bool {
        self.kind().is_number()
    }

    /// Only an actual timestamp qualifies, not a time-shaped record or text.
    pub fn is_time(&self) -> bool {
        matches!(self.raw, RawValue::Time(_))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self.raw, RawValue::Nil)
    }
}

// Trait Implementations

impl fmt::Debug for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Nil => write!(f, "Nil"),
            RawValue::Bool(b) => write!(f, "Bool({b})"),
            RawValue::Int(n) => write!(f, "Int({n})"),
            RawValue::Uint(n) => write!(f, "Uint({n})"),
            RawValue::Float(n) => write!(f, "Float({n:?})"),
            RawValue::Str(s) => write!(f, "Str({:?})", &**s),
            RawValue::Time(t) => write!(f, "Time({})", t.to_rfc3339()),
            RawValue::Seq(items) => write!(f, "Seq({:?})", &**items),
            RawValue::Map(map) => write!(f, "Map({map:?})"),
            RawValue::Record(record) => write!(f, "Record({record:?})"),
            RawValue::Host(object) => write!(f, "Host({object:?})"),
        }
    }
}

/// Structural equality: same kind and same payload. Floats compare exactly
/// and host objects by identity. Template-level equality with numeric
/// tolerance is `Value::equal_value_to`.
impl PartialEq for RawValue {
    #[allow(clippy::float_cmp, reason = "structural equality is exact")]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RawValue::Nil, RawValue::Nil) => true,
            (RawValue::Bool(a), RawValue::Bool(b)) => a == b,
            (RawValue::Int(a), RawValue::Int(b)) => a == b,
            (RawValue::Uint(a), RawValue::Uint(b)) => a == b,
            (RawValue::Float(a), RawValue::Float(b)) => a == b,
            (RawValue::Str(a), RawValue::Str(b)) => a == b,
            (RawValue::Time(a), RawValue::Time(b)) => a == b,
            (RawValue::Seq(a), RawValue::Seq(b)) => a == b,
            (RawValue::Map(a), RawValue::Map(b)) => a == b,
            (RawValue::Record(a), RawValue::Record(b)) => a == b,
            (RawValue::Host(a), RawValue::Host(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Renders like [`Value::to_text`], reporting diagnostics to `tracing`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(&TracingSink))
    }
}
