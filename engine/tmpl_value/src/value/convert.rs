//! Conversions from host data into `RawValue`.
//!
//! Indirection is resolved here, once: `Option<T>` and `Box<T>` convert to
//! their pointee so the rest of the crate never sees a reference. The impls
//! are blanket impls, so nested wrappers collapse all the way down:
//! `Some(None)` is nil and `Box<Box<T>>` is the innermost value.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};

use super::{HostObject, MapValue, RawValue, RecordValue};

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawValue {
                #[inline]
                fn from(n: $ty) -> Self {
                    RawValue::Int(i64::from(n))
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawValue {
                #[inline]
                fn from(n: $ty) -> Self {
                    RawValue::Uint(u64::from(n))
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<isize> for RawValue {
    fn from(n: isize) -> Self {
        RawValue::Int(i64::try_from(n).unwrap_or(if n < 0 { i64::MIN } else { i64::MAX }))
    }
}

impl From<usize> for RawValue {
    fn from(n: usize) -> Self {
        RawValue::Uint(u64::try_from(n).unwrap_or(u64::MAX))
    }
}

impl From<f64> for RawValue {
    #[inline]
    fn from(n: f64) -> Self {
        RawValue::Float(n)
    }
}

impl From<f32> for RawValue {
    #[inline]
    fn from(n: f32) -> Self {
        RawValue::Float(f64::from(n))
    }
}

impl From<bool> for RawValue {
    #[inline]
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<char> for RawValue {
    fn from(c: char) -> Self {
        RawValue::string(c.to_string())
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::string(s)
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::string(s)
    }
}

impl From<DateTime<FixedOffset>> for RawValue {
    #[inline]
    fn from(t: DateTime<FixedOffset>) -> Self {
        RawValue::Time(t)
    }
}

impl From<DateTime<Utc>> for RawValue {
    #[inline]
    fn from(t: DateTime<Utc>) -> Self {
        RawValue::Time(t.into())
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(items: Vec<T>) -> Self {
        RawValue::seq(items.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<RawValue>, S> From<HashMap<String, V, S>> for RawValue {
    fn from(entries: HashMap<String, V, S>) -> Self {
        RawValue::Map(MapValue::from_entries(entries))
    }
}

impl<V: Into<RawValue>, S> From<HashMap<i64, V, S>> for RawValue {
    fn from(entries: HashMap<i64, V, S>) -> Self {
        RawValue::Map(MapValue::from_entries(entries))
    }
}

impl<V: Into<RawValue>> From<BTreeMap<String, V>> for RawValue {
    fn from(entries: BTreeMap<String, V>) -> Self {
        RawValue::Map(MapValue::from_entries(entries))
    }
}

impl From<MapValue> for RawValue {
    #[inline]
    fn from(map: MapValue) -> Self {
        RawValue::Map(map)
    }
}

impl From<RecordValue> for RawValue {
    #[inline]
    fn from(record: RecordValue) -> Self {
        RawValue::Record(record)
    }
}

impl From<Arc<dyn HostObject>> for RawValue {
    #[inline]
    fn from(object: Arc<dyn HostObject>) -> Self {
        RawValue::Host(object)
    }
}

/// `None` is nil; `Some` resolves to the inner value.
impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Nil, Into::into)
    }
}

impl<T: Into<RawValue>> From<Box<T>> for RawValue {
    fn from(value: Box<T>) -> Self {
        (*value).into()
    }
}

/// JSON host data: numbers keep their integer or float family, objects
/// become text-keyed mappings.
#[cfg(feature = "json")]
impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => RawValue::Nil,
            Json::Bool(b) => RawValue::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RawValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    RawValue::Uint(u)
                } else {
                    RawValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            Json::String(s) => RawValue::string(s),
            Json::Array(items) => RawValue::seq(items.into_iter().map(RawValue::from).collect()),
            Json::Object(entries) => RawValue::Map(MapValue::from_entries(entries)),
        }
    }
}
