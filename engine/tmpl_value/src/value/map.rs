//! Mapping values with a declared key kind.
//!
//! Host mappings are statically keyed: every key of one mapping has the same
//! kind, and that kind is known even when the mapping is empty. Containment
//! checks rely on it to reject lookups with a mismatched key kind.

use rustc_hash::FxHashMap;
use std::fmt;

use super::heap::Heap;
use super::{Kind, RawValue};

/// A hashable mapping key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MapKey {
    Int(i64),
    Uint(u64),
    Bool(bool),
    Str(Heap<str>),
}

impl MapKey {
    pub fn kind(&self) -> Kind {
        match self {
            MapKey::Int(_) => Kind::Int,
            MapKey::Uint(_) => Kind::Uint,
            MapKey::Bool(_) => Kind::Bool,
            MapKey::Str(_) => Kind::Str,
        }
    }

    /// The key as a standalone raw value.
    pub fn to_raw(&self) -> RawValue {
        match self {
            MapKey::Int(n) => RawValue::Int(*n),
            MapKey::Uint(n) => RawValue::Uint(*n),
            MapKey::Bool(b) => RawValue::Bool(*b),
            MapKey::Str(s) => RawValue::Str(s.clone()),
        }
    }
}

/// Host key types usable for mappings; fixes the mapping's key kind.
pub trait MapKeyType {
    const KIND: Kind;

    fn into_key(self) -> MapKey;
}

impl MapKeyType for i64 {
    const KIND: Kind = Kind::Int;

    fn into_key(self) -> MapKey {
        MapKey::Int(self)
    }
}

impl MapKeyType for u64 {
    const KIND: Kind = Kind::Uint;

    fn into_key(self) -> MapKey {
        MapKey::Uint(self)
    }
}

impl MapKeyType for bool {
    const KIND: Kind = Kind::Bool;

    fn into_key(self) -> MapKey {
        MapKey::Bool(self)
    }
}

impl MapKeyType for String {
    const KIND: Kind = Kind::Str;

    fn into_key(self) -> MapKey {
        MapKey::Str(Heap::from_text(self))
    }
}

impl MapKeyType for &str {
    const KIND: Kind = Kind::Str;

    fn into_key(self) -> MapKey {
        MapKey::Str(Heap::from_text(self))
    }
}

/// Mapping from keys of one kind to values.
#[derive(Clone, PartialEq)]
pub struct MapValue {
    key_kind: Kind,
    entries: Heap<FxHashMap<MapKey, RawValue>>,
}

impl MapValue {
    /// Build a mapping whose key kind is fixed by the key type `K`.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: MapKeyType,
        V: Into<RawValue>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.into_key(), value.into()))
            .collect();
        MapValue {
            key_kind: K::KIND,
            entries: Heap::new(entries),
        }
    }

    /// Declared kind of every key.
    #[inline]
    pub fn key_kind(&self) -> Kind {
        self.key_kind
    }

    pub fn get(&self, key: &MapKey) -> Option<&RawValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &MapKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the map's own (unspecified) order.
    pub fn iter(&self) -> impl Iterator<Item = (&MapKey, &RawValue)> + '_ {
        self.entries.iter()
    }
}

impl fmt::Debug for MapValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
