//! Structured record values.
//!
//! A record is a named bundle of fields (a host struct crossing into the
//! template). Field lookup goes through a shared layout so containment
//! checks and field access are O(1).

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

use super::heap::Heap;
use super::RawValue;

/// Layout information for O(1) record field access.
#[derive(Clone, Debug, Default)]
pub struct RecordLayout {
    /// Field names in declaration order.
    names: Vec<Arc<str>>,
    /// Map from field name to index.
    field_indices: FxHashMap<Arc<str>, usize>,
}

impl RecordLayout {
    /// Get the index of a field by name.
    pub fn get_index(&self, field: &str) -> Option<usize> {
        self.field_indices.get(field).copied()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the layout has no fields.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|name| &**name)
    }
}

/// Record instance with efficient field access.
#[derive(Clone)]
pub struct RecordValue {
    type_name: Arc<str>,
    layout: Arc<RecordLayout>,
    /// Field values in layout order.
    fields: Heap<Vec<RawValue>>,
}

impl RecordValue {
    /// Create a record from its type name and `(field, value)` pairs.
    ///
    /// Fields keep their declaration order. A repeated field name replaces
    /// the earlier value but keeps the earlier position.
    pub fn new<N, V>(type_name: impl Into<Arc<str>>, fields: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<Arc<str>>,
        V: Into<RawValue>,
    {
        let mut layout = RecordLayout::default();
        let mut values = Vec::new();
        for (name, value) in fields {
            let name: Arc<str> = name.into();
            if let Some(idx) = layout.get_index(&name) {
                values[idx] = value.into();
                continue;
            }
            layout.field_indices.insert(Arc::clone(&name), layout.names.len());
            layout.names.push(name);
            values.push(value.into());
        }
        RecordValue {
            type_name: type_name.into(),
            layout: Arc::new(layout),
            fields: Heap::new(values),
        }
    }

    /// Type name of the record.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn layout(&self) -> &RecordLayout {
        &self.layout
    }

    /// Get a field value by name with O(1) lookup.
    pub fn get_field(&self, field: &str) -> Option<&RawValue> {
        let index = self.layout.get_index(field)?;
        self.fields.get(index)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.layout.get_index(field).is_some()
    }

    /// `(name, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &RawValue)> + '_ {
        self.layout.names().zip(self.fields.iter())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl PartialEq for RecordValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.layout.names == other.layout.names
            && self.fields == other.fields
    }
}

impl fmt::Debug for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut record = f.debug_struct(&self.type_name);
        for (name, value) in self.fields() {
            record.field(name, value);
        }
        record.finish()
    }
}
