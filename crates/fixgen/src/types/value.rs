// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generated value tree.

use crate::types::{ContainerKind, TypeKind};
use std::collections::BTreeMap;

/// A generated value of any described type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    // Scalars
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Char(char),
    String(String),
    Enum(i64, String), // (value, variant_name)

    // Containers and composites
    Array(Vec<Value>),
    Collection(CollectionValue),
    Map(MapValue),
    Composite(CompositeValue),

    /// Absent value (depth cutoff, erased element, unset reference field).
    Null,
}

impl Value {
    /// Default a field of the given kind holds before it is assigned.
    pub fn default_for(kind: &TypeKind) -> Self {
        match kind {
            TypeKind::Primitive(p) => p.zero(),
            _ => Self::Null,
        }
    }

    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Char(_) => "char",
            Self::String(_) => "string",
            Self::Enum(..) => "enum",
            Self::Array(_) => "array",
            Self::Collection(_) => "collection",
            Self::Map(_) => "map",
            Self::Composite(_) => "composite",
            Self::Null => "null",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Self::I8(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Self::I16(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::I32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::U32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::U64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Get enum variant name.
    pub fn enum_variant(&self) -> Option<&str> {
        match self {
            Self::Enum(_, name) => Some(name),
            _ => None,
        }
    }

    /// Get enum value.
    pub fn enum_value(&self) -> Option<i64> {
        match self {
            Self::Enum(val, _) => Some(*val),
            _ => None,
        }
    }

    /// Elements of an array or collection.
    pub fn items(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            Self::Collection(c) => Some(c.items()),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&CollectionValue> {
        match self {
            Self::Collection(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeValue> {
        match self {
            Self::Composite(c) => Some(c),
            _ => None,
        }
    }

    /// Concrete type name of a composite value.
    pub fn type_name(&self) -> Option<&str> {
        self.as_composite().map(|c| c.type_name.as_str())
    }

    /// Try to get composite field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.as_composite()?.field(name)
    }
}

/// Sequence, set or queue contents.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionValue {
    pub kind: ContainerKind,
    /// Name of the representation (`Vec`, `HashSet`, ...).
    pub type_name: String,
    items: Vec<Value>,
}

impl CollectionValue {
    pub fn new(kind: ContainerKind, type_name: impl Into<String>) -> Self {
        Self {
            kind,
            type_name: type_name.into(),
            items: Vec::new(),
        }
    }

    /// Add an item. Sets ignore items equal to one already present.
    pub fn insert(&mut self, value: Value) -> bool {
        if self.kind == ContainerKind::Set && self.items.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Key-value mapping contents. Keys are unique and never null.
#[derive(Debug, Clone, PartialEq)]
pub struct MapValue {
    /// Name of the representation (`HashMap`, ...).
    pub type_name: String,
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            entries: Vec::new(),
        }
    }

    /// Insert an entry, returning the value it replaced.
    ///
    /// Null keys are rejected and returned as-is in the `Err`.
    pub fn insert(&mut self, key: Value, value: Value) -> Result<Option<Value>, (Value, Value)> {
        if key.is_null() {
            return Err((key, value));
        }
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Ok(Some(std::mem::replace(&mut slot.1, value)));
        }
        self.entries.push((key, value));
        Ok(None)
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn into_entries(self) -> Vec<(Value, Value)> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Instance of a concrete composite type.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeValue {
    /// Concrete type the instance was built from.
    pub type_name: String,
    fields: BTreeMap<String, Value>,
}

impl CompositeValue {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.get_mut(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Set field, returning the previous value.
    pub fn set_field(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(name.into(), value)
    }

    /// Iterate over fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

// Conversion traits
macro_rules! impl_from_scalar {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        }
    };
}

impl_from_scalar!(bool, Bool);
impl_from_scalar!(u8, U8);
impl_from_scalar!(u16, U16);
impl_from_scalar!(u32, U32);
impl_from_scalar!(u64, U64);
impl_from_scalar!(i8, I8);
impl_from_scalar!(i16, I16);
impl_from_scalar!(i32, I32);
impl_from_scalar!(i64, I64);
impl_from_scalar!(f32, F32);
impl_from_scalar!(f64, F64);
impl_from_scalar!(char, Char);
impl_from_scalar!(String, String);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<CompositeValue> for Value {
    fn from(v: CompositeValue) -> Self {
        Self::Composite(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimitiveKind;

    #[test]
    fn test_default_for() {
        assert_eq!(
            Value::default_for(&TypeKind::Primitive(PrimitiveKind::I32)),
            Value::I32(0)
        );
        assert_eq!(Value::default_for(&TypeKind::Unknown), Value::Null);
        assert_eq!(
            Value::default_for(&TypeKind::Reference("Node".into())),
            Value::Null
        );
    }

    #[test]
    fn test_set_rejects_duplicates() {
        let mut set = CollectionValue::new(ContainerKind::Set, "HashSet");
        assert!(set.insert(Value::from(1i32)));
        assert!(!set.insert(Value::from(1i32)));
        assert!(set.insert(Value::from(2i32)));
        assert_eq!(set.len(), 2);

        let mut seq = CollectionValue::new(ContainerKind::Sequence, "Vec");
        assert!(seq.insert(Value::from(1i32)));
        assert!(seq.insert(Value::from(1i32)));
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_map_keys_unique_and_non_null() {
        let mut map = MapValue::new("HashMap");
        assert_eq!(map.insert("a".into(), 1i32.into()), Ok(None));
        assert_eq!(map.insert("a".into(), 2i32.into()), Ok(Some(Value::I32(1))));
        assert!(map.insert(Value::Null, 3i32.into()).is_err());

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"a".into()).and_then(Value::as_i32), Some(2));
    }

    #[test]
    fn test_composite_value() {
        let mut c = CompositeValue::new("Point");
        c.set_field("x", 10i32.into());
        c.set_field("y", 20i32.into());

        let v = Value::from(c);
        assert_eq!(v.type_name(), Some("Point"));
        assert_eq!(v.field("x").and_then(Value::as_i32), Some(10));
        assert!(v.field("z").is_none());
    }

    #[test]
    fn test_enum_value() {
        let v = Value::Enum(1, "GREEN".to_string());
        assert_eq!(v.enum_variant(), Some("GREEN"));
        assert_eq!(v.enum_value(), Some(1));
        assert_eq!(v.kind_name(), "enum");
    }
}
