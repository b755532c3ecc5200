// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Rust types as descriptors, and generated values back into Rust types.
//!
//! [`Describe`] maps a Rust type onto a [`TypeDescriptor`], registering
//! composites in the catalog as it goes. [`FromValue`] converts a generated
//! [`Value`] back. `#[derive(Generatable)]` implements both for structs and
//! enums.
//!
//! Composites past the generator's depth bound come out as [`Value::Null`].
//! Fields and elements that are `Null` convert through
//! [`FromValue::from_absent`]: scalars become zero, strings and containers
//! empty, `Option` becomes `None` and derived structs are built from their
//! fields' absent values.

use crate::error::ConversionError;
use crate::types::{
    CompositeValue, ContainerKind, ContainerType, PrimitiveKind, TypeCatalog, TypeDescriptor, Value,
};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::Hash;
use std::sync::Arc;

/// Rust type with a runtime descriptor.
pub trait Describe {
    /// Descriptor for `Self`, registering any composite it needs.
    fn describe(catalog: &mut TypeCatalog) -> Arc<TypeDescriptor>;

    /// Descriptor for `Option<Self>`. Scalars become boxed; everything
    /// else is nullable already.
    fn describe_nullable(catalog: &mut TypeCatalog) -> Arc<TypeDescriptor> {
        Self::describe(catalog)
    }
}

/// Conversion from a generated value.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, ConversionError>;

    /// Stand-in for a `Null` field or element.
    ///
    /// Types without a natural empty value keep the default, which fails.
    fn from_absent() -> Result<Self, ConversionError> {
        Err(ConversionError::UnexpectedNull {
            expected: std::any::type_name::<Self>().to_string(),
        })
    }
}

/// Convert a field or element, routing `Null` through [`FromValue::from_absent`].
fn from_value_or_absent<T: FromValue>(value: &Value) -> Result<T, ConversionError> {
    if value.is_null() {
        T::from_absent()
    } else {
        T::from_value(value)
    }
}

/// Type that can be generated with [`Generator::generate_typed`](crate::Generator::generate_typed).
pub trait Generatable: Describe + FromValue {
    /// Name the type is registered under.
    const TYPE_NAME: &'static str;
}

fn mismatch(expected: &str, got: &Value) -> ConversionError {
    if got.is_null() {
        ConversionError::UnexpectedNull {
            expected: expected.to_string(),
        }
    } else {
        ConversionError::TypeMismatch {
            expected: expected.to_string(),
            got: got.kind_name().to_string(),
        }
    }
}

macro_rules! impl_scalar {
    ($ty:ty, $variant:ident) => {
        impl Describe for $ty {
            fn describe(_catalog: &mut TypeCatalog) -> Arc<TypeDescriptor> {
                Arc::new(TypeDescriptor::primitive(PrimitiveKind::$variant))
            }

            fn describe_nullable(_catalog: &mut TypeCatalog) -> Arc<TypeDescriptor> {
                Arc::new(TypeDescriptor::nullable(PrimitiveKind::$variant))
            }
        }

        impl FromValue for $ty {
            fn from_value(value: &Value) -> Result<Self, ConversionError> {
                match value {
                    Value::$variant(v) => Ok(*v),
                    other => Err(mismatch(stringify!($ty), other)),
                }
            }

            fn from_absent() -> Result<Self, ConversionError> {
                Ok(<$ty>::default())
            }
        }
    };
}

impl_scalar!(bool, Bool);
impl_scalar!(u8, U8);
impl_scalar!(u16, U16);
impl_scalar!(u32, U32);
impl_scalar!(u64, U64);
impl_scalar!(i8, I8);
impl_scalar!(i16, I16);
impl_scalar!(i32, I32);
impl_scalar!(i64, I64);
impl_scalar!(f32, F32);
impl_scalar!(f64, F64);
impl_scalar!(char, Char);

impl Describe for String {
    fn describe(_catalog: &mut TypeCatalog) -> Arc<TypeDescriptor> {
        Arc::new(TypeDescriptor::string())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("String", value))
    }

    fn from_absent() -> Result<Self, ConversionError> {
        Ok(String::new())
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe(catalog: &mut TypeCatalog) -> Arc<TypeDescriptor> {
        T::describe_nullable(catalog)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }

    fn from_absent() -> Result<Self, ConversionError> {
        Ok(None)
    }
}

impl<T: Describe> Describe for Box<T> {
    fn describe(catalog: &mut TypeCatalog) -> Arc<TypeDescriptor> {
        T::describe(catalog)
    }

    fn describe_nullable(catalog: &mut TypeCatalog) -> Arc<TypeDescriptor> {
        T::describe_nullable(catalog)
    }
}

impl<T: FromValue> FromValue for Box<T> {
    fn from_value(value: &Value) -> Result<Self, ConversionError> {
        T::from_value(value).map(Box::new)
    }

    fn from_absent() -> Result<Self, ConversionError> {
        T::from_absent().map(Box::new)
    }
}

fn items<'a>(value: &'a Value, expected: &str) -> Result<&'a [Value], ConversionError> {
    value.items().ok_or_else(|| mismatch(expected, value))
}

fn convert_items<T, C>(value: &Value, expected: &str) -> Result<C, ConversionError>
where
    T: FromValue,
    C: FromIterator<T>,
{
    items(value, expected)?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            from_value_or_absent::<T>(item).map_err(|e| e.in_field(format!("[{}]", i)))
        })
        .collect()
}

fn convert_entries<K, V, C>(value: &Value, expected: &str) -> Result<C, ConversionError>
where
    K: FromValue,
    V: FromValue,
    C: FromIterator<(K, V)>,
{
    let map = value.as_map().ok_or_else(|| mismatch(expected, value))?;
    map.entries()
        .iter()
        .enumerate()
        .map(|(i, (k, v))| {
            let key = K::from_value(k).map_err(|e| e.in_field(format!("key[{}]", i)))?;
            let value =
                from_value_or_absent::<V>(v).map_err(|e| e.in_field(format!("value[{}]", i)))?;
            Ok((key, value))
        })
        .collect()
}

macro_rules! impl_collection {
    ($name:literal, $kind:ident, $coll:ident < T $(: $($bound:path),+)? >) => {
        impl<T: Describe $($(+ $bound)+)?> Describe for $coll<T> {
            fn describe(catalog: &mut TypeCatalog) -> Arc<TypeDescriptor> {
                let element = T::describe(catalog);
                Arc::new(TypeDescriptor::collection(
                    ContainerType::concrete($name, ContainerKind::$kind),
                    Some(element),
                ))
            }
        }

        impl<T: FromValue $($(+ $bound)+)?> FromValue for $coll<T> {
            fn from_value(value: &Value) -> Result<Self, ConversionError> {
                convert_items(value, $name)
            }

            fn from_absent() -> Result<Self, ConversionError> {
                Ok(Self::default())
            }
        }
    };
}

impl_collection!("Vec", Sequence, Vec<T>);
impl_collection!("VecDeque", Queue, VecDeque<T>);
impl_collection!("LinkedList", Sequence, LinkedList<T>);
impl_collection!("HashSet", Set, HashSet<T: Eq, Hash>);
impl_collection!("BTreeSet", Set, BTreeSet<T: Ord>);

macro_rules! impl_map {
    ($name:literal, $map:ident < K: $($bound:path),+ >) => {
        impl<K: Describe $(+ $bound)+, V: Describe> Describe for $map<K, V> {
            fn describe(catalog: &mut TypeCatalog) -> Arc<TypeDescriptor> {
                let key = K::describe(catalog);
                let value = V::describe(catalog);
                Arc::new(TypeDescriptor::map_of(
                    ContainerType::concrete($name, ContainerKind::Map),
                    Some(key),
                    Some(value),
                ))
            }
        }

        impl<K: FromValue $(+ $bound)+, V: FromValue> FromValue for $map<K, V> {
            fn from_value(value: &Value) -> Result<Self, ConversionError> {
                convert_entries(value, $name)
            }

            fn from_absent() -> Result<Self, ConversionError> {
                Ok(Self::default())
            }
        }
    };
}

impl_map!("HashMap", HashMap<K: Eq, Hash>);
impl_map!("BTreeMap", BTreeMap<K: Ord>);

// Support for `#[derive(Generatable)]`.

/// Composite value of type `type_name`.
#[doc(hidden)]
pub fn expect_composite<'a>(
    value: &'a Value,
    type_name: &str,
) -> Result<&'a CompositeValue, ConversionError> {
    match value {
        Value::Composite(c) if c.type_name == type_name => Ok(c),
        Value::Composite(c) => Err(ConversionError::TypeMismatch {
            expected: type_name.to_string(),
            got: c.type_name.clone(),
        }),
        other => Err(mismatch(type_name, other)),
    }
}

/// Concrete type name of a composite value standing for the abstract `type_name`.
#[doc(hidden)]
pub fn composite_type_name<'a>(
    value: &'a Value,
    type_name: &str,
) -> Result<&'a str, ConversionError> {
    value.type_name().ok_or_else(|| mismatch(type_name, value))
}

/// Convert the field `name` of a composite.
#[doc(hidden)]
pub fn field_from_value<T: FromValue>(
    composite: &CompositeValue,
    name: &str,
) -> Result<T, ConversionError> {
    let value = composite
        .field(name)
        .ok_or_else(|| ConversionError::MissingField(name.to_string()))?;
    from_value_or_absent(value).map_err(|e| e.in_field(name))
}

/// Absent value of the field `name`.
#[doc(hidden)]
pub fn field_from_absent<T: FromValue>(name: &str) -> Result<T, ConversionError> {
    T::from_absent().map_err(|e| e.in_field(name))
}

/// Variant name of an enumeration value.
#[doc(hidden)]
pub fn enum_variant<'a>(value: &'a Value, type_name: &str) -> Result<&'a str, ConversionError> {
    value.enum_variant().ok_or_else(|| mismatch(type_name, value))
}
